use super::workflow::QuizAction;

/// Directional signal from an input channel such as the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Parse a DOM-style key name. Other keys carry no navigation meaning.
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    /// The navigation action this key stands for.
    #[must_use]
    pub fn action(self) -> QuizAction {
        match self {
            NavKey::ArrowLeft => QuizAction::Previous,
            NavKey::ArrowRight => QuizAction::Next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_previous_and_next() {
        assert_eq!(NavKey::from_key_name("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key_name("ArrowRight"), Some(NavKey::ArrowRight));
        assert_eq!(NavKey::ArrowLeft.action(), QuizAction::Previous);
        assert_eq!(NavKey::ArrowRight.action(), QuizAction::Next);
    }

    #[test]
    fn other_keys_are_ignored() {
        for name in ["ArrowUp", "Enter", "arrowright", "", "n"] {
            assert_eq!(NavKey::from_key_name(name), None);
        }
    }
}
