use std::collections::HashMap;

/// Position within the working set plus per-position "answers revealed" flags.
///
/// Every transition is bounds-checked; out-of-range requests leave the state
/// unchanged and report `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    position: usize,
    len: usize,
    revealed: HashMap<usize, bool>,
}

impl Navigator {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            position: 0,
            len,
            revealed: HashMap::new(),
        }
    }

    /// Zero-based current position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.position + 1 < self.len
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.position > 0
    }

    /// Advance one position; no wraparound at the last question.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Step back one position; no-op at the first question.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump to a 1-based question number given as raw user input.
    ///
    /// Input that is not an integer in `[1, len]` is rejected, not clamped.
    pub fn jump_to(&mut self, raw: &str) -> bool {
        match parse_jump_target(raw, self.len) {
            Some(position) => {
                self.position = position;
                true
            }
            None => {
                tracing::debug!(input = raw, len = self.len, "rejected jump target");
                false
            }
        }
    }

    /// Whether answers are revealed at `position`. Defaults to hidden.
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed.get(&position).copied().unwrap_or(false)
    }

    /// Flip the revealed flag of `position` only.
    pub fn toggle_visibility(&mut self, position: usize) -> bool {
        if position >= self.len {
            return false;
        }
        let flag = self.revealed.entry(position).or_insert(false);
        *flag = !*flag;
        true
    }
}

/// Parse a 1-based question number into a zero-based position.
#[must_use]
pub fn parse_jump_target(raw: &str, len: usize) -> Option<usize> {
    let number: usize = raw.trim().parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}
