/// Session-wide display and ordering preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    highlight_correctness: bool,
    shuffle: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            highlight_correctness: true,
            shuffle: true,
        }
    }
}

impl QuizSettings {
    /// Show the correctness verdict of revealed questions.
    #[must_use]
    pub fn with_highlight_correctness(mut self, highlight: bool) -> Self {
        self.highlight_correctness = highlight;
        self
    }

    /// Shuffle the working set at session start.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn highlight_correctness(&self) -> bool {
        self.highlight_correctness
    }

    #[must_use]
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }
}
