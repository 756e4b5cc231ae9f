use alloc::string::String;

/// Glyph shown on a clue cell before it is clicked.
pub const PLACEHOLDER: &str = "?";

/// How much of a clue the player has uncovered.
///
/// Only ever moves forward: `Hidden` → `Question` → `Answer`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// Next state after one click, together with what the view has to change.
    pub const fn click(self) -> (Self, RevealEffect) {
        use RevealState::*;
        match self {
            Hidden => (Question, RevealEffect::ShowQuestion),
            Question => (Answer, RevealEffect::ShowAnswer),
            Answer => (Answer, RevealEffect::NoChange),
        }
    }

    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Outcome of clicking a clue cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealEffect {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealEffect::*;
        match self {
            NoChange => false,
            ShowQuestion => true,
            ShowAnswer => true,
        }
    }
}

/// What a single cell currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellDisplay {
    /// No clue in this slot, the category ran short.
    Empty,
    Placeholder,
    Question(String),
    Answer(String),
}

impl CellDisplay {
    pub fn text(&self) -> &str {
        use CellDisplay::*;
        match self {
            Empty => "",
            Placeholder => PLACEHOLDER,
            Question(text) | Answer(text) => text.as_str(),
        }
    }

    /// Whether clicking the cell can still change it.
    pub const fn is_clickable(&self) -> bool {
        matches!(self, Self::Placeholder | Self::Question(_))
    }
}
