use alloc::string::String;
use alloc::vec::Vec;
use trivia_protocol::ClueRecord;

use crate::*;

/// One question/answer pair and how far it has been revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    pub fn click(&mut self) -> RevealEffect {
        let (next, effect) = self.reveal_state.click();
        self.reveal_state = next;
        effect
    }

    pub fn display(&self) -> CellDisplay {
        use RevealState::*;
        match self.reveal_state {
            Hidden => CellDisplay::Placeholder,
            Question => CellDisplay::Question(self.question.to_uppercase()),
            Answer => CellDisplay::Answer(self.answer.to_uppercase()),
        }
    }

    /// Same text, back at [`RevealState::Hidden`].
    pub(crate) fn into_hidden(self) -> Self {
        Self {
            reveal_state: RevealState::Hidden,
            ..self
        }
    }
}

impl TryFrom<&ClueRecord> for Clue {
    type Error = FetchError;

    fn try_from(record: &ClueRecord) -> FetchResult<Self> {
        let question = required_text(record.question.as_deref(), "question")?;
        let answer = required_text(record.answer.as_deref(), "answer")?;
        Ok(Self::new(question, answer))
    }
}

/// A titled column of clues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Clue>) {
        (self.title, self.clues)
    }
}

/// Trimmed text of a field the game cannot do without; blank counts as missing.
pub(crate) fn required_text(value: Option<&str>, field: &'static str) -> FetchResult<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
        .ok_or(FetchError::MissingField(field))
}
