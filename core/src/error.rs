use alloc::string::String;
use thiserror::Error;

/// Everything that can go wrong while loading a board from the trivia service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Could not reach the trivia service: {0}")]
    Network(String),
    #[error("Trivia service answered with HTTP status {0}")]
    Status(u16),
    #[error("Trivia service sent unreadable data: {0}")]
    Malformed(String),
    #[error("Trivia data is missing the {0} field")]
    MissingField(&'static str),
    #[error("Needed {needed} categories but the trivia service only offered {found}")]
    NotEnoughCategories { needed: usize, found: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid cell")]
    InvalidCell,
}

pub type FetchResult<T> = core::result::Result<T, FetchError>;

pub type Result<T> = core::result::Result<T, BoardError>;
