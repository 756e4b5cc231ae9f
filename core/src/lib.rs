#![no_std]

extern crate alloc;

pub use board::*;
pub use error::*;
pub use loader::*;
pub use model::*;
pub use reveal::*;
pub use sampling::*;
pub use session::*;
pub use trivia_protocol::CategoryId;

mod board;
mod error;
mod loader;
mod model;
mod reveal;
mod sampling;
mod session;

/// Number of category columns on every board.
pub const CATEGORY_COUNT: usize = 6;

/// Number of clue rows under every category heading.
pub const CLUES_PER_CATEGORY: usize = 5;
