//! Wire types of the remote trivia API.
//!
//! Fields the game relies on are `Option`s: the API returns `null` questions and answers for some clues.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identifier the API uses for a category.
pub type CategoryId = u64;

/// Number of category summaries requested per page.
pub const CATEGORY_PAGE_SIZE: u32 = 100;

/// One entry of `GET /categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: Option<String>,
    #[serde(default)]
    pub clues_count: u32,
}

/// Body of `GET /category?id=<id>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: Option<CategoryId>,
    pub title: Option<String>,
    pub clues_count: Option<u32>,
    pub clues: Option<Vec<ClueRecord>>,
}

/// A single clue inside [`CategoryDetail`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub value: Option<u32>,
}

/// Relative path (query included) of the category listing endpoint.
pub fn categories_path(count: u32, offset: u32) -> String {
    format!("/categories?count={count}&offset={offset}")
}

/// Relative path (query included) of the single category endpoint.
pub fn category_path(id: CategoryId) -> String {
    format!("/category?id={id}")
}

/// Decodes a JSON response body.
pub fn decode<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    serde_json::from_str(body)
}
