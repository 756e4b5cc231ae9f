use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use futures_util::future::try_join_all;
use rand::prelude::*;
use trivia_protocol::{CATEGORY_PAGE_SIZE, CategoryDetail, CategorySummary};

use crate::*;

/// Where boards come from. Implemented over HTTP by the web front-end and by scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// One page of category summaries, `GET /categories?count=<count>&offset=<offset>`.
    async fn fetch_categories(&self, count: u32, offset: u32) -> FetchResult<Vec<CategorySummary>>;

    /// Full clue listing of one category, `GET /category?id=<id>`.
    async fn fetch_category(&self, id: CategoryId) -> FetchResult<CategoryDetail>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Category pages are requested at a random offset in `0..max_offset`.
    pub max_offset: u32,
}

impl LoaderConfig {
    pub const DEFAULT_MAX_OFFSET: u32 = 1000;
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_offset: Self::DEFAULT_MAX_OFFSET,
        }
    }
}

/// Picks categories and turns their clues into a [`Board`].
#[derive(Debug)]
pub struct CategoryLoader<S> {
    source: S,
    config: LoaderConfig,
    rng: GameRng,
}

impl<S: TriviaSource> CategoryLoader<S> {
    pub fn new(source: S, config: LoaderConfig, seed: u64) -> Self {
        Self {
            source,
            config,
            rng: game_rng(seed),
        }
    }

    /// Exactly [`CATEGORY_COUNT`] distinct category ids sampled from one random page of the catalog.
    ///
    /// Categories without clues are never picked.
    pub async fn select_categories(&mut self) -> FetchResult<Vec<CategoryId>> {
        let offset = match self.config.max_offset {
            0 => 0,
            max_offset => self.rng.random_range(0..max_offset),
        };
        log::debug!("requesting categories at offset {}", offset);

        let summaries = self
            .source
            .fetch_categories(CATEGORY_PAGE_SIZE, offset)
            .await?;

        let mut seen = BTreeSet::new();
        let candidates: Vec<CategoryId> = summaries
            .iter()
            .filter(|summary| summary.clues_count > 0)
            .map(|summary| summary.id)
            .filter(|&id| seen.insert(id))
            .collect();

        if candidates.len() < CATEGORY_COUNT {
            log::warn!(
                "Only {} usable categories out of {} returned",
                candidates.len(),
                summaries.len()
            );
            return Err(FetchError::NotEnoughCategories {
                needed: CATEGORY_COUNT,
                found: candidates.len(),
            });
        }

        Ok(sample_indices(&mut self.rng, candidates.len(), CATEGORY_COUNT)
            .into_iter()
            .map(|i| candidates[i])
            .collect())
    }

    /// Fetches one category and keeps at most [`CLUES_PER_CATEGORY`] of its usable clues, picked at random
    /// without replacement and kept in source order.
    ///
    /// Clues without a question or answer are dropped before picking; a category with none left is an error.
    pub async fn load_category(&self, id: CategoryId, seed: u64) -> FetchResult<Category> {
        let detail = self.source.fetch_category(id).await?;
        let title = required_text(detail.title.as_deref(), "title")?;
        let records = detail.clues.ok_or(FetchError::MissingField("clues"))?;

        if let Some(declared) = detail.clues_count {
            if declared as usize != records.len() {
                log::debug!(
                    "category {} declares {} clues but lists {}",
                    id,
                    declared,
                    records.len()
                );
            }
        }

        let mut first_error = None;
        let usable: Vec<Clue> = records
            .iter()
            .filter_map(|record| {
                Clue::try_from(record)
                    .inspect_err(|err| {
                        first_error.get_or_insert_with(|| err.clone());
                    })
                    .ok()
            })
            .collect();
        if usable.is_empty()
            && let Some(err) = first_error
        {
            return Err(err);
        }

        let mut rng = game_rng(seed);
        let picked = sample_indices(&mut rng, usable.len(), CLUES_PER_CATEGORY);
        let clues: Vec<Clue> = usable
            .into_iter()
            .enumerate()
            .filter(|(i, _)| picked.binary_search(i).is_ok())
            .map(|(_, clue)| clue)
            .collect();

        log::debug!(
            "category {} ({:?}): {} of {} clues",
            id,
            title,
            clues.len(),
            records.len()
        );
        Ok(Category::new(title, clues))
    }

    /// Selects categories, then loads all of them concurrently. The first failure fails the whole board.
    pub async fn load_board(&mut self) -> FetchResult<Board> {
        let ids = self.select_categories().await?;
        // seeds are drawn up front so the concurrent fetches never share the generator
        let seeds: Vec<u64> = ids.iter().map(|_| self.rng.random()).collect();

        let categories = try_join_all(
            ids.into_iter()
                .zip(seeds)
                .map(|(id, seed)| self.load_category(id, seed)),
        )
        .await?;

        Ok(Board::build(categories))
    }
}
