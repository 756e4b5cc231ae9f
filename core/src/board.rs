use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Address of a clue cell: `column` is the category, `row` the clue below its heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellId {
    pub column: usize,
    pub row: usize,
}

impl CellId {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    const fn to_nd_index(self) -> [usize; 2] {
        [self.column, self.row]
    }
}

/// The categories and clue cells of one game.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    titles: Vec<String>,
    cells: Array2<Option<Clue>>,
}

impl Board {
    /// Lays out one column per category, each with [`CLUES_PER_CATEGORY`] rows.
    ///
    /// Short categories leave empty slots at the bottom of their column, clues past the last row are dropped, and
    /// every clue starts hidden.
    pub fn build(categories: Vec<Category>) -> Self {
        let columns = categories.len();
        if columns != CATEGORY_COUNT {
            log::warn!(
                "Building board with {} categories, expected {}",
                columns,
                CATEGORY_COUNT
            );
        }

        let mut titles = Vec::with_capacity(columns);
        let mut cells: Array2<Option<Clue>> = Array2::from_elem((columns, CLUES_PER_CATEGORY), None);

        for (column, category) in categories.into_iter().enumerate() {
            let (title, clues) = category.into_parts();
            if clues.len() > CLUES_PER_CATEGORY {
                log::warn!(
                    "Category {:?} has {} clues, only {} fit",
                    title,
                    clues.len(),
                    CLUES_PER_CATEGORY
                );
            }
            for (row, clue) in clues.into_iter().take(CLUES_PER_CATEGORY).enumerate() {
                cells[CellId::new(column, row).to_nd_index()] = Some(clue.into_hidden());
            }
            titles.push(title);
        }

        Self { titles, cells }
    }

    pub fn columns(&self) -> usize {
        self.cells.nrows()
    }

    pub fn rows(&self) -> usize {
        self.cells.ncols()
    }

    /// Column headings, upper-cased for display.
    pub fn headings(&self) -> Vec<String> {
        self.titles.iter().map(|title| title.to_uppercase()).collect()
    }

    pub fn validate_cell(&self, cell: CellId) -> Result<CellId> {
        if cell.column < self.columns() && cell.row < self.rows() {
            Ok(cell)
        } else {
            Err(BoardError::InvalidCell)
        }
    }

    pub fn clue(&self, cell: CellId) -> Option<&Clue> {
        let cell = self.validate_cell(cell).ok()?;
        self.cells[cell.to_nd_index()].as_ref()
    }

    pub fn display(&self, cell: CellId) -> CellDisplay {
        self.clue(cell).map_or(CellDisplay::Empty, Clue::display)
    }

    /// Advances one cell's reveal state; other cells are never touched.
    pub fn click(&mut self, cell: CellId) -> Result<RevealEffect> {
        let cell = self.validate_cell(cell)?;
        Ok(self.cells[cell.to_nd_index()]
            .as_mut()
            .map_or(RevealEffect::NoChange, Clue::click))
    }

    pub fn clue_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    pub fn answered_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|clue| clue.reveal_state().is_answered())
            .count()
    }

    /// Whether every clue on the board shows its answer.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.clue_count()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = CellId> + use<> {
        let (columns, rows) = (self.columns(), self.rows());
        (0..rows).flat_map(move |row| (0..columns).map(move |column| CellId::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    fn category(title: &str, clue_count: usize) -> Category {
        let clues = (0..clue_count)
            .map(|i| Clue::new(format!("{title} question {i}"), format!("{title} answer {i}")))
            .collect();
        Category::new(title, clues)
    }

    fn full_board() -> Board {
        Board::build((0..CATEGORY_COUNT).map(|i| category(&format!("cat {i}"), 5)).collect())
    }

    #[test]
    fn full_board_is_six_by_five_and_hidden() {
        let board = full_board();

        assert_eq!(board.columns(), 6);
        assert_eq!(board.rows(), 5);
        assert_eq!(board.clue_count(), 30);
        assert!(board.iter_cells().all(|cell| board.display(cell) == CellDisplay::Placeholder));
    }

    #[test]
    fn headings_are_upper_cased() {
        let board = Board::build(vec![category("Potent Potables", 5), category("u.s. cities", 5)]);
        assert_eq!(board.headings(), ["POTENT POTABLES", "U.S. CITIES"]);
    }

    #[test]
    fn short_category_leaves_empty_slots() {
        let board = Board::build(vec![category("short", 3), category("full", 5)]);

        assert_eq!(board.rows(), 5);
        assert_eq!(board.display(CellId::new(0, 2)), CellDisplay::Placeholder);
        assert_eq!(board.display(CellId::new(0, 3)), CellDisplay::Empty);
        assert_eq!(board.display(CellId::new(1, 4)), CellDisplay::Placeholder);
    }

    #[test]
    fn long_category_is_capped_at_five_rows() {
        let board = Board::build(vec![category("long", 9)]);

        assert_eq!(board.rows(), 5);
        assert_eq!(board.clue_count(), 5);
        assert_eq!(
            board.clue(CellId::new(0, 4)).map(Clue::question),
            Some("long question 4")
        );
    }

    #[test]
    fn builder_does_not_assume_category_count() {
        let board = Board::build((0..8).map(|i| category(&format!("c{i}"), 5)).collect());
        assert_eq!(board.columns(), 8);
        assert_eq!(board.rows(), 5);

        let board = Board::build(vec![]);
        assert_eq!(board.columns(), 0);
        assert_eq!(board.rows(), 5);
        assert!(board.is_complete());
    }

    #[test]
    fn build_resets_reveal_state() {
        let mut clue = Clue::new("q", "a");
        clue.click();
        let board = Board::build(vec![Category::new("t", vec![clue])]);

        assert_eq!(board.display(CellId::new(0, 0)), CellDisplay::Placeholder);
    }

    #[test]
    fn hidden_click_shows_upper_cased_question() {
        let mut board = Board::build(vec![Category::new(
            "geo",
            vec![Clue::new("Its capital is Ottawa", "Canada")],
        )]);
        let cell = CellId::new(0, 0);

        assert_eq!(board.display(cell).text(), "?");
        assert_eq!(board.click(cell), Ok(RevealEffect::ShowQuestion));
        assert_eq!(board.display(cell).text(), "ITS CAPITAL IS OTTAWA");
        assert_eq!(board.click(cell), Ok(RevealEffect::ShowAnswer));
        assert_eq!(board.display(cell), CellDisplay::Answer("CANADA".into()));
        assert_eq!(board.click(cell), Ok(RevealEffect::NoChange));
        assert_eq!(board.click(cell), Ok(RevealEffect::NoChange));
        assert!(!board.display(cell).is_clickable());
    }

    #[test]
    fn clicks_on_empty_and_invalid_cells() {
        let mut board = Board::build(vec![category("short", 1)]);

        assert_eq!(board.click(CellId::new(0, 3)), Ok(RevealEffect::NoChange));
        assert_eq!(board.click(CellId::new(1, 0)), Err(BoardError::InvalidCell));
        assert_eq!(board.click(CellId::new(0, 5)), Err(BoardError::InvalidCell));
        assert_eq!(board.display(CellId::new(9, 9)), CellDisplay::Empty);
    }

    #[test]
    fn clicks_on_distinct_cells_commute() {
        let x = CellId::new(0, 1);
        let y = CellId::new(3, 4);

        let mut forward = full_board();
        for _ in 0..2 {
            forward.click(x).unwrap();
        }
        forward.click(y).unwrap();

        let mut reverse = full_board();
        reverse.click(y).unwrap();
        for _ in 0..2 {
            reverse.click(x).unwrap();
        }

        assert_eq!(forward, reverse);
        assert_eq!(forward.display(x), CellDisplay::Answer("CAT 0 ANSWER 1".into()));
        assert_eq!(forward.display(y), CellDisplay::Question("CAT 3 QUESTION 4".into()));
    }

    #[test]
    fn board_completes_when_every_clue_is_answered() {
        let mut board = Board::build(vec![category("a", 2), category("b", 1)]);
        assert!(!board.is_complete());

        let cells: Vec<CellId> = board.iter_cells().collect();
        for cell in cells {
            board.click(cell).unwrap();
            board.click(cell).unwrap();
        }

        assert_eq!(board.answered_count(), 3);
        assert!(board.is_complete());
    }

    #[test]
    fn iter_cells_is_row_major() {
        let board = Board::build(vec![category("a", 5), category("b", 5)]);
        let cells: Vec<CellId> = board.iter_cells().take(3).collect();
        assert_eq!(cells, [CellId::new(0, 0), CellId::new(1, 0), CellId::new(0, 1)]);
    }
}
