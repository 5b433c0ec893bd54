//! Core domain types for the bingo card.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on a card.
pub const BOARD_SIZE: usize = 4;

/// Number of tiles on a card.
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Placeholder text for cells left over once the phrase pool runs out.
pub const SENTINEL: &str = "...";

/// A single phrase on the card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Phrase shown on the tile.
    pub text: String,
    /// Whether the player has marked this tile.
    pub marked: bool,
}

impl Tile {
    /// Creates an unmarked tile.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marked: false,
        }
    }

    /// Creates an unmarked placeholder tile.
    pub fn sentinel() -> Self {
        Self::new(SENTINEL)
    }

    /// Returns true if this tile holds the placeholder text.
    pub fn is_sentinel(&self) -> bool {
        self.text == SENTINEL
    }
}

/// Error raised when a coordinate does not name a cell on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CellError {
    /// Row or column is outside `0..4`.
    #[display("Cell ({row}, {col}) is outside the 4x4 card")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// A validated coordinate on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: usize,
    col: usize,
}

/// Unvalidated cell as read from storage.
#[derive(Deserialize)]
struct RawCell {
    row: usize,
    col: usize,
}

impl TryFrom<RawCell> for Cell {
    type Error = CellError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.row, raw.col)
    }
}

impl Cell {
    /// Creates a cell, rejecting coordinates outside the card.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, CellError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CellError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Creates a cell from a row-major index (0-15).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TILE_COUNT).then(|| Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// Converts to a row-major index (0-15).
    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Row of this cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this cell.
    pub fn col(self) -> usize {
        self.col
    }

    /// All sixteen cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..TILE_COUNT).filter_map(Self::from_index)
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// 4x4 bingo card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Tiles in row-major order.
    rows: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Builds a board from explicit rows.
    pub fn from_rows(rows: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Builds a board of sixteen placeholder tiles.
    pub fn blank() -> Self {
        Self::from_rows(std::array::from_fn(|_| std::array::from_fn(|_| Tile::sentinel())))
    }

    /// Returns the tile at the given cell.
    pub fn get(&self, cell: Cell) -> &Tile {
        &self.rows[cell.row][cell.col]
    }

    /// Returns true if the tile at the given cell is marked.
    pub fn is_marked(&self, cell: Cell) -> bool {
        self.get(cell).marked
    }

    /// Sets the mark on a tile. Text is never touched.
    pub fn set_marked(&mut self, cell: Cell, marked: bool) {
        self.rows[cell.row][cell.col].marked = marked;
    }

    /// Flips the mark on a tile and returns the new state.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        let tile = &mut self.rows[cell.row][cell.col];
        tile.marked = !tile.marked;
        tile.marked
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Tile; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }

    /// Iterates tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten()
    }

    /// Number of marked tiles.
    pub fn marked_count(&self) -> usize {
        self.tiles().filter(|t| t.marked).count()
    }

    /// Returns a copy of this board with every mark cleared.
    pub fn cleared(&self) -> Self {
        let mut board = self.clone();
        for cell in Cell::all() {
            board.set_marked(cell, false);
        }
        board
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Marked tiles are wrapped in brackets.
    pub fn display(&self) -> String {
        let width = self
            .tiles()
            .map(|t| t.text.chars().count() + 2)
            .max()
            .unwrap_or(0);

        let mut result = String::new();
        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|tile| {
                    let label = if tile.marked {
                        format!("[{}]", tile.text)
                    } else {
                        format!(" {} ", tile.text)
                    };
                    format!("{label:<width$}")
                })
                .collect();
            result.push_str(&cells.join(" | "));
            if r + 1 < BOARD_SIZE {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::blank()
    }
}
