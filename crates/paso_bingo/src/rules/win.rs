//! Win detection for the 4x4 card.

use crate::{BOARD_SIZE, Board, Cell};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised when a row or column index does not name a line on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LineError {
    /// Row index outside `0..4`.
    #[display("Row {index} is outside the 4x4 card")]
    RowOutOfRange {
        /// Requested row.
        index: usize,
    },
    /// Column index outside `0..4`.
    #[display("Column {index} is outside the 4x4 card")]
    ColumnOutOfRange {
        /// Requested column.
        index: usize,
    },
}

/// A line of four cells that wins when fully marked.
///
/// Stored lines are range-checked on deserialization. Use [`Line::row`] and
/// [`Line::column`] to build one from untrusted indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLine")]
pub enum Line {
    /// Horizontal line (0-3).
    Row(usize),
    /// Vertical line (0-3).
    Column(usize),
    /// `[0,0]` through `[3,3]`.
    MainDiagonal,
    /// `[0,3]` through `[3,0]`.
    AntiDiagonal,
}

/// Unchecked wire form of [`Line`].
#[derive(Deserialize)]
enum RawLine {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl TryFrom<RawLine> for Line {
    type Error = LineError;

    fn try_from(raw: RawLine) -> Result<Self, Self::Error> {
        match raw {
            RawLine::Row(index) => Line::row(index),
            RawLine::Column(index) => Line::column(index),
            RawLine::MainDiagonal => Ok(Line::MainDiagonal),
            RawLine::AntiDiagonal => Ok(Line::AntiDiagonal),
        }
    }
}

impl Line {
    /// Every winning line, in evaluation order: rows, columns, main
    /// diagonal, anti-diagonal.
    pub const ALL: [Line; 2 * BOARD_SIZE + 2] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Row(3),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Column(3),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// Row `index`, rejecting indices outside the card.
    pub fn row(index: usize) -> Result<Self, LineError> {
        if index >= BOARD_SIZE {
            return Err(LineError::RowOutOfRange { index });
        }
        Ok(Line::Row(index))
    }

    /// Column `index`, rejecting indices outside the card.
    pub fn column(index: usize) -> Result<Self, LineError> {
        if index >= BOARD_SIZE {
            return Err(LineError::ColumnOutOfRange { index });
        }
        Ok(Line::Column(index))
    }

    /// The four cells of this line.
    ///
    /// Fails for a `Row` or `Column` built by hand with an index past the
    /// card.
    pub fn cells(self) -> Result<[Cell; BOARD_SIZE], LineError> {
        match self {
            Line::Row(index) if index >= BOARD_SIZE => Err(LineError::RowOutOfRange { index }),
            Line::Column(index) if index >= BOARD_SIZE => {
                Err(LineError::ColumnOutOfRange { index })
            }
            _ => Ok(std::array::from_fn(|i| match self {
                Line::Row(r) => Cell::at(r, i),
                Line::Column(c) => Cell::at(i, c),
                Line::MainDiagonal => Cell::at(i, i),
                Line::AntiDiagonal => Cell::at(i, BOARD_SIZE - 1 - i),
            })),
        }
    }

    /// Returns true if every cell of this line is marked. A line past the
    /// card is never complete.
    pub fn is_complete(self, board: &Board) -> bool {
        self.cells()
            .is_ok_and(|cells| cells.iter().all(|&cell| board.is_marked(cell)))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {r}"),
            Line::Column(c) => write!(f, "column {c}"),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Returns true if any row, column or diagonal is fully marked.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> bool {
    winning_line(board).is_some()
}

/// Returns the first complete line in evaluation order, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::ALL.into_iter().find(|line| line.is_complete(board))
}

/// Returns every complete line.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<Line> {
    Line::ALL
        .into_iter()
        .filter(|line| line.is_complete(board))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(cells: &[(usize, usize)]) -> Board {
        let mut board = Board::blank();
        for &(r, c) in cells {
            board.set_marked(Cell::new(r, c).unwrap(), true);
        }
        board
    }

    #[test]
    fn test_no_win_empty_board() {
        let board = Board::blank();
        assert!(!check_win(&board));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_win_row_two() {
        let board = marked(&[(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert!(check_win(&board));
        assert_eq!(winning_line(&board), Some(Line::Row(2)));
    }

    #[test]
    fn test_win_column_zero() {
        let board = marked(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(check_win(&board));
        assert_eq!(winning_line(&board), Some(Line::Column(0)));
    }

    #[test]
    fn test_win_diagonals() {
        let main = marked(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(winning_line(&main), Some(Line::MainDiagonal));

        let anti = marked(&[(0, 3), (1, 2), (2, 1), (3, 0)]);
        assert_eq!(winning_line(&anti), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = marked(&[(1, 0), (1, 1), (1, 2)]);
        assert!(!check_win(&board));
    }

    #[test]
    fn test_check_does_not_mutate() {
        let board = marked(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let before = board.clone();
        assert!(check_win(&board));
        assert!(check_win(&board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_reports_every_line() {
        let mut board = Board::blank();
        for cell in Cell::all() {
            board.set_marked(cell, true);
        }
        assert!(check_win(&board));
        assert_eq!(winning_lines(&board).len(), Line::ALL.len());
        assert_eq!(winning_line(&board), Some(Line::Row(0)));
    }

    #[test]
    fn test_line_cells() {
        let cells: Vec<(usize, usize)> = Line::AntiDiagonal
            .cells()
            .unwrap()
            .iter()
            .map(|c| (c.row(), c.col()))
            .collect();
        assert_eq!(cells, vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_stored_line_out_of_range_rejected() {
        assert!(serde_json::from_str::<Line>(r#"{"Row":7}"#).is_err());
        assert!(serde_json::from_str::<Line>(r#"{"Column":4}"#).is_err());

        let line: Line = serde_json::from_str(r#"{"Row":3}"#).unwrap();
        assert_eq!(line, Line::Row(3));
        let diagonal: Line = serde_json::from_str(r#""AntiDiagonal""#).unwrap();
        assert_eq!(diagonal, Line::AntiDiagonal);
    }

    #[test]
    fn test_checked_constructors() {
        assert_eq!(Line::row(2), Ok(Line::Row(2)));
        assert_eq!(Line::row(4), Err(LineError::RowOutOfRange { index: 4 }));
        assert_eq!(Line::column(9), Err(LineError::ColumnOutOfRange { index: 9 }));
    }

    #[test]
    fn test_hand_built_line_past_card_is_never_complete() {
        let mut board = Board::blank();
        for cell in Cell::all() {
            board.set_marked(cell, true);
        }
        assert!(Line::Row(7).cells().is_err());
        assert!(!Line::Row(7).is_complete(&board));
    }
}
