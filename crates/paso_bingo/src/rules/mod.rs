//! Card rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! tile storage so card sessions and invariants can compose them.

pub mod win;

pub use win::{Line, LineError, check_win, winning_line, winning_lines};
