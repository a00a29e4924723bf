//! Error type shared by the board model and the evolutionary loop.

use crate::board::BOARD_SIZE;
use thiserror::Error;

/// Errors reported at the crate boundary.
///
/// Nothing on the hot path of the evolutionary loop can fail; every variant
/// here is raised before any work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A run parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied board places a queen outside the grid.
    #[error("row {row} in column {column} is outside 0..{}", BOARD_SIZE)]
    RowOutOfRange { column: usize, row: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
