use serde::{Deserialize, Serialize};

/// Interior-corner dimensions of a physical chessboard.
///
/// `cols`/`rows` count interior grid-line intersections, not squares.
/// Both dimensions must be at least 2: ordering a detected corner cloud
/// needs two points along each scanned axis to read a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    cols: usize,
    rows: usize,
}

/// Board dimension validation errors.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardSizeError {
    #[error("board needs at least 2 interior corners along each axis, got {cols}x{rows}")]
    TooSmall { cols: usize, rows: usize },
}

impl BoardSize {
    /// Validate and create a board size from column and row counts.
    pub fn new(cols: usize, rows: usize) -> Result<Self, BoardSizeError> {
        if cols < 2 || rows < 2 {
            return Err(BoardSizeError::TooSmall { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Number of interior-corner columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of interior-corner rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of interior corners on the board.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.cols * self.rows
    }
}
