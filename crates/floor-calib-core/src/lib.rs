//! Core types for floor-plane mosaic calibration.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete corner detector, image type, or homography
//! estimator; it only defines the value types those collaborators exchange.

mod board;
mod bounds;
mod grid;
mod logger;

pub use board::{BoardSize, BoardSizeError};
pub use bounds::CornerBounds;
pub use grid::CornerGrid;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
