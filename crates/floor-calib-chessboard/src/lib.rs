//! Chessboard corner ordering for floor-plane mosaic calibration.
//!
//! Corner detectors return the `cols * rows` interior corners of a
//! chessboard as a flat list whose traversal order depends on how the
//! board happened to sit in the frame: the scan may run row-by-row or
//! column-by-column, start from any of the four outer corners, and the
//! board itself may be rotated ~90° relative to the declared
//! `cols x rows` labeling. This crate recovers the true grid topology
//! from such a list and derives the per-view anchors (outer image quad,
//! square size, floor-plane target rectangle) that a homography
//! estimator needs to project the view onto a common floor plane.
//!
//! ## Quickstart
//!
//! ```
//! use floor_calib_chessboard::order_chessboard_corners;
//! use floor_calib_core::BoardSize;
//! use nalgebra::Point2;
//!
//! let size = BoardSize::new(3, 2)?;
//! // Detector output: bottom row first, scanned right to left.
//! let detected = vec![
//!     Point2::new(30.0, 20.0), Point2::new(20.0, 20.0), Point2::new(10.0, 20.0),
//!     Point2::new(30.0, 10.0), Point2::new(20.0, 10.0), Point2::new(10.0, 10.0),
//! ];
//!
//! let grid = order_chessboard_corners(&detected, size)?;
//! assert_eq!(grid.point(0, 0), Point2::new(10.0, 10.0));
//! assert_eq!(grid.point(1, 2), Point2::new(30.0, 20.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod floor;
mod order;
mod spacing;

pub use floor::{floor_anchors, floor_anchors_from_grid, FloorAnchors, FloorAnchorsError};
pub use order::{classify_scan, order_chessboard_corners, OrderError, ScanOrientation};
pub use spacing::estimate_corner_spacing;
