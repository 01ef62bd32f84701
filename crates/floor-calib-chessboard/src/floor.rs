use floor_calib_core::{BoardSize, CornerGrid};
use log::{debug, warn};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::order::{order_chessboard_corners, OrderError};
use crate::spacing::estimate_corner_spacing;

/// Per-view anchors for projecting a camera image onto the floor plane.
///
/// `image_quad` and `target_rect` correspond positionally (bottom-left,
/// bottom-right, top-right, top-left); feeding both to a homography
/// estimator yields the image-to-floor transform for the view. The
/// rectangle keeps the board's bottom-left corner fixed, runs its bottom
/// edge horizontally, and spaces corners `square_size` pixels apart, so
/// views of the same physical board land on consistently scaled floor
/// rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloorAnchors {
    /// Outermost detected corners in the image.
    pub image_quad: [Point2<f32>; 4],
    /// Where the same corners should land on the floor plane.
    pub target_rect: [Point2<f32>; 4],
    /// Estimated side of one board square, in pixels.
    pub square_size: f32,
}

/// Errors returned when deriving floor anchors.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FloorAnchorsError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("bottom-left corner pair gives no usable square size")]
    DegenerateSpacing,
}

/// Derive floor anchors from a raw detected corner list.
///
/// Orders the corners first; ordering failures propagate. The square size
/// read off the bottom-left corner pair is cross-checked against the
/// nearest-neighbour spacing of the raw cloud, and a gross disagreement
/// is logged as a warning — it usually means the detector mislocated a
/// corner badly enough to distort the target rectangle.
pub fn floor_anchors(
    points: &[Point2<f32>],
    size: BoardSize,
) -> Result<FloorAnchors, FloorAnchorsError> {
    let grid = order_chessboard_corners(points, size)?;
    let anchors = floor_anchors_from_grid(&grid)?;

    if let Some(spacing) = estimate_corner_spacing(points) {
        let ratio = anchors.square_size / spacing;
        if !(0.5..=2.0).contains(&ratio) {
            warn!(
                "bottom-left square size {:.1}px disagrees with nearest-neighbour spacing {:.1}px",
                anchors.square_size, spacing
            );
        }
    }

    Ok(anchors)
}

/// Derive floor anchors from an already ordered grid.
pub fn floor_anchors_from_grid(grid: &CornerGrid) -> Result<FloorAnchors, FloorAnchorsError> {
    let (bl, next) = grid.bottom_left_pair();
    let square_size = (next - bl).norm();
    if !square_size.is_finite() || square_size <= 0.0 {
        return Err(FloorAnchorsError::DegenerateSpacing);
    }

    let size = grid.size();
    let width = square_size * (size.cols() - 1) as f32;
    let height = square_size * (size.rows() - 1) as f32;

    // Same bottom-left/bottom-right/top-right/top-left order as the image
    // quad; y decreases upward in image coordinates.
    let target_rect = [
        Point2::new(bl.x, bl.y),
        Point2::new(bl.x + width, bl.y),
        Point2::new(bl.x + width, bl.y - height),
        Point2::new(bl.x, bl.y - height),
    ];

    debug!(
        "floor anchors: square {square_size:.2}px, target rect {width:.1}x{height:.1}px at ({:.1}, {:.1})",
        bl.x, bl.y
    );

    Ok(FloorAnchors {
        image_quad: grid.outer_corners(),
        target_rect,
        square_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn board_size(cols: usize, rows: usize) -> BoardSize {
        BoardSize::new(cols, rows).expect("valid size")
    }

    #[test]
    fn rectangle_is_anchored_at_bottom_left() {
        // Perfect 4x3 lattice, 10px squares, offset into the image.
        let size = board_size(4, 3);
        let grid = CornerGrid::from_fn(size, |r, c| {
            Point2::new(100.0 + 10.0 * c as f32, 50.0 + 10.0 * r as f32)
        });

        let anchors = floor_anchors_from_grid(&grid).expect("anchors");
        assert_relative_eq!(anchors.square_size, 10.0);

        let [bl, br, tr, tl] = anchors.target_rect;
        assert_relative_eq!(bl.x, 100.0);
        assert_relative_eq!(bl.y, 70.0);
        assert_relative_eq!(br.x, 130.0);
        assert_relative_eq!(br.y, 70.0);
        assert_relative_eq!(tr.x, 130.0);
        assert_relative_eq!(tr.y, 50.0);
        assert_relative_eq!(tl.x, 100.0);
        assert_relative_eq!(tl.y, 50.0);

        // For an axis-aligned lattice the image quad already is the target
        // rectangle.
        assert_eq!(anchors.image_quad, anchors.target_rect);
    }

    #[test]
    fn skewed_view_keeps_quad_correspondence() {
        // Shear the lattice; the image quad must follow the detected
        // corners while the target rectangle stays axis-aligned.
        let size = board_size(3, 2);
        let grid = CornerGrid::from_fn(size, |r, c| {
            let x = 10.0 * c as f32 + 3.0 * r as f32;
            let y = 10.0 * r as f32 + 20.0;
            Point2::new(x, y)
        });

        let anchors = floor_anchors_from_grid(&grid).expect("anchors");
        let [bl, br, tr, tl] = anchors.image_quad;
        assert_eq!(bl, Point2::new(3.0, 30.0));
        assert_eq!(br, Point2::new(23.0, 30.0));
        assert_eq!(tr, Point2::new(20.0, 20.0));
        assert_eq!(tl, Point2::new(0.0, 20.0));

        assert_relative_eq!(anchors.square_size, 10.0);
        assert_relative_eq!(anchors.target_rect[0].x, 3.0);
        assert_relative_eq!(anchors.target_rect[0].y, 30.0);
        assert_relative_eq!(anchors.target_rect[2].x, 23.0);
        assert_relative_eq!(anchors.target_rect[2].y, 20.0);
    }

    #[test]
    fn coincident_bottom_left_pair_is_rejected() {
        let size = board_size(3, 2);
        let mut points = Vec::new();
        for r in 0..2 {
            for c in 0..3 {
                points.push(Point2::new(10.0 * c as f32, 10.0 * r as f32));
            }
        }
        // Collapse the bottom-left pair onto one point.
        points[4] = points[3];
        let grid = CornerGrid::from_row_major(size, points).expect("grid");

        assert_eq!(
            floor_anchors_from_grid(&grid),
            Err(FloorAnchorsError::DegenerateSpacing)
        );
    }

    #[test]
    fn ordering_failures_propagate() {
        let points = vec![Point2::new(0.0, 0.0); 4];
        let err = floor_anchors(&points, board_size(2, 2)).expect_err("must fail");
        assert_eq!(err, FloorAnchorsError::Order(OrderError::InvalidTopology));
    }
}
