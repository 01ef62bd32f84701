use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a corner point set.
///
/// Compositing code uses these to size warp canvases and to shift
/// transformed corners into non-negative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl CornerBounds {
    /// Bounds of `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point2<f32>]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(CornerBounds::from_points(&[]), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let points = [
            Point2::new(4.0, -2.0),
            Point2::new(-1.5, 3.0),
            Point2::new(2.0, 0.5),
        ];
        let bounds = CornerBounds::from_points(&points).expect("non-empty");
        assert_relative_eq!(bounds.min_x, -1.5);
        assert_relative_eq!(bounds.min_y, -2.0);
        assert_relative_eq!(bounds.max_x, 4.0);
        assert_relative_eq!(bounds.max_y, 3.0);
        assert_relative_eq!(bounds.width(), 5.5);
        assert_relative_eq!(bounds.height(), 5.0);
    }

    #[test]
    fn single_point_has_zero_extent() {
        let bounds = CornerBounds::from_points(&[Point2::new(7.0, 9.0)]).expect("non-empty");
        assert_relative_eq!(bounds.width(), 0.0);
        assert_relative_eq!(bounds.height(), 0.0);
    }
}
