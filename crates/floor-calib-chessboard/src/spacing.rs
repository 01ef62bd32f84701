use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::Point2;

/// Median nearest-neighbour distance over an unordered corner cloud.
///
/// On a detected chessboard this approximates the pixel side of one board
/// square without ordering the corners first, which makes it a useful
/// cross-check for the bottom-left-pair estimate and a seed for search
/// windows. Returns `None` for fewer than two points or a cloud whose
/// neighbour distances collapse to zero.
pub fn estimate_corner_spacing(points: &[Point2<f32>]) -> Option<f32> {
    if points.len() < 2 {
        return None;
    }

    let coords: Vec<[f32; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    let tree: KdTree<f32, 2> = (&coords).into();

    let mut distances = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        // The query point itself is in the tree; skip it by index.
        let neighbours = tree.nearest_n::<SquaredEuclidean>(&[p.x, p.y], 2);
        if let Some(nn) = neighbours.into_iter().find(|nn| nn.item as usize != i) {
            distances.push(nn.distance.sqrt());
        }
    }

    if distances.is_empty() {
        return None;
    }

    distances.sort_by(f32::total_cmp);
    let median = distances[distances.len() / 2];
    (median.is_finite() && median > 0.0).then_some(median)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_lattice_spacing_is_the_cell_size() {
        let mut points = Vec::new();
        for r in 0..4 {
            for c in 0..5 {
                points.push(Point2::new(12.0 * c as f32, 12.0 * r as f32));
            }
        }
        let spacing = estimate_corner_spacing(&points).expect("spacing");
        assert_relative_eq!(spacing, 12.0);
    }

    #[test]
    fn outlier_does_not_move_the_median() {
        let mut points = Vec::new();
        for c in 0..6 {
            points.push(Point2::new(10.0 * c as f32, 0.0));
        }
        // One corner detected far off the line.
        points.push(Point2::new(500.0, 300.0));

        let spacing = estimate_corner_spacing(&points).expect("spacing");
        assert_relative_eq!(spacing, 10.0);
    }

    #[test]
    fn degenerate_clouds_have_no_spacing() {
        assert_eq!(estimate_corner_spacing(&[]), None);
        assert_eq!(estimate_corner_spacing(&[Point2::new(1.0, 2.0)]), None);

        let coincident = vec![Point2::new(3.0, 3.0); 5];
        assert_eq!(estimate_corner_spacing(&coincident), None);
    }
}
