use floor_calib_core::{BoardSize, CornerGrid};
use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// How a detector traversed the board, relative to the declared
/// `cols x rows` labeling.
///
/// Two independent properties are encoded: whether consecutive list runs
/// have length `cols` (row-major) or `rows` (column-major), and whether
/// those runs lie along the declared board rows (upright) or along its
/// columns (transposed, i.e. the board is rotated ~90° in the frame).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ScanOrientation {
    /// Runs of `cols` points, each a physical board row.
    RowMajorUpright,
    /// Runs of `rows` points, each a physical board column.
    ColumnMajorUpright,
    /// Runs of `cols` points that cross the image vertically.
    RowMajorTransposed,
    /// Runs of `rows` points that cross the image horizontally.
    ColumnMajorTransposed,
}

impl ScanOrientation {
    /// True when the declared rows lie along image columns.
    #[inline]
    pub fn is_transposed(self) -> bool {
        matches!(
            self,
            ScanOrientation::RowMajorTransposed | ScanOrientation::ColumnMajorTransposed
        )
    }

    #[inline]
    fn is_column_major(self) -> bool {
        matches!(
            self,
            ScanOrientation::ColumnMajorUpright | ScanOrientation::ColumnMajorTransposed
        )
    }
}

/// Errors returned by the corner orderer.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("expected {expected} corners for the declared board, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("corner list matches no scan-orientation hypothesis")]
    InvalidTopology,
}

/// Length of the strictly monotonic run at the start of `points` in the
/// coordinate selected by `coord`.
///
/// The run direction (increasing or decreasing) is read from the first
/// pair; equal adjacent values terminate the run.
fn leading_monotonic_run(points: &[Point2<f32>], coord: fn(&Point2<f32>) -> f32) -> usize {
    if points.len() < 2 {
        return points.len();
    }

    let increasing = coord(&points[1]) > coord(&points[0]);
    let mut len = 1;
    for pair in points.windows(2) {
        let a = coord(&pair[0]);
        let b = coord(&pair[1]);
        if a == b || (b > a) != increasing {
            break;
        }
        len += 1;
    }
    len
}

/// Classify the traversal order of a detected corner list.
///
/// Each orientation hypothesis predicts the length of the leading
/// monotonic run: a physical row read left-to-right (or right-to-left) is
/// monotonic in x over `cols` points, a physical column is monotonic in y
/// over `rows` points, and the transposed readings swap the axes. The
/// satisfied hypothesis with the longest predicted run wins; ties keep
/// the upright reading. Comparing run lengths is what separates a
/// column-major scan from a transposed row-major one — the shorter
/// prediction is always satisfied by a prefix of the longer run, so a
/// fixed check order cannot tell them apart on both portrait and
/// landscape boards.
pub fn classify_scan(
    points: &[Point2<f32>],
    size: BoardSize,
) -> Result<ScanOrientation, OrderError> {
    let run_x = leading_monotonic_run(points, |p| p.x);
    let run_y = leading_monotonic_run(points, |p| p.y);

    let hypotheses = [
        (size.cols(), run_x, ScanOrientation::RowMajorUpright),
        (size.rows(), run_y, ScanOrientation::ColumnMajorUpright),
        (size.cols(), run_y, ScanOrientation::RowMajorTransposed),
        (size.rows(), run_x, ScanOrientation::ColumnMajorTransposed),
    ];

    let mut best: Option<(usize, ScanOrientation)> = None;
    for (predicted, run, orientation) in hypotheses {
        if run >= predicted && best.is_none_or(|(len, _)| predicted > len) {
            best = Some((predicted, orientation));
        }
    }

    best.map(|(_, orientation)| orientation)
        .ok_or(OrderError::InvalidTopology)
}

/// Order a flat list of detected chessboard corners into a canonical grid.
///
/// The input may be scanned row-by-row or column-by-column, in either
/// direction along both axes, starting from any outer corner. The result
/// is row-major with `point(0, 0)` top-left: x strictly increases along
/// rows and y strictly increases down columns. When the leading run shows
/// the board rotated ~90° relative to the declared labeling (see
/// [`ScanOrientation::is_transposed`]), the result is the consistent
/// rotated-board layout instead, so corners of the same physical board
/// still correspond across views.
///
/// Fails with [`OrderError::ShapeMismatch`] when the point count does not
/// match `size`, and with [`OrderError::InvalidTopology`] when no scan
/// hypothesis explains the list (severe detector noise, or a cloud that
/// is not a grid).
pub fn order_chessboard_corners(
    points: &[Point2<f32>],
    size: BoardSize,
) -> Result<CornerGrid, OrderError> {
    let expected = size.point_count();
    if points.len() != expected {
        return Err(OrderError::ShapeMismatch {
            expected,
            got: points.len(),
        });
    }

    let orientation = classify_scan(points, size)?;

    let (cols, rows) = (size.cols(), size.rows());
    let index = |row: usize, col: usize| -> usize {
        if orientation.is_column_major() {
            col * rows + row
        } else {
            row * cols + col
        }
    };

    // Read the travel direction from the top-left cell's neighbors before
    // any reversal: `right` is one step along the leading run, `below`
    // one step across runs.
    let first = points[index(0, 0)];
    let right = points[index(0, 1)];
    let below = points[index(1, 0)];

    let (flip_rows, flip_cols) = if orientation.is_transposed() {
        (first.x < below.x, first.y > right.y)
    } else {
        (first.y > below.y, first.x > right.x)
    };

    debug!(
        "corner scan classified as {orientation:?} (flip rows: {flip_rows}, flip cols: {flip_cols})"
    );

    Ok(CornerGrid::from_fn(size, |row, col| {
        let i = if flip_rows { rows - 1 - row } else { row };
        let j = if flip_cols { cols - 1 - col } else { col };
        points[index(i, j)]
    }))
}
