//! Order a synthetically scanned chessboard and print its floor anchors.
//!
//! Run with `RUST_LOG=debug cargo run --example floor_anchors` to see the
//! scan classification.

use floor_calib_chessboard::{classify_scan, floor_anchors, order_chessboard_corners};
use floor_calib_core::{BoardSize, CornerBounds};
use nalgebra::Point2;

/// Perspective-distorted lattice corner for cell `(row, col)`.
fn corner(row: usize, col: usize) -> Point2<f32> {
    let x = col as f32 + 1.0;
    let y = row as f32 + 1.0;
    let w = 1.0 + 0.004 * x;
    Point2::new((75.0 * x + 60.0) / w, (-2.0 * x + 70.0 * y + 45.0) / w)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let size = BoardSize::new(5, 4)?;

    // Simulate a detector that walked the board column by column, starting
    // from the bottom-right corner.
    let mut detected = Vec::with_capacity(size.point_count());
    for col in (0..size.cols()).rev() {
        for row in (0..size.rows()).rev() {
            detected.push(corner(row, col));
        }
    }

    println!(
        "scan classified as {:?}",
        classify_scan(&detected, size)?
    );

    let grid = order_chessboard_corners(&detected, size)?;
    for (i, row) in grid.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|p| format!("({:6.1}, {:6.1})", p.x, p.y))
            .collect();
        println!("row {i}: {}", cells.join(" "));
    }

    let anchors = floor_anchors(&detected, size)?;
    println!("square size: {:.2}px", anchors.square_size);
    println!("image quad (BL BR TR TL): {:?}", anchors.image_quad);
    println!("target rect (BL BR TR TL): {:?}", anchors.target_rect);

    if let Some(bounds) = CornerBounds::from_points(&anchors.target_rect) {
        println!(
            "target rect extent: {:.1} x {:.1}px",
            bounds.width(),
            bounds.height()
        );
    }

    Ok(())
}
