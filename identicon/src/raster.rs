use crate::grid::{Cell, GRID_SIZE};

/// Side length of one grid square in pixels.
pub const CELL_PIXELS: u32 = 50;
/// Side length of the canvas in pixels.
pub const CANVAS_SIZE: u32 = CELL_PIXELS * GRID_SIZE as u32;

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Corners of a painted square. `bottom_right` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PixelRect {
    pub top_left: Point,
    pub bottom_right: Point,
}

/// Corners of the square covering `cell`.
///
/// Column is `position % 5`, row is `position / 5`; each maps to a
/// 50 pixel step.
pub fn calc_vertices(cell: &Cell) -> PixelRect {
    let x = cell.column() as u32 * CELL_PIXELS;
    let y = cell.row() as u32 * CELL_PIXELS;
    PixelRect {
        top_left: Point { x, y },
        bottom_right: Point {
            x: x + CELL_PIXELS,
            y: y + CELL_PIXELS,
        },
    }
}

/// One rectangle per cell, in the same order.
pub fn build_pixel_map(cells: &[Cell]) -> Vec<PixelRect> {
    cells.iter().map(calc_vertices).collect()
}
