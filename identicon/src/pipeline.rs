use crate::color::{self, Color};
use crate::config::Style;
use crate::digest::{self, Digest};
use crate::grid::{self, Grid, Squares};
use crate::raster::{self, PixelRect};
use crate::render::{self, Canvas};

/// Every stage of the identicon pipeline for one input string.
///
/// Built once by [`Identicon::new`]; nothing is recomputed afterwards.
#[derive(Debug, Clone)]
pub struct Identicon {
    input: String,
    digest: Digest,
    color: Color,
    grid: Grid,
    squares: Squares,
    pixel_map: Vec<PixelRect>,
}

impl Identicon {
    /// Hash `input` and run the remaining stages on its digest.
    pub fn new(input: &str) -> Identicon {
        let digest = digest::hash_input(input);
        tracing::debug!(digest = %digest, "hashed input");
        Identicon::from_digest(input, digest)
    }

    /// Run color, grid, filter and pixel map stages on a known digest.
    pub fn from_digest(input: &str, digest: Digest) -> Identicon {
        let color = color::pick_color(&digest);
        tracing::debug!(color = %color, "picked color");

        let grid = grid::build_grid(&digest);
        let squares = grid::filter_odd_squares(&grid);
        tracing::debug!(squares = squares.len(), "filtered grid");

        let pixel_map = raster::build_pixel_map(&squares);
        tracing::debug!(rects = pixel_map.len(), "built pixel map");

        Identicon {
            input: input.to_string(),
            digest,
            color,
            grid,
            squares,
            pixel_map,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Painted cells, in grid order.
    pub fn squares(&self) -> &Squares {
        &self.squares
    }

    /// One rectangle per painted cell.
    pub fn pixel_map(&self) -> &[PixelRect] {
        &self.pixel_map
    }

    /// Paint onto a fresh canvas.
    pub fn render(&self, style: &Style) -> Canvas {
        render::draw_image(self.color, &self.pixel_map, style.background)
    }
}
