use crate::color::Color;
use crate::raster::{PixelRect, CANVAS_SIZE};

/// A painted identicon as a grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width and height in pixels.
    pub size: u32,
    /// Pixel colors in row-major order.
    pub pixels: Vec<Color>,
}

impl Canvas {
    /// A square canvas filled with `background`.
    pub fn new(size: u32, background: Color) -> Self {
        let side = size as usize;
        Canvas {
            size,
            pixels: vec![background; side * side],
        }
    }

    /// Get the pixel at position (x, y). Panics outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(
            x < self.size && y < self.size,
            "pixel ({x}, {y}) outside {}x{} canvas",
            self.size,
            self.size
        );
        self.pixels[self.index(x, y)]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }

    /// Fill a rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: &PixelRect, color: Color) {
        let x_end = rect.bottom_right.x.min(self.size);
        let y_end = rect.bottom_right.y.min(self.size);
        for y in rect.top_left.y..y_end {
            for x in rect.top_left.x..x_end {
                let i = self.index(x, y);
                self.pixels[i] = color;
            }
        }
    }

    /// Convert to packed RGB data (3 bytes per pixel).
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}

/// Paint every rectangle with `color` on a 250x250 canvas.
pub fn draw_image(color: Color, pixel_map: &[PixelRect], background: Color) -> Canvas {
    let mut canvas = Canvas::new(CANVAS_SIZE, background);
    for rect in pixel_map {
        canvas.fill_rect(rect, color);
    }
    canvas
}
