//! Raster rendering of pattern frames

use crate::io::configuration::{
    BACKGROUND_COLOR, EMPTY_COLOR, FILL_COLOR, FILL_INSET, GRID_CANVAS_FRACTION, GRID_LINE_COLOR,
    GRID_LINE_WIDTH,
};
use crate::pattern::model::PatternSpec;
use image::{Rgb, RgbImage};

/// Turns a pattern into a fixed-size image
pub trait FrameRenderer {
    /// Output dimensions as (width, height)
    fn canvas(&self) -> (u32, u32);

    /// Draw the incomplete grid when `show_missing` is set, the full grid otherwise
    ///
    /// Missing cells are drawn exactly like empty ones.
    fn render(&self, spec: &PatternSpec, show_missing: bool) -> RgbImage;
}

/// Draws the grid centered on a flat background
#[derive(Debug, Clone, Copy)]
pub struct GridRenderer {
    width: u32,
    height: u32,
}

/// Pixel placement of the grid on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Left edge of the grid
    pub origin_x: f64,
    /// Top edge of the grid
    pub origin_y: f64,
    /// Side length of one cell
    pub cell_size: f64,
}

impl GridRenderer {
    /// Create a renderer for a `width` x `height` canvas
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Where a grid of `grid_size` cells lands on this canvas
    pub fn layout(&self, grid_size: usize) -> GridLayout {
        let (width, height) = (f64::from(self.width), f64::from(self.height));
        let cells = grid_size.max(1) as f64;
        let cell_size = width.min(height) * GRID_CANVAS_FRACTION / cells;
        let grid_extent = cells * cell_size;

        GridLayout {
            origin_x: (width - grid_extent) / 2.0,
            origin_y: (height - grid_extent) / 2.0,
            cell_size,
        }
    }
}

impl FrameRenderer for GridRenderer {
    fn canvas(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn render(&self, spec: &PatternSpec, show_missing: bool) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width, self.height, Rgb(BACKGROUND_COLOR));
        let layout = self.layout(spec.grid_size());
        let half_line = f64::from(GRID_LINE_WIDTH) / 2.0;
        let inset = f64::from(FILL_INSET);
        let size = layout.cell_size;

        for ((row, col), cell) in spec.pattern_for_frame(show_missing).indexed_iter() {
            let x = (col as f64).mul_add(size, layout.origin_x);
            let y = (row as f64).mul_add(size, layout.origin_y);

            fill_rect(&mut img, x, y, size, size, GRID_LINE_COLOR);
            fill_rect(
                &mut img,
                x + half_line,
                y + half_line,
                size - 2.0 * half_line,
                size - 2.0 * half_line,
                EMPTY_COLOR,
            );

            if cell.is_filled() {
                fill_rect(
                    &mut img,
                    x + inset,
                    y + inset,
                    size - 2.0 * inset,
                    size - 2.0 * inset,
                    FILL_COLOR,
                );
            }
        }

        img
    }
}

// Pixels whose top-left corner falls inside the rectangle, clipped to the image
fn fill_rect(img: &mut RgbImage, x: f64, y: f64, width: f64, height: f64, color: [u8; 3]) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    let clamp = |value: f64, limit: u32| value.round().clamp(0.0, f64::from(limit)) as u32;
    let (x0, x1) = (clamp(x, img.width()), clamp(x + width, img.width()));
    let (y0, y1) = (clamp(y, img.height()), clamp(y + height, img.height()));

    for py in y0..y1 {
        for px in x0..x1 {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = Rgb(color);
            }
        }
    }
}
