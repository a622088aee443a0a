//! RGBA raster canvas for glyph drawing.
//!
//! # Coordinate System
//! - (0, 0) = centre of the top-left pixel
//! - Integer coordinates are pixel centres, x grows right, y grows down
//!
//! Thin lines and filled ellipses come from `imageproc`. Wide strokes are
//! rasterized here. Drawing outside the canvas is clipped silently.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_line_segment_mut};

use crate::decode::PixelGrid;

/// Opaque white, the glyph foreground colour.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// A 2D point in pixel coordinates.
pub type Point = (f32, f32);

/// Transparent canvas that glyphs are drawn onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Draw a line segment of the given stroke width.
    ///
    /// Widths of 1 or less draw a Bresenham line between the rounded
    /// endpoints. Wider strokes fill a band `width` pixels across with flat
    /// caps at both endpoints.
    pub fn draw_line(&mut self, from: Point, to: Point, width: f32, color: [u8; 4]) {
        if width <= 1.0 {
            let from = (from.0.round(), from.1.round());
            let to = (to.0.round(), to.1.round());
            draw_line_segment_mut(&mut self.image, from, to, Rgba(color));
        } else {
            self.draw_stroke(from, to, width, color);
        }
    }

    fn draw_stroke(&mut self, from: Point, to: Point, width: f32, color: [u8; 4]) {
        let Some(band) = StrokeBand::new(from, to, width) else {
            return;
        };

        let half = width / 2.0;
        let max_x = (from.0.max(to.0) + half).ceil().min(self.width() as f32 - 1.0);
        let max_y = (from.1.max(to.1) + half).ceil().min(self.height() as f32 - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }
        let min_x = (from.0.min(to.0) - half).floor().max(0.0) as u32;
        let min_y = (from.1.min(to.1) - half).floor().max(0.0) as u32;

        for y in min_y..=max_y as u32 {
            for x in min_x..=max_x as u32 {
                if band.covers((x as f32, y as f32)) {
                    self.image.put_pixel(x, y, Rgba(color));
                }
            }
        }
    }

    /// Fill the ellipse centred on a pixel with the given radii.
    pub fn fill_ellipse(&mut self, center: (i32, i32), rx: i32, ry: i32, color: [u8; 4]) {
        draw_filled_ellipse_mut(&mut self.image, center, rx, ry, Rgba(color));
    }

    /// Finish drawing and hand the pixels over as a grid.
    pub fn into_grid(self) -> PixelGrid {
        PixelGrid::from_rgba_image(self.image)
    }
}

/// Rectangle swept by a wide stroke, in segment-local coordinates.
#[derive(Debug, Clone, Copy)]
struct StrokeBand {
    origin: Point,
    /// Unit direction from start to end.
    dir: Point,
    length: f32,
    half_width: f32,
}

impl StrokeBand {
    fn new(from: Point, to: Point, width: f32) -> Option<Self> {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        if length < f32::EPSILON {
            return None;
        }
        Some(Self {
            origin: from,
            dir: (dx / length, dy / length),
            length,
            half_width: width / 2.0,
        })
    }

    /// Half-open across the stroke so a width-N band spans exactly N pixel
    /// centres on an axis-aligned segment.
    #[inline]
    fn covers(&self, p: Point) -> bool {
        let (px, py) = (p.0 - self.origin.0, p.1 - self.origin.1);
        let along = px * self.dir.0 + py * self.dir.1;
        let across = py * self.dir.0 - px * self.dir.1;

        (0.0..=self.length).contains(&along)
            && (-self.half_width..self.half_width).contains(&across)
    }
}
