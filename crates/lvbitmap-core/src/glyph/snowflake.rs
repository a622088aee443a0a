//! Procedural snowflake glyphs.
//!
//! Three variants, all white on a transparent background:
//! - **Simple**: a filled disc, reads well at 12 px
//! - **SixArm**: six thick arms with one pair of side branches each
//! - **Realistic**: six arms with two branch pairs and a small centre dot

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, Point, WHITE};
use super::GlyphError;
use crate::decode::PixelGrid;

/// Smallest canvas a snowflake can be drawn on.
pub const MIN_GLYPH_SIZE: u32 = 4;

/// Which snowflake shape to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnowflakeStyle {
    Simple,
    SixArm,
    #[default]
    Realistic,
}

impl SnowflakeStyle {
    /// Canvas size each style was tuned for.
    pub fn default_size(self) -> u32 {
        match self {
            SnowflakeStyle::Simple => 12,
            SnowflakeStyle::SixArm | SnowflakeStyle::Realistic => 16,
        }
    }
}

/// Render a snowflake of the given style on a `size x size` canvas.
///
/// # Errors
///
/// Returns `GlyphError::TooSmall` when `size` is below [`MIN_GLYPH_SIZE`].
pub fn render_snowflake(style: SnowflakeStyle, size: u32) -> Result<PixelGrid, GlyphError> {
    if size < MIN_GLYPH_SIZE {
        return Err(GlyphError::TooSmall {
            size,
            min: MIN_GLYPH_SIZE,
        });
    }

    let mut canvas = Canvas::new(size, size);
    match style {
        SnowflakeStyle::Simple => draw_simple(&mut canvas),
        SnowflakeStyle::SixArm => draw_six_arm(&mut canvas),
        SnowflakeStyle::Realistic => draw_realistic(&mut canvas),
    }
    Ok(canvas.into_grid())
}

/// Point at `distance` from `origin` along `angle` (radians, y down).
#[inline]
fn polar(origin: Point, distance: f32, angle: f32) -> Point {
    (
        origin.0 + distance * angle.cos(),
        origin.1 + distance * angle.sin(),
    )
}

/// Arm directions: six arms at 60° steps starting along +x.
fn arm_angles() -> impl Iterator<Item = f32> {
    (0..6).map(|i| (i * 60) as f32 * PI / 180.0)
}

/// Draw a pair of side branches at ±45° from an arm.
fn draw_branch_pair(canvas: &mut Canvas, at: Point, arm_angle: f32, length: f32) {
    for offset in [-45.0f32, 45.0] {
        let angle = arm_angle + offset.to_radians();
        canvas.draw_line(at, polar(at, length, angle), 1.0, WHITE);
    }
}

fn draw_simple(canvas: &mut Canvas) {
    let size = canvas.width();
    let center = (size / 2) as i32;
    let radius = (size / 2).saturating_sub(2) as i32;

    canvas.fill_ellipse((center, center), radius, radius, WHITE);
}

fn draw_six_arm(canvas: &mut Canvas) {
    let size = canvas.width();
    let c = (size / 2) as f32;
    let center = (c, c);
    let arm_length = (size / 2).saturating_sub(2) as f32;

    canvas.fill_ellipse((c as i32, c as i32), 2, 2, WHITE);

    for angle in arm_angles() {
        canvas.draw_line(center, polar(center, arm_length, angle), 2.0, WHITE);

        let branch_at = polar(center, arm_length * 0.6, angle);
        draw_branch_pair(canvas, branch_at, angle, 3.0);
    }
}

fn draw_realistic(canvas: &mut Canvas) {
    let c = canvas.width() as f32 / 2.0;
    let center = (c, c);
    let arm_length = c - 1.0;

    for angle in arm_angles() {
        canvas.draw_line(center, polar(center, arm_length, angle), 2.0, WHITE);

        draw_branch_pair(canvas, polar(center, arm_length * 0.4, angle), angle, 2.5);
        draw_branch_pair(canvas, polar(center, arm_length * 0.7, angle), angle, 2.0);
    }

    // Whole-pixel radius: the dot spans the three centre pixels on each axis
    canvas.fill_ellipse((c as i32, c as i32), 1, 1, WHITE);
}
