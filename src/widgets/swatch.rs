//! Preview swatch showing the model's current colour.

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::layout::Rectangle;
use crate::theme::Theme;

/// A rectangle filled with the current colour.
pub struct Swatch;

impl Swatch {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, canvas: &mut Canvas, bounds: Rectangle, colour: Colour, theme: &Theme) {
        canvas.fill_rect(bounds, colour);
        canvas.stroke_rect(bounds, theme.border);
    }
}

impl Default for Swatch {
    fn default() -> Self {
        Self::new()
    }
}
