//! The hue picker ramp.
//!
//! A 20x256 strip running through the fully saturated, fully bright hues
//! from the top of the colour wheel down; the row matching the model's
//! current hue is drawn black as the indicator.

use super::PickerSurface;
use crate::canvas::Canvas;
use crate::colour::{self, Colour};
use crate::layout::{Point, Size};
use crate::model::{Channel, ColourModel, EditSource};

const WIDTH: u32 = 20;
const HEIGHT: u32 = 256;

/// The vertical hue ramp.
pub struct HueRamp {
    canvas: Canvas,
    dirty: bool,
}

impl HueRamp {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(WIDTH, HEIGHT),
            dirty: true,
        }
    }
}

impl Default for HueRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerSurface for HueRamp {
    fn size(&self) -> Size {
        Size::new(WIDTH as f32, HEIGHT as f32)
    }

    fn needs_paint(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn paint(&mut self, model: &ColourModel) {
        let selected = 255 - (255.0 * (model.hue() as f32 / 359.0)) as i32;

        for j in 0..HEIGHT as i32 {
            let row = if j == selected {
                Colour::BLACK
            } else {
                let (r, g, b) = colour::hsb_to_rgb((255 - j) as f32 / 255.0, 1.0, 1.0);
                Colour::new(r, g, b)
            };
            for i in 0..WIDTH as i32 {
                self.canvas.put_pixel(i, j, row);
            }
        }

        self.dirty = false;
    }

    fn pointer_update(&mut self, model: &mut ColourModel, position: Point) {
        let x = position.x as i32;
        let y = position.y as i32;
        // The pick range is 0..256 on both axes: the strip is only 20 wide,
        // but a drag that wanders right of it keeps tracking vertically.
        if (0..HEIGHT as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) {
            let hue = 359 - (359.0 * (y as f32 / 255.0)) as i32;
            log::debug!("HueRamp: picked y {y} -> hue {hue}");
            model.set_field_text(EditSource::Channel(Channel::Hue), hue.to_string());
            self.dirty = true;
        }
    }

    fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_maps_ends_of_ramp() {
        let mut model = ColourModel::new();
        let mut ramp = HueRamp::new();

        ramp.pointer_update(&mut model, Point::new(5.0, 0.0));
        assert_eq!(model.hue(), 359);

        ramp.pointer_update(&mut model, Point::new(5.0, 255.0));
        assert_eq!(model.hue(), 0);
    }

    #[test]
    fn test_pointer_outside_is_ignored() {
        let mut model = ColourModel::new();
        model.set_from_hsb(123, 50, 50);
        let mut ramp = HueRamp::new();

        ramp.pointer_update(&mut model, Point::new(5.0, 300.0));
        ramp.pointer_update(&mut model, Point::new(5.0, -1.0));
        assert_eq!(model.hue(), 123);
    }

    #[test]
    fn test_indicator_row_follows_hue() {
        let mut model = ColourModel::new();
        model.set_from_hsb(359, 99, 99);
        let mut ramp = HueRamp::new();
        ramp.paint(&model);

        assert_eq!(ramp.canvas().pixel(0, 0), Some(Colour::BLACK));
        assert_ne!(ramp.canvas().pixel(0, 128), Some(Colour::BLACK));
    }
}
