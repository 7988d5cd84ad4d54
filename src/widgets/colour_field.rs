//! The saturation/brightness picker surface.
//!
//! A 256x256 field of every saturation/brightness combination at the
//! model's current hue: saturation runs left to right, brightness runs
//! bottom to top. An 8x8 square outline marks the last picked position.

use super::PickerSurface;
use crate::canvas::Canvas;
use crate::colour::{self, Colour};
use crate::layout::{Point, Rectangle, Size};
use crate::model::{Channel, ColourModel, EditSource};

const WIDTH: u32 = 256;
const HEIGHT: u32 = 256;
const MARKER_SIZE: f32 = 8.0;

/// The saturation/brightness picker surface.
pub struct ColourField {
    canvas: Canvas,
    /// Last picked position in surface pixels.
    marker: (i32, i32),
    /// Scan for the marker position during the next paint.
    seek_marker: bool,
    dirty: bool,
}

impl ColourField {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(WIDTH, HEIGHT),
            marker: (0, 0),
            seek_marker: true,
            dirty: true,
        }
    }

    /// Re-locate the marker from the model's colour on the next paint.
    /// Used when the selector is shown with an externally chosen colour.
    pub fn rearm_marker(&mut self) {
        self.seek_marker = true;
        self.dirty = true;
    }

    /// The marker position in surface pixels.
    pub fn marker(&self) -> (i32, i32) {
        self.marker
    }
}

impl Default for ColourField {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerSurface for ColourField {
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
        let hue = model.hue() as f32 / 359.0;
        let target = model.colour();

        for j in 0..HEIGHT as i32 {
            for i in 0..WIDTH as i32 {
                let (r, g, b) =
                    colour::hsb_to_rgb(hue, i as f32 / 255.0, (255 - j) as f32 / 255.0);
                let pixel = Colour::new(r, g, b);
                if self.seek_marker && target.nearly_equals(pixel) {
                    self.marker = (i, j);
                    self.seek_marker = false;
                }
                self.canvas.put_pixel(i, j, pixel);
            }
        }

        let marker_colour = if model.brightness() > 50 {
            Colour::BLACK
        } else {
            Colour::WHITE
        };
        self.canvas.stroke_rect(
            Rectangle::new(
                self.marker.0 as f32 - 4.0,
                self.marker.1 as f32 - 4.0,
                MARKER_SIZE,
                MARKER_SIZE,
            ),
            marker_colour,
        );

        self.dirty = false;
    }

    fn pointer_update(&mut self, model: &mut ColourModel, position: Point) {
        let x = position.x as i32;
        let y = position.y as i32;
        if (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) {
            let saturation = (100.0 * (x as f32 / 255.0)) as i32;
            let brightness = 100 - (100.0 * (y as f32 / 255.0)) as i32;
            log::debug!(
                "ColourField: picked ({x}, {y}) -> saturation {saturation}, brightness {brightness}"
            );
            model.set_field_text(
                EditSource::Channel(Channel::Saturation),
                saturation.to_string(),
            );
            model.set_field_text(
                EditSource::Channel(Channel::Brightness),
                brightness.to_string(),
            );
            self.marker = (x, y);
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
    fn test_pointer_maps_corners() {
        let mut model = ColourModel::new();
        let mut field = ColourField::new();

        field.pointer_update(&mut model, Point::new(0.0, 255.0));
        assert_eq!(model.saturation(), 0);
        assert_eq!(model.brightness(), 0);

        field.pointer_update(&mut model, Point::new(127.0, 127.0));
        assert_eq!(model.saturation(), 49);
        assert_eq!(model.brightness(), 51);
    }

    #[test]
    fn test_full_saturation_pick_clamps_through_bounded_path() {
        let mut model = ColourModel::new();
        let mut field = ColourField::new();

        // x = 255 maps to 100, one past the saturation maximum.
        field.pointer_update(&mut model, Point::new(255.0, 10.0));
        assert_eq!(model.saturation(), 99);
        assert_eq!(model.brightness(), 97);

        let corrections = model.take_corrections();
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].channel, Channel::Saturation);
        assert_eq!(corrections[0].text, "99");
    }

    #[test]
    fn test_pointer_outside_surface_is_ignored() {
        let mut model = ColourModel::new();
        model.set_from_hsb(100, 40, 40);
        let mut field = ColourField::new();

        field.pointer_update(&mut model, Point::new(300.0, 10.0));
        field.pointer_update(&mut model, Point::new(10.0, -5.0));
        assert_eq!(model.saturation(), 40);
        assert_eq!(model.brightness(), 40);
    }

    #[test]
    fn test_marker_seek_finds_pure_red() {
        let mut model = ColourModel::new();
        model.set_from_rgb(Colour::new(255, 0, 0));
        let mut field = ColourField::new();
        field.rearm_marker();
        field.paint(&model);
        // Full saturation, full brightness sits in the top-right corner.
        assert_eq!(field.marker(), (255, 0));
    }

    #[test]
    fn test_paint_clears_dirty_flag() {
        let model = ColourModel::new();
        let mut field = ColourField::new();
        assert!(field.needs_paint());
        field.paint(&model);
        assert!(!field.needs_paint());
        field.mark_dirty();
        assert!(field.needs_paint());
    }
}
