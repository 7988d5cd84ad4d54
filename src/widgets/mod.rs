//! The selector's widgets.

mod button;
mod channel_field;
mod colour_field;
mod hue_ramp;
mod selector;
mod swatch;

pub use button::Button;
pub use channel_field::ChannelField;
pub use colour_field::ColourField;
pub use hue_ramp::HueRamp;
pub use selector::ColourSelector;
pub use swatch::Swatch;

use crate::canvas::Canvas;
use crate::layout::{Point, Size};
use crate::model::ColourModel;

/// A custom-painted picker surface.
///
/// A surface owns its pixel buffer (regenerated from the model on demand)
/// and translates local pointer positions into channel edits. The selector
/// treats both surfaces uniformly through this trait when routing events
/// and compositing.
pub trait PickerSurface {
    /// Pixel size of the surface.
    fn size(&self) -> Size;

    /// Whether the pixels are stale and need regenerating.
    fn needs_paint(&self) -> bool;

    /// Flag the pixels as stale after a model update.
    fn mark_dirty(&mut self);

    /// Regenerate the pixel buffer from the model.
    fn paint(&mut self, model: &ColourModel);

    /// Translate a pointer press or drag at a local position into
    /// channel edits. Positions outside the pick area are ignored.
    fn pointer_update(&mut self, model: &mut ColourModel, position: Point);

    /// The most recently painted pixels.
    fn canvas(&self) -> &Canvas;
}
