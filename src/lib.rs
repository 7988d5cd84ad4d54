//! tinct - a colour selector component for drawing applications
//!
//! One colour, three synchronized representations: an RGB triple,
//! quantized HSB channels, and a six-digit hex string. The selector wraps
//! the synchronization model with two custom-painted picker surfaces
//! (a 256x256 saturation/brightness field and a 20x256 hue ramp), seven
//! entry fields, a preview swatch, and confirm/cancel actions.
//!
//! The crate is windowing-toolkit-agnostic. The host owns the window, the
//! text stack, and event delivery; it feeds [`Event`]s to
//! [`ColourSelector::handle_event`], blits the rendered pixel buffers, and
//! draws the field texts exposed by the model.

mod callback;
mod canvas;
mod colour;
mod config;
mod event;
mod layout;
mod model;
mod state;
mod theme;
mod widgets;

pub use callback::{Callback, Callback0};
pub use canvas::Canvas;
pub use colour::{hsb_to_rgb, rgb_to_hsb, Colour, ParseColourError};
pub use config::{ConfigError, SelectorConfig, CONFIG_VERSION};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::{Point, Rectangle, Size};
pub use model::{Channel, ColourModel, EditSource, FieldCorrection};
pub use state::FieldState;
pub use theme::{Theme, ThemeKind};
pub use widgets::{
    Button, ChannelField, ColourField, ColourSelector, HueRamp, PickerSurface, Swatch,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::{Callback, Callback0};
    pub use crate::canvas::Canvas;
    pub use crate::colour::Colour;
    pub use crate::config::SelectorConfig;
    pub use crate::event::{Event, Key, Modifiers, MouseButton};
    pub use crate::layout::{Point, Rectangle, Size};
    pub use crate::model::{Channel, ColourModel, EditSource};
    pub use crate::theme::{Theme, ThemeKind};
    pub use crate::widgets::{ColourSelector, PickerSurface};
}
