//! The colour synchronization engine.
//!
//! A [`ColourModel`] holds one colour in three redundant representations:
//! an RGB triple, quantized HSB channels, and a six-digit hex string. Each
//! representation is backed by a display text (what an entry field shows).
//! Whenever one text changes, the model recomputes the other
//! representations and rewrites their texts, so all three agree after
//! every update.
//!
//! Rewritten texts are reported through the same notification entry point
//! as user edits, exactly as a toolkit's document listeners would fire; a
//! single `updating` flag keeps those synchronized writes from starting
//! nested update cycles.

use crate::colour::{self, Colour, ParseColourError};

/// The six numeric channels, with their display ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Brightness,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Largest value the channel's entry field may hold.
    pub fn max(self) -> u32 {
        match self {
            Channel::Hue => 359,
            Channel::Saturation | Channel::Brightness => 99,
            Channel::Red | Channel::Green | Channel::Blue => 255,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Brightness => "brightness",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    fn index(self) -> usize {
        match self {
            Channel::Hue => 0,
            Channel::Saturation => 1,
            Channel::Brightness => 2,
            Channel::Red => 3,
            Channel::Green => 4,
            Channel::Blue => 5,
        }
    }
}

/// Which field an edit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSource {
    Channel(Channel),
    Hex,
}

impl EditSource {
    pub fn label(self) -> &'static str {
        match self {
            EditSource::Channel(channel) => channel.label(),
            EditSource::Hex => "hex",
        }
    }
}

/// A deferred display fix for a field whose typed value exceeded its range.
///
/// The model clamps the stored value immediately but never rewrites the
/// field mid-edit; the selector applies queued corrections at the start of
/// the next event pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCorrection {
    pub channel: Channel,
    pub text: String,
}

/// One colour kept consistent across RGB, HSB, and hex representations.
#[derive(Debug)]
pub struct ColourModel {
    // Ranges: hue 0-359, saturation/brightness 0-99, rgb 0-255.
    hue: u32,
    saturation: u32,
    brightness: u32,
    red: u32,
    green: u32,
    blue: u32,
    /// Display texts for the six numeric fields, indexed by `Channel`.
    texts: [String; 6],
    /// Display text for the hex field. Not canonicalized while the user
    /// types; rewritten in uppercase whenever another channel changes.
    hex_text: String,
    /// True while an update cycle is rewriting the other representations.
    updating: bool,
    corrections: Vec<FieldCorrection>,
    cycles: u64,
}

impl ColourModel {
    /// Create a model holding white.
    pub fn new() -> Self {
        let mut model = Self {
            hue: 0,
            saturation: 0,
            brightness: 0,
            red: 0,
            green: 0,
            blue: 0,
            texts: Default::default(),
            hex_text: String::new(),
            updating: false,
            corrections: Vec::new(),
            cycles: 0,
        };
        model.set_from_rgb(Colour::WHITE);
        model
    }

    /// The current colour, canonical RGB.
    pub fn colour(&self) -> Colour {
        Colour::new(self.red as u8, self.green as u8, self.blue as u8)
    }

    pub fn hue(&self) -> u32 {
        self.hue
    }

    pub fn saturation(&self) -> u32 {
        self.saturation
    }

    pub fn brightness(&self) -> u32 {
        self.brightness
    }

    /// The display text of a field.
    pub fn text(&self, source: EditSource) -> &str {
        match source {
            EditSource::Channel(channel) => &self.texts[channel.index()],
            EditSource::Hex => &self.hex_text,
        }
    }

    /// Number of completed update cycles, for diagnostics.
    pub fn completed_cycles(&self) -> u64 {
        self.cycles
    }

    /// Set the colour from an RGB triple and recompute HSB and hex.
    pub fn set_from_rgb(&mut self, colour: Colour) {
        if self.updating {
            return;
        }
        self.updating = true;
        self.apply_rgb(colour.to_packed());
        self.update_hsb();
        self.update_hex();
        self.finish_cycle("rgb");
    }

    /// Set the colour from quantized HSB channels and recompute RGB and hex.
    ///
    /// Values above a channel's maximum are clamped to it.
    pub fn set_from_hsb(&mut self, hue: u32, saturation: u32, brightness: u32) {
        if self.updating {
            return;
        }
        self.updating = true;
        self.hue = hue.min(Channel::Hue.max());
        self.saturation = saturation.min(Channel::Saturation.max());
        self.brightness = brightness.min(Channel::Brightness.max());
        self.set_field_text(EditSource::Channel(Channel::Hue), self.hue.to_string());
        self.set_field_text(
            EditSource::Channel(Channel::Saturation),
            self.saturation.to_string(),
        );
        self.set_field_text(
            EditSource::Channel(Channel::Brightness),
            self.brightness.to_string(),
        );
        self.update_rgb();
        self.update_hex();
        self.finish_cycle("hsb");
    }

    /// Set the colour from a hex string and recompute RGB and HSB.
    ///
    /// The string is normalized to six characters first: right-padded with
    /// `'0'` when shorter, truncated when longer. Returns an error without
    /// touching any state if the normalized string is not valid hex; with
    /// filtered field input that path is unreachable.
    pub fn set_from_hex(&mut self, text: &str) -> Result<(), ParseColourError> {
        Colour::from_hex(&normalize_hex(text))?;
        self.set_field_text(EditSource::Hex, text);
        Ok(())
    }

    /// Replace a field's display text and run a synchronization cycle.
    ///
    /// This is the notification entry point: user edits and the model's own
    /// synchronized rewrites both land here, and the `updating` flag makes
    /// the latter no-ops.
    pub fn set_field_text(&mut self, source: EditSource, text: impl Into<String>) {
        match source {
            EditSource::Channel(channel) => self.texts[channel.index()] = text.into(),
            EditSource::Hex => self.hex_text = text.into(),
        }
        self.field_text_changed(source);
    }

    /// Drain the deferred display corrections queued by out-of-range edits.
    pub fn take_corrections(&mut self) -> Vec<FieldCorrection> {
        std::mem::take(&mut self.corrections)
    }

    fn field_text_changed(&mut self, source: EditSource) {
        if self.updating {
            return; // a synchronized rewrite from the cycle in progress
        }
        self.updating = true;

        match source {
            EditSource::Channel(channel) => {
                let value = self.bounded(channel);
                self.set_value(channel, value);
                match channel {
                    Channel::Hue | Channel::Saturation | Channel::Brightness => {
                        self.update_rgb();
                        self.update_hex();
                    }
                    Channel::Red | Channel::Green | Channel::Blue => {
                        self.update_hsb();
                        self.update_hex();
                    }
                }
            }
            EditSource::Hex => {
                let normalized = normalize_hex(&self.hex_text);
                match Colour::from_hex(&normalized) {
                    Ok(parsed) => {
                        self.apply_rgb(parsed.to_packed());
                        self.update_hsb();
                    }
                    Err(err) => {
                        log::debug!("ignoring unparsable hex text {:?}: {err}", self.hex_text);
                    }
                }
            }
        }

        self.finish_cycle(source.label());
    }

    /// Read a channel's field text under the bounded-field policy: empty
    /// means zero, an over-range value is clamped now and a display
    /// correction queued, and unparsable text keeps the previous value.
    fn bounded(&mut self, channel: Channel) -> u32 {
        let parsed = {
            let text = &self.texts[channel.index()];
            if text.is_empty() {
                return 0;
            }
            text.parse::<u32>()
        };
        match parsed {
            Ok(value) if value > channel.max() => {
                log::debug!(
                    "clamping {} field from {value} to {}",
                    channel.label(),
                    channel.max()
                );
                self.corrections.push(FieldCorrection {
                    channel,
                    text: channel.max().to_string(),
                });
                channel.max()
            }
            Ok(value) => value,
            // Field input is digit-filtered, so this only catches
            // overflow-length digit strings.
            Err(_) => self.value(channel),
        }
    }

    /// Recompute RGB from the current HSB channels.
    fn update_rgb(&mut self) {
        let (r, g, b) = colour::hsb_to_rgb(
            self.hue as f32 / 359.0,
            self.saturation as f32 / 99.0,
            self.brightness as f32 / 99.0,
        );
        self.apply_rgb(Colour::new(r, g, b).to_packed());
    }

    /// Unpack an RGB value into the channels and their field texts.
    fn apply_rgb(&mut self, rgb: u32) {
        self.red = (rgb >> 16) & 0xff;
        self.green = (rgb >> 8) & 0xff;
        self.blue = rgb & 0xff;

        self.set_field_text(EditSource::Channel(Channel::Red), self.red.to_string());
        self.set_field_text(EditSource::Channel(Channel::Green), self.green.to_string());
        self.set_field_text(EditSource::Channel(Channel::Blue), self.blue.to_string());
    }

    /// Recompute the quantized HSB channels from the current RGB values.
    fn update_hsb(&mut self) {
        let (h, s, b) =
            colour::rgb_to_hsb(self.red as u8, self.green as u8, self.blue as u8);

        self.hue = (h * 359.0) as u32;
        self.saturation = (s * 99.0) as u32;
        self.brightness = (b * 99.0) as u32;

        self.set_field_text(EditSource::Channel(Channel::Hue), self.hue.to_string());
        self.set_field_text(
            EditSource::Channel(Channel::Saturation),
            self.saturation.to_string(),
        );
        self.set_field_text(
            EditSource::Channel(Channel::Brightness),
            self.brightness.to_string(),
        );
    }

    fn update_hex(&mut self) {
        self.set_field_text(EditSource::Hex, self.colour().hex());
    }

    fn finish_cycle(&mut self, source: &str) {
        self.updating = false;
        self.cycles += 1;
        log::debug!(
            "ColourModel: {source} edit -> rgb({},{},{}) hsb({},{},{}) #{}",
            self.red,
            self.green,
            self.blue,
            self.hue,
            self.saturation,
            self.brightness,
            self.colour().hex(),
        );
    }

    fn value(&self, channel: Channel) -> u32 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Brightness => self.brightness,
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    fn set_value(&mut self, channel: Channel, value: u32) {
        match channel {
            Channel::Hue => self.hue = value,
            Channel::Saturation => self.saturation = value,
            Channel::Brightness => self.brightness = value,
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }
}

impl Default for ColourModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a hex field text to exactly six characters: truncate longer
/// input, right-pad shorter input with `'0'`.
pub fn normalize_hex(text: &str) -> String {
    let mut normalized: String = text.chars().take(6).collect();
    while normalized.len() < 6 {
        normalized.push('0');
    }
    normalized
}
