//! Entry field for one synchronized channel (or the hex string).
//!
//! The field's text lives in the model, where it doubles as one of the
//! colour's redundant representations; the widget holds only cursor and
//! focus state and filters what may be typed. Numeric fields accept ASCII
//! digits; the hex field additionally accepts `A-F`/`a-f`. Anything else
//! is dropped per character, never rejecting the rest of the edit.

use crate::canvas::Canvas;
use crate::event::Key;
use crate::layout::Rectangle;
use crate::model::{ColourModel, EditSource};
use crate::state::FieldState;
use crate::theme::Theme;

/// A labeled entry field bound to one edit source.
pub struct ChannelField {
    source: EditSource,
    label: &'static str,
    suffix: &'static str,
    state: FieldState,
}

impl ChannelField {
    pub fn new(source: EditSource, label: &'static str, suffix: &'static str) -> Self {
        Self {
            source,
            label,
            suffix,
            state: FieldState::new(),
        }
    }

    pub fn source(&self) -> EditSource {
        self.source
    }

    /// Label drawn by the host in front of the field.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Unit suffix drawn by the host after the field, if any.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused
    }

    pub fn focus(&mut self, text_len: usize) {
        self.state.focus(text_len);
    }

    pub fn blur(&mut self) {
        self.state.blur();
    }

    fn accepts(&self, c: char) -> bool {
        c.is_ascii_digit()
            || (self.source == EditSource::Hex && matches!(c, 'a'..='f' | 'A'..='F'))
    }

    /// Insert typed text at the cursor, dropping unacceptable characters.
    /// Returns true if the field text changed.
    pub fn handle_text_input(&mut self, model: &mut ColourModel, input: &str) -> bool {
        let mut text = model.text(self.source).to_string();
        self.state.clamp_cursor(text.len());

        let mut changed = false;
        for c in input.chars() {
            if self.accepts(c) {
                text.insert(self.state.cursor, c);
                self.state.cursor += 1;
                changed = true;
            } else {
                log::trace!("ChannelField: dropped {c:?} from {} field", self.source.label());
            }
        }

        if changed {
            model.set_field_text(self.source, text);
        }
        changed
    }

    /// Apply an editing key. Returns true if the field text changed.
    pub fn handle_key(&mut self, model: &mut ColourModel, key: Key) -> bool {
        let mut text = model.text(self.source).to_string();
        self.state.clamp_cursor(text.len());

        match key {
            Key::Backspace => {
                if self.state.cursor > 0 {
                    self.state.cursor -= 1;
                    text.remove(self.state.cursor);
                    model.set_field_text(self.source, text);
                    true
                } else {
                    false
                }
            }
            Key::Delete => {
                if self.state.cursor < text.len() {
                    text.remove(self.state.cursor);
                    model.set_field_text(self.source, text);
                    true
                } else {
                    false
                }
            }
            Key::Left => {
                if self.state.cursor > 0 {
                    self.state.cursor -= 1;
                }
                false
            }
            Key::Right => {
                if self.state.cursor < text.len() {
                    self.state.cursor += 1;
                }
                false
            }
            Key::Home => {
                self.state.cursor = 0;
                false
            }
            Key::End => {
                self.state.cursor = text.len();
                false
            }
            _ => false,
        }
    }

    /// Draw the field chrome. The text itself is host-rendered.
    pub fn draw(&self, canvas: &mut Canvas, bounds: Rectangle, theme: &Theme) {
        let background = if self.state.is_focused {
            theme.input_bg_focused
        } else {
            theme.input_bg
        };
        canvas.fill_rect(bounds, background);
        let border = if self.state.is_focused {
            theme.border_focused
        } else {
            theme.border
        };
        canvas.stroke_rect(bounds, border);
    }
}
