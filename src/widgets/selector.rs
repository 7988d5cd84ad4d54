//! The colour selector component.
//!
//! Composes the saturation/brightness field, the hue ramp, the seven entry
//! fields, the preview swatch, and the OK/Cancel buttons in a fixed dialog
//! layout. The host feeds it [`Event`]s, blits the rendered canvas, draws
//! the field texts, and receives a message when the user confirms or
//! cancels.

use super::{Button, ChannelField, ColourField, HueRamp, PickerSurface, Swatch};
use crate::callback::{Callback, Callback0};
use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::config::SelectorConfig;
use crate::event::{Event, Key, MouseButton};
use crate::layout::{Point, Rectangle, Size};
use crate::model::{Channel, ColourModel, EditSource};
use crate::theme::Theme;

const PADDING: f32 = 12.0;
const GAP: f32 = 10.0;
const LABEL_WIDTH: f32 = 20.0;
const FIELD_WIDTH: f32 = 45.0;
const HEX_FIELD_WIDTH: f32 = 60.0;
const FIELD_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 24.0;
const SWATCH_WIDTH: f32 = 60.0;
const SWATCH_HEIGHT: f32 = 40.0;
const BUTTON_WIDTH: f32 = 80.0;
const BUTTON_HEIGHT: f32 = 24.0;
const DIALOG_WIDTH: f32 = 430.0;
const DIALOG_HEIGHT: f32 = 322.0;

/// Index of the hex entry in the field list.
const HEX_FIELD: usize = 6;

/// Which surface a pointer drag started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    None,
    Field,
    Ramp,
}

/// The colour selector.
///
/// `M` is the host's message type, produced by the confirm and cancel
/// callbacks.
pub struct ColourSelector<M> {
    model: ColourModel,
    config: SelectorConfig,
    theme: Theme,
    visible: bool,
    colour_field: ColourField,
    hue_ramp: HueRamp,
    swatch: Swatch,
    fields: Vec<ChannelField>,
    ok_button: Button,
    cancel_button: Button,
    drag: DragTarget,
    on_ok: Callback<Colour, M>,
    on_cancel: Callback0<M>,
}

impl<M> ColourSelector<M> {
    /// Create a hidden selector holding the configured opening colour.
    pub fn new(config: SelectorConfig) -> Self {
        let theme = Theme::from_kind(config.theme);
        let mut model = ColourModel::new();
        model.set_from_rgb(config.opening_colour());

        let fields = vec![
            ChannelField::new(EditSource::Channel(Channel::Hue), "H:", "\u{00b0}"),
            ChannelField::new(EditSource::Channel(Channel::Saturation), "S:", "%"),
            ChannelField::new(EditSource::Channel(Channel::Brightness), "B:", "%"),
            ChannelField::new(EditSource::Channel(Channel::Red), "R:", ""),
            ChannelField::new(EditSource::Channel(Channel::Green), "G:", ""),
            ChannelField::new(EditSource::Channel(Channel::Blue), "B:", ""),
            ChannelField::new(EditSource::Hex, "#", ""),
        ];

        Self {
            model,
            config,
            theme,
            visible: false,
            colour_field: ColourField::new(),
            hue_ramp: HueRamp::new(),
            swatch: Swatch::new(),
            fields,
            ok_button: Button::new("OK"),
            cancel_button: Button::new("Cancel"),
            drag: DragTarget::None,
            on_ok: Callback::none(),
            on_cancel: Callback::none(),
        }
    }

    /// Set the confirm handler, called with the chosen colour.
    pub fn on_ok<F>(mut self, handler: F) -> Self
    where
        F: Fn(Colour) -> M + 'static,
    {
        self.on_ok = Callback::new(handler);
        self
    }

    /// Set the cancel handler.
    pub fn on_cancel<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.on_cancel = Callback::new(move |()| handler());
        self
    }

    /// Show the selector, optionally seeded with a colour.
    pub fn show(&mut self, initial: Option<Colour>) {
        if let Some(colour) = initial {
            self.model.set_from_rgb(colour);
        }
        self.colour_field.rearm_marker();
        self.hue_ramp.mark_dirty();
        self.visible = true;
        log::debug!("ColourSelector: shown with #{}", self.model.colour().hex());
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.drag = DragTarget::None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The current colour, canonical RGB.
    pub fn colour(&self) -> Colour {
        self.model.colour()
    }

    pub fn model(&self) -> &ColourModel {
        &self.model
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The entry fields, in layout order (H, S, B, R, G, B, hex).
    /// The host reads these to draw labels and texts.
    pub fn fields(&self) -> &[ChannelField] {
        &self.fields
    }

    /// Fixed dialog size.
    pub fn size(&self) -> Size {
        Size::new(DIALOG_WIDTH, DIALOG_HEIGHT)
    }

    pub fn colour_field_bounds(&self) -> Rectangle {
        let size = self.colour_field.size();
        Rectangle::new(PADDING, PADDING, size.width, size.height)
    }

    pub fn hue_ramp_bounds(&self) -> Rectangle {
        let size = self.hue_ramp.size();
        Rectangle::new(PADDING + 256.0 + GAP, PADDING, size.width, size.height)
    }

    fn column_x(&self) -> f32 {
        PADDING + 256.0 + GAP + 20.0 + GAP
    }

    pub fn swatch_bounds(&self) -> Rectangle {
        Rectangle::new(self.column_x(), PADDING, SWATCH_WIDTH, SWATCH_HEIGHT)
    }

    /// Bounds of the entry field at `index`, matching [`Self::fields`].
    pub fn field_bounds(&self, index: usize) -> Rectangle {
        let x = self.column_x() + LABEL_WIDTH;
        let base = PADDING + SWATCH_HEIGHT + 15.0;
        // A gap between the HSB, RGB, and hex groups.
        let group_offset = match index {
            0..=2 => 0.0,
            3..=5 => GAP,
            _ => GAP * 2.0,
        };
        let y = base + index as f32 * ROW_HEIGHT + group_offset;
        let width = if index == HEX_FIELD {
            HEX_FIELD_WIDTH
        } else {
            FIELD_WIDTH
        };
        Rectangle::new(x, y, width, FIELD_HEIGHT)
    }

    pub fn ok_bounds(&self) -> Rectangle {
        Rectangle::new(
            DIALOG_WIDTH - PADDING - BUTTON_WIDTH,
            DIALOG_HEIGHT - PADDING - BUTTON_HEIGHT,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn cancel_bounds(&self) -> Rectangle {
        let ok = self.ok_bounds();
        Rectangle::new(ok.x - GAP - BUTTON_WIDTH, ok.y, BUTTON_WIDTH, BUTTON_HEIGHT)
    }

    /// Handle one host event, possibly producing a message.
    ///
    /// Deferred field corrections queued during the previous pass run
    /// before the new event is processed, so a field is never rewritten in
    /// the middle of the edit that overran its range.
    pub fn handle_event(&mut self, event: &Event) -> Option<M> {
        if !self.visible {
            return None;
        }

        let cycles_before = self.model.completed_cycles();
        self.flush_corrections();

        let mut message = None;
        if self.ok_button.on_event(event, self.ok_bounds()) {
            message = self.confirm();
        }
        if message.is_none() && self.cancel_button.on_event(event, self.cancel_bounds()) {
            message = self.dismiss();
        }
        if message.is_none() {
            message = self.route_event(event);
        }

        if self.model.completed_cycles() != cycles_before {
            self.colour_field.mark_dirty();
            self.hue_ramp.mark_dirty();
        }
        message
    }

    /// Render the whole dialog into a fresh canvas. Surfaces are only
    /// regenerated when stale.
    pub fn render(&mut self) -> Canvas {
        let mut canvas = Canvas::new(DIALOG_WIDTH as u32, DIALOG_HEIGHT as u32);
        canvas.fill(self.theme.background);

        if self.colour_field.needs_paint() {
            self.colour_field.paint(&self.model);
        }
        if self.hue_ramp.needs_paint() {
            self.hue_ramp.paint(&self.model);
        }

        for (surface, bounds) in [
            (
                &self.colour_field as &dyn PickerSurface,
                self.colour_field_bounds(),
            ),
            (&self.hue_ramp as &dyn PickerSurface, self.hue_ramp_bounds()),
        ] {
            canvas.blit(bounds.x as i32, bounds.y as i32, surface.canvas());
            canvas.stroke_rect(
                Rectangle::new(
                    bounds.x - 1.0,
                    bounds.y - 1.0,
                    bounds.width + 2.0,
                    bounds.height + 2.0,
                ),
                self.theme.border,
            );
        }

        self.swatch
            .draw(&mut canvas, self.swatch_bounds(), self.model.colour(), &self.theme);

        for (index, field) in self.fields.iter().enumerate() {
            field.draw(&mut canvas, self.field_bounds(index), &self.theme);
        }

        self.ok_button.draw(&mut canvas, self.ok_bounds(), &self.theme);
        self.cancel_button
            .draw(&mut canvas, self.cancel_bounds(), &self.theme);

        canvas
    }

    fn route_event(&mut self, event: &Event) -> Option<M> {
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                let position = *position;
                if self.colour_field_bounds().contains(position) {
                    self.blur_fields();
                    self.drag = DragTarget::Field;
                    let local = self.colour_field_bounds().to_local(position);
                    self.colour_field.pointer_update(&mut self.model, local);
                } else if self.hue_ramp_bounds().contains(position) {
                    self.blur_fields();
                    self.drag = DragTarget::Ramp;
                    let local = self.hue_ramp_bounds().to_local(position);
                    self.hue_ramp.pointer_update(&mut self.model, local);
                } else {
                    self.focus_field_at(position);
                }
                None
            }
            Event::MouseMove { position } => {
                match self.drag {
                    DragTarget::Field => {
                        let local = self.colour_field_bounds().to_local(*position);
                        self.colour_field.pointer_update(&mut self.model, local);
                    }
                    DragTarget::Ramp => {
                        let local = self.hue_ramp_bounds().to_local(*position);
                        self.hue_ramp.pointer_update(&mut self.model, local);
                    }
                    DragTarget::None => {}
                }
                None
            }
            Event::MouseRelease {
                button: MouseButton::Left,
                ..
            } => {
                self.drag = DragTarget::None;
                None
            }
            Event::KeyPress { key, .. } => match key {
                Key::Escape => self.dismiss(),
                Key::Enter => self.confirm(),
                key => {
                    if let Some(field) = self.fields.iter_mut().find(|f| f.is_focused()) {
                        field.handle_key(&mut self.model, *key);
                    }
                    None
                }
            },
            Event::TextInput { text } => {
                if let Some(field) = self.fields.iter_mut().find(|f| f.is_focused()) {
                    field.handle_text_input(&mut self.model, text);
                }
                None
            }
            Event::FocusLost => {
                self.blur_fields();
                self.drag = DragTarget::None;
                None
            }
            _ => None,
        }
    }

    /// Apply display corrections queued by over-range edits. Runs at the
    /// top of the event pass after the one that queued them.
    fn flush_corrections(&mut self) {
        for correction in self.model.take_corrections() {
            log::debug!(
                "ColourSelector: correcting {} field to {}",
                correction.channel.label(),
                correction.text
            );
            self.model
                .set_field_text(EditSource::Channel(correction.channel), correction.text);
        }
    }

    fn focus_field_at(&mut self, position: Point) {
        for index in 0..self.fields.len() {
            let hit = self.field_bounds(index).contains(position);
            let source = self.fields[index].source();
            if hit {
                let text_len = self.model.text(source).len();
                self.fields[index].focus(text_len);
                log::debug!("ColourSelector: focused {} field", source.label());
            } else {
                self.fields[index].blur();
            }
        }
    }

    fn blur_fields(&mut self) {
        for field in &mut self.fields {
            field.blur();
        }
    }

    fn confirm(&mut self) -> Option<M> {
        let colour = self.model.colour();
        if self.config.remember_last {
            self.config.last_colour = Some(colour);
        }
        self.hide();
        log::debug!("ColourSelector: confirmed #{}", colour.hex());
        self.on_ok.call(colour)
    }

    fn dismiss(&mut self) -> Option<M> {
        self.hide();
        log::debug!("ColourSelector: cancelled");
        self.on_cancel.emit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Message {
        Picked(Colour),
        Cancelled,
    }

    fn selector() -> ColourSelector<Message> {
        ColourSelector::new(SelectorConfig::default())
            .on_ok(Message::Picked)
            .on_cancel(|| Message::Cancelled)
    }

    fn press(position: Point) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position,
            modifiers: Modifiers::default(),
        }
    }

    fn release(position: Point) -> Event {
        Event::MouseRelease {
            button: MouseButton::Left,
            position,
            modifiers: Modifiers::default(),
        }
    }

    fn move_to(position: Point) -> Event {
        Event::MouseMove { position }
    }

    fn key(key: Key) -> Event {
        Event::KeyPress {
            key,
            modifiers: Modifiers::default(),
        }
    }

    fn text(text: &str) -> Event {
        Event::TextInput {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_hidden_selector_ignores_events() {
        let mut selector = selector();
        let centre = selector.ok_bounds().center();
        assert_eq!(selector.handle_event(&press(centre)), None);
        assert_eq!(selector.handle_event(&release(centre)), None);
    }

    #[test]
    fn test_ok_click_reports_colour_and_hides() {
        let mut selector = selector();
        selector.show(Some(Colour::new(255, 0, 128)));
        let centre = selector.ok_bounds().center();
        assert_eq!(selector.handle_event(&press(centre)), None);
        assert_eq!(
            selector.handle_event(&release(centre)),
            Some(Message::Picked(Colour::new(255, 0, 128)))
        );
        assert!(!selector.is_visible());
    }

    #[test]
    fn test_escape_cancels() {
        let mut selector = selector();
        selector.show(None);
        assert_eq!(
            selector.handle_event(&key(Key::Escape)),
            Some(Message::Cancelled)
        );
        assert!(!selector.is_visible());
    }

    #[test]
    fn test_enter_confirms() {
        let mut selector = selector();
        selector.show(Some(Colour::new(1, 2, 3)));
        assert_eq!(
            selector.handle_event(&key(Key::Enter)),
            Some(Message::Picked(Colour::new(1, 2, 3)))
        );
    }

    #[test]
    fn test_show_seeds_model() {
        let mut selector = selector();
        selector.show(Some(Colour::new(255, 0, 0)));
        assert_eq!(selector.model().text(EditSource::Hex), "FF0000");
        assert_eq!(
            selector.model().text(EditSource::Channel(Channel::Hue)),
            "0"
        );
    }

    #[test]
    fn test_ramp_press_and_drag_edit_hue() {
        let mut selector = selector();
        selector.show(None);
        let ramp = selector.hue_ramp_bounds();

        selector.handle_event(&press(Point::new(ramp.x + 5.0, ramp.y)));
        assert_eq!(selector.model().hue(), 359);

        selector.handle_event(&move_to(Point::new(ramp.x + 5.0, ramp.y + 255.0)));
        assert_eq!(selector.model().hue(), 0);

        // After release the drag is over, moves no longer edit.
        selector.handle_event(&release(Point::new(ramp.x + 5.0, ramp.y + 255.0)));
        selector.handle_event(&move_to(Point::new(ramp.x + 5.0, ramp.y)));
        assert_eq!(selector.model().hue(), 0);
    }

    #[test]
    fn test_colour_field_press_edits_saturation_and_brightness() {
        let mut selector = selector();
        selector.show(None);
        let field = selector.colour_field_bounds();

        selector.handle_event(&press(Point::new(field.x + 127.0, field.y + 127.0)));
        assert_eq!(selector.model().saturation(), 49);
        assert_eq!(selector.model().brightness(), 51);
    }

    #[test]
    fn test_over_range_typing_is_clamped_then_corrected() {
        let mut selector = selector();
        selector.show(None);

        // Focus the saturation field (index 1) and replace its text.
        let centre = selector.field_bounds(1).center();
        selector.handle_event(&press(centre));
        selector.handle_event(&key(Key::Backspace));
        selector.handle_event(&text("150"));

        let saturation = EditSource::Channel(Channel::Saturation);
        assert_eq!(selector.model().saturation(), 99);
        // The typed text survives until the next event pass.
        assert_eq!(selector.model().text(saturation), "150");

        selector.handle_event(&move_to(Point::new(0.0, 0.0)));
        assert_eq!(selector.model().text(saturation), "99");
        assert_eq!(selector.model().saturation(), 99);
    }

    #[test]
    fn test_hex_typing_is_filtered() {
        let mut selector = selector();
        selector.show(None);

        let centre = selector.field_bounds(6).center();
        selector.handle_event(&press(centre));
        for _ in 0..6 {
            selector.handle_event(&key(Key::Backspace));
        }
        selector.handle_event(&text("1g!e"));

        assert_eq!(selector.model().text(EditSource::Hex), "1e");
        // "1e" pads to "1e0000".
        assert_eq!(selector.colour(), Colour::new(30, 0, 0));
    }

    #[test]
    fn test_focus_moves_between_fields() {
        let mut selector = selector();
        selector.show(None);

        selector.handle_event(&press(selector.field_bounds(0).center()));
        assert!(selector.fields()[0].is_focused());

        selector.handle_event(&press(selector.field_bounds(3).center()));
        assert!(!selector.fields()[0].is_focused());
        assert!(selector.fields()[3].is_focused());

        // Clicking a picker surface drops field focus.
        let field = selector.colour_field_bounds();
        selector.handle_event(&press(Point::new(field.x + 10.0, field.y + 10.0)));
        assert!(!selector.fields()[3].is_focused());
    }

    #[test]
    fn test_confirm_remembers_last_colour_when_configured() {
        let config = SelectorConfig {
            remember_last: true,
            ..SelectorConfig::default()
        };
        let mut selector = ColourSelector::new(config).on_ok(Message::Picked);
        selector.show(Some(Colour::new(9, 8, 7)));
        selector.handle_event(&key(Key::Enter));
        assert_eq!(selector.config().last_colour, Some(Colour::new(9, 8, 7)));
    }
}
