//! Push button for the confirm/cancel row.
//!
//! Tracks hover and press state; the label glyphs are host-rendered like
//! all text in the selector.

use crate::canvas::Canvas;
use crate::event::{Event, MouseButton};
use crate::layout::Rectangle;
use crate::theme::Theme;

/// A push button. `on_event` returns true when the button is clicked
/// (pressed and released inside its bounds).
pub struct Button {
    label: &'static str,
    hovered: bool,
    pressed: bool,
}

impl Button {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            hovered: false,
            pressed: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn on_event(&mut self, event: &Event, bounds: Rectangle) -> bool {
        match event {
            Event::MouseMove { position } => {
                self.hovered = bounds.contains(*position);
                false
            }
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                if bounds.contains(*position) {
                    self.pressed = true;
                }
                false
            }
            Event::MouseRelease {
                button: MouseButton::Left,
                position,
                ..
            } => {
                let clicked = self.pressed && bounds.contains(*position);
                self.pressed = false;
                if clicked {
                    log::debug!("Button: {} clicked", self.label);
                }
                clicked
            }
            Event::FocusLost => {
                self.pressed = false;
                self.hovered = false;
                false
            }
            _ => false,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, bounds: Rectangle, theme: &Theme) {
        let background = if self.pressed {
            theme.button_active
        } else if self.hovered {
            theme.button_hover
        } else {
            theme.button_bg
        };
        canvas.fill_rect(bounds, background);
        canvas.stroke_rect(bounds, theme.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;
    use crate::layout::Point;

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: Point::new(x, y),
            modifiers: Modifiers::default(),
        }
    }

    fn release(x: f32, y: f32) -> Event {
        Event::MouseRelease {
            button: MouseButton::Left,
            position: Point::new(x, y),
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_click_inside_fires() {
        let bounds = Rectangle::new(10.0, 10.0, 80.0, 24.0);
        let mut button = Button::new("ok");
        assert!(!button.on_event(&press(20.0, 20.0), bounds));
        assert!(button.on_event(&release(20.0, 20.0), bounds));
    }

    #[test]
    fn test_release_outside_does_not_fire() {
        let bounds = Rectangle::new(10.0, 10.0, 80.0, 24.0);
        let mut button = Button::new("ok");
        button.on_event(&press(20.0, 20.0), bounds);
        assert!(!button.on_event(&release(200.0, 20.0), bounds));
        // Press state is consumed either way.
        assert!(!button.on_event(&release(20.0, 20.0), bounds));
    }

    #[test]
    fn test_release_without_press_does_not_fire() {
        let bounds = Rectangle::new(10.0, 10.0, 80.0, 24.0);
        let mut button = Button::new("cancel");
        assert!(!button.on_event(&release(20.0, 20.0), bounds));
    }
}
