//! Input events delivered by the host.
//!
//! The host toolkit translates its native events into this enum and
//! feeds them to [`ColourSelector::handle_event`](crate::ColourSelector::handle_event).
//! Coordinates are in the selector's own pixel space, origin top-left.

use crate::layout::Point;

/// Events the selector and its widgets respond to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: Point,
        modifiers: Modifiers,
    },
    /// Mouse button released.
    MouseRelease {
        button: MouseButton,
        position: Point,
        modifiers: Modifiers,
    },
    /// Mouse moved.
    MouseMove { position: Point },
    /// Keyboard key pressed.
    KeyPress { key: Key, modifiers: Modifiers },
    /// Committed text input (post IME, post keymap).
    TextInput { text: String },
    /// The host window lost focus.
    FocusLost,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys (the editing subset the selector needs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Home,
    End,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
