//! Input events routed to widgets.

use cortex_render_core::geometry::Size;
use std::fmt;

/// Key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter or Return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Tab (focus forward).
    Tab,
    /// Shift+Tab (focus backward).
    BackTab,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Delete.
    Delete,
    /// Function key `F1`..`F24`.
    F(u8),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(' ') => f.write_str("Space"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Enter => f.write_str("Enter"),
            Self::Esc => f.write_str("Esc"),
            Self::Backspace => f.write_str("Backspace"),
            Self::Tab => f.write_str("Tab"),
            Self::BackTab => f.write_str("BackTab"),
            Self::Up => f.write_str("Up"),
            Self::Down => f.write_str("Down"),
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
            Self::Home => f.write_str("Home"),
            Self::End => f.write_str("End"),
            Self::PageUp => f.write_str("PageUp"),
            Self::PageDown => f.write_str("PageDown"),
            Self::Delete => f.write_str("Delete"),
            Self::F(n) => write!(f, "F{n}"),
        }
    }
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift.
    pub shift: bool,
    /// Control.
    pub ctrl: bool,
    /// Alt / Option.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
    /// Control only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Returns `true` if no modifier is held.
    pub const fn is_empty(self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub code: KeyCode,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a key event.
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key event with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Returns `true` for Tab without modifiers.
    pub const fn is_focus_next(&self) -> bool {
        matches!(self.code, KeyCode::Tab) && !self.modifiers.shift
    }

    /// Returns `true` for BackTab or Shift+Tab.
    pub const fn is_focus_prev(&self) -> bool {
        matches!(self.code, KeyCode::BackTab)
            || (matches!(self.code, KeyCode::Tab) && self.modifiers.shift)
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    Left,
    /// Right button.
    Right,
    /// Middle button.
    Middle,
}

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    /// Button pressed.
    Down(MouseButton),
    /// Button released.
    Up(MouseButton),
    /// Moved without a button held.
    Moved,
    /// Wheel up.
    ScrollUp,
    /// Wheel down.
    ScrollDown,
}

/// A mouse event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// What happened.
    pub kind: MouseKind,
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

/// Any input a widget may receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press.
    Key(KeyEvent),
    /// A mouse action.
    Mouse(MouseEvent),
    /// The output area changed size.
    Resize(Size),
    /// Bracketed paste.
    Paste(String),
}

impl InputEvent {
    /// Shorthand for an unmodified key press.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::plain(code))
    }
}

/// Whether a widget consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// The widget handled the event; dispatch stops.
    Consumed,
    /// The widget did not handle the event; dispatch continues.
    #[default]
    Ignored,
}

impl EventResult {
    /// Returns `true` for [`EventResult::Consumed`].
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_focus_keys() {
        assert!(KeyEvent::plain(KeyCode::Tab).is_focus_next());
        assert!(!KeyEvent::plain(KeyCode::Tab).is_focus_prev());
        assert!(KeyEvent::plain(KeyCode::BackTab).is_focus_prev());
        assert!(KeyEvent::new(KeyCode::Tab, Modifiers::SHIFT).is_focus_prev());
        assert!(!KeyEvent::plain(KeyCode::Enter).is_focus_next());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(KeyCode::Char(' ').to_string(), "Space");
        assert_eq!(KeyCode::F(5).to_string(), "F5");
        assert_eq!(KeyCode::BackTab.to_string(), "BackTab");
    }

    #[test]
    fn test_event_result() {
        assert!(EventResult::Consumed.is_consumed());
        assert_eq!(EventResult::default(), EventResult::Ignored);
    }
}
