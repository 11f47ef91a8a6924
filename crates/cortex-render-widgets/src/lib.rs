//! Widgets and drawing primitives for the Cortex renderer.
//!
//! - [`Widget`]: the trait every renderable, interactive unit implements
//! - [`Canvas`]: clipped text, box, line and fill primitives over a surface
//! - [`Container`]: equal-share linear layout over weakly held children
//! - [`Label`] and [`Panel`]: small concrete widgets
//!
//! # Example
//!
//! ```
//! use cortex_render_core::Rect;
//! use cortex_render_terminal::{MemorySurface, QualityTier, Surface};
//! use cortex_render_theme::Theme;
//! use cortex_render_widgets::{Canvas, Label, Widget};
//!
//! let theme = Theme::default();
//! let mut surface = MemorySurface::new(8, 1);
//! let mut label = Label::new("hello");
//! label.layout(Rect::new(0, 0, 8, 1));
//! label.render(&mut Canvas::new(&mut surface, &theme, QualityTier::Rich));
//! assert_eq!(surface.snapshot(), "hello   ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod border;
pub mod canvas;
pub mod container;
pub mod event;
pub mod label;
pub mod panel;
pub mod widget;

pub use border::{BorderChars, BorderStyle};
pub use canvas::{BLOCK, BoxStyle, Canvas, DrawContext, LinePoints, line_points};
pub use container::{Container, Orientation};
pub use event::{
    EventResult, InputEvent, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseKind,
};
pub use label::Label;
pub use panel::Panel;
pub use widget::{Constraints, Widget, WidgetBase, WidgetExt, WidgetId, WidgetRef, shared};
