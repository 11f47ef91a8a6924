//! Adaptive terminal rendering for Cortex.
//!
//! Detects what the attached terminal can do, picks a [`QualityTier`] and
//! renders widgets, markdown and highlighted code at that tier. This crate
//! re-exports the workspace crates and adds file-based configuration.
//!
//! # Example
//!
//! ```
//! use cortex_render::{MarkdownOptions, QualityTier, Theme, render_markdown};
//!
//! let options = MarkdownOptions::new(QualityTier::Minimal, &Theme::default());
//! assert_eq!(render_markdown("## Notes", &options), "## Notes");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;

pub use config::{ConfigError, RenderConfig};
pub use cortex_render_core::{
    Color, ColorDepth, ColorParseError, Error, Point, Rect, Result, Size, Style, TextAttributes,
    contrast_ratio,
};
pub use cortex_render_engine::{
    Compose, ContentSettings, FramePacer, RenderCache, RenderScheduler, Renderer,
};
pub use cortex_render_markdown::{MarkdownOptions, MarkdownRenderer, render_markdown};
pub use cortex_render_syntax::{HighlightOptions, Language, Token, TokenKind, highlight, tokenize};
pub use cortex_render_terminal::{
    AnsiBackend, Capabilities, CrosstermBackend, EnvReader, GraphicsProtocol, MapEnv,
    MemorySurface, ProcessEnv, QualityTier, Surface, TerminalBackend, TtySurface,
};
pub use cortex_render_theme::{Theme, ThemeParseError, WcagLevel, preset, preset_names};
pub use cortex_render_widgets::{
    BorderStyle, BoxStyle, Canvas, Container, DrawContext, EventResult, InputEvent, KeyCode,
    KeyEvent, Label, Orientation, Panel, Widget, WidgetId, WidgetRef, shared,
};

/// Detects the capabilities of the terminal this process is attached to.
pub fn detect_capabilities() -> Capabilities {
    Capabilities::detect()
}
