//! Markdown rendering for the Cortex renderer.
//!
//! A pragmatic line scanner rather than a CommonMark parser: each line is
//! classified and decorated according to the quality tier, and fenced code
//! is framed and highlighted through `cortex-render-syntax`.
//!
//! # Example
//!
//! ```
//! use cortex_render_markdown::{MarkdownOptions, render_markdown};
//! use cortex_render_terminal::QualityTier;
//! use cortex_render_theme::Theme;
//!
//! let options = MarkdownOptions::new(QualityTier::Minimal, &Theme::default());
//! assert_eq!(render_markdown("**hi**", &options), "hi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod code_block;
pub mod inline;
pub mod options;
pub mod renderer;
pub mod theme;

pub use code_block::render_code_block;
pub use inline::{InlineSpan, SpanKind, parse_inline, render_inline};
pub use options::MarkdownOptions;
pub use renderer::{MarkdownRenderer, render_markdown};
pub use theme::MarkdownTheme;
