//! Core types for the `Cortex` terminal renderer.
//!
//! This crate provides the value types every other renderer crate builds on:
//!
//! - [`color`]: tagged RGB/ANSI colors, HSL, WCAG luminance and contrast
//! - [`style`]: foreground/background/attribute styles and their SGR encoding
//! - [`geometry`]: integer 2D primitives (Point, Size, Rect)
//! - [`error`]: error types shared across the workspace
//!
//! # Examples
//!
//! ```
//! use cortex_render_core::color::{Color, ColorDepth};
//! use cortex_render_core::style::Style;
//!
//! let accent = Color::from_hex("#5F87FF").unwrap();
//! assert_eq!(accent.to_ansi256(), 69);
//!
//! let style = Style::new().fg(accent).bold();
//! assert_eq!(style.to_sgr(ColorDepth::Ansi256), "\x1b[1;38;5;69m");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod style;

pub use color::{Color, ColorDepth, Hsl, NamedColor, contrast_ratio};
pub use error::{ColorParseError, Error, Result};
pub use geometry::{Point, Rect, Size};
pub use style::{Style, TextAttributes};
