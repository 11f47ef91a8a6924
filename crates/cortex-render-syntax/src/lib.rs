//! Syntax highlighting for the Cortex renderer.
//!
//! Each supported language has a small hand-written lexer that approximates
//! its token classes in a single forward pass. The token stream borrows the
//! source buffer and covers it exactly, so highlighting never drops text.
//!
//! # Example
//!
//! ```
//! use cortex_render_syntax::{Language, TokenKind, tokenize};
//!
//! let tokens = tokenize("fn main() {}", "rs");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(Language::from_path("lib.py"), Some(Language::Python));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod highlight;
pub mod languages;
mod lexers;
mod scanner;
pub mod token;

pub use highlight::{HighlightOptions, SyntaxPalette, highlight, paint};
pub use languages::{Language, tokenize};
pub use token::{Token, TokenKind};
