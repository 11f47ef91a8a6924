//! Color schemes for the Cortex renderer.
//!
//! A [`Theme`] names every color the renderer draws with: the terminal
//! background and foreground, the 16 ANSI palette entries, semantic status
//! colors and a handful of UI accents. Themes are plain values; switching
//! themes replaces the whole record.
//!
//! - [`scheme`]: the [`Theme`] record and WCAG checks
//! - [`presets`]: built-in themes looked up by name
//! - [`description`]: TOML persistence
//!
//! ```
//! use cortex_render_theme::{preset, WcagLevel};
//!
//! let theme = preset("high-contrast").unwrap();
//! assert_eq!(theme.wcag_level(), WcagLevel::Aaa);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod description;
pub mod presets;
pub mod scheme;

pub use description::ThemeParseError;
pub use presets::{preset, preset_names};
pub use scheme::{Theme, WcagLevel};
