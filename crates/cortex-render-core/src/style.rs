//! Text styling for terminal output.
//!
//! - [`TextAttributes`]: bitflags for text decorations (bold, italic, underline, etc.)
//! - [`Style`]: colors plus attributes, encodable as a single SGR sequence
//!
//! # Examples
//!
//! ```
//! use cortex_render_core::color::{Color, ColorDepth};
//! use cortex_render_core::style::Style;
//!
//! let base = Style::new().fg(Color::WHITE);
//! let highlight = Style::new().bg(Color::Ansi16(3)).bold();
//! let combined = base.merge(&highlight);
//! assert!(combined.is_bold());
//! assert_eq!(combined.to_sgr(ColorDepth::Ansi16), "\x1b[1;97;43m");
//! ```

use crate::color::{Color, ColorDepth};
use bitflags::bitflags;
use smallvec::SmallVec;
use std::fmt;

/// The SGR sequence that resets every attribute and color.
pub const RESET: &str = "\x1b[0m";

bitflags! {
    /// Text decoration attributes as a compact bitfield.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttributes: u8 {
        /// Bold/bright text.
        const BOLD          = 0b0000_0001;
        /// Dim/faint text.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video (swap fg and bg colors).
        const REVERSE       = 0b0010_0000;
        /// Hidden text.
        const HIDDEN        = 0b0100_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl TextAttributes {
    /// Returns the SGR codes for these attributes in ascending order.
    pub fn to_ansi_codes(self) -> SmallVec<[u8; 8]> {
        const TABLE: [(TextAttributes, u8); 8] = [
            (TextAttributes::BOLD, 1),
            (TextAttributes::DIM, 2),
            (TextAttributes::ITALIC, 3),
            (TextAttributes::UNDERLINE, 4),
            (TextAttributes::BLINK, 5),
            (TextAttributes::REVERSE, 7),
            (TextAttributes::HIDDEN, 8),
            (TextAttributes::STRIKETHROUGH, 9),
        ];

        TABLE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, code)| *code)
            .collect()
    }
}

impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join(", ").to_lowercase())
    }
}

/// Complete style information for a run of terminal text.
///
/// Colors left as `None` use the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text decoration attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Creates an empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Creates a style with only a foreground color.
    #[inline]
    pub const fn with_fg(fg: Color) -> Self {
        Self::new().fg(fg)
    }

    /// Returns `true` if no color or attribute is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Sets the foreground color.
    #[inline]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    #[inline]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Adds the specified attributes.
    #[inline]
    pub const fn add_attributes(mut self, attrs: TextAttributes) -> Self {
        self.attributes = self.attributes.union(attrs);
        self
    }

    /// Adds the bold attribute.
    #[inline]
    pub const fn bold(self) -> Self {
        self.add_attributes(TextAttributes::BOLD)
    }

    /// Adds the dim attribute.
    #[inline]
    pub const fn dim(self) -> Self {
        self.add_attributes(TextAttributes::DIM)
    }

    /// Adds the italic attribute.
    #[inline]
    pub const fn italic(self) -> Self {
        self.add_attributes(TextAttributes::ITALIC)
    }

    /// Adds the underline attribute.
    #[inline]
    pub const fn underline(self) -> Self {
        self.add_attributes(TextAttributes::UNDERLINE)
    }

    /// Adds the reverse attribute.
    #[inline]
    pub const fn reverse(self) -> Self {
        self.add_attributes(TextAttributes::REVERSE)
    }

    /// Adds the strikethrough attribute.
    #[inline]
    pub const fn strikethrough(self) -> Self {
        self.add_attributes(TextAttributes::STRIKETHROUGH)
    }

    /// Returns `true` if the bold attribute is set.
    #[inline]
    pub const fn is_bold(&self) -> bool {
        self.attributes.contains(TextAttributes::BOLD)
    }

    /// Overlays `other` on top of this style.
    ///
    /// Colors set in `other` win; attributes are combined.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }

    /// Encodes the style as a single SGR escape sequence for the given depth.
    ///
    /// Returns an empty string for an empty style.
    pub fn to_sgr(&self, depth: ColorDepth) -> String {
        let mut params: Vec<String> = self
            .attributes
            .to_ansi_codes()
            .iter()
            .map(ToString::to_string)
            .collect();

        if let Some(fg) = self.fg {
            params.push(fg.fg_params(depth));
        }
        if let Some(bg) = self.bg {
            params.push(bg.bg_params(depth));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", params.join(";"))
        }
    }

    /// Wraps `text` in this style's SGR sequence followed by a reset.
    ///
    /// Empty styles return the text unchanged.
    pub fn paint(&self, text: &str, depth: ColorDepth) -> String {
        let sgr = self.to_sgr(depth);
        if sgr.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", sgr, text, RESET)
        }
    }
}
