//! The theme record and its accessibility checks.

use cortex_render_core::color::{Color, NamedColor, contrast_ratio};
use std::fmt;

/// WCAG 2.x conformance level for normal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// At least 3:1 (large text only).
    AaLarge,
    /// At least 4.5:1.
    Aa,
    /// At least 7:1.
    Aaa,
}

impl WcagLevel {
    /// Classifies a contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Returns the conventional label (`"AAA"`, `"AA"`, `"AA Large"`, `"Fail"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! theme_colors {
    ($($(#[$doc:meta])* $field:ident),+ $(,)?) => {
        /// A complete color scheme.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct Theme {
            /// Human-readable theme name.
            pub name: String,
            /// Whether the background is dark.
            pub is_dark: bool,
            $($(#[$doc])* pub $field: Color,)+
        }

        impl Theme {
            /// Names of every color slot, in description order.
            pub const COLOR_FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            /// Returns every color slot paired with its name.
            pub fn colors(&self) -> Vec<(&'static str, Color)> {
                vec![$((stringify!($field), self.$field)),+]
            }

            /// Returns the color stored under `field`.
            pub fn color(&self, field: &str) -> Option<Color> {
                match field {
                    $(stringify!($field) => Some(self.$field),)+
                    _ => None,
                }
            }

            /// Returns a mutable reference to the color stored under `field`.
            pub fn color_mut(&mut self, field: &str) -> Option<&mut Color> {
                match field {
                    $(stringify!($field) => Some(&mut self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

theme_colors! {
    /// Terminal background.
    background,
    /// Default text color.
    foreground,
    /// Cursor color.
    cursor,
    /// Selection background.
    selection,
    /// ANSI 0.
    black,
    /// ANSI 1.
    red,
    /// ANSI 2.
    green,
    /// ANSI 3.
    yellow,
    /// ANSI 4.
    blue,
    /// ANSI 5.
    magenta,
    /// ANSI 6.
    cyan,
    /// ANSI 7.
    white,
    /// ANSI 8.
    bright_black,
    /// ANSI 9.
    bright_red,
    /// ANSI 10.
    bright_green,
    /// ANSI 11.
    bright_yellow,
    /// ANSI 12.
    bright_blue,
    /// ANSI 13.
    bright_magenta,
    /// ANSI 14.
    bright_cyan,
    /// ANSI 15.
    bright_white,
    /// Success status.
    success,
    /// Warning status.
    warning,
    /// Error status.
    error,
    /// Informational status.
    info,
    /// Borders and rules.
    border,
    /// Primary accent (focus, headings, links).
    accent,
    /// De-emphasized text.
    muted,
    /// Highlighted background.
    highlight,
}

impl Theme {
    /// Returns the WCAG contrast ratio of foreground against background.
    pub fn contrast_ratio(&self) -> f64 {
        contrast_ratio(self.foreground, self.background)
    }

    /// Returns the WCAG level reached by foreground against background.
    pub fn wcag_level(&self) -> WcagLevel {
        WcagLevel::from_ratio(self.contrast_ratio())
    }

    /// Returns the ANSI palette entry for `index` (masked to 0-15).
    pub fn ansi(&self, index: u8) -> Color {
        let palette = [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
            self.bright_black,
            self.bright_red,
            self.bright_green,
            self.bright_yellow,
            self.bright_blue,
            self.bright_magenta,
            self.bright_cyan,
            self.bright_white,
        ];
        palette[(index & 0x0F) as usize]
    }

    /// Returns the slot as a [`NamedColor`] so it can be lightened or darkened.
    pub fn named(&self, field: &str) -> Option<NamedColor> {
        self.color(field).map(|color| NamedColor::new(field, color))
    }

    /// Returns a copy with a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::presets::default_theme()
    }
}
