//! Color representation and conversion for terminal output.
//!
//! A [`Color`] is one of three encodings a terminal understands: 24-bit RGB,
//! an index into the 16-color ANSI palette, or an index into the xterm
//! 256-color palette. Every variant can be viewed in every other encoding;
//! conversions toward a smaller palette are lossy and one-directional.
//!
//! # Examples
//!
//! ```
//! use cortex_render_core::color::{Color, contrast_ratio};
//!
//! let gray = Color::rgb(128, 128, 128);
//! assert_eq!(gray.to_ansi256(), 244);
//!
//! let ratio = contrast_ratio(Color::WHITE, Color::BLACK);
//! assert!((ratio - 21.0).abs() < 1e-9);
//! ```

use crate::error::ColorParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of colors a terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorDepth {
    /// The 16-color ANSI palette.
    #[default]
    Ansi16,
    /// The xterm 256-color palette.
    Ansi256,
    /// 24-bit RGB.
    TrueColor,
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi16 => write!(f, "ansi16"),
            Self::Ansi256 => write!(f, "ansi256"),
            Self::TrueColor => write!(f, "truecolor"),
        }
    }
}

/// xterm default RGB values for the 16 ANSI colors.
const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Channel levels of the 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

const ANSI16_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

/// A terminal color in one of the three palette encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 24-bit color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// Index into the 16-color ANSI palette (0-15).
    Ansi16(u8),
    /// Index into the 256-color xterm palette.
    Ansi256(u8),
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ============================================================================
// Constants and constructors
// ============================================================================

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Pure yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Pure cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Pure magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Mid gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Creates an RGB color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Creates a 16-color palette entry. Out-of-range indices are masked into range.
    #[inline]
    pub const fn ansi16(index: u8) -> Self {
        Self::Ansi16(index & 0x0F)
    }

    /// Creates a 256-color palette entry.
    #[inline]
    pub const fn ansi256(index: u8) -> Self {
        Self::Ansi256(index)
    }
}

// ============================================================================
// Parsing and formatting
// ============================================================================

impl Color {
    /// Parses a `#RRGGBB` or `#RGB` hex string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHexChar);
        }

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        let parse_component = |s: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexChar)
        };

        let r = parse_component(&expanded[0..2])?;
        let g = parse_component(&expanded[2..4])?;
        let b = parse_component(&expanded[4..6])?;

        Ok(Self::rgb(r, g, b))
    }

    /// Formats the color as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Looks up one of the 16 ANSI color names (`red`, `bright_blue`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace(['-', ' '], "_");
        let normalized = match normalized.as_str() {
            "grey" | "gray" | "bright_black" => "bright_black",
            other => other,
        };
        ANSI16_NAMES
            .iter()
            .position(|candidate| *candidate == normalized)
            .map(|index| Self::Ansi16(index as u8))
    }

    /// Parses any textual color form.
    ///
    /// Accepts hex (`#RRGGBB`, `#RGB`), palette references (`ansi16:N`,
    /// `ansi256:N`) and the 16 ANSI color names.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        if input.starts_with('#') {
            return Self::from_hex(input);
        }

        if let Some(index) = input.strip_prefix("ansi16:") {
            return match index.parse::<u8>() {
                Ok(i) if i < 16 => Ok(Self::Ansi16(i)),
                _ => Err(ColorParseError::IndexOutOfRange(input.to_string())),
            };
        }

        if let Some(index) = input.strip_prefix("ansi256:") {
            return index
                .parse::<u8>()
                .map(Self::Ansi256)
                .map_err(|_| ColorParseError::IndexOutOfRange(input.to_string()));
        }

        Self::from_name(input).ok_or_else(|| ColorParseError::UnknownColor(input.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { .. } => write!(f, "{}", self.to_hex()),
            Self::Ansi16(i) => write!(f, "ansi16:{}", i),
            Self::Ansi256(i) => write!(f, "ansi256:{}", i),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Palette conversion
// ============================================================================

impl Color {
    /// Returns the RGB triple for this color.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match *self {
            Self::Rgb { r, g, b } => (r, g, b),
            Self::Ansi16(i) => ANSI16_RGB[(i & 0x0F) as usize],
            Self::Ansi256(i) => ansi256_to_rgb(i),
        }
    }

    /// Returns the nearest 256-color palette index.
    pub fn to_ansi256(&self) -> u8 {
        match *self {
            Self::Rgb { r, g, b } => rgb_to_ansi256(r, g, b),
            Self::Ansi16(i) => i & 0x0F,
            Self::Ansi256(i) => i,
        }
    }

    /// Returns the nearest 16-color palette index.
    pub fn to_ansi16(&self) -> u8 {
        match *self {
            Self::Rgb { r, g, b } => ansi256_to_ansi16(rgb_to_ansi256(r, g, b)),
            Self::Ansi16(i) => i & 0x0F,
            Self::Ansi256(i) => ansi256_to_ansi16(i),
        }
    }

    /// Returns this color as an RGB variant.
    pub fn as_rgb(&self) -> Self {
        let (r, g, b) = self.to_rgb();
        Self::rgb(r, g, b)
    }
}

/// Quantizes an RGB triple into the 256-color palette.
///
/// Grays between 8 and 248 (exclusive) use the 24-step gray ramp; every other
/// gray snaps to cube black or white. Non-gray colors use the 6x6x6 cube.
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return if r > 8 && r < 248 {
            232 + (r - 8) / 10
        } else if r <= 8 {
            16
        } else {
            231
        };
    }
    16 + 36 * (r / 51) + 6 * (g / 51) + b / 51
}

/// Expands a 256-color palette index into RGB.
pub fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI16_RGB[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i % 36) / 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        232..=255 => {
            let v = 8 + (index - 232) * 10;
            (v, v, v)
        }
    }
}

/// Reduces a 256-color palette index to the 16-color palette.
///
/// Cube entries keep the channels at their maximal level (red=1, green=2,
/// blue=4) and become bright once that level reaches 3.
pub fn ansi256_to_ansi16(index: u8) -> u8 {
    match index {
        0..=15 => index,
        232..=255 => {
            if index - 232 < 12 {
                0
            } else {
                7
            }
        }
        16..=231 => {
            let i = index - 16;
            let levels = [i / 36, (i % 36) / 6, i % 6];
            let max = levels.iter().copied().max().unwrap_or(0);
            if max == 0 {
                return 0;
            }

            let mask = levels
                .iter()
                .enumerate()
                .filter(|(_, level)| **level == max)
                .fold(0u8, |acc, (bit, _)| acc | (1 << bit));

            if mask == 7 {
                return match max {
                    1..=2 => 8,
                    3..=4 => 7,
                    _ => 15,
                };
            }

            if max >= 3 { mask + 8 } else { mask }
        }
    }
}

// ============================================================================
// Escape sequences
// ============================================================================

impl Color {
    fn basic_code(index: u8, base: u8) -> u8 {
        let index = index & 0x0F;
        if index < 8 {
            base + index
        } else {
            base + 60 + (index - 8)
        }
    }

    fn params(&self, depth: ColorDepth, basic_base: u8, extended: u8) -> String {
        match (depth, *self) {
            (_, Self::Ansi16(i)) | (ColorDepth::Ansi16, Self::Ansi256(i)) => {
                Self::basic_code(if i < 16 { i } else { ansi256_to_ansi16(i) }, basic_base)
                    .to_string()
            }
            (ColorDepth::Ansi16, Self::Rgb { .. }) => {
                Self::basic_code(self.to_ansi16(), basic_base).to_string()
            }
            (ColorDepth::TrueColor, Self::Rgb { r, g, b }) => {
                format!("{};2;{};{};{}", extended, r, g, b)
            }
            (_, Self::Ansi256(i)) => format!("{};5;{}", extended, i),
            (ColorDepth::Ansi256, Self::Rgb { .. }) => {
                format!("{};5;{}", extended, self.to_ansi256())
            }
        }
    }

    /// Returns the SGR parameters selecting this color as foreground.
    pub fn fg_params(&self, depth: ColorDepth) -> String {
        self.params(depth, 30, 38)
    }

    /// Returns the SGR parameters selecting this color as background.
    pub fn bg_params(&self, depth: ColorDepth) -> String {
        self.params(depth, 40, 48)
    }

    /// Returns the complete escape sequence setting this foreground color.
    pub fn to_ansi_fg(&self, depth: ColorDepth) -> String {
        format!("\x1b[{}m", self.fg_params(depth))
    }

    /// Returns the complete escape sequence setting this background color.
    pub fn to_ansi_bg(&self, depth: ColorDepth) -> String {
        format!("\x1b[{}m", self.bg_params(depth))
    }
}

// ============================================================================
// Perceptual operations
// ============================================================================

fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Color {
    /// Returns the WCAG relative luminance in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        let (r, g, b) = self.to_rgb();
        0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
    }

    /// Returns the WCAG contrast ratio between this color and another.
    pub fn contrast_with(&self, other: Self) -> f64 {
        contrast_ratio(*self, other)
    }

    /// Returns the color in HSL space.
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.to_rgb();
        Hsl::from_rgb(r, g, b)
    }

    /// Lightens the color by scaling its HSL lightness by `1 + factor`.
    pub fn lighten(&self, factor: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l * (1.0 + factor)).clamp(0.0, 1.0);
        hsl.to_color()
    }

    /// Darkens the color by scaling its HSL lightness by `1 - factor`.
    pub fn darken(&self, factor: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l * (1.0 - factor)).clamp(0.0, 1.0);
        hsl.to_color()
    }
}

/// Returns the WCAG contrast ratio `(L1 + 0.05) / (L2 + 0.05)` with `L1 >= L2`.
///
/// The result lies in `[1, 21]` and is symmetric in its arguments.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// A color in hue/saturation/lightness space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f32,
    /// Saturation, `[0, 1]`.
    pub s: f32,
    /// Lightness, `[0, 1]`.
    pub l: f32,
}

impl Hsl {
    /// Creates a new HSL value.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Converts 8-bit RGB channels into HSL.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f32 / 255.0;
        let g = g as f32 / 255.0;
        let b = b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self::new(if h < 0.0 { h + 360.0 } else { h }, s, l)
    }

    /// Converts back to an RGB color.
    pub fn to_color(&self) -> Color {
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(to_u8(r), to_u8(g), to_u8(b))
    }
}

/// A color carrying a theme-level name.
///
/// Deriving a lighter or darker variant produces a new named value whose name
/// is suffixed with `_lighter` or `_darker`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedColor {
    /// The color's name.
    pub name: String,
    /// The color value.
    pub color: Color,
}

impl NamedColor {
    /// Creates a named color.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Returns a lighter copy named `<name>_lighter`.
    pub fn lighten(&self, factor: f32) -> Self {
        Self::new(format!("{}_lighter", self.name), self.color.lighten(factor))
    }

    /// Returns a darker copy named `<name>_darker`.
    pub fn darken(&self, factor: f32) -> Self {
        Self::new(format!("{}_darker", self.name), self.color.darken(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn channel_delta(a: (u8, u8, u8), b: (u8, u8, u8)) -> u8 {
        a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)).max(a.2.abs_diff(b.2))
    }

    mod parsing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_hex_long_and_short() {
            assert_eq!(Color::from_hex("#FF8000").unwrap(), Color::rgb(255, 128, 0));
            assert_eq!(Color::from_hex("f80").unwrap(), Color::rgb(255, 136, 0));
        }

        #[test]
        fn test_from_hex_rejects_malformed() {
            assert_eq!(Color::from_hex("#"), Err(ColorParseError::EmptyInput));
            assert_eq!(Color::from_hex("#12345"), Err(ColorParseError::InvalidLength(5)));
            assert_eq!(Color::from_hex("#GG0000"), Err(ColorParseError::InvalidHexChar));
            assert_eq!(Color::from_hex("#ééé"), Err(ColorParseError::InvalidHexChar));
        }

        #[test]
        fn test_parse_palette_and_names() {
            assert_eq!(Color::parse("ansi16:9").unwrap(), Color::Ansi16(9));
            assert_eq!(Color::parse("ansi256:244").unwrap(), Color::Ansi256(244));
            assert_eq!(Color::parse("bright-blue").unwrap(), Color::Ansi16(12));
            assert!(Color::parse("ansi16:16").is_err());
            assert!(matches!(
                Color::parse("chartreuse"),
                Err(ColorParseError::UnknownColor(_))
            ));
        }

        #[test]
        fn test_display_round_trip() {
            for color in [Color::rgb(1, 2, 3), Color::Ansi16(4), Color::Ansi256(200)] {
                assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
            }
        }

        #[test]
        fn test_ansi16_constructor_masks_index() {
            assert_eq!(Color::ansi16(18), Color::Ansi16(2));
        }
    }

    mod conversion {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_gray_ramp_quantization() {
            assert_eq!(rgb_to_ansi256(128, 128, 128), 244);
            assert_eq!(rgb_to_ansi256(9, 9, 9), 232);
            assert_eq!(rgb_to_ansi256(247, 247, 247), 255);
            assert_eq!(rgb_to_ansi256(8, 8, 8), 16);
            assert_eq!(rgb_to_ansi256(248, 248, 248), 231);
        }

        #[test]
        fn test_cube_quantization() {
            assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
            assert_eq!(rgb_to_ansi256(0, 255, 0), 46);
            assert_eq!(rgb_to_ansi256(0, 0, 255), 21);
            assert_eq!(rgb_to_ansi256(95, 135, 255), 69);
        }

        #[test]
        fn test_ansi256_to_rgb() {
            assert_eq!(ansi256_to_rgb(196), (255, 0, 0));
            assert_eq!(ansi256_to_rgb(232), (8, 8, 8));
            assert_eq!(ansi256_to_rgb(255), (238, 238, 238));
            assert_eq!(ansi256_to_rgb(1), (205, 0, 0));
        }

        #[test]
        fn test_ansi256_to_ansi16() {
            assert_eq!(ansi256_to_ansi16(9), 9);
            assert_eq!(ansi256_to_ansi16(232), 0);
            assert_eq!(ansi256_to_ansi16(250), 7);
            assert_eq!(ansi256_to_ansi16(16), 0);
            assert_eq!(ansi256_to_ansi16(196), 9);
            assert_eq!(ansi256_to_ansi16(88), 1);
            assert_eq!(ansi256_to_ansi16(231), 15);
            assert_eq!(ansi256_to_ansi16(59), 8);
            assert_eq!(ansi256_to_ansi16(226), 11);
        }

        #[test]
        fn test_round_trip_primaries_within_delta() {
            let samples = [
                Color::BLACK,
                Color::WHITE,
                Color::RED,
                Color::GREEN,
                Color::BLUE,
            ];
            for color in samples {
                let back = ansi256_to_rgb(color.to_ansi256());
                assert!(
                    channel_delta(color.to_rgb(), back) <= 8,
                    "{color} drifted to {back:?}"
                );
            }
        }

        #[test]
        fn test_every_variant_answers_every_encoding() {
            let red16 = Color::Ansi16(1);
            assert_eq!(red16.to_ansi256(), 1);
            assert_eq!(red16.to_rgb(), (205, 0, 0));

            let gray = Color::Ansi256(244);
            assert_eq!(gray.to_ansi16(), 7);
            assert_eq!(gray.to_rgb(), (128, 128, 128));
        }
    }

    mod escapes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fg_params_per_depth() {
            let color = Color::rgb(255, 0, 0);
            assert_eq!(color.fg_params(ColorDepth::TrueColor), "38;2;255;0;0");
            assert_eq!(color.fg_params(ColorDepth::Ansi256), "38;5;196");
            assert_eq!(color.fg_params(ColorDepth::Ansi16), "91");
        }

        #[test]
        fn test_bg_params_basic_colors() {
            assert_eq!(Color::Ansi16(4).bg_params(ColorDepth::TrueColor), "44");
            assert_eq!(Color::Ansi16(12).bg_params(ColorDepth::Ansi256), "104");
            assert_eq!(Color::Ansi256(250).bg_params(ColorDepth::Ansi16), "47");
        }

        #[test]
        fn test_full_escape() {
            assert_eq!(
                Color::Ansi256(69).to_ansi_fg(ColorDepth::TrueColor),
                "\x1b[38;5;69m"
            );
        }
    }

    mod perceptual {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_luminance_extremes() {
            assert!(Color::BLACK.luminance().abs() < 1e-12);
            assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-12);
        }

        #[test]
        fn test_contrast_symmetry_and_identity() {
            let pairs = [
                (Color::WHITE, Color::BLACK),
                (Color::rgb(40, 90, 200), Color::rgb(250, 240, 200)),
                (Color::Ansi256(33), Color::Ansi16(3)),
            ];
            for (a, b) in pairs {
                assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
                assert!(contrast_ratio(a, b) >= 1.0);
                assert!((contrast_ratio(a, a) - 1.0).abs() < 1e-12);
            }
            assert!((contrast_ratio(Color::WHITE, Color::BLACK) - 21.0).abs() < 1e-9);
        }

        #[test]
        fn test_hsl_round_trip() {
            let color = Color::rgb(51, 102, 153);
            let back = color.to_hsl().to_color();
            assert!(channel_delta(color.to_rgb(), back.to_rgb()) <= 1);
        }

        #[test]
        fn test_hsl_of_primaries() {
            let hsl = Color::BLUE.to_hsl();
            assert!((hsl.h - 240.0).abs() < 0.01);
            assert!((hsl.s - 1.0).abs() < 0.01);
            assert!((hsl.l - 0.5).abs() < 0.01);
        }

        #[test]
        fn test_lighten_and_darken() {
            let base = Color::rgb(100, 100, 100);
            assert!(base.lighten(0.2).luminance() > base.luminance());
            assert!(base.darken(0.2).luminance() < base.luminance());
            assert_eq!(Color::WHITE.lighten(0.5), Color::WHITE);
            assert_eq!(base.darken(1.0), Color::BLACK);
        }

        #[test]
        fn test_named_color_suffixes() {
            let accent = NamedColor::new("accent", Color::rgb(0, 120, 215));
            let lighter = accent.lighten(0.1);
            let darker = accent.darken(0.1);
            assert_eq!(lighter.name, "accent_lighter");
            assert_eq!(darker.name, "accent_darker");
            assert_eq!(lighter.lighten(0.1).name, "accent_lighter_lighter");
        }
    }
}
