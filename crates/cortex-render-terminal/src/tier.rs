//! Rendering quality tiers.

use crate::capabilities::Capabilities;
use cortex_render_core::color::ColorDepth;
use std::fmt;
use std::str::FromStr;

/// How rich the rendered output may be.
///
/// Tiers are ordered: `Minimal < Standard < Rich < Ultra`. Every decoration
/// decision in the content pipelines is keyed on the tier alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum QualityTier {
    /// Plain text, no escape sequences.
    #[default]
    Minimal,
    /// 256 colors with ASCII decorations.
    Standard,
    /// Truecolor with box-drawing decorations.
    Rich,
    /// Everything `Rich` has plus synchronized output; the terminal can show images.
    Ultra,
}

impl QualityTier {
    /// All tiers in ascending order.
    pub const ALL: [Self; 4] = [Self::Minimal, Self::Standard, Self::Rich, Self::Ultra];

    /// Derives the tier from a capability snapshot.
    ///
    /// Any image protocol selects `Ultra`; otherwise the color depth decides.
    pub fn from_capabilities(caps: &Capabilities) -> Self {
        if caps.has_graphics() {
            return Self::Ultra;
        }
        match caps.color_depth {
            ColorDepth::TrueColor => Self::Rich,
            ColorDepth::Ansi256 => Self::Standard,
            ColorDepth::Ansi16 => Self::Minimal,
        }
    }

    /// Returns the color depth escapes should be emitted at, or `None` for plain output.
    pub fn color_depth(self) -> Option<ColorDepth> {
        match self {
            Self::Minimal => None,
            Self::Standard => Some(ColorDepth::Ansi256),
            Self::Rich | Self::Ultra => Some(ColorDepth::TrueColor),
        }
    }

    /// Returns `true` if box-drawing glyphs may be used.
    pub fn uses_box_drawing(self) -> bool {
        self >= Self::Rich
    }

    /// Returns the lowercase tier name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Rich => "rich",
            Self::Ultra => "ultra",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tier name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quality tier: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for QualityTier {
    type Err = UnknownTier;

    /// Parses a tier name.
    ///
    /// Also accepts the `{rich, standard, compatible, minimal}` vocabulary, which
    /// maps rank-wise onto `{Ultra, Rich, Standard, Minimal}` only when prefixed
    /// with `compat:` (e.g. `compat:rich`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "minimal" | "plain" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "rich" => Ok(Self::Rich),
            "ultra" => Ok(Self::Ultra),
            "compat:minimal" => Ok(Self::Minimal),
            "compat:compatible" => Ok(Self::Standard),
            "compat:standard" => Ok(Self::Rich),
            "compat:rich" => Ok(Self::Ultra),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}
