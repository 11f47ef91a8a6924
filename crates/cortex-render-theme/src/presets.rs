//! Built-in themes.

use crate::scheme::Theme;
use cortex_render_core::color::Color;

const fn hex(value: u32) -> Color {
    Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

const PRESET_NAMES: &[&str] = &[
    "default",
    "dark",
    "light",
    "high-contrast",
    "solarized-dark",
    "solarized-light",
];

/// Returns the names of every built-in theme.
pub fn preset_names() -> &'static [&'static str] {
    PRESET_NAMES
}

/// Looks up a built-in theme by name.
///
/// Matching ignores case and treats `_` and spaces like `-`.
pub fn preset(name: &str) -> Option<Theme> {
    let normalized = name.trim().to_lowercase().replace(['_', ' '], "-");
    match normalized.as_str() {
        "default" | "cortex" => Some(default_theme()),
        "dark" => Some(dark()),
        "light" => Some(light()),
        "high-contrast" | "highcontrast" | "hc" => Some(high_contrast()),
        "solarized-dark" | "solarized" => Some(solarized_dark()),
        "solarized-light" => Some(solarized_light()),
        _ => None,
    }
}

/// The default Cortex theme: a dark background with a cyan accent.
pub fn default_theme() -> Theme {
    Theme {
        name: "default".to_string(),
        is_dark: true,
        background: hex(0x0D1117),
        foreground: hex(0xE6EDF3),
        cursor: hex(0x00D7FF),
        selection: hex(0x264F78),
        black: hex(0x0D1117),
        red: hex(0xF85149),
        green: hex(0x3FB950),
        yellow: hex(0xD29922),
        blue: hex(0x58A6FF),
        magenta: hex(0xBC8CFF),
        cyan: hex(0x39C5CF),
        white: hex(0xB1BAC4),
        bright_black: hex(0x6E7681),
        bright_red: hex(0xFF7B72),
        bright_green: hex(0x56D364),
        bright_yellow: hex(0xE3B341),
        bright_blue: hex(0x79C0FF),
        bright_magenta: hex(0xD2A8FF),
        bright_cyan: hex(0x56D4DD),
        bright_white: hex(0xFFFFFF),
        success: hex(0x3FB950),
        warning: hex(0xD29922),
        error: hex(0xF85149),
        info: hex(0x58A6FF),
        border: hex(0x30363D),
        accent: hex(0x00D7FF),
        muted: hex(0x8B949E),
        highlight: hex(0x1F2937),
    }
}

/// A neutral dark theme.
pub fn dark() -> Theme {
    Theme {
        name: "dark".to_string(),
        is_dark: true,
        background: hex(0x1E1E1E),
        foreground: hex(0xD4D4D4),
        cursor: hex(0xAEAFAD),
        selection: hex(0x264F78),
        black: hex(0x000000),
        red: hex(0xCD3131),
        green: hex(0x0DBC79),
        yellow: hex(0xE5E510),
        blue: hex(0x2472C8),
        magenta: hex(0xBC3FBC),
        cyan: hex(0x11A8CD),
        white: hex(0xE5E5E5),
        bright_black: hex(0x666666),
        bright_red: hex(0xF14C4C),
        bright_green: hex(0x23D18B),
        bright_yellow: hex(0xF5F543),
        bright_blue: hex(0x3B8EEA),
        bright_magenta: hex(0xD670D6),
        bright_cyan: hex(0x29B8DB),
        bright_white: hex(0xFFFFFF),
        success: hex(0x23D18B),
        warning: hex(0xF5F543),
        error: hex(0xF14C4C),
        info: hex(0x3B8EEA),
        border: hex(0x3C3C3C),
        accent: hex(0x569CD6),
        muted: hex(0x808080),
        highlight: hex(0x2A2D2E),
    }
}

/// A light theme with dark text.
pub fn light() -> Theme {
    Theme {
        name: "light".to_string(),
        is_dark: false,
        background: hex(0xFFFFFF),
        foreground: hex(0x1F2328),
        cursor: hex(0x0969DA),
        selection: hex(0xB6E3FF),
        black: hex(0x24292F),
        red: hex(0xCF222E),
        green: hex(0x116329),
        yellow: hex(0x4D2D00),
        blue: hex(0x0969DA),
        magenta: hex(0x8250DF),
        cyan: hex(0x1B7C83),
        white: hex(0x6E7781),
        bright_black: hex(0x57606A),
        bright_red: hex(0xA40E26),
        bright_green: hex(0x1A7F37),
        bright_yellow: hex(0x633C01),
        bright_blue: hex(0x218BFF),
        bright_magenta: hex(0xA475F9),
        bright_cyan: hex(0x3192AA),
        bright_white: hex(0x8C959F),
        success: hex(0x1A7F37),
        warning: hex(0x9A6700),
        error: hex(0xCF222E),
        info: hex(0x0969DA),
        border: hex(0xD0D7DE),
        accent: hex(0x0969DA),
        muted: hex(0x656D76),
        highlight: hex(0xF6F8FA),
    }
}

/// Pure black and white with saturated accents.
pub fn high_contrast() -> Theme {
    Theme {
        name: "high-contrast".to_string(),
        is_dark: true,
        background: hex(0x000000),
        foreground: hex(0xFFFFFF),
        cursor: hex(0xFFFF00),
        selection: hex(0x0000FF),
        black: hex(0x000000),
        red: hex(0xFF0000),
        green: hex(0x00FF00),
        yellow: hex(0xFFFF00),
        blue: hex(0x5C5CFF),
        magenta: hex(0xFF00FF),
        cyan: hex(0x00FFFF),
        white: hex(0xFFFFFF),
        bright_black: hex(0xC0C0C0),
        bright_red: hex(0xFF5555),
        bright_green: hex(0x55FF55),
        bright_yellow: hex(0xFFFF55),
        bright_blue: hex(0x8080FF),
        bright_magenta: hex(0xFF55FF),
        bright_cyan: hex(0x55FFFF),
        bright_white: hex(0xFFFFFF),
        success: hex(0x00FF00),
        warning: hex(0xFFFF00),
        error: hex(0xFF0000),
        info: hex(0x00FFFF),
        border: hex(0xFFFFFF),
        accent: hex(0xFFFF00),
        muted: hex(0xC0C0C0),
        highlight: hex(0x333333),
    }
}

/// Solarized dark.
pub fn solarized_dark() -> Theme {
    Theme {
        name: "solarized-dark".to_string(),
        is_dark: true,
        background: hex(0x002B36),
        foreground: hex(0x839496),
        cursor: hex(0x93A1A1),
        selection: hex(0x073642),
        highlight: hex(0x073642),
        border: hex(0x586E75),
        muted: hex(0x586E75),
        ..solarized_accents()
    }
}

/// Solarized light.
pub fn solarized_light() -> Theme {
    Theme {
        name: "solarized-light".to_string(),
        is_dark: false,
        background: hex(0xFDF6E3),
        foreground: hex(0x586E75),
        cursor: hex(0x586E75),
        selection: hex(0xEEE8D5),
        highlight: hex(0xEEE8D5),
        border: hex(0x93A1A1),
        muted: hex(0x93A1A1),
        ..solarized_accents()
    }
}

fn solarized_accents() -> Theme {
    Theme {
        name: String::new(),
        is_dark: true,
        background: hex(0x002B36),
        foreground: hex(0x839496),
        cursor: hex(0x93A1A1),
        selection: hex(0x073642),
        black: hex(0x073642),
        red: hex(0xDC322F),
        green: hex(0x859900),
        yellow: hex(0xB58900),
        blue: hex(0x268BD2),
        magenta: hex(0xD33682),
        cyan: hex(0x2AA198),
        white: hex(0xEEE8D5),
        bright_black: hex(0x002B36),
        bright_red: hex(0xCB4B16),
        bright_green: hex(0x586E75),
        bright_yellow: hex(0x657B83),
        bright_blue: hex(0x839496),
        bright_magenta: hex(0x6C71C4),
        bright_cyan: hex(0x93A1A1),
        bright_white: hex(0xFDF6E3),
        success: hex(0x859900),
        warning: hex(0xB58900),
        error: hex(0xDC322F),
        info: hex(0x268BD2),
        border: hex(0x586E75),
        accent: hex(0x268BD2),
        muted: hex(0x586E75),
        highlight: hex(0x073642),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::WcagLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_name_resolves() {
        for name in preset_names() {
            let theme = preset(name).unwrap();
            assert_eq!(theme.name, *name);
        }
    }

    #[test]
    fn test_lookup_normalization() {
        assert_eq!(preset("High_Contrast").unwrap().name, "high-contrast");
        assert_eq!(preset("solarized").unwrap().name, "solarized-dark");
        assert!(preset("dracula").is_none());
    }

    #[test]
    fn test_presets_reach_aa() {
        for name in preset_names() {
            let theme = preset(name).unwrap();
            assert!(
                theme.wcag_level() >= WcagLevel::Aa,
                "{} only reaches {}",
                name,
                theme.wcag_level()
            );
        }
    }

    #[test]
    fn test_is_dark_matches_background() {
        for name in preset_names() {
            let theme = preset(name).unwrap();
            assert_eq!(theme.is_dark, theme.background.luminance() < 0.5, "{}", name);
        }
    }

    #[test]
    fn test_high_contrast_is_maximal() {
        assert!((high_contrast().contrast_ratio() - 21.0).abs() < 1e-9);
    }
}
