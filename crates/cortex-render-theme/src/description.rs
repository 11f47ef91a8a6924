//! TOML persistence for themes.
//!
//! A description names the theme and lists every color slot:
//!
//! ```toml
//! name = "dark"
//! is_dark = true
//!
//! [colors]
//! background = "#1E1E1E"
//! foreground = "#D4D4D4"
//! # ... one entry per slot
//! ```
//!
//! Colors accept every form [`Color::parse`] understands. Missing slots and
//! malformed colors are rejected rather than defaulted.

use crate::scheme::Theme;
use cortex_render_core::color::Color;
use cortex_render_core::error::ColorParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced while reading or writing a theme description.
#[derive(Debug, Error)]
pub enum ThemeParseError {
    /// The text is not valid TOML or does not have the expected shape.
    #[error("invalid theme description: {0}")]
    Syntax(#[from] toml::de::Error),

    /// The description could not be serialized.
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The theme name was empty.
    #[error("theme name must not be empty")]
    EmptyName,

    /// A required color slot was absent.
    #[error("missing color `{0}`")]
    MissingColor(&'static str),

    /// The description listed a slot the theme does not have.
    #[error("unknown color slot `{0}`")]
    UnknownSlot(String),

    /// A color value failed to parse.
    #[error("invalid color for `{field}`: {source}")]
    InvalidColor {
        /// The slot being parsed.
        field: String,
        /// The underlying parse failure.
        #[source]
        source: ColorParseError,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeDescription {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_dark: Option<bool>,
    colors: BTreeMap<String, String>,
}

impl Theme {
    /// Serializes the theme as a TOML description.
    pub fn to_description(&self) -> Result<String, ThemeParseError> {
        let description = ThemeDescription {
            name: self.name.clone(),
            is_dark: Some(self.is_dark),
            colors: self
                .colors()
                .into_iter()
                .map(|(field, color)| (field.to_string(), color.to_string()))
                .collect(),
        };
        Ok(toml::to_string(&description)?)
    }

    /// Parses a TOML description produced by [`Theme::to_description`] or written by hand.
    ///
    /// When `is_dark` is omitted it is derived from the background luminance.
    pub fn from_description(text: &str) -> Result<Self, ThemeParseError> {
        let description: ThemeDescription = toml::from_str(text)?;

        if description.name.trim().is_empty() {
            return Err(ThemeParseError::EmptyName);
        }

        if let Some(unknown) = description
            .colors
            .keys()
            .find(|key| !Self::COLOR_FIELDS.contains(&key.as_str()))
        {
            return Err(ThemeParseError::UnknownSlot(unknown.clone()));
        }

        let mut theme = crate::presets::default_theme().with_name(description.name.trim());
        for field in Self::COLOR_FIELDS {
            let raw = description
                .colors
                .get(*field)
                .ok_or(ThemeParseError::MissingColor(*field))?;
            let color = Color::parse(raw).map_err(|source| ThemeParseError::InvalidColor {
                field: (*field).to_string(),
                source,
            })?;
            if let Some(slot) = theme.color_mut(field) {
                *slot = color;
            }
        }

        theme.is_dark = description
            .is_dark
            .unwrap_or_else(|| theme.background.luminance() < 0.5);

        tracing::debug!(theme = %theme.name, is_dark = theme.is_dark, "Parsed theme description");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{preset, preset_names};
    use pretty_assertions::assert_eq;

    fn description_without(field: &str) -> String {
        let text = preset("dark").unwrap().to_description().unwrap();
        text.lines()
            .filter(|line| !line.starts_with(&format!("{} =", field)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_round_trip_all_presets() {
        for name in preset_names() {
            let theme = preset(name).unwrap();
            let text = theme.to_description().unwrap();
            assert_eq!(Theme::from_description(&text).unwrap(), theme);
        }
    }

    #[test]
    fn test_description_shape() {
        let text = preset("light").unwrap().to_description().unwrap();
        assert!(text.contains("name = \"light\""));
        assert!(text.contains("[colors]"));
        assert!(text.contains("background = \"#FFFFFF\""));
    }

    #[test]
    fn test_missing_color_is_rejected() {
        let err = Theme::from_description(&description_without("accent")).unwrap_err();
        assert!(matches!(err, ThemeParseError::MissingColor("accent")));
    }

    #[test]
    fn test_malformed_hex_is_rejected() {
        let text = preset("dark")
            .unwrap()
            .to_description()
            .unwrap()
            .replace("background = \"#1E1E1E\"", "background = \"#1E1E\"");
        let err = Theme::from_description(&text).unwrap_err();
        match err {
            ThemeParseError::InvalidColor { field, source } => {
                assert_eq!(field, "background");
                assert_eq!(source, ColorParseError::InvalidLength(4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        let text = format!("{}\nsparkle = \"#FFFFFF\"\n", preset("dark").unwrap().to_description().unwrap());
        assert!(matches!(
            Theme::from_description(&text),
            Err(ThemeParseError::UnknownSlot(slot)) if slot == "sparkle"
        ));
    }

    #[test]
    fn test_is_dark_inferred_when_absent() {
        let text = preset("light")
            .unwrap()
            .to_description()
            .unwrap()
            .replace("is_dark = false\n", "");
        let theme = Theme::from_description(&text).unwrap();
        assert!(!theme.is_dark);
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            Theme::from_description("name = "),
            Err(ThemeParseError::Syntax(_))
        ));
    }

    #[test]
    fn test_palette_references_accepted() {
        let text = preset("dark")
            .unwrap()
            .to_description()
            .unwrap()
            .replace("border = \"#3C3C3C\"", "border = \"ansi256:240\"");
        let theme = Theme::from_description(&text).unwrap();
        assert_eq!(theme.border, Color::Ansi256(240));
    }
}
