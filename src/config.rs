//! Renderer configuration.
//!
//! Loaded from TOML, then overridden by `CORTEX_RENDER_*` environment
//! variables, then by command-line flags.

use std::path::{Path, PathBuf};

use cortex_render_engine::{
    ContentSettings, DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_FPS, RenderScheduler, Renderer,
};
use cortex_render_terminal::{Capabilities, EnvReader, QualityTier, Surface, UnknownTier};
use cortex_render_theme::{Theme, ThemeParseError, preset, preset_names};
use serde::{Deserialize, Deserializer};

/// Environment variable naming the theme preset.
pub const ENV_THEME: &str = "CORTEX_RENDER_THEME";
/// Environment variable pinning the quality tier.
pub const ENV_TIER: &str = "CORTEX_RENDER_TIER";
/// Environment variable setting the cache capacity.
pub const ENV_CACHE: &str = "CORTEX_RENDER_CACHE";

/// Errors raised while loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config or theme file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// No preset has this name.
    #[error("unknown theme `{name}` (available: {available})")]
    UnknownTheme {
        /// Requested name.
        name: String,
        /// Comma-separated preset names.
        available: String,
    },

    /// The tier name was not recognized.
    #[error(transparent)]
    UnknownTier(#[from] UnknownTier),

    /// A theme description file was malformed.
    #[error("invalid theme file: {0}")]
    Theme(#[from] ThemeParseError),

    /// An environment override could not be parsed.
    #[error("invalid value `{value}` for {key}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Theme preset name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Theme description file; takes precedence over `theme`.
    #[serde(default)]
    pub theme_file: Option<PathBuf>,

    /// Fixed quality tier. Detected from capabilities when unset.
    #[serde(default, deserialize_with = "deserialize_tier")]
    pub tier: Option<QualityTier>,

    /// Rendered-content cache entries. Zero disables the cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Frame-rate cap for the scheduler.
    #[serde(default = "default_max_fps")]
    pub max_fps: u32,

    /// Number the lines of highlighted code.
    #[serde(default)]
    pub code_line_numbers: bool,

    /// Spaces per markdown list level.
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Width of markdown horizontal rules.
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_max_fps() -> u32 {
    DEFAULT_MAX_FPS
}

fn default_indent_size() -> usize {
    ContentSettings::default().indent_size
}

fn default_width() -> usize {
    ContentSettings::default().width
}

fn deserialize_tier<'de, D>(deserializer: D) -> Result<Option<QualityTier>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    name.map(|name| name.parse().map_err(serde::de::Error::custom))
        .transpose()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            theme_file: None,
            tier: None,
            cache_capacity: default_cache_capacity(),
            max_fps: default_max_fps(),
            code_line_numbers: false,
            indent_size: default_indent_size(),
            width: default_width(),
        }
    }
}

impl RenderConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded render config");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `CORTEX_RENDER_THEME`, `CORTEX_RENDER_TIER` and `CORTEX_RENDER_CACHE`.
    pub fn apply_env(&mut self, env: &impl EnvReader) -> Result<(), ConfigError> {
        if let Some(theme) = env.var(ENV_THEME) {
            self.theme = theme;
            self.theme_file = None;
        }
        if let Some(tier) = env.var(ENV_TIER) {
            self.tier = Some(tier.parse()?);
        }
        if let Some(cache) = env.var(ENV_CACHE) {
            self.cache_capacity = cache.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_CACHE,
                value: cache.clone(),
            })?;
        }
        Ok(())
    }

    /// Resolves the configured theme.
    pub fn resolve_theme(&self) -> Result<Theme, ConfigError> {
        if let Some(path) = &self.theme_file {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            return Ok(Theme::from_description(&text)?);
        }
        preset(&self.theme).ok_or_else(|| ConfigError::UnknownTheme {
            name: self.theme.clone(),
            available: preset_names().join(", "),
        })
    }

    /// Markdown and code layout settings.
    pub fn content_settings(&self) -> ContentSettings {
        ContentSettings {
            width: self.width,
            indent_size: self.indent_size.max(1),
            code_line_numbers: self.code_line_numbers,
        }
    }

    /// Builds a renderer over `surface` for a terminal with `capabilities`.
    pub fn build_renderer<S: Surface>(
        &self,
        surface: S,
        capabilities: Capabilities,
    ) -> Result<Renderer<S>, ConfigError> {
        let theme = self.resolve_theme()?;
        let mut renderer = Renderer::new(surface, theme)
            .with_cache_capacity(self.cache_capacity)
            .with_content_settings(self.content_settings());
        renderer.set_capabilities(capabilities);
        renderer.set_tier_override(self.tier);
        tracing::debug!(tier = %renderer.tier(), theme = %renderer.theme().name, "Built renderer");
        Ok(renderer)
    }

    /// Builds a frame scheduler paced at `max_fps`, writing frames for the
    /// same tier [`build_renderer`](Self::build_renderer) would pick.
    pub fn build_scheduler(&self, capabilities: &Capabilities) -> RenderScheduler {
        let tier = self
            .tier
            .unwrap_or_else(|| QualityTier::from_capabilities(capabilities));
        tracing::debug!(max_fps = self.max_fps, %tier, "Built scheduler");
        RenderScheduler::new(self.max_fps).with_tier(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_render_core::ColorDepth;
    use cortex_render_terminal::{MapEnv, MemorySurface};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(RenderConfig::from_toml_str("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = RenderConfig::from_toml_str(
            r#"
            theme = "dark"
            tier = "standard"
            cache_capacity = 8
            max_fps = 30
            code_line_numbers = true
            indent_size = 4
            width = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.tier, Some(QualityTier::Standard));
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.max_fps, 30);
        assert!(config.code_line_numbers);
        assert_eq!(config.content_settings().indent_size, 4);
    }

    #[test]
    fn test_bad_tier_and_unknown_keys_are_rejected() {
        assert!(matches!(
            RenderConfig::from_toml_str(r#"tier = "fancy""#),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            RenderConfig::from_toml_str("colour = 1"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RenderConfig::default();
        let env = MapEnv::new()
            .with(ENV_THEME, "light")
            .with(ENV_TIER, "compat:rich")
            .with(ENV_CACHE, "3");
        config.apply_env(&env).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.tier, Some(QualityTier::Ultra));
        assert_eq!(config.cache_capacity, 3);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = RenderConfig::default();
        let env = MapEnv::new().with(ENV_CACHE, "lots");
        assert!(matches!(
            config.apply_env(&env),
            Err(ConfigError::InvalidValue { key: ENV_CACHE, .. })
        ));
        let env = MapEnv::new().with(ENV_TIER, "max");
        assert!(matches!(config.apply_env(&env), Err(ConfigError::UnknownTier(_))));
    }

    #[test]
    fn test_unknown_theme() {
        let config = RenderConfig {
            theme: "neon".to_string(),
            ..RenderConfig::default()
        };
        let err = config.resolve_theme().unwrap_err();
        assert!(err.to_string().starts_with("unknown theme `neon`"));
    }

    #[test]
    fn test_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let theme = Theme::default().with_name("mine");
        std::fs::write(&path, theme.to_description().unwrap()).unwrap();

        let config = RenderConfig {
            theme_file: Some(path),
            ..RenderConfig::default()
        };
        assert_eq!(config.resolve_theme().unwrap().name, "mine");
    }

    #[test]
    fn test_build_renderer_applies_override() {
        let caps = Capabilities {
            color_depth: ColorDepth::TrueColor,
            ..Capabilities::default()
        };
        let renderer = RenderConfig::default()
            .build_renderer(MemorySurface::new(4, 1), caps.clone())
            .unwrap();
        assert_eq!(renderer.tier(), QualityTier::Rich);

        let pinned = RenderConfig {
            tier: Some(QualityTier::Minimal),
            cache_capacity: 0,
            ..RenderConfig::default()
        };
        let renderer = pinned.build_renderer(MemorySurface::new(4, 1), caps).unwrap();
        assert_eq!(renderer.tier(), QualityTier::Minimal);
        assert_eq!(renderer.cache().capacity(), 0);
    }

    #[test]
    fn test_build_scheduler_uses_fps_and_tier() {
        let caps = Capabilities {
            color_depth: ColorDepth::Ansi256,
            ..Capabilities::default()
        };
        let config = RenderConfig::from_toml_str("max_fps = 24").unwrap();
        let scheduler = config.build_scheduler(&caps);
        assert_eq!(scheduler.pacer().max_fps(), 24);
        assert_eq!(scheduler.tier(), QualityTier::Standard);

        let pinned = RenderConfig {
            tier: Some(QualityTier::Ultra),
            ..RenderConfig::default()
        };
        let scheduler = pinned.build_scheduler(&caps);
        assert_eq!(scheduler.pacer().max_fps(), DEFAULT_MAX_FPS);
        assert_eq!(scheduler.tier(), QualityTier::Ultra);
    }

    #[test]
    fn test_unknown_theme_lists_presets() {
        let config = RenderConfig {
            theme: "neon".to_string(),
            ..RenderConfig::default()
        };
        match config.resolve_theme() {
            Err(ConfigError::UnknownTheme { name, available }) => {
                assert_eq!(name, "neon");
                assert_eq!(available, preset_names().join(", "));
            }
            other => panic!("expected UnknownTheme, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderConfig::load("/nonexistent/cortex-render.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
