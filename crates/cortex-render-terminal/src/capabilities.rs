//! Terminal capability detection.
//!
//! Detects supported features from `TERM`, `COLORTERM`, `TERM_PROGRAM` and the
//! locale variables. A [`Capabilities`] value is an immutable snapshot: it is
//! never updated in place, a new detection replaces it.

use crate::env::{EnvReader, ProcessEnv};
use cortex_render_core::color::ColorDepth;

/// Inline image protocol supported by the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GraphicsProtocol {
    /// No image support.
    #[default]
    None,
    /// DEC Sixel graphics.
    Sixel,
    /// Kitty graphics protocol.
    Kitty,
    /// iTerm2 inline images.
    Iterm2,
}

impl GraphicsProtocol {
    /// Returns `true` for any protocol other than `None`.
    #[inline]
    pub fn is_supported(self) -> bool {
        self != Self::None
    }
}

/// Snapshot of what the attached terminal supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Inline image protocol.
    pub graphics: GraphicsProtocol,
    /// Color depth.
    pub color_depth: ColorDepth,
    /// Whether the locale advertises UTF-8.
    pub unicode: bool,
    /// Mouse reporting support.
    pub mouse: bool,
    /// Kitty keyboard protocol support.
    pub kitty_keyboard: bool,
    /// Synchronized output (DEC 2026) support.
    pub synchronized_output: bool,
    /// Value of `TERM`, if set.
    pub term_name: Option<String>,
    /// Value of `TERM_PROGRAM`, if set.
    pub term_program: Option<String>,
}

impl Default for Capabilities {
    /// The most conservative terminal: 16 colors, ASCII, no extras.
    fn default() -> Self {
        Self {
            graphics: GraphicsProtocol::None,
            color_depth: ColorDepth::Ansi16,
            unicode: false,
            mouse: false,
            kitty_keyboard: false,
            synchronized_output: false,
            term_name: None,
            term_program: None,
        }
    }
}

impl Capabilities {
    /// Detects capabilities from the process environment.
    pub fn detect() -> Self {
        Self::detect_with(&ProcessEnv)
    }

    /// Detects capabilities from an injected environment.
    ///
    /// Missing variables mean "feature absent"; detection never fails.
    pub fn detect_with(env: &impl EnvReader) -> Self {
        let mut caps = Self {
            unicode: Self::detect_unicode(env),
            term_name: env.var("TERM"),
            term_program: env.var("TERM_PROGRAM"),
            ..Self::default()
        };

        // COLORTERM is the most reliable truecolor signal
        if let Some(colorterm) = env.var("COLORTERM") {
            if matches!(colorterm.to_lowercase().as_str(), "truecolor" | "24bit") {
                caps.color_depth = ColorDepth::TrueColor;
            }
        }

        let recognized = caps
            .term_program
            .clone()
            .is_some_and(|program| caps.apply_program(&program));

        let term = caps.term_name.clone().unwrap_or_default().to_lowercase();
        if !recognized && term.contains("256color") && caps.color_depth < ColorDepth::Ansi256 {
            caps.color_depth = ColorDepth::Ansi256;
        }

        if term.contains("xterm") || term.contains("screen") || term.contains("tmux") {
            caps.mouse = true;
        }

        if caps.graphics == GraphicsProtocol::None {
            if term == "xterm-kitty" {
                caps.graphics = GraphicsProtocol::Kitty;
                caps.kitty_keyboard = true;
            } else if term.contains("sixel") || term == "foot" || term == "mlterm" {
                caps.graphics = GraphicsProtocol::Sixel;
            }
        }

        tracing::debug!(
            graphics = ?caps.graphics,
            color_depth = %caps.color_depth,
            unicode = caps.unicode,
            mouse = caps.mouse,
            kitty_keyboard = caps.kitty_keyboard,
            "Detected terminal capabilities"
        );

        caps
    }

    /// Detects capabilities, letting an active query refine the passive result.
    ///
    /// Falls back to the environment-derived snapshot when the query declines.
    pub fn detect_active(env: &impl EnvReader, query: &mut dyn CapabilityQuery) -> Self {
        let passive = Self::detect_with(env);
        match query.query(&passive) {
            Some(answered) => {
                tracing::debug!("Terminal query refined capabilities");
                answered
            }
            None => passive,
        }
    }

    fn detect_unicode(env: &impl EnvReader) -> bool {
        ["LC_ALL", "LANG"].iter().any(|key| {
            env.var(key).is_some_and(|value| {
                let value = value.to_lowercase();
                value.contains("utf-8") || value.contains("utf8")
            })
        })
    }

    /// Applies overrides for terminals identified by `TERM_PROGRAM`.
    ///
    /// Returns `true` when the program was recognized.
    fn apply_program(&mut self, program: &str) -> bool {
        match program.to_lowercase().as_str() {
            "kitty" => {
                self.graphics = GraphicsProtocol::Kitty;
                self.color_depth = ColorDepth::TrueColor;
                self.kitty_keyboard = true;
                self.synchronized_output = true;
                true
            }
            "wezterm" => {
                self.graphics = GraphicsProtocol::Kitty;
                self.color_depth = ColorDepth::TrueColor;
                self.kitty_keyboard = true;
                self.synchronized_output = true;
                true
            }
            "iterm.app" => {
                self.graphics = GraphicsProtocol::Iterm2;
                self.color_depth = ColorDepth::TrueColor;
                self.synchronized_output = true;
                true
            }
            _ => false,
        }
    }

    /// Returns whether true color is supported.
    #[inline]
    pub fn has_true_color(&self) -> bool {
        self.color_depth == ColorDepth::TrueColor
    }

    /// Returns whether an inline image protocol is available.
    #[inline]
    pub fn has_graphics(&self) -> bool {
        self.graphics.is_supported()
    }
}

/// Active terminal probe (e.g. DA1/XTGETTCAP round trips).
///
/// Implementations receive the passive snapshot and may return a refined one.
pub trait CapabilityQuery {
    /// Queries the terminal. `None` keeps the passive result.
    fn query(&mut self, passive: &Capabilities) -> Option<Capabilities>;
}

/// A query that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuery;

impl CapabilityQuery for NoQuery {
    fn query(&mut self, _passive: &Capabilities) -> Option<Capabilities> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_environment_defaults() {
        let caps = Capabilities::detect_with(&MapEnv::new());
        assert_eq!(caps, Capabilities::default());
    }

    #[test]
    fn test_colorterm_truecolor() {
        for value in ["truecolor", "24bit", "TrueColor"] {
            let env = MapEnv::new().with("COLORTERM", value);
            assert_eq!(Capabilities::detect_with(&env).color_depth, ColorDepth::TrueColor);
        }
        let env = MapEnv::new().with("COLORTERM", "yes");
        assert_eq!(Capabilities::detect_with(&env).color_depth, ColorDepth::Ansi16);
    }

    #[test]
    fn test_term_256color() {
        let env = MapEnv::new().with("TERM", "xterm-256color");
        let caps = Capabilities::detect_with(&env);
        assert_eq!(caps.color_depth, ColorDepth::Ansi256);
        assert!(caps.mouse);
        assert_eq!(caps.term_name.as_deref(), Some("xterm-256color"));
    }

    #[test]
    fn test_256color_does_not_downgrade_truecolor() {
        let env = MapEnv::new()
            .with("TERM", "screen-256color")
            .with("COLORTERM", "truecolor");
        assert_eq!(Capabilities::detect_with(&env).color_depth, ColorDepth::TrueColor);
    }

    #[test]
    fn test_term_program_overrides() {
        let cases = [
            ("kitty", GraphicsProtocol::Kitty, true),
            ("WezTerm", GraphicsProtocol::Kitty, true),
            ("iTerm.app", GraphicsProtocol::Iterm2, false),
        ];
        for (program, graphics, kitty_keyboard) in cases {
            let env = MapEnv::new().with("TERM_PROGRAM", program);
            let caps = Capabilities::detect_with(&env);
            assert_eq!(caps.graphics, graphics, "{}", program);
            assert_eq!(caps.color_depth, ColorDepth::TrueColor, "{}", program);
            assert_eq!(caps.kitty_keyboard, kitty_keyboard, "{}", program);
        }
    }

    #[test]
    fn test_unrecognized_program_is_ignored() {
        let env = MapEnv::new().with("TERM_PROGRAM", "Apple_Terminal");
        let caps = Capabilities::detect_with(&env);
        assert_eq!(caps.graphics, GraphicsProtocol::None);
        assert_eq!(caps.color_depth, ColorDepth::Ansi16);
    }

    #[test]
    fn test_unicode_from_locale() {
        let env = MapEnv::new().with("LANG", "en_US.UTF-8");
        assert!(Capabilities::detect_with(&env).unicode);

        let env = MapEnv::new().with("LC_ALL", "de_DE.utf8");
        assert!(Capabilities::detect_with(&env).unicode);

        let env = MapEnv::new().with("LANG", "C");
        assert!(!Capabilities::detect_with(&env).unicode);
    }

    #[test]
    fn test_sixel_terminals() {
        for term in ["foot", "mlterm", "xterm-sixel"] {
            let env = MapEnv::new().with("TERM", term);
            assert_eq!(
                Capabilities::detect_with(&env).graphics,
                GraphicsProtocol::Sixel,
                "{}",
                term
            );
        }
    }

    #[test]
    fn test_kitty_term_name() {
        let env = MapEnv::new().with("TERM", "xterm-kitty");
        let caps = Capabilities::detect_with(&env);
        assert_eq!(caps.graphics, GraphicsProtocol::Kitty);
        assert!(caps.mouse);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let env = MapEnv::new()
            .with("TERM", "xterm-256color")
            .with("TERM_PROGRAM", "WezTerm")
            .with("LANG", "C.UTF-8");
        assert_eq!(Capabilities::detect_with(&env), Capabilities::detect_with(&env));
    }

    struct FixedQuery(Option<ColorDepth>);

    impl CapabilityQuery for FixedQuery {
        fn query(&mut self, passive: &Capabilities) -> Option<Capabilities> {
            self.0.map(|color_depth| Capabilities {
                color_depth,
                ..passive.clone()
            })
        }
    }

    #[test]
    fn test_active_query_refines_or_falls_back() {
        let env = MapEnv::new().with("TERM", "xterm");
        let refined =
            Capabilities::detect_active(&env, &mut FixedQuery(Some(ColorDepth::TrueColor)));
        assert_eq!(refined.color_depth, ColorDepth::TrueColor);

        let fallback = Capabilities::detect_active(&env, &mut NoQuery);
        assert_eq!(fallback, Capabilities::detect_with(&env));
    }
}
