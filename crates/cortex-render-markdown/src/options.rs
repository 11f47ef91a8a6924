//! Rendering options.

use crate::theme::MarkdownTheme;
use cortex_render_syntax::SyntaxPalette;
use cortex_render_terminal::QualityTier;
use cortex_render_theme::Theme;

/// Default output width used for horizontal rules.
pub const DEFAULT_WIDTH: usize = 80;

/// Default spaces per list nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Settings for [`crate::MarkdownRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Output richness.
    pub tier: QualityTier,
    /// Width of horizontal rules, in columns.
    pub width: usize,
    /// Spaces per list nesting level.
    pub indent_size: usize,
    /// Number the lines of fenced code blocks.
    pub code_line_numbers: bool,
    /// Element styles.
    pub theme: MarkdownTheme,
    /// Token colors for fenced code.
    pub syntax: SyntaxPalette,
}

impl MarkdownOptions {
    /// Options for `tier` styled from `theme`.
    pub fn new(tier: QualityTier, theme: &Theme) -> Self {
        Self {
            tier,
            width: DEFAULT_WIDTH,
            indent_size: DEFAULT_INDENT,
            code_line_numbers: false,
            theme: MarkdownTheme::from_theme(theme),
            syntax: SyntaxPalette::from_theme(theme),
        }
    }

    /// Sets the rule width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the list indent. Zero is treated as one.
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size.max(1);
        self
    }

    /// Enables line numbers in fenced code.
    #[must_use]
    pub fn with_code_line_numbers(mut self, enabled: bool) -> Self {
        self.code_line_numbers = enabled;
        self
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self::new(QualityTier::Rich, &Theme::default())
    }
}
