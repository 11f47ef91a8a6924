//! ANSI highlighting of token streams.

use crate::languages::tokenize;
use crate::token::{Token, TokenKind};
use cortex_render_core::color::ColorDepth;
use cortex_render_core::style::Style;
use cortex_render_terminal::QualityTier;
use cortex_render_theme::Theme;

/// Style for each token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxPalette {
    styles: [Option<Style>; TokenKind::ALL.len()],
    gutter: Style,
}

impl SyntaxPalette {
    /// A palette with no styling at all.
    pub fn plain() -> Self {
        Self {
            styles: [None; TokenKind::ALL.len()],
            gutter: Style::new(),
        }
    }

    /// Derives token colors from a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut palette = Self::plain();
        palette
            .set(TokenKind::Keyword, Style::with_fg(theme.magenta).bold())
            .set(TokenKind::Builtin, Style::with_fg(theme.cyan))
            .set(TokenKind::Type, Style::with_fg(theme.yellow))
            .set(TokenKind::Function, Style::with_fg(theme.blue))
            .set(TokenKind::Variable, Style::with_fg(theme.foreground))
            .set(TokenKind::Constant, Style::with_fg(theme.bright_cyan))
            .set(TokenKind::String, Style::with_fg(theme.green))
            .set(TokenKind::Number, Style::with_fg(theme.bright_yellow))
            .set(TokenKind::Comment, Style::with_fg(theme.muted).italic())
            .set(TokenKind::Decorator, Style::with_fg(theme.accent))
            .set(TokenKind::Operator, Style::with_fg(theme.bright_magenta))
            .set(TokenKind::Bracket, Style::with_fg(theme.foreground))
            .set(TokenKind::Punctuation, Style::with_fg(theme.muted));
        palette.gutter = Style::with_fg(theme.muted);
        palette
    }

    /// Overrides the style of one kind.
    pub fn set(&mut self, kind: TokenKind, style: Style) -> &mut Self {
        self.styles[kind.index()] = Some(style);
        self
    }

    /// Style for `kind`. Text and whitespace are never styled.
    pub fn style(&self, kind: TokenKind) -> Option<Style> {
        match kind {
            TokenKind::Text | TokenKind::Whitespace => None,
            _ => self.styles[kind.index()],
        }
    }

    /// Style of the line-number gutter.
    pub fn gutter(&self) -> Style {
        self.gutter
    }
}

impl Default for SyntaxPalette {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Settings for [`highlight`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Output richness.
    pub tier: QualityTier,
    /// Prefix each line with its number.
    pub line_numbers: bool,
    /// Token colors.
    pub palette: SyntaxPalette,
}

impl HighlightOptions {
    /// Options for `tier` with colors from `theme`.
    pub fn new(tier: QualityTier, theme: &Theme) -> Self {
        Self {
            tier,
            line_numbers: false,
            palette: SyntaxPalette::from_theme(theme),
        }
    }

    /// Enables or disables the line-number gutter.
    #[must_use]
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self::new(QualityTier::Rich, &Theme::default())
    }
}

/// Highlights `code` as `language` with ANSI escapes.
///
/// The minimal tier returns the input unchanged. Otherwise every styled token
/// is wrapped in its color, 256-color at the standard tier and truecolor
/// above. Unknown languages pass through as plain text.
pub fn highlight(code: &str, language: &str, options: &HighlightOptions) -> String {
    let Some(depth) = options.tier.color_depth() else {
        return code.to_string();
    };
    if !options.line_numbers {
        return paint(&tokenize(code, language), &options.palette, depth);
    }

    let lines: Vec<&str> = code.split('\n').collect();
    let width = lines.len().to_string().len();
    let bar = if options.tier.uses_box_drawing() { '│' } else { '|' };
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let gutter = format!("{:>width$} {bar} ", index + 1);
            let body = paint(&tokenize(line, language), &options.palette, depth);
            format!("{}{}", options.palette.gutter().paint(&gutter, depth), body)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializes tokens, wrapping styled ones in SGR sequences.
pub fn paint(tokens: &[Token<'_>], palette: &SyntaxPalette, depth: ColorDepth) -> String {
    let mut out = String::new();
    for token in tokens {
        match palette.style(token.kind) {
            Some(style) => out.push_str(&style.paint(token.text, depth)),
            None => out.push_str(token.text),
        }
    }
    out
}
