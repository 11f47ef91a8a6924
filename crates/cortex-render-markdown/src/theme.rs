//! Styles for markdown elements.

use cortex_render_core::style::Style;
use cortex_render_theme::Theme;

/// Style of every markdown element, derived from a color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownTheme {
    /// Heading styles, `headings[0]` for level 1.
    pub headings: [Style; 6],
    /// `**bold**`
    pub bold: Style,
    /// `*italic*`
    pub italic: Style,
    /// `~~strikethrough~~`
    pub strikethrough: Style,
    /// `` `code` ``
    pub code_inline: Style,
    /// Code block frame.
    pub code_border: Style,
    /// Language tag in the code block frame.
    pub code_lang_tag: Style,
    /// Blockquote bar.
    pub blockquote_bar: Style,
    /// Blockquote text.
    pub blockquote_text: Style,
    /// List bullets.
    pub list_bullet: Style,
    /// Ordered list numbers.
    pub list_number: Style,
    /// `☑`
    pub task_checked: Style,
    /// `☐`
    pub task_unchecked: Style,
    /// Table separators and rules.
    pub table_border: Style,
    /// Link text.
    pub link_text: Style,
    /// Link target.
    pub link_url: Style,
    /// Horizontal rules.
    pub hr: Style,
}

impl MarkdownTheme {
    /// Derives element styles from `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            headings: [
                Style::with_fg(theme.accent).bold(),
                Style::with_fg(theme.blue).bold(),
                Style::with_fg(theme.cyan).bold(),
                Style::with_fg(theme.green).bold(),
                Style::with_fg(theme.yellow).bold(),
                Style::with_fg(theme.muted).bold(),
            ],
            bold: Style::new().bold(),
            italic: Style::new().italic(),
            strikethrough: Style::new().strikethrough(),
            code_inline: Style::with_fg(theme.yellow).bg(theme.highlight),
            code_border: Style::with_fg(theme.border),
            code_lang_tag: Style::with_fg(theme.accent).italic(),
            blockquote_bar: Style::with_fg(theme.accent),
            blockquote_text: Style::with_fg(theme.muted).italic(),
            list_bullet: Style::with_fg(theme.accent),
            list_number: Style::with_fg(theme.accent),
            task_checked: Style::with_fg(theme.success),
            task_unchecked: Style::with_fg(theme.muted),
            table_border: Style::with_fg(theme.border),
            link_text: Style::with_fg(theme.blue).underline(),
            link_url: Style::with_fg(theme.muted),
            hr: Style::with_fg(theme.border),
        }
    }

    /// Style for a heading of `level` (clamped to 1..=6).
    pub fn heading(&self, level: usize) -> Style {
        self.headings[level.clamp(1, 6) - 1]
    }
}

impl Default for MarkdownTheme {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
