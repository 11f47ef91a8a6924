//! Line-oriented block renderer.
//!
//! The only state carried between lines is whether a fenced code block is
//! open (plus the width of the last table row, so alignment rows can be drawn
//! as a rule of matching length). Every other line is classified on its own:
//! rule, heading, blockquote, bullet item, ordered item, table row,
//! paragraph, blank.

use crate::code_block::render_code_block;
use crate::inline::{parse_inline, plain_text, render_inline};
use crate::options::MarkdownOptions;
use cortex_render_core::style::Style;
use cortex_render_terminal::QualityTier;
use unicode_width::UnicodeWidthStr;

const FENCE: &str = "```";

/// Prefix and suffix drawn around headings at the rich tiers.
const HEADING_DECOR: [(&str, &str); 6] = [
    ("━━ ", " ━━"),
    ("── ", " ──"),
    ("─ ", ""),
    ("┄ ", ""),
    ("┈ ", ""),
    ("╴ ", ""),
];

/// One classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    Rule,
    Heading {
        level: usize,
        text: &'a str,
    },
    Quote(&'a str),
    Bullet {
        level: usize,
        task: Option<bool>,
        text: &'a str,
    },
    Ordered {
        level: usize,
        number: &'a str,
        text: &'a str,
    },
    TableRow(&'a str),
    Paragraph(&'a str),
    Blank,
}

/// Classifies a line outside of code fences.
pub(crate) fn classify(line: &str, indent_size: usize) -> Block<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Blank;
    }
    if is_rule(trimmed) {
        return Block::Rule;
    }

    let body = line.trim_start();
    if let Some(block) = heading(body) {
        return block;
    }
    if let Some(rest) = body.strip_prefix('>') {
        return Block::Quote(rest.strip_prefix(' ').unwrap_or(rest));
    }

    let level = leading_columns(line, indent_size) / indent_size.max(1);
    if let Some(text) = ["- ", "* ", "+ "].iter().find_map(|m| body.strip_prefix(m)) {
        let (task, text) = task_marker(text);
        return Block::Bullet { level, task, text };
    }
    if let Some((number, text)) = ordered_marker(body) {
        return Block::Ordered {
            level,
            number,
            text,
        };
    }
    if trimmed.contains('|') {
        return Block::TableRow(trimmed);
    }
    Block::Paragraph(line.trim_end())
}

/// Three or more of the same `-`, `*` or `_`, optionally spaced.
fn is_rule(trimmed: &str) -> bool {
    let mut marks = trimmed.chars().filter(|c| !c.is_whitespace());
    let Some(first) = marks.next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_')
        && trimmed.chars().filter(|c| !c.is_whitespace()).count() >= 3
        && marks.all(|c| c == first)
}

fn heading(body: &str) -> Option<Block<'_>> {
    let level = body.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &body[level..];
    if rest.is_empty() {
        return Some(Block::Heading { level, text: "" });
    }
    rest.strip_prefix(' ').map(|text| Block::Heading {
        level,
        text: text.trim(),
    })
}

fn leading_columns(line: &str, indent_size: usize) -> usize {
    line.chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .map(|c| if c == '\t' { indent_size } else { 1 })
        .sum()
}

fn task_marker(text: &str) -> (Option<bool>, &str) {
    for (marker, checked) in [("[ ]", false), ("[x]", true), ("[X]", true)] {
        if let Some(rest) = text.strip_prefix(marker) {
            if rest.is_empty() {
                return (Some(checked), rest);
            }
            if let Some(rest) = rest.strip_prefix(' ') {
                return (Some(checked), rest);
            }
        }
    }
    (None, text)
}

fn ordered_marker(body: &str) -> Option<(&str, &str)> {
    let digits = body.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let rest = &body[digits..];
    let text = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") "))?;
    Some((&body[..digits], text))
}

/// Splits a row on `|`; outer pipes are optional.
fn table_cells(row: &str) -> Vec<&str> {
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(str::trim).collect()
}

fn is_alignment_row(cells: &[&str]) -> bool {
    cells
        .iter()
        .all(|c| c.contains('-') && c.chars().all(|ch| matches!(ch, '-' | ':')))
}

/// An open code fence.
struct Fence<'a> {
    opening: &'a str,
    language: Option<&'a str>,
    body: Vec<&'a str>,
}

fn fence_language(line: &str) -> Option<Option<&str>> {
    let rest = line.trim_start().strip_prefix(FENCE)?;
    Some(rest.split_whitespace().next())
}

/// Renders markdown text for a quality tier.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Creates a renderer.
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Renders `text`.
    ///
    /// Lines are joined with `\n`; a trailing newline in the input is kept.
    /// The minimal tier never emits escape sequences.
    pub fn render(&self, text: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut fence: Option<Fence<'_>> = None;
        let mut table_width = 0usize;

        for line in text.lines() {
            if let Some(open) = fence.as_mut() {
                if fence_language(line).is_some() {
                    out.extend(render_code_block(&open.body, open.language, &self.options));
                    fence = None;
                } else {
                    open.body.push(line);
                }
                continue;
            }
            if let Some(language) = fence_language(line) {
                fence = Some(Fence {
                    opening: line,
                    language,
                    body: Vec::new(),
                });
                continue;
            }
            self.render_block(classify(line, self.options.indent_size), &mut table_width, &mut out);
        }

        if let Some(open) = fence {
            tracing::debug!(lines = open.body.len(), "Unterminated code fence emitted as text");
            out.push(open.opening.to_string());
            out.extend(open.body.iter().map(ToString::to_string));
        }

        let mut rendered = out.join("\n");
        if text.ends_with('\n') {
            rendered.push('\n');
        }
        rendered
    }

    fn render_block(&self, block: Block<'_>, table_width: &mut usize, out: &mut Vec<String>) {
        let opts = &self.options;
        let theme = &opts.theme;
        let tier = opts.tier;
        let depth = tier.color_depth();
        let paint = |style: Style, s: &str| match depth {
            Some(depth) => style.paint(s, depth),
            None => s.to_string(),
        };
        let inline = |text: &str, base: Style| render_inline(&parse_inline(text), tier, theme, base);

        match block {
            Block::Blank => out.push(String::new()),
            Block::Rule => {
                if tier == QualityTier::Minimal {
                    out.push("---".to_string());
                } else {
                    out.push(paint(theme.hr, &"─".repeat(opts.width)));
                }
            }
            Block::Heading { level, text } => {
                let style = theme.heading(level);
                match tier {
                    QualityTier::Minimal => {
                        out.push(format!("{} {}", "#".repeat(level), inline(text, style)));
                    }
                    QualityTier::Standard => {
                        out.push(inline(text, style));
                        if level <= 2 {
                            let width = plain_text(&parse_inline(text)).width();
                            let mark = if level == 1 { "=" } else { "-" };
                            out.push(paint(style, &mark.repeat(width)));
                        }
                    }
                    QualityTier::Rich | QualityTier::Ultra => {
                        let (prefix, suffix) = HEADING_DECOR[level - 1];
                        let mut line = paint(style, prefix);
                        line.push_str(&inline(text, style));
                        if !suffix.is_empty() {
                            line.push_str(&paint(style, suffix));
                        }
                        out.push(line);
                    }
                }
            }
            Block::Quote(text) => {
                if tier == QualityTier::Minimal {
                    out.push(format!("> {}", inline(text, Style::new())));
                } else {
                    let bar = paint(theme.blockquote_bar, "│ ");
                    out.push(format!("{bar}{}", inline(text, theme.blockquote_text)));
                }
            }
            Block::Bullet { level, task, text } => {
                let indent = " ".repeat(level * opts.indent_size);
                let marker = match (tier, task) {
                    (QualityTier::Rich | QualityTier::Ultra, Some(true)) => {
                        paint(theme.task_checked, "☑")
                    }
                    (QualityTier::Rich | QualityTier::Ultra, Some(false)) => {
                        paint(theme.task_unchecked, "☐")
                    }
                    (QualityTier::Minimal, Some(checked)) => {
                        format!("- [{}]", if checked { 'x' } else { ' ' })
                    }
                    (_, Some(checked)) => format!(
                        "{} [{}]",
                        paint(theme.list_bullet, "•"),
                        if checked { 'x' } else { ' ' }
                    ),
                    (QualityTier::Minimal, None) => "-".to_string(),
                    (_, None) => paint(theme.list_bullet, "•"),
                };
                out.push(format!("{indent}{marker} {}", inline(text, Style::new())));
            }
            Block::Ordered {
                level,
                number,
                text,
            } => {
                let indent = " ".repeat(level * opts.indent_size);
                let marker = paint(theme.list_number, &format!("{number}."));
                out.push(format!("{indent}{marker} {}", inline(text, Style::new())));
            }
            Block::TableRow(row) => {
                let cells = table_cells(row);
                if is_alignment_row(&cells) {
                    let width = if *table_width > 0 { *table_width } else { row.width() };
                    let rule = if tier == QualityTier::Minimal {
                        "-".repeat(width)
                    } else {
                        paint(theme.table_border, &"─".repeat(width))
                    };
                    out.push(rule);
                    return;
                }
                let glyph = if tier == QualityTier::Minimal { "|" } else { "│" };
                let sep = paint(theme.table_border, glyph);
                let rendered: Vec<String> =
                    cells.iter().map(|c| inline(c, Style::new())).collect();
                out.push(format!("{sep} {} {sep}", rendered.join(&format!(" {sep} "))));

                let plain: Vec<String> =
                    cells.iter().map(|c| plain_text(&parse_inline(c))).collect();
                *table_width = format!("| {} |", plain.join(" | ")).width();
            }
            Block::Paragraph(text) => out.push(inline(text, Style::new())),
        }
    }
}

/// Renders `text` with `options`.
pub fn render_markdown(text: &str, options: &MarkdownOptions) -> String {
    MarkdownRenderer::new(options.clone()).render(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::strip_ansi;
    use cortex_render_theme::Theme;
    use pretty_assertions::assert_eq;

    fn render(text: &str, tier: QualityTier) -> String {
        render_markdown(text, &MarkdownOptions::new(tier, &Theme::default()).with_width(10))
    }

    mod classify {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_priority_order() {
            assert_eq!(classify("---", 2), Block::Rule);
            assert_eq!(classify("* * *", 2), Block::Rule);
            assert_eq!(classify("## Title", 2), Block::Heading { level: 2, text: "Title" });
            assert_eq!(classify("#hashtag", 2), Block::Paragraph("#hashtag"));
            assert_eq!(classify("> quoted", 2), Block::Quote("quoted"));
            assert_eq!(
                classify("- item", 2),
                Block::Bullet {
                    level: 0,
                    task: None,
                    text: "item"
                }
            );
            assert_eq!(
                classify("12. twelve", 2),
                Block::Ordered {
                    level: 0,
                    number: "12",
                    text: "twelve"
                }
            );
            assert_eq!(classify("| a | b |", 2), Block::TableRow("| a | b |"));
            assert_eq!(classify("a | b", 2), Block::TableRow("a | b"));
            assert_eq!(classify("  | a | b  ", 2), Block::TableRow("| a | b"));
            assert_eq!(classify("plain", 2), Block::Paragraph("plain"));
            assert_eq!(classify("   ", 2), Block::Blank);
        }

        #[test]
        fn test_nesting_level_from_indent() {
            assert_eq!(
                classify("    * deep", 2),
                Block::Bullet {
                    level: 2,
                    task: None,
                    text: "deep"
                }
            );
            assert_eq!(
                classify("\t+ tab", 4),
                Block::Bullet {
                    level: 1,
                    task: None,
                    text: "tab"
                }
            );
        }

        #[test]
        fn test_task_items() {
            assert_eq!(
                classify("- [x] done", 2),
                Block::Bullet {
                    level: 0,
                    task: Some(true),
                    text: "done"
                }
            );
            assert_eq!(
                classify("- [ ] todo", 2),
                Block::Bullet {
                    level: 0,
                    task: Some(false),
                    text: "todo"
                }
            );
        }

        #[test]
        fn test_seven_hashes_is_paragraph() {
            assert_eq!(classify("####### x", 2), Block::Paragraph("####### x"));
        }
    }

    mod minimal {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_document_has_no_escapes() {
            let doc = "# Title\n\nSome **bold** and `code`.\n\n- [x] done\n> quote\n\n```rust\nfn main() {}\n```\n| a | b |\n|---|---|\n***\n";
            let out = render(doc, QualityTier::Minimal);
            assert!(!out.contains('\x1b'));
            assert_eq!(
                out,
                "# Title\n\nSome bold and `code`.\n\n- [x] done\n> quote\n\nfn main() {}\n| a | b |\n---------\n---\n"
            );
        }

        #[test]
        fn test_links_show_url() {
            assert_eq!(render("[site](http://a.b)", QualityTier::Minimal), "site (http://a.b)");
        }

        #[test]
        fn test_ordered_and_nested_lists() {
            let out = render("1. one\n  - two", QualityTier::Minimal);
            assert_eq!(out, "1. one\n  - two");
        }
    }

    mod standard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_heading_underlines() {
            let out = strip_ansi(&render("# Hello\n## Sub\n### Three", QualityTier::Standard));
            assert_eq!(out, "Hello\n=====\nSub\n---\nThree");
        }

        #[test]
        fn test_go_fence_is_framed_but_not_highlighted() {
            let out = render("```go\nfunc main() {}\n```", QualityTier::Standard);
            assert!(out.contains("func main() {}"));
            let plain = strip_ansi(&out);
            assert!(plain.starts_with("+- go "));
            assert!(plain.contains("| func main() {} |"));
        }

        #[test]
        fn test_bullets_quotes_and_rules() {
            let out = strip_ansi(&render("- a\n> q\n---", QualityTier::Standard));
            assert_eq!(out, "• a\n│ q\n──────────");
        }

        #[test]
        fn test_table() {
            let out = strip_ansi(&render("| a | bb |\n|:--|--:|\n| c | d |", QualityTier::Standard));
            assert_eq!(out, "│ a │ bb │\n──────────\n│ c │ d │");
        }

        #[test]
        fn test_table_without_outer_pipes() {
            let out = strip_ansi(&render("a | b\n--|--\n| c | d", QualityTier::Standard));
            assert_eq!(out, "│ a │ b │\n─────────\n│ c │ d │");
        }
    }

    mod rich {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_heading_decoration() {
            let out = strip_ansi(&render("# Top\n### Third", QualityTier::Rich));
            assert_eq!(out, "━━ Top ━━\n─ Third");
        }

        #[test]
        fn test_task_checkboxes() {
            let out = strip_ansi(&render("- [x] done\n- [ ] todo", QualityTier::Rich));
            assert_eq!(out, "☑ done\n☐ todo");
        }

        #[test]
        fn test_fence_is_highlighted() {
            let out = render("```rust\nlet x = 1;\n```", QualityTier::Ultra);
            assert!(!out.contains("let x = 1;"));
            assert_eq!(
                strip_ansi(&out),
                "╭─ rust ─────╮\n│ let x = 1; │\n╰────────────╯"
            );
        }
    }

    #[test]
    fn test_unterminated_fence_is_literal() {
        let out = render("intro\n```python\nprint(1)\n", QualityTier::Rich);
        assert_eq!(out, "intro\n```python\nprint(1)\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render("", QualityTier::Rich), "");
    }
}
