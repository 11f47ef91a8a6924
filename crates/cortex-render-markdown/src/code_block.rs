//! Fenced code block framing.

use crate::options::MarkdownOptions;
use cortex_render_syntax::{HighlightOptions, highlight};
use unicode_width::UnicodeWidthStr;

/// Columns a tab expands to inside code blocks.
pub const TAB_WIDTH: usize = 4;

/// Renders the body of a closed fence.
///
/// - Rich and above: rounded box-drawing frame with the language in the top
///   edge, highlighted body.
/// - Standard: ASCII `+-+` frame, body verbatim.
/// - Minimal: body verbatim, no frame.
pub fn render_code_block(
    lines: &[&str],
    language: Option<&str>,
    options: &MarkdownOptions,
) -> Vec<String> {
    let tab = " ".repeat(TAB_WIDTH);
    let expanded: Vec<String> = lines.iter().map(|l| l.replace('\t', &tab)).collect();
    let tier = options.tier;
    let Some(depth) = tier.color_depth() else {
        return expanded;
    };

    let gutter_width = if options.code_line_numbers {
        expanded.len().to_string().len() + 1
    } else {
        0
    };
    let tag = language.filter(|l| !l.is_empty());
    let body_width = expanded.iter().map(|l| l.width()).max().unwrap_or(0) + gutter_width;
    let tag_width = tag.map_or(0, |t| t.width() + 2);
    let inner = body_width.max(tag_width + 1);

    let glyphs = if tier.uses_box_drawing() {
        Frame::ROUNDED
    } else {
        Frame::ASCII
    };
    let border = |s: &str| options.theme.code_border.paint(s, depth);

    let mut out = Vec::with_capacity(expanded.len() + 2);

    // top edge: corner, one rule, optional " lang ", rule to the corner
    let mut top = border(&format!("{}{}", glyphs.top_left, glyphs.horizontal));
    let mut used = 1;
    if let Some(tag) = tag {
        top.push(' ');
        top.push_str(&options.theme.code_lang_tag.paint(tag, depth));
        top.push(' ');
        used += tag_width;
    }
    let rest = (inner + 2).saturating_sub(used);
    top.push_str(&border(&format!(
        "{}{}",
        glyphs.horizontal.to_string().repeat(rest),
        glyphs.top_right
    )));
    out.push(top);

    let highlight_options = HighlightOptions {
        tier,
        line_numbers: false,
        palette: options.syntax.clone(),
    };
    for (index, line) in expanded.iter().enumerate() {
        let body = match (tier.uses_box_drawing(), tag) {
            (true, Some(lang)) => highlight(line, lang, &highlight_options),
            _ => line.clone(),
        };
        let gutter = if options.code_line_numbers {
            let number = format!("{:>w$} ", index + 1, w = gutter_width - 1);
            options.syntax.gutter().paint(&number, depth)
        } else {
            String::new()
        };
        let pad = inner.saturating_sub(line.width() + gutter_width);
        out.push(format!(
            "{} {}{}{} {}",
            border(&glyphs.vertical.to_string()),
            gutter,
            body,
            " ".repeat(pad),
            border(&glyphs.vertical.to_string())
        ));
    }

    out.push(border(&format!(
        "{}{}{}",
        glyphs.bottom_left,
        glyphs.horizontal.to_string().repeat(inner + 2),
        glyphs.bottom_right
    )));
    out
}

struct Frame {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl Frame {
    const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::strip_ansi;
    use cortex_render_terminal::QualityTier;
    use cortex_render_theme::Theme;
    use pretty_assertions::assert_eq;

    fn options(tier: QualityTier) -> MarkdownOptions {
        MarkdownOptions::new(tier, &Theme::default())
    }

    #[test]
    fn test_minimal_is_verbatim() {
        let out = render_code_block(&["a\tb", "c"], Some("go"), &options(QualityTier::Minimal));
        assert_eq!(out, vec!["a    b", "c"]);
    }

    #[test]
    fn test_standard_ascii_frame_without_highlighting() {
        let opts = options(QualityTier::Standard);
        let out = render_code_block(&["func main() {}"], Some("go"), &opts);
        let plain: Vec<String> = out.iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(
            plain,
            vec![
                "+- go -----------+",
                "| func main() {} |",
                "+----------------+",
            ]
        );
        assert!(out[1].contains("func main() {}"));
    }

    #[test]
    fn test_rich_rounded_frame_with_highlighting() {
        let out = render_code_block(&["fn x() {}"], Some("rust"), &options(QualityTier::Rich));
        let plain: Vec<String> = out.iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(
            plain,
            vec!["╭─ rust ────╮", "│ fn x() {} │", "╰───────────╯"]
        );
        assert!(!out[1].contains("fn x() {}"), "body should be highlighted");
    }

    #[test]
    fn test_untagged_block() {
        let out = render_code_block(&["ab"], None, &options(QualityTier::Rich));
        let plain: Vec<String> = out.iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(plain, vec!["╭────╮", "│ ab │", "╰────╯"]);
    }

    #[test]
    fn test_line_numbers() {
        let opts = options(QualityTier::Standard).with_code_line_numbers(true);
        let out = render_code_block(&["a", "b"], None, &opts);
        let plain: Vec<String> = out.iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(plain[1], "| 1 a |");
        assert_eq!(plain[2], "| 2 b |");
    }
}
