//! Inline markdown: code, links, bold, strikethrough and italic.
//!
//! The scanner works left to right. At each position it tries, in order,
//! inline code, a link, bold (`**`/`__`), strikethrough (`~~`) and italic
//! (`*`/`_`). A delimiter without a matching closer stays literal text.

use crate::theme::MarkdownTheme;
use cortex_render_core::style::{Style, TextAttributes};
use cortex_render_terminal::QualityTier;

/// What an inline span represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind<'a> {
    /// Running text.
    Text,
    /// `` `code` ``, stored without the backticks.
    Code,
    /// `[text](url)`; the span text is the link text.
    Link {
        /// Link target.
        url: &'a str,
    },
}

/// A run of inline content with its emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSpan<'a> {
    /// Content without markers.
    pub text: &'a str,
    /// Content type.
    pub kind: SpanKind<'a>,
    /// Bold, italic and strikethrough flags from enclosing delimiters.
    pub attributes: TextAttributes,
}

impl<'a> InlineSpan<'a> {
    fn new(text: &'a str, kind: SpanKind<'a>, attributes: TextAttributes) -> Self {
        Self {
            text,
            kind,
            attributes,
        }
    }
}

/// Splits a line into inline spans.
pub fn parse_inline(src: &str) -> Vec<InlineSpan<'_>> {
    let mut spans = Vec::new();
    scan(src, TextAttributes::empty(), &mut spans);
    spans
}

fn scan<'a>(src: &'a str, attrs: TextAttributes, out: &mut Vec<InlineSpan<'a>>) {
    let mut plain = 0;
    let mut i = 0;
    while i < src.len() {
        let rest = &src[i..];
        let before = src[..i].chars().next_back();
        if let Some(consumed) = try_construct(rest, before, attrs, &src[..i], plain, out) {
            i += consumed;
            plain = i;
            continue;
        }
        i += rest.chars().next().map_or(1, char::len_utf8);
    }
    if plain < src.len() {
        out.push(InlineSpan::new(&src[plain..], SpanKind::Text, attrs));
    }
}

/// Tries every construct at the start of `rest`. On success flushes the
/// pending plain text, emits the construct and returns the bytes consumed.
fn try_construct<'a>(
    rest: &'a str,
    before: Option<char>,
    attrs: TextAttributes,
    head: &'a str,
    plain: usize,
    out: &mut Vec<InlineSpan<'a>>,
) -> Option<usize> {
    let flush = |out: &mut Vec<InlineSpan<'a>>| {
        if plain < head.len() {
            out.push(InlineSpan::new(&head[plain..], SpanKind::Text, attrs));
        }
    };

    if let Some(code) = rest.strip_prefix('`') {
        let end = code.find('`').filter(|end| *end > 0)?;
        flush(out);
        out.push(InlineSpan::new(&code[..end], SpanKind::Code, attrs));
        return Some(end + 2);
    }

    if let Some(body) = rest.strip_prefix('[') {
        if let Some((text_end, url_end)) = link_bounds(body) {
            flush(out);
            let url = &body[text_end + 2..url_end];
            out.push(InlineSpan::new(&body[..text_end], SpanKind::Link { url }, attrs));
            return Some(url_end + 2);
        }
        return None;
    }

    let delimited = [
        ("**", TextAttributes::BOLD),
        ("__", TextAttributes::BOLD),
        ("~~", TextAttributes::STRIKETHROUGH),
        ("*", TextAttributes::ITALIC),
        ("_", TextAttributes::ITALIC),
    ];
    for (delim, flag) in delimited {
        let Some(inner) = rest.strip_prefix(delim) else {
            continue;
        };
        let underscore = delim.starts_with('_');
        if underscore && before.is_some_and(char::is_alphanumeric) {
            continue;
        }
        let Some(end) = closing(inner, delim, underscore) else {
            continue;
        };
        flush(out);
        scan(&inner[..end], attrs | flag, out);
        return Some(end + 2 * delim.len());
    }
    None
}

/// Finds `](` and the closing `)` of a link body that follows `[`.
fn link_bounds(body: &str) -> Option<(usize, usize)> {
    let text_end = body.find("](")?;
    if body[..text_end].contains('\n') {
        return None;
    }
    let url_end = body[text_end + 2..].find(')')? + text_end + 2;
    Some((text_end, url_end))
}

/// Position of the delimiter closing `inner`, if the content is non-empty and
/// not padded with whitespace.
fn closing(inner: &str, delim: &str, underscore: bool) -> Option<usize> {
    let end = inner.find(delim)?;
    let content = &inner[..end];
    if content.is_empty() || content.starts_with(' ') || content.ends_with(' ') {
        return None;
    }
    if underscore
        && inner[end + delim.len()..]
            .chars()
            .next()
            .is_some_and(char::is_alphanumeric)
    {
        return None;
    }
    Some(end)
}

/// Serializes spans for `tier`.
///
/// At the minimal tier markers are dropped, inline code keeps its backticks
/// and links read `text (url)`; no escape sequences are produced. Higher
/// tiers paint each span with `base` overlaid by its emphasis.
pub fn render_inline(
    spans: &[InlineSpan<'_>],
    tier: QualityTier,
    theme: &MarkdownTheme,
    base: Style,
) -> String {
    let mut out = String::new();
    let Some(depth) = tier.color_depth() else {
        for span in spans {
            match span.kind {
                SpanKind::Text => out.push_str(span.text),
                SpanKind::Code => {
                    out.push('`');
                    out.push_str(span.text);
                    out.push('`');
                }
                SpanKind::Link { url } => {
                    out.push_str(span.text);
                    out.push_str(" (");
                    out.push_str(url);
                    out.push(')');
                }
            }
        }
        return out;
    };

    for span in spans {
        let style = base.merge(&emphasis(span.attributes, theme));
        match span.kind {
            SpanKind::Text => out.push_str(&style.paint(span.text, depth)),
            SpanKind::Code => {
                out.push_str(&style.merge(&theme.code_inline).paint(span.text, depth));
            }
            SpanKind::Link { url } => {
                out.push_str(&style.merge(&theme.link_text).paint(span.text, depth));
                out.push_str(" (");
                out.push_str(&theme.link_url.paint(url, depth));
                out.push(')');
            }
        }
    }
    out
}

/// Plain text of the spans with every marker removed.
pub fn plain_text(spans: &[InlineSpan<'_>]) -> String {
    spans.iter().map(|span| span.text).collect()
}

fn emphasis(attributes: TextAttributes, theme: &MarkdownTheme) -> Style {
    let mut style = Style::new();
    if attributes.contains(TextAttributes::BOLD) {
        style = style.merge(&theme.bold);
    }
    if attributes.contains(TextAttributes::ITALIC) {
        style = style.merge(&theme.italic);
    }
    if attributes.contains(TextAttributes::STRIKETHROUGH) {
        style = style.merge(&theme.strikethrough);
    }
    style
}
