//! Forward-only cursor shared by every lexer.

use crate::token::{Token, TokenKind};

/// Byte cursor over a source string that always stops on char boundaries.
pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    tokens: Vec<Token<'a>>,
    /// Only spaces and tabs have been pushed since the last newline.
    blank_prefix: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            tokens: Vec::new(),
            blank_prefix: true,
        }
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The character before the cursor.
    pub(crate) fn prev(&self) -> Option<char> {
        self.src[..self.pos].chars().next_back()
    }

    /// Returns `true` if nothing but spaces and tabs precedes the cursor on
    /// its line. Tracks pushed tokens, so it is only meaningful between tokens.
    pub(crate) fn at_line_start(&self) -> bool {
        self.blank_prefix
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Advances past `prefix` if it is next. Returns whether it matched.
    pub(crate) fn eat(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Advances past the next occurrence of `end`, or to end of input.
    pub(crate) fn eat_through(&mut self, end: &str) {
        match self.rest().find(end) {
            Some(offset) => self.pos += offset + end.len(),
            None => self.pos = self.src.len(),
        }
    }

    /// Advances to the next newline without consuming it.
    pub(crate) fn eat_line(&mut self) {
        match self.rest().find('\n') {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Consumes a quoted body after the opening `quote`, honoring backslash
    /// escapes when `escapes` is set. Stops at end of input if unterminated.
    pub(crate) fn eat_quoted(&mut self, quote: &str, escapes: bool) {
        while !self.is_eof() {
            if escapes && self.eat("\\") {
                self.bump();
                continue;
            }
            if self.eat(quote) {
                return;
            }
            self.bump();
        }
    }

    /// Consumes a block comment body after `open`, honoring nesting when asked.
    pub(crate) fn eat_block_comment(&mut self, open: &str, close: &str, nested: bool) {
        let mut depth = 1usize;
        while !self.is_eof() {
            if nested && self.eat(open) {
                depth += 1;
            } else if self.eat(close) {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            } else {
                self.bump();
            }
        }
    }

    /// Consumes an identifier if one starts here.
    pub(crate) fn eat_ident(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek() {
            Some(ch) if is_ident_start(ch) => {
                self.bump();
                self.eat_while(is_ident_continue);
                Some(&self.src[start..self.pos])
            }
            _ => None,
        }
    }

    /// Returns `true` if the next non-blank character on this line is `ch`.
    pub(crate) fn followed_by(&self, ch: char) -> bool {
        self.rest()
            .chars()
            .find(|c| *c != ' ' && *c != '\t')
            .is_some_and(|c| c == ch)
    }

    /// Consumes a numeric literal: radix prefixes, underscores, fraction,
    /// exponent and an alphanumeric suffix.
    pub(crate) fn eat_number(&mut self) {
        let radix = ["0x", "0X", "0b", "0B", "0o", "0O"]
            .iter()
            .find(|prefix| self.starts_with(prefix))
            .map(|prefix| prefix.as_bytes()[1].to_ascii_lowercase());

        if let Some(radix) = radix {
            self.pos += 2;
            match radix {
                b'x' => self.eat_while(|c| c.is_ascii_hexdigit() || c == '_'),
                b'b' => self.eat_while(|c| matches!(c, '0' | '1' | '_')),
                _ => self.eat_while(|c| matches!(c, '0'..='7' | '_')),
            }
        } else {
            self.eat_while(|c| c.is_ascii_digit() || c == '_');
            if self.peek() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
                self.eat_while(|c| c.is_ascii_digit() || c == '_');
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                let signed = matches!(self.peek_nth(1), Some('+' | '-'));
                let digit_at = if signed { 2 } else { 1 };
                if self.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += digit_at;
                    self.eat_while(|c| c.is_ascii_digit() || c == '_');
                }
            }
        }
        self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
    }

    /// Consumes the longest operator from `operators` that starts here.
    pub(crate) fn eat_operator(&mut self, operators: &[&str]) -> bool {
        let longest = operators
            .iter()
            .filter(|op| self.starts_with(op))
            .map(|op| op.len())
            .max();
        match longest {
            Some(len) => {
                self.pos += len;
                true
            }
            None => false,
        }
    }

    /// Emits everything consumed since `start` as one token.
    pub(crate) fn push(&mut self, kind: TokenKind, start: usize) {
        if self.pos > start {
            let text = &self.src[start..self.pos];
            let is_blank = |t: &str| t.chars().all(|c| c == ' ' || c == '\t');
            self.blank_prefix = match text.rfind('\n') {
                Some(nl) => is_blank(&text[nl + 1..]),
                None => self.blank_prefix && is_blank(text),
            };
            self.tokens.push(Token::new(kind, text));
        }
    }

    pub(crate) fn finish(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

pub(crate) fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

pub(crate) fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn number(src: &str) -> &str {
        let mut s = Scanner::new(src);
        s.eat_number();
        &src[..s.pos()]
    }

    #[test]
    fn test_numbers() {
        assert_eq!(number("0xFF_u8 rest"), "0xFF_u8");
        assert_eq!(number("0b1010+1"), "0b1010");
        assert_eq!(number("1_000.5e-3f64;"), "1_000.5e-3f64");
        assert_eq!(number("1..2"), "1");
        assert_eq!(number("10n)"), "10n");
        assert_eq!(number("3e"), "3e");
    }

    #[test]
    fn test_quoted_stops_at_eof() {
        let mut s = Scanner::new("abc\\\"def");
        s.eat_quoted("\"", true);
        assert!(s.is_eof());
    }

    #[test]
    fn test_nested_block_comment() {
        let src = "/* a /* b */ c */ tail";
        let mut s = Scanner::new(src);
        s.eat("/*");
        s.eat_block_comment("/*", "*/", true);
        assert_eq!(s.rest(), " tail");
    }

    #[test]
    fn test_greedy_operator() {
        let mut s = Scanner::new("===x");
        assert!(s.eat_operator(&["=", "==", "==="]));
        assert_eq!(s.rest(), "x");
    }

    #[test]
    fn test_line_start_follows_pushed_tokens() {
        let mut s = Scanner::new("ab \n  x");
        assert!(s.at_line_start());
        s.eat_ident();
        s.push(TokenKind::Variable, 0);
        assert!(!s.at_line_start());
        s.eat_while(char::is_whitespace);
        s.push(TokenKind::Whitespace, 2);
        assert!(s.at_line_start());
        s.eat_ident();
        s.push(TokenKind::Variable, 6);
        assert!(!s.at_line_start());
    }

    #[test]
    fn test_followed_by_skips_blanks() {
        let s = Scanner::new("  (x)");
        assert!(s.followed_by('('));
        assert!(!Scanner::new("\n(").followed_by('('));
    }
}
