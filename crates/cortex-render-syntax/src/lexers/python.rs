//! Python.

use super::{Rules, drive};
use crate::scanner::{Scanner, is_ident_continue, is_ident_start};
use crate::token::{Token, TokenKind};

static RULES: Rules = Rules {
    keywords: &[
        "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
        "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is",
        "lambda", "match", "case", "nonlocal", "not", "or", "pass", "raise", "return", "try",
        "while", "with", "yield",
    ],
    builtins: &[
        "print", "len", "range", "open", "isinstance", "super", "self", "cls", "enumerate",
        "zip", "map", "filter", "sorted", "sum", "min", "max", "abs", "repr", "iter", "next",
    ],
    types: &[
        "int", "float", "str", "bytes", "bool", "list", "dict", "set", "tuple", "object",
        "complex", "frozenset", "type",
    ],
    constants: &["True", "False", "None", "NotImplemented", "Ellipsis", "__name__"],
    operators: &[
        "+", "-", "*", "/", "%", "@", "=", "!", "<", ">", "&", "|", "^", "~", "==", "!=", "<=",
        ">=", "**", "//", "+=", "-=", "*=", "/=", "%=", "@=", "&=", "|=", "^=", "**=", "//=",
        "<<", ">>", "<<=", ">>=", "->", ":=", "...",
    ],
    line_comments: &["#"],
    block_comment: None,
    nested_comments: false,
    quotes: &['"', '\''],
};

pub(crate) fn tokenize(src: &str) -> Vec<Token<'_>> {
    drive(src, &RULES, hook)
}

fn hook(s: &mut Scanner<'_>, _rules: &Rules) -> Option<TokenKind> {
    if eat_string(s) {
        return Some(TokenKind::String);
    }
    if s.peek() == Some('@') && s.peek_nth(1).is_some_and(is_ident_start) {
        s.bump();
        s.eat_while(|c| is_ident_continue(c) || c == '.');
        return Some(TokenKind::Decorator);
    }
    None
}

/// Strings with optional `r`/`b`/`f`/`u` prefixes and triple quotes.
fn eat_string(s: &mut Scanner<'_>) -> bool {
    let rest = s.rest();
    let prefix = rest
        .chars()
        .take_while(|c| matches!(c.to_ascii_lowercase(), 'r' | 'b' | 'f' | 'u'))
        .count();
    if prefix > 2 {
        return false;
    }
    let body = &rest[prefix..];
    let quote = match body.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return false,
    };

    for _ in 0..prefix {
        s.bump();
    }
    let triple: String = std::iter::repeat_n(quote, 3).collect();
    if s.eat(&triple) {
        s.eat_quoted(&triple, true);
    } else {
        s.bump();
        eat_single_line(s, quote);
    }
    true
}

/// A one-line string ends at its quote or, unterminated, at the newline.
fn eat_single_line(s: &mut Scanner<'_>, quote: char) {
    while let Some(ch) = s.peek() {
        match ch {
            '\n' => return,
            '\\' => {
                s.bump();
                s.bump();
            }
            c if c == quote => {
                s.bump();
                return;
            }
            _ => {
                s.bump();
            }
        }
    }
}
