//! Rust.

use super::{Rules, drive};
use crate::scanner::{Scanner, is_ident_continue, is_ident_start};
use crate::token::{Token, TokenKind};

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "?", "@", "==", "!=", "<=", ">=",
    "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "<<=", ">>=", "->",
    "=>", "::", "..", "..=", "...",
];

static RULES: Rules = Rules {
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "static", "struct", "super", "trait", "type", "unsafe",
        "use", "where", "while", "yield",
    ],
    builtins: &["Some", "None", "Ok", "Err", "drop", "panic", "println", "format", "vec"],
    types: &[
        "Self", "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16",
        "i32", "i64", "i128", "isize", "f32", "f64", "String", "Vec", "Option", "Result", "Box",
    ],
    constants: &["true", "false"],
    operators: OPERATORS,
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_comments: true,
    quotes: &['"'],
};

pub(crate) fn tokenize(src: &str) -> Vec<Token<'_>> {
    drive(src, &RULES, hook)
}

fn hook(s: &mut Scanner<'_>, rules: &Rules) -> Option<TokenKind> {
    if s.starts_with("#[") || s.starts_with("#![") {
        eat_attribute(s);
        return Some(TokenKind::Decorator);
    }
    if eat_raw_or_byte_string(s) {
        return Some(TokenKind::String);
    }
    if s.peek() == Some('\'') {
        return Some(eat_char_or_lifetime(s));
    }
    if s.peek().is_some_and(is_ident_start) {
        return eat_macro(s, rules);
    }
    None
}

/// `#[...]` / `#![...]` with nested brackets; stops at end of input.
fn eat_attribute(s: &mut Scanner<'_>) {
    s.eat("#");
    s.eat("!");
    let mut depth = 0usize;
    while let Some(ch) = s.bump() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
            '"' => s.eat_quoted("\"", true),
            _ => {}
        }
    }
}

/// `r"..."`, `r#"..."#`, `b"..."`, `br#"..."#`, `b'x'`.
fn eat_raw_or_byte_string(s: &mut Scanner<'_>) -> bool {
    let rest = s.rest();
    let after_b = rest.strip_prefix('b').unwrap_or(rest);
    let byte = after_b.len() != rest.len();

    if let Some(after_r) = after_b.strip_prefix('r') {
        let hashes = after_r.chars().take_while(|c| *c == '#').count();
        if after_r[hashes..].starts_with('"') {
            let prefix = rest.len() - after_r.len() + hashes + 1;
            for _ in 0..prefix {
                s.bump();
            }
            let close = format!("\"{}", "#".repeat(hashes));
            s.eat_through(&close);
            return true;
        }
        return false;
    }

    if byte && after_b.starts_with('"') {
        s.eat("b\"");
        s.eat_quoted("\"", true);
        return true;
    }
    if byte && after_b.starts_with('\'') {
        s.eat("b'");
        s.eat_quoted("'", true);
        return true;
    }
    false
}

/// Distinguishes `'a'` / `'\n'` from the lifetime `'a`.
fn eat_char_or_lifetime(s: &mut Scanner<'_>) -> TokenKind {
    let rest = s.rest();
    let mut chars = rest.chars().skip(1);
    let is_char = match (chars.next(), chars.next()) {
        (Some('\\'), _) => true,
        (Some(_), Some('\'')) => true,
        _ => false,
    };
    s.bump();
    if is_char {
        s.eat_quoted("'", true);
        TokenKind::String
    } else {
        s.eat_while(is_ident_continue);
        TokenKind::Type
    }
}

/// `name!` invocations are functions; other identifiers fall through.
fn eat_macro(s: &mut Scanner<'_>, rules: &Rules) -> Option<TokenKind> {
    let rest = s.rest();
    let len = rest
        .char_indices()
        .find(|(_, c)| !is_ident_continue(*c))
        .map_or(rest.len(), |(i, _)| i);
    let ident = &rest[..len];
    let after = &rest[len..];
    if after.starts_with('!') && !after.starts_with("!=") && !rules.keywords.contains(&ident) {
        s.eat(ident);
        s.eat("!");
        return Some(TokenKind::Function);
    }
    None
}
