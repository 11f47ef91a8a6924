//! Go.

use super::{Rules, drive};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

static RULES: Rules = Rules {
    keywords: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ],
    builtins: &[
        "append", "cap", "close", "complex", "copy", "delete", "imag", "len", "make", "new",
        "panic", "print", "println", "real", "recover", "fmt",
    ],
    types: &[
        "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
        "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32",
        "uint64", "uintptr", "any",
    ],
    constants: &["true", "false", "nil", "iota"],
    operators: &[
        "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "==", "!=", "<=", ">=", "&&",
        "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "<<=",
        ">>=", "&^", "&^=", ":=", "<-", "...",
    ],
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_comments: false,
    quotes: &['"', '\''],
};

pub(crate) fn tokenize(src: &str) -> Vec<Token<'_>> {
    drive(src, &RULES, hook)
}

/// Backquoted raw strings.
fn hook(s: &mut Scanner<'_>, _rules: &Rules) -> Option<TokenKind> {
    if s.eat("`") {
        s.eat_through("`");
        return Some(TokenKind::String);
    }
    None
}
