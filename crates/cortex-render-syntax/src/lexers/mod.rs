//! Per-language lexers.
//!
//! Every lexer is a single forward pass built on [`drive`]: a language first
//! gets a chance to claim the input at the cursor through its hook (raw
//! strings, decorators, template literals), then the shared rules classify
//! whitespace, comments, quotes, numbers, identifiers and operators.

pub(crate) mod bash;
pub(crate) mod c;
pub(crate) mod go;
pub(crate) mod javascript;
pub(crate) mod json;
pub(crate) mod python;
pub(crate) mod rust;

use crate::scanner::{Scanner, is_ident_start};
use crate::token::{Token, TokenKind};

/// Static description of a language's lexical surface.
pub(crate) struct Rules {
    pub keywords: &'static [&'static str],
    pub builtins: &'static [&'static str],
    pub types: &'static [&'static str],
    pub constants: &'static [&'static str],
    pub operators: &'static [&'static str],
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
    pub nested_comments: bool,
    /// Quote characters that open an escaped string literal.
    pub quotes: &'static [char],
}

impl Rules {
    fn classify(&self, ident: &str, s: &Scanner<'_>) -> TokenKind {
        if self.keywords.contains(&ident) {
            TokenKind::Keyword
        } else if self.constants.contains(&ident) {
            TokenKind::Constant
        } else if self.types.contains(&ident) {
            TokenKind::Type
        } else if s.followed_by('(') {
            TokenKind::Function
        } else if self.builtins.contains(&ident) {
            TokenKind::Builtin
        } else if is_screaming_case(ident) {
            TokenKind::Constant
        } else if ident.starts_with(|c: char| c.is_uppercase()) {
            TokenKind::Type
        } else {
            TokenKind::Variable
        }
    }
}

/// `MAX_LEN`-style identifiers of at least two characters.
fn is_screaming_case(ident: &str) -> bool {
    ident.len() > 1
        && ident.starts_with(|c: char| c.is_uppercase())
        && ident.chars().all(|c| c.is_uppercase() || c.is_ascii_digit() || c == '_')
}

/// A language-specific rule tried before the shared ones.
///
/// Returns the kind of the token it consumed, or `None` after leaving the
/// cursor untouched.
pub(crate) type Hook = fn(&mut Scanner<'_>, &Rules) -> Option<TokenKind>;

/// Runs the shared lexing loop.
pub(crate) fn drive<'a>(src: &'a str, rules: &Rules, hook: Hook) -> Vec<Token<'a>> {
    let mut s = Scanner::new(src);
    while !s.is_eof() {
        let start = s.pos();
        let kind = match hook(&mut s, rules) {
            Some(kind) => kind,
            None => shared_rule(&mut s, rules),
        };
        s.push(kind, start);
    }
    s.finish()
}

fn shared_rule(s: &mut Scanner<'_>, rules: &Rules) -> TokenKind {
    let Some(ch) = s.peek() else {
        return TokenKind::Text;
    };

    if ch.is_whitespace() {
        s.eat_while(char::is_whitespace);
        return TokenKind::Whitespace;
    }

    if rules.line_comments.iter().any(|prefix| s.starts_with(prefix)) {
        s.eat_line();
        return TokenKind::Comment;
    }

    if let Some((open, close)) = rules.block_comment {
        if s.eat(open) {
            s.eat_block_comment(open, close, rules.nested_comments);
            return TokenKind::Comment;
        }
    }

    if rules.quotes.contains(&ch) {
        s.bump();
        s.eat_quoted(ch.encode_utf8(&mut [0; 4]), true);
        return TokenKind::String;
    }

    if ch.is_ascii_digit() || (ch == '.' && s.peek_nth(1).is_some_and(|c| c.is_ascii_digit())) {
        s.eat_number();
        return TokenKind::Number;
    }

    if is_ident_start(ch) {
        if let Some(ident) = s.eat_ident() {
            return rules.classify(ident, s);
        }
    }

    if matches!(ch, '(' | ')' | '[' | ']' | '{' | '}') {
        s.bump();
        return TokenKind::Bracket;
    }

    if s.eat_operator(rules.operators) {
        return TokenKind::Operator;
    }

    if matches!(ch, ',' | ';' | '.' | ':') {
        s.bump();
        return TokenKind::Punctuation;
    }

    s.bump();
    TokenKind::Text
}

/// Operators common to the C family, longest match wins.
pub(crate) const C_FAMILY_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "~", "?", "==", "!=", "<=",
    ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>",
    "<<=", ">>=", "->",
];
