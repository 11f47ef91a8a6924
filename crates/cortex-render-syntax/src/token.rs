//! Lexical tokens.

use std::fmt;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word (`fn`, `def`, `if`).
    Keyword,
    /// Built-in function or value provided by the runtime (`print`, `len`).
    Builtin,
    /// Type name, including identifiers with a leading uppercase letter.
    Type,
    /// Identifier followed by a call.
    Function,
    /// Any other identifier.
    Variable,
    /// Literal constant (`true`, `None`, `nullptr`).
    Constant,
    /// String or character literal.
    String,
    /// Numeric literal.
    Number,
    /// Line or block comment.
    Comment,
    /// Attribute, decorator or preprocessor directive.
    Decorator,
    /// Operator, matched greedily.
    Operator,
    /// `(`, `)`, `[`, `]`, `{`, `}`.
    Bracket,
    /// Separators such as `,` and `;`.
    Punctuation,
    /// Spaces, tabs and newlines.
    Whitespace,
    /// Anything unclassified.
    Text,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Keyword,
        Self::Builtin,
        Self::Type,
        Self::Function,
        Self::Variable,
        Self::Constant,
        Self::String,
        Self::Number,
        Self::Comment,
        Self::Decorator,
        Self::Operator,
        Self::Bracket,
        Self::Punctuation,
        Self::Whitespace,
        Self::Text,
    ];

    /// Position of this kind in [`TokenKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Builtin => "builtin",
            Self::Type => "type",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Constant => "constant",
            Self::String => "string",
            Self::Number => "number",
            Self::Comment => "comment",
            Self::Decorator => "decorator",
            Self::Operator => "operator",
            Self::Bracket => "bracket",
            Self::Punctuation => "punctuation",
            Self::Whitespace => "whitespace",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the source buffer.
///
/// Tokens borrow their text; they cannot outlive the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Lexical class.
    pub kind: TokenKind,
    /// Source text of the token.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub const fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}
