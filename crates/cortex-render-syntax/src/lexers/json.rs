//! JSON.

use super::{Rules, drive};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

static RULES: Rules = Rules {
    keywords: &[],
    builtins: &[],
    types: &[],
    constants: &["true", "false", "null"],
    operators: &[],
    line_comments: &[],
    block_comment: None,
    nested_comments: false,
    quotes: &[],
};

pub(crate) fn tokenize(src: &str) -> Vec<Token<'_>> {
    drive(src, &RULES, hook)
}

/// Strings are keys when a colon follows; `-` starts a number.
fn hook(s: &mut Scanner<'_>, _rules: &Rules) -> Option<TokenKind> {
    match s.peek()? {
        '"' => {
            s.bump();
            s.eat_quoted("\"", true);
            if s.followed_by(':') {
                Some(TokenKind::Variable)
            } else {
                Some(TokenKind::String)
            }
        }
        '-' if s.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
            s.bump();
            s.eat_number();
            Some(TokenKind::Number)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexers::test_support::{assert_lossless, significant};
    use pretty_assertions::assert_eq;
    use TokenKind::*;

    #[test]
    fn test_object() {
        let src = "{\"name\": \"cortex\", \"n\": -1.5e3, \"ok\": [true, null]}";
        let tokens = tokenize(src);
        assert_lossless(src, &tokens);
        assert_eq!(
            significant(&tokens),
            vec![
                (Bracket, "{"),
                (Variable, "\"name\""),
                (Punctuation, ":"),
                (String, "\"cortex\""),
                (Punctuation, ","),
                (Variable, "\"n\""),
                (Punctuation, ":"),
                (Number, "-1.5e3"),
                (Punctuation, ","),
                (Variable, "\"ok\""),
                (Punctuation, ":"),
                (Bracket, "["),
                (Constant, "true"),
                (Punctuation, ","),
                (Constant, "null"),
                (Bracket, "]"),
                (Bracket, "}"),
            ]
        );
    }
}
