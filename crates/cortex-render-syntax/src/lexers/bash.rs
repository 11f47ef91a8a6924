//! POSIX shell and Bash.

use super::{Rules, drive};
use crate::scanner::{Scanner, is_ident_continue, is_ident_start};
use crate::token::{Token, TokenKind};

static RULES: Rules = Rules {
    keywords: &[
        "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
        "in", "function", "select", "return", "local", "export", "declare", "readonly", "unset",
        "shift", "break", "continue", "exit",
    ],
    builtins: &[
        "echo", "printf", "read", "cd", "pwd", "source", "test", "eval", "exec", "set", "trap",
        "alias", "kill", "wait", "true", "false",
    ],
    types: &[],
    constants: &[],
    operators: &[
        "=", "!", "<", ">", "&", "|", "&&", "||", ">>", "<<", "<<<", "2>", "2>&1", "&>", "==",
        "!=", "=~", ";;", "$(", "$((",
    ],
    line_comments: &[],
    block_comment: None,
    nested_comments: false,
    quotes: &['"'],
};

pub(crate) fn tokenize(src: &str) -> Vec<Token<'_>> {
    drive(src, &RULES, hook)
}

fn hook(s: &mut Scanner<'_>, rules: &Rules) -> Option<TokenKind> {
    // fd redirections would otherwise lex as a number
    if s.starts_with("2>") && s.eat_operator(rules.operators) {
        return Some(TokenKind::Operator);
    }
    match s.peek()? {
        '#' if s.prev().is_none_or(char::is_whitespace) => {
            s.eat_line();
            Some(TokenKind::Comment)
        }
        '\'' => {
            s.bump();
            s.eat_quoted("'", false);
            Some(TokenKind::String)
        }
        '$' => eat_variable(s),
        '-' if s.prev().is_none_or(char::is_whitespace)
            && s.peek_nth(1).is_some_and(|c| c.is_ascii_alphabetic() || c == '-') =>
        {
            // command-line flag
            s.eat_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            Some(TokenKind::Constant)
        }
        c if is_ident_start(c) => {
            let ident = s.eat_ident()?;
            if s.peek() == Some('=') && !rules.keywords.contains(&ident) {
                return Some(TokenKind::Variable);
            }
            Some(classify(ident, s, rules))
        }
        _ => None,
    }
}

fn classify(ident: &str, s: &Scanner<'_>, rules: &Rules) -> TokenKind {
    if rules.keywords.contains(&ident) {
        TokenKind::Keyword
    } else if rules.builtins.contains(&ident) {
        TokenKind::Builtin
    } else if s.followed_by('(') {
        TokenKind::Function
    } else {
        TokenKind::Text
    }
}

/// `$name`, `${...}`, `$1`, `$?` and friends. `$(` is left to the operators.
fn eat_variable(s: &mut Scanner<'_>) -> Option<TokenKind> {
    match s.peek_nth(1) {
        Some('{') => {
            s.bump();
            s.eat_through("}");
        }
        Some(c) if is_ident_start(c) => {
            s.bump();
            s.eat_while(is_ident_continue);
        }
        Some(c) if c.is_ascii_digit() || matches!(c, '?' | '#' | '@' | '*' | '$' | '!' | '-') => {
            s.bump();
            s.bump();
        }
        _ => return None,
    }
    Some(TokenKind::Variable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexers::test_support::{assert_lossless, significant};
    use pretty_assertions::assert_eq;
    use TokenKind::*;

    #[test]
    fn test_script() {
        let src = "#!/bin/sh\nNAME=world # greet\nif [ -n \"$NAME\" ]; then\n  echo 'hi' ${NAME} $1\nfi\n";
        let tokens = tokenize(src);
        assert_lossless(src, &tokens);
        let sig = significant(&tokens);
        assert_eq!(sig[0], (Comment, "#!/bin/sh"));
        assert_eq!(sig[1], (Variable, "NAME"));
        assert!(sig.contains(&(Comment, "# greet")));
        assert!(sig.contains(&(Keyword, "if")));
        assert!(sig.contains(&(Constant, "-n")));
        assert!(sig.contains(&(String, "\"$NAME\"")));
        assert!(sig.contains(&(Builtin, "echo")));
        assert!(sig.contains(&(String, "'hi'")));
        assert!(sig.contains(&(Variable, "${NAME}")));
        assert!(sig.contains(&(Variable, "$1")));
        assert!(sig.contains(&(Keyword, "fi")));
    }

    #[test]
    fn test_hash_inside_word_is_not_comment() {
        let sig = significant(&tokenize("echo ${#arr} a#b"));
        assert!(sig.contains(&(Variable, "${#arr}")));
        assert!(!sig.iter().any(|(kind, _)| *kind == Comment));
    }

    #[test]
    fn test_function_definition_and_redirects() {
        let sig = significant(&tokenize("build() { make 2>&1 | tee log && exit $?; }"));
        assert_eq!(sig[0], (Function, "build"));
        assert!(sig.contains(&(Operator, "2>&1")));
        assert!(sig.contains(&(Operator, "&&")));
        assert!(sig.contains(&(Variable, "$?")));
    }
}
