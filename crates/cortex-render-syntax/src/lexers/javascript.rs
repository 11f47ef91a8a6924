//! JavaScript and TypeScript.

use super::{Rules, drive};
use crate::scanner::{Scanner, is_ident_continue, is_ident_start};
use crate::token::{Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from", "function",
    "if", "import", "in", "instanceof", "let", "new", "of", "return", "static", "super",
    "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with", "yield",
];

const TS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from", "function",
    "if", "import", "in", "instanceof", "let", "new", "of", "return", "static", "super",
    "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with", "yield",
    "abstract", "as", "declare", "enum", "implements", "interface", "keyof", "namespace",
    "private", "protected", "public", "readonly", "satisfies", "type",
];

const BUILTINS: &[&str] = &[
    "console", "window", "document", "globalThis", "require", "module", "process", "JSON",
    "Math", "Promise", "Object", "Array",
];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "~", "?", "==", "!=", "===",
    "!==", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "**", "+=", "-=", "*=", "/=", "%=",
    "**=", "&=", "|=", "^=", "&&=", "||=", "??=", "<<", ">>", ">>>", "<<=", ">>=", ">>>=",
    "=>", "...",
];

static JS_RULES: Rules = Rules {
    keywords: KEYWORDS,
    builtins: BUILTINS,
    types: &[],
    constants: &["true", "false", "null", "undefined", "NaN", "Infinity"],
    operators: OPERATORS,
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_comments: false,
    quotes: &['"', '\''],
};

static TS_RULES: Rules = Rules {
    keywords: TS_KEYWORDS,
    builtins: BUILTINS,
    types: &[
        "string", "number", "boolean", "any", "unknown", "never", "object", "symbol", "bigint",
    ],
    constants: &["true", "false", "null", "undefined", "NaN", "Infinity"],
    operators: OPERATORS,
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_comments: false,
    quotes: &['"', '\''],
};

pub(crate) fn tokenize_js(src: &str) -> Vec<Token<'_>> {
    drive(src, &JS_RULES, hook)
}

pub(crate) fn tokenize_ts(src: &str) -> Vec<Token<'_>> {
    drive(src, &TS_RULES, hook)
}

fn hook(s: &mut Scanner<'_>, _rules: &Rules) -> Option<TokenKind> {
    if s.peek() == Some('`') {
        s.bump();
        eat_template(s);
        return Some(TokenKind::String);
    }
    if s.peek() == Some('@') && s.peek_nth(1).is_some_and(is_ident_start) {
        s.bump();
        s.eat_while(|c| is_ident_continue(c) || c == '.');
        return Some(TokenKind::Decorator);
    }
    None
}

/// Template literal body, including `${...}` interpolations.
fn eat_template(s: &mut Scanner<'_>) {
    let mut depth = 0usize;
    while let Some(ch) = s.bump() {
        match ch {
            '\\' => {
                s.bump();
            }
            '$' if depth == 0 && s.peek() == Some('{') => {
                s.bump();
                depth = 1;
            }
            '{' if depth > 0 => depth += 1,
            '}' if depth > 0 => depth -= 1,
            '`' if depth == 0 => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexers::test_support::{assert_lossless, significant};
    use pretty_assertions::assert_eq;
    use TokenKind::*;

    #[test]
    fn test_strict_equality_is_one_operator() {
        let sig = significant(&tokenize_js("if (a === b && c !== d) {}"));
        assert!(sig.contains(&(Operator, "===")));
        assert!(sig.contains(&(Operator, "!==")));
        assert!(!sig.contains(&(Operator, "==")));
    }

    #[test]
    fn test_template_literal() {
        let src = "const s = `hi ${user.name + `x`} {}`;";
        let tokens = tokenize_js(src);
        assert_lossless(src, &tokens);
        assert!(significant(&tokens).contains(&(String, "`hi ${user.name + `x`} {}`")));
    }

    #[test]
    fn test_spread_and_arrow() {
        let sig = significant(&tokenize_js("const f = (...args) => args?.length ?? 0n;"));
        assert!(sig.contains(&(Operator, "...")));
        assert!(sig.contains(&(Operator, "=>")));
        assert!(sig.contains(&(Operator, "?.")));
        assert!(sig.contains(&(Operator, "??")));
        assert!(sig.contains(&(Number, "0n")));
    }

    #[test]
    fn test_functions_and_builtins() {
        let sig = significant(&tokenize_js("console.log(render(x));"));
        assert_eq!(sig[0], (Builtin, "console"));
        assert!(sig.contains(&(Function, "log")));
        assert!(sig.contains(&(Function, "render")));
    }

    #[test]
    fn test_typescript_types_and_decorators() {
        let src = "@Component\nclass App implements Base { name: string = null; }";
        let sig = significant(&tokenize_ts(src));
        assert_eq!(sig[0], (Decorator, "@Component"));
        assert!(sig.contains(&(Keyword, "implements")));
        assert!(sig.contains(&(Type, "App")));
        assert!(sig.contains(&(Type, "string")));
        assert!(sig.contains(&(Constant, "null")));
    }

    #[test]
    fn test_interface_is_plain_identifier_in_javascript() {
        let sig = significant(&tokenize_js("interface"));
        assert_eq!(sig, vec![(Variable, "interface")]);
    }
}
