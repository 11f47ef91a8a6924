//! C and C++.

use super::{C_FAMILY_OPERATORS, Rules, drive};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "else", "enum", "extern",
    "for", "goto", "if", "inline", "register", "restrict", "return", "sizeof", "static",
    "struct", "switch", "typedef", "union", "volatile", "while",
];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "else", "enum", "extern",
    "for", "goto", "if", "inline", "register", "return", "sizeof", "static", "struct",
    "switch", "typedef", "union", "volatile", "while", "alignas", "catch", "class",
    "constexpr", "decltype", "delete", "explicit", "friend", "mutable", "namespace", "new",
    "noexcept", "operator", "override", "private", "protected", "public", "template", "this",
    "throw", "try", "typename", "using", "virtual",
];

const C_TYPES: &[&str] = &[
    "void", "char", "short", "int", "long", "float", "double", "signed", "unsigned", "bool",
    "size_t", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t",
    "uint64_t", "FILE",
];

const BUILTINS: &[&str] = &["printf", "malloc", "free", "memcpy", "strlen", "std", "cout", "endl"];

const CPP_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "~", "?", "==", "!=", "<=",
    ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>",
    "<<=", ">>=", "->", "::", "->*", ".*", "<=>", "...",
];

static C_RULES: Rules = Rules {
    keywords: C_KEYWORDS,
    builtins: BUILTINS,
    types: C_TYPES,
    constants: &["NULL", "true", "false"],
    operators: C_FAMILY_OPERATORS,
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_comments: false,
    quotes: &['"', '\''],
};

static CPP_RULES: Rules = Rules {
    keywords: CPP_KEYWORDS,
    builtins: BUILTINS,
    types: C_TYPES,
    constants: &["NULL", "nullptr", "true", "false"],
    operators: CPP_OPERATORS,
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_comments: false,
    quotes: &['"', '\''],
};

pub(crate) fn tokenize_c(src: &str) -> Vec<Token<'_>> {
    drive(src, &C_RULES, hook)
}

pub(crate) fn tokenize_cpp(src: &str) -> Vec<Token<'_>> {
    drive(src, &CPP_RULES, hook)
}

/// Preprocessor directives run to the end of the line.
fn hook(s: &mut Scanner<'_>, _rules: &Rules) -> Option<TokenKind> {
    if s.at_line_start() && s.peek() == Some('#') {
        s.eat_line();
        return Some(TokenKind::Decorator);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexers::test_support::{assert_lossless, significant};
    use pretty_assertions::assert_eq;
    use TokenKind::*;

    #[test]
    fn test_includes_are_directives() {
        let src = "#include <stdio.h>\n  #define N 4\nint main(void) { return 0; }";
        let tokens = tokenize_c(src);
        assert_lossless(src, &tokens);
        let sig = significant(&tokens);
        assert_eq!(sig[0], (Decorator, "#include <stdio.h>"));
        assert_eq!(sig[1], (Decorator, "#define N 4"));
        assert_eq!(sig[2], (Type, "int"));
        assert_eq!(sig[3], (Function, "main"));
        assert!(sig.contains(&(Keyword, "return")));
    }

    #[test]
    fn test_cpp_scope_and_nullptr() {
        let sig = significant(&tokenize_cpp("std::vector<int> v; auto p = nullptr; a <=> b;"));
        assert_eq!(sig[0], (Builtin, "std"));
        assert!(sig.contains(&(Operator, "::")));
        assert!(sig.contains(&(Constant, "nullptr")));
        assert!(sig.contains(&(Operator, "<=>")));
    }

    #[test]
    fn test_hash_mid_line_is_not_a_directive() {
        let sig = significant(&tokenize_c("x = 1; #define Y\n\t#pragma once"));
        assert!(!sig.contains(&(Decorator, "#define Y")));
        assert_eq!(sig.last(), Some(&(Decorator, "#pragma once")));
    }

    #[test]
    fn test_long_single_line_stays_linear() {
        let src = "a+".repeat(200_000);
        let started = std::time::Instant::now();
        let tokens = tokenize_c(&src);
        assert_eq!(tokens.len(), 400_000);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_class_is_only_a_keyword_in_cpp() {
        assert_eq!(significant(&tokenize_cpp("class"))[0], (Keyword, "class"));
        assert_eq!(significant(&tokenize_c("class"))[0], (Variable, "class"));
    }

    #[test]
    fn test_char_literal_and_arrow() {
        let sig = significant(&tokenize_c("p->c = '\\0'; x = 1.5f;"));
        assert!(sig.contains(&(Operator, "->")));
        assert!(sig.contains(&(String, "'\\0'")));
        assert!(sig.contains(&(Number, "1.5f")));
    }
}
