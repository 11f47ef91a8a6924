//! Language registry: names, aliases and file detection.

#![allow(clippy::non_std_lazy_statics)]

use crate::lexers;
use crate::token::{Token, TokenKind};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::path::Path;

/// Languages with a dedicated lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Rust.
    Rust,
    /// Python.
    Python,
    /// JavaScript.
    JavaScript,
    /// TypeScript.
    TypeScript,
    /// Go.
    Go,
    /// C.
    C,
    /// C++.
    Cpp,
    /// POSIX shell and Bash.
    Bash,
    /// JSON.
    Json,
}

/// Names and aliases accepted by [`Language::from_name`].
static ALIASES: Lazy<AHashMap<&'static str, Language>> = Lazy::new(|| {
    let mut m = AHashMap::new();
    m.insert("rust", Language::Rust);
    m.insert("rs", Language::Rust);

    m.insert("python", Language::Python);
    m.insert("py", Language::Python);
    m.insert("python3", Language::Python);

    m.insert("javascript", Language::JavaScript);
    m.insert("js", Language::JavaScript);
    m.insert("jsx", Language::JavaScript);
    m.insert("node", Language::JavaScript);

    m.insert("typescript", Language::TypeScript);
    m.insert("ts", Language::TypeScript);
    m.insert("tsx", Language::TypeScript);

    m.insert("go", Language::Go);
    m.insert("golang", Language::Go);

    m.insert("c", Language::C);
    m.insert("h", Language::C);

    m.insert("cpp", Language::Cpp);
    m.insert("c++", Language::Cpp);
    m.insert("cxx", Language::Cpp);
    m.insert("cc", Language::Cpp);
    m.insert("hpp", Language::Cpp);

    m.insert("bash", Language::Bash);
    m.insert("sh", Language::Bash);
    m.insert("shell", Language::Bash);
    m.insert("zsh", Language::Bash);
    m.insert("console", Language::Bash);

    m.insert("json", Language::Json);
    m.insert("jsonc", Language::Json);
    m
});

/// File extension to language mapping.
static EXTENSIONS: Lazy<AHashMap<&'static str, Language>> = Lazy::new(|| {
    let mut m = AHashMap::new();
    m.insert("rs", Language::Rust);
    m.insert("py", Language::Python);
    m.insert("pyi", Language::Python);
    m.insert("js", Language::JavaScript);
    m.insert("mjs", Language::JavaScript);
    m.insert("cjs", Language::JavaScript);
    m.insert("jsx", Language::JavaScript);
    m.insert("ts", Language::TypeScript);
    m.insert("mts", Language::TypeScript);
    m.insert("tsx", Language::TypeScript);
    m.insert("go", Language::Go);
    m.insert("c", Language::C);
    m.insert("h", Language::C);
    m.insert("cpp", Language::Cpp);
    m.insert("cc", Language::Cpp);
    m.insert("cxx", Language::Cpp);
    m.insert("hpp", Language::Cpp);
    m.insert("hxx", Language::Cpp);
    m.insert("sh", Language::Bash);
    m.insert("bash", Language::Bash);
    m.insert("zsh", Language::Bash);
    m.insert("json", Language::Json);
    m
});

/// Special file names.
static FILENAMES: Lazy<AHashMap<&'static str, Language>> = Lazy::new(|| {
    let mut m = AHashMap::new();
    m.insert(".bashrc", Language::Bash);
    m.insert(".bash_profile", Language::Bash);
    m.insert(".zshrc", Language::Bash);
    m.insert(".profile", Language::Bash);
    m.insert("package.json", Language::Json);
    m.insert("tsconfig.json", Language::Json);
    m
});

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 9] = [
        Self::Rust,
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Go,
        Self::C,
        Self::Cpp,
        Self::Bash,
        Self::Json,
    ];

    /// Resolves a language name or alias, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        ALIASES.get(normalized.as_str()).copied()
    }

    /// Detects the language of a file from its name or extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if let Some(lang) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| FILENAMES.get(name))
        {
            return Some(*lang);
        }
        let ext = path.extension()?.to_str()?.to_lowercase();
        EXTENSIONS.get(ext.as_str()).copied()
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Go => "go",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Bash => "bash",
            Self::Json => "json",
        }
    }

    /// Splits `src` into tokens.
    ///
    /// The tokens cover the input exactly: concatenating their text yields `src`.
    pub fn tokenize(self, src: &str) -> Vec<Token<'_>> {
        match self {
            Self::Rust => lexers::rust::tokenize(src),
            Self::Python => lexers::python::tokenize(src),
            Self::JavaScript => lexers::javascript::tokenize_js(src),
            Self::TypeScript => lexers::javascript::tokenize_ts(src),
            Self::Go => lexers::go::tokenize(src),
            Self::C => lexers::c::tokenize_c(src),
            Self::Cpp => lexers::c::tokenize_cpp(src),
            Self::Bash => lexers::bash::tokenize(src),
            Self::Json => lexers::json::tokenize(src),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tokenizes `src` as the named language.
///
/// Unknown languages yield a single [`TokenKind::Text`] token covering the
/// whole input; empty input yields no tokens.
pub fn tokenize<'a>(src: &'a str, language: &str) -> Vec<Token<'a>> {
    match Language::from_name(language) {
        Some(lang) => lang.tokenize(src),
        None if src.is_empty() => Vec::new(),
        None => {
            tracing::trace!(language, "No lexer for language, emitting plain text");
            vec![Token::new(TokenKind::Text, src)]
        }
    }
}
