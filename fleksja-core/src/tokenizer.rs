//! Lossless tokenization of original and anonymized text
//!
//! Every byte of the input ends up in exactly one token, so joining the
//! tokens in order gives back the input unchanged. Alternatives are tried in
//! priority order: placeholder, word run, whitespace run, symbol run.

use regex::Regex;
use std::sync::OnceLock;

/// Token pattern. The symbol alternative stops before `[` so a placeholder
/// directly after punctuation is still recognised; a stray `[` becomes a
/// single-character symbol token.
const TOKEN_PATTERN: &str =
    r"(?P<placeholder>\[[A-Za-z0-9-]+\])|(?P<word>\w+)|(?P<space>\s+)|(?P<symbol>[^\w\s\[]+|\[)";

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Redaction marker such as `[name]`
    Placeholder,
    /// Run of word characters
    Word,
    /// Run of whitespace, including line terminators
    Whitespace,
    /// Run of anything else
    Symbol,
}

/// A slice of the input text with its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Token category
    pub kind: TokenKind,
    /// Surface text, borrowed from the input
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a token
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Label inside the brackets for placeholder tokens
    pub fn label(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Placeholder => Some(&self.text[1..self.text.len() - 1]),
            _ => None,
        }
    }

    /// Whether this token is a placeholder
    pub fn is_placeholder(&self) -> bool {
        self.kind == TokenKind::Placeholder
    }

    /// Whether this token is whitespace
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Split text into tokens
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    token_re()
        .captures_iter(text)
        .filter_map(|caps| {
            let (kind, m) = if let Some(m) = caps.name("placeholder") {
                (TokenKind::Placeholder, m)
            } else if let Some(m) = caps.name("word") {
                (TokenKind::Word, m)
            } else if let Some(m) = caps.name("space") {
                (TokenKind::Whitespace, m)
            } else {
                (TokenKind::Symbol, caps.name("symbol")?)
            };
            Some(Token::new(kind, m.as_str()))
        })
        .collect()
}

/// Join tokens back into a string
pub fn detokenize(tokens: &[Token<'_>]) -> String {
    let len = tokens.iter().map(|t| t.text.len()).sum();
    let mut out = String::with_capacity(len);
    for token in tokens {
        out.push_str(token.text);
    }
    out
}
