use std::fmt;

/// Token kinds.
///
/// The language has no keywords, so the set is small and every kind is a
/// fieldless variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Digit run, `[0-9]+`. A sign is a separate `Minus` token. Value is not
    /// parsed until evaluation.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Identifier-like word. Only meaningful in the s-expression dialect.
    Symbol,
    /// A character the lexer does not recognize.
    Error,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Whether this token is one of the four arithmetic operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }

    /// Human-facing description used in "expected ..." messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Symbol => "symbol",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
