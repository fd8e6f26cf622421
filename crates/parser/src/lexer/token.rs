use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Select,
    CreateTable,
    Insert,
    Values,
    From,
    Where,
    Plus,
    Equal,
    LessThan,
    Concat,
    LParen,
    RParen,
    Comma,
    Identifier,
    Integer,
    String,
}

/// Fixed keyword/punctuation table. The scan takes the first
/// case-insensitive match, so the two multi-word keywords sit ahead of
/// everything they share a prefix with.
pub(crate) const BUILTINS: [(&str, TokenKind); 13] = [
    ("CREATE TABLE", TokenKind::CreateTable),
    ("INSERT INTO", TokenKind::Insert),
    ("SELECT", TokenKind::Select),
    ("VALUES", TokenKind::Values),
    ("WHERE", TokenKind::Where),
    ("FROM", TokenKind::From),
    ("||", TokenKind::Concat),
    ("=", TokenKind::Equal),
    ("+", TokenKind::Plus),
    ("<", TokenKind::LessThan),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    (",", TokenKind::Comma),
];

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Select => "SELECT",
            Self::CreateTable => "CREATE TABLE",
            Self::Insert => "INSERT INTO",
            Self::Values => "VALUES",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Plus => "+",
            Self::Equal => "=",
            Self::LessThan => "<",
            Self::Concat => "||",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Identifier => "identifier",
            Self::Integer => "integer literal",
            Self::String => "string literal",
        })
    }
}

/// `text` carries literal/identifier content and stays empty for fixed
/// keywords and punctuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn keyword(kind: TokenKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }
}
