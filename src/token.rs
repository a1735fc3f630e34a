use crate::value::Number;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Kind of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TokenType {
    // Reserved words
    Program,
    Var,
    Integer,
    Real,
    Begin,
    End,
    IntegerDiv,

    // Literals
    ID,
    IntegerConst,
    RealConst,

    // Operators and punctuation
    Assign,
    Plus,
    Minus,
    Mul,
    FloatDiv,
    LParen,
    RParen,
    Semi,
    Colon,
    Comma,
    Dot,

    EOF,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Program => "PROGRAM",
            TokenType::Var => "VAR",
            TokenType::Integer => "INTEGER",
            TokenType::Real => "REAL",
            TokenType::Begin => "BEGIN",
            TokenType::End => "END",
            TokenType::IntegerDiv => "INTEGER_DIV",
            TokenType::ID => "ID",
            TokenType::IntegerConst => "INTEGER_CONST",
            TokenType::RealConst => "REAL_CONST",
            TokenType::Assign => "ASSIGN",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Mul => "MUL",
            TokenType::FloatDiv => "FLOAT_DIV",
            TokenType::LParen => "LPAREN",
            TokenType::RParen => "RPAREN",
            TokenType::Semi => "SEMI",
            TokenType::Colon => "COLON",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::EOF => "EOF",
        };

        write!(f, "{}", name)
    }
}

impl TokenType {
    /// Maps a single-character operator or punctuation mark to its
    /// [`TokenType`]. `:` is not included, it needs lookahead.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        Some(match c {
            ';' => Self::Semi,
            '.' => Self::Dot,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Mul,
            '/' => Self::FloatDiv,
            '(' => Self::LParen,
            ')' => Self::RParen,
            ',' => Self::Comma,
            _ => return None,
        })
    }
}

/// Reserved words, matched case-sensitively.
pub(crate) static RESERVED_WORDS: Lazy<HashMap<&'static str, TokenType>> =
    Lazy::new(|| {
        HashMap::from([
            ("PROGRAM", TokenType::Program),
            ("VAR", TokenType::Var),
            ("DIV", TokenType::IntegerDiv),
            ("INTEGER", TokenType::Integer),
            ("REAL", TokenType::Real),
            ("BEGIN", TokenType::Begin),
            ("END", TokenType::End),
        ])
    });

/// Value carried by a [`Token`].
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Parsed value of an `INTEGER_CONST`.
    Integer(i64),
    /// Parsed value of a `REAL_CONST`.
    Real(f64),
    /// Identifier name, reserved word or operator text.
    Text(String),
    /// Only used for `EOF`.
    None,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(integer) => write!(f, "{}", integer),
            Literal::Real(real) => write!(f, "{}", real),
            Literal::Text(text) => write!(f, "{}", text),
            Literal::None => write!(f, "None"),
        }
    }
}

/// Smallest lexical unit of a program.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    token_type: TokenType,
    literal: Literal,
    line_no: usize,
    col_no: usize,
}

impl Token {
    /// Create a new [`Token`].
    pub(crate) fn new(
        token_type: TokenType,
        literal: Literal,
        line_no: usize,
        col_no: usize,
    ) -> Self {
        Self {
            token_type,
            literal,
            line_no,
            col_no,
        }
    }

    /// Create a new [`Token`] with the source text as value.
    pub(crate) fn with_text<S: Into<String>>(
        token_type: TokenType,
        text: S,
        line_no: usize,
        col_no: usize,
    ) -> Self {
        Self::new(token_type, Literal::Text(text.into()), line_no, col_no)
    }

    /// Kind of this token.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Value of this token.
    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    /// Line of the first character, starting at 1.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Column of the first character, starting at 1.
    pub fn col_no(&self) -> usize {
        self.col_no
    }

    /// Consumes the token, returning the text of an identifier, reserved
    /// word or operator.
    pub(crate) fn into_text(self) -> String {
        match self.literal {
            Literal::Text(text) => text,
            other => other.to_string(),
        }
    }

    /// Value of an `INTEGER_CONST` or `REAL_CONST`.
    pub(crate) fn number(&self) -> Option<Number> {
        match self.literal {
            Literal::Integer(integer) => Some(Number::Integer(integer)),
            Literal::Real(real) => Some(Number::Real(real)),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.token_type, self.literal)
    }
}
