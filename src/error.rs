use crate::token::TokenType;
use thiserror::Error;

/// Closed set of failure kinds, shared by every stage of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ErrorKind {
    InvalidCharacter,
    UnterminatedComment,
    InvalidNumber,
    UnexpectedToken,
    MaxDepth,
    NameError,
    DivisionByZero,
    Overflow,
}

#[derive(Error, Debug, PartialEq)]
/// Error from the [`Lexer`](crate::lexer::Lexer).
#[allow(missing_docs)]
pub enum LexerError {
    /// Character not covered by any scanning rule.
    #[error(r#"Invalid character "{character}" at {line_no}:{col_no}"#)]
    InvalidCharacter {
        character: char,
        line_no: usize,
        col_no: usize,
    },

    /// Input ended inside a `{ ... }` comment.
    #[error("Unterminated comment starting at {line_no}:{col_no}")]
    UnterminatedComment { line_no: usize, col_no: usize },

    /// Number literal does not fit the numeric type.
    #[error(r#"Unable to parse number "{literal}" at {line_no}:{col_no}"#)]
    InvalidNumber {
        literal: String,
        line_no: usize,
        col_no: usize,
    },
}

#[derive(Error, Debug, PartialEq)]
/// Error from the `Parser`.
#[allow(missing_docs)]
pub enum ParserError {
    /// Current token does not fit the active production.
    #[error("Expected {expected}, got {found} at {line_no}:{col_no}")]
    UnexpectedToken {
        expected: TokenType,
        found: TokenType,
        line_no: usize,
        col_no: usize,
    },

    /// Nesting exceeds [`MAX_PARSING_DEPTH`](crate::MAX_PARSING_DEPTH).
    #[error("Maximum parsing depth, {0}, exceeded!")]
    MaxDepth(u64),

    /// Lexer failed while the parser pulled the next token.
    #[error(transparent)]
    Lexer(#[from] LexerError),
}

#[derive(Error, Debug, PartialEq)]
/// Error from name resolution.
pub enum SemanticError {
    /// Assignment target was never declared.
    #[error("Name Error {0} not declared")]
    NotDeclared(String),

    /// Name used in an expression was never declared.
    #[error("Name Error {0} not found")]
    NotFound(String),
}

#[derive(Error, Debug, PartialEq)]
/// Error from evaluation.
pub enum InterpreterError {
    /// Variable has no value in the global scope.
    #[error("Name Error {0} not found")]
    NameNotFound(String),

    /// Divisor evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Integer arithmetic left the range of the integer type.
    #[error("Integer overflow in {0}")]
    Overflow(&'static str),
}

#[derive(Error, Debug, PartialEq)]
/// Error from any stage of running a [`Script`](crate::Script).
#[allow(missing_docs)]
pub enum ScriptError {
    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
}

impl From<LexerError> for ScriptError {
    fn from(error: LexerError) -> Self {
        ScriptError::Parser(ParserError::Lexer(error))
    }
}

impl LexerError {
    /// [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LexerError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            LexerError::UnterminatedComment { .. } => {
                ErrorKind::UnterminatedComment
            }
            LexerError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
        }
    }
}

impl ScriptError {
    /// [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::Parser(ParserError::Lexer(error)) => error.kind(),
            ScriptError::Parser(ParserError::UnexpectedToken { .. }) => {
                ErrorKind::UnexpectedToken
            }
            ScriptError::Parser(ParserError::MaxDepth(_)) => {
                ErrorKind::MaxDepth
            }
            ScriptError::Semantic(_)
            | ScriptError::Interpreter(InterpreterError::NameNotFound(_)) => {
                ErrorKind::NameError
            }
            ScriptError::Interpreter(InterpreterError::DivisionByZero) => {
                ErrorKind::DivisionByZero
            }
            ScriptError::Interpreter(InterpreterError::Overflow(_)) => {
                ErrorKind::Overflow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_errors_are_distinguishable() {
        let not_declared = SemanticError::NotDeclared("a".to_string());
        let not_found = SemanticError::NotFound("b".to_string());

        assert_eq!(not_declared.to_string(), "Name Error a not declared");
        assert_eq!(not_found.to_string(), "Name Error b not found");
        assert_ne!(not_declared, SemanticError::NotFound("a".to_string()));
    }

    #[test]
    fn test_script_error_passes_message_through() {
        let error: ScriptError = LexerError::InvalidCharacter {
            character: '#',
            line_no: 2,
            col_no: 7,
        }
        .into();

        assert_eq!(error.kind(), ErrorKind::InvalidCharacter);
        assert_eq!(error.to_string(), r##"Invalid character "#" at 2:7"##);
    }
}
