#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
//! Interpreter for a small Pascal-like language.
//!
//! Source text is lexed, parsed into an abstract syntax tree, checked
//! against its `VAR` declarations and finally evaluated into the value of
//! every assigned variable.

/// Abstract syntax tree
pub(crate) mod ast;
/// Name resolution and evaluation
pub(crate) mod visitors;

/// Command line interface
pub mod cli;
/// Crate errors.
pub mod error;
/// `Lexer`
pub mod lexer;
/// Script struct
pub mod script;
/// `Symbol` and `SymbolTable`
pub mod symbol;
/// `Token` and `TokenType`
pub mod token;
/// Runtime values
pub mod value;

pub use error::{ErrorKind, ScriptError};
pub use lexer::Lexer;
pub use script::Script;
pub use symbol::{Symbol, SymbolTable};
pub use token::{Token, TokenType};
pub use value::Number;
pub use visitors::GlobalScope;

/// Maximum nesting of grammar productions before parsing is aborted.
pub const MAX_PARSING_DEPTH: u64 = 256;

/// Parses, resolves and evaluates `input`.
pub fn interpret<S: AsRef<str>>(input: S) -> Result<GlobalScope, ScriptError> {
    Script::new(input)?.run()
}
