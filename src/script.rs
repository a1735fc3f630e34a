use crate::ast::node::Program;
use crate::ast::Parser;
use crate::error::ScriptError;
use crate::symbol::SymbolTable;
use crate::visitors::{GlobalScope, Interpreter, SemanticAnalyzer};
use log::debug;

type Result<T> = std::result::Result<T, ScriptError>;

/// A parsed program, ready to be resolved and evaluated.
#[derive(Debug)]
pub struct Script {
    program: Program,
}

impl Script {
    /// Lexes and parses `input` into a [`Script`].
    pub fn new<S>(input: S) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let program = Parser::new(input.as_ref())?.parse()?;

        Ok(Script { program })
    }

    /// Returns the name from the `PROGRAM` header.
    pub fn name(&self) -> &str {
        &self.program.name
    }

    /// Checks every name against the declarations and returns the
    /// resulting [`SymbolTable`].
    pub fn resolve(&self) -> Result<SymbolTable> {
        Ok(SemanticAnalyzer::analyze(&self.program)?)
    }

    /// Evaluates the program without resolving names first.
    pub fn evaluate(&self) -> Result<GlobalScope> {
        Ok(Interpreter::interpret(&self.program)?)
    }

    /// Resolves names, then evaluates the program.
    pub fn run(&self) -> Result<GlobalScope> {
        let symbol_table = self.resolve()?;
        debug!("Resolved {} symbols", symbol_table.len());

        self.evaluate()
    }
}
