/// Abstract Syntax Tree nodes
pub(crate) mod node;
/// Parser
pub(crate) mod parser;
/// Visitor Trait
pub(crate) mod visitor;

pub(crate) use parser::Parser;
pub(crate) use visitor::Visitor;
