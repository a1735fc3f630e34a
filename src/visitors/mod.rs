/// Tree-walking evaluator
pub(crate) mod interpreter;
/// Name resolution
pub(crate) mod semantic;

pub use interpreter::GlobalScope;
pub(crate) use interpreter::Interpreter;
pub(crate) use semantic::SemanticAnalyzer;
