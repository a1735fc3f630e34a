/// Argument Parsing
pub mod args;
/// Logging setup
pub mod logging;
/// Main pasi code.
pub mod main;

pub use args::{Args, Command};
