use crate::cli::args::{self, Command};
use crate::cli::logging;
use crate::{GlobalScope, Script, SymbolTable};
use anyhow::{Context, Result};
use log::info;
use std::ffi::OsString;
use std::path::Path;

/// Main entrypoint for pasi
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match args::parse_args(args) {
        Ok(args) => args,
        // Help and version requests end up here as well.
        Err(error) => error.exit(),
    };

    logging::setup_logger(args.verbosity, logging::LOG_NAME)?;
    info!("Parsed arguments:\n{:#?}", &args);

    let output = match &args.command {
        Command::Run { path, unchecked } => {
            let script = read_script(path)?;

            let scope = if *unchecked {
                script.evaluate()?
            } else {
                script.run()?
            };

            format_scope(&scope)
        }
        Command::Check { path } => {
            format_symbols(&read_script(path)?.resolve()?)
        }
    };

    print!("{output}");

    info!("Program execution complete.");

    Ok(())
}

fn read_script(path: &Path) -> Result<Script> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;

    let script = Script::new(input)?;
    info!(r#"Read program "{}" from {}"#, script.name(), path.display());

    Ok(script)
}

/// One `name = value` line per variable, sorted by name.
pub(crate) fn format_scope(scope: &GlobalScope) -> String {
    let mut names: Vec<&String> = scope.keys().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| format!("{} = {}\n", name, scope[name]))
        .collect()
}

/// One symbol per line, sorted by name.
pub(crate) fn format_symbols(symbol_table: &SymbolTable) -> String {
    symbol_table
        .sorted()
        .into_iter()
        .map(|symbol| format!("{symbol}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;
    use maplit::hashmap;

    #[test]
    fn test_format_scope() {
        let scope = hashmap! {
            "y".to_string() => Number::Real(2.0),
            "a".to_string() => Number::Integer(2),
        };

        assert_eq!(format_scope(&scope), "a = 2\ny = 2.0\n");
    }

    #[test]
    fn test_format_symbols() -> anyhow::Result<()> {
        let symbols = Script::new("PROGRAM P; VAR x : INTEGER; BEGIN END.")?
            .resolve()?;

        assert_eq!(format_symbols(&symbols), "INTEGER\nREAL\n<x:INTEGER>\n");

        Ok(())
    }
}
