use log::trace;
use std::collections::HashMap;
use std::fmt;

/// Names of the built-in types every [`SymbolTable`] starts with.
pub const BUILTIN_TYPES: [&str; 2] = ["INTEGER", "REAL"];

/// A declared name and, for variables, the name of its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    type_name: Option<String>,
}

impl Symbol {
    /// Symbol for a built-in type.
    pub fn builtin<S: Into<String>>(name: S) -> Self {
        Symbol {
            name: name.into(),
            type_name: None,
        }
    }

    /// Symbol for a variable of type `type_name`.
    pub fn variable<S, T>(name: S, type_name: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Symbol {
            name: name.into(),
            type_name: Some(type_name.into()),
        }
    }

    /// Get the symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared type's name, `None` for built-in types.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_name {
            Some(type_name) => write!(f, "<{}:{}>", self.name, type_name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Flat, single-scope mapping of names to [`Symbol`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        let mut table = SymbolTable {
            symbols: HashMap::new(),
        };

        for name in BUILTIN_TYPES {
            table.define(Symbol::builtin(name));
        }

        table
    }
}

impl SymbolTable {
    /// Create a table holding only the built-in types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `symbol`, replacing any previous symbol with the same name.
    pub fn define(&mut self, symbol: Symbol) {
        trace!("Define: {}", symbol);
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    /// Looks up the symbol called `name`.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Iterates over all symbols, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Symbols sorted by name.
    pub fn sorted(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.iter().collect();
        symbols.sort_by(|a, b| a.name.cmp(&b.name));
        symbols
    }

    /// Number of symbols, built-ins included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty. Never true for a table built by
    /// [`SymbolTable::new`].
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<String> =
            self.sorted().iter().map(ToString::to_string).collect();

        write!(f, "Symbols: {}", symbols.join(", "))
    }
}
