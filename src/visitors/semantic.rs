#[allow(clippy::wildcard_imports)]
use crate::ast::node::*;
use crate::ast::Visitor;
use crate::error::SemanticError;
use crate::symbol::{Symbol, SymbolTable};
use crate::value::Number;
use log::debug;

type Result<T> = std::result::Result<T, SemanticError>;

/// Walks the AST, defines declared variables and checks every name
/// against the resulting [`SymbolTable`].
#[derive(Default)]
pub(crate) struct SemanticAnalyzer {
    symbol_table: SymbolTable,
}

impl SemanticAnalyzer {
    /// Public function for [`SemanticAnalyzer`]
    pub(crate) fn analyze(program: &Program) -> Result<SymbolTable> {
        let mut analyzer = SemanticAnalyzer::default();

        program.accept(&mut analyzer)?;

        debug!(r#"Analyzed "{}": {}"#, program.name, analyzer.symbol_table);

        Ok(analyzer.symbol_table)
    }
}

impl Visitor<Result<()>, Result<()>> for SemanticAnalyzer {
    fn visit_program(&mut self, program: &Program) -> Result<()> {
        program.block.accept(self)
    }

    fn visit_block(&mut self, block: &Block) -> Result<()> {
        for declaration in &block.declarations {
            declaration.accept(self)?;
        }

        block.compound.accept(self)
    }

    fn visit_var_decl(&mut self, var_decl: &VarDecl) -> Result<()> {
        var_decl.type_spec.accept(self)?;

        // Built-in types are seeded on construction, so the type symbol
        // is always there.
        let type_name = self
            .symbol_table
            .lookup(var_decl.type_spec.name())
            .map_or(var_decl.type_spec.name(), Symbol::name)
            .to_string();

        self.symbol_table
            .define(Symbol::variable(var_decl.var.name.clone(), type_name));

        Ok(())
    }

    fn visit_type(&mut self, _type_spec: TypeSpec) -> Result<()> {
        Ok(())
    }

    fn visit_compound(&mut self, compound: &Compound) -> Result<()> {
        for child in &compound.children {
            child.accept(self)?;
        }

        Ok(())
    }

    fn visit_assign(&mut self, target: &Var, value: &Expression) -> Result<()> {
        value.accept(self)?;

        if self.symbol_table.lookup(&target.name).is_none() {
            return Err(SemanticError::NotDeclared(target.name.clone()));
        }

        Ok(())
    }

    fn visit_no_op(&mut self) -> Result<()> {
        Ok(())
    }

    fn visit_binaryop(
        &mut self,
        left: &Expression,
        _operator: BinaryOperator,
        right: &Expression,
    ) -> Result<()> {
        left.accept(self)?;
        right.accept(self)
    }

    fn visit_unaryop(
        &mut self,
        _operator: UnaryOperator,
        operand: &Expression,
    ) -> Result<()> {
        operand.accept(self)
    }

    fn visit_num(&mut self, _number: Number) -> Result<()> {
        Ok(())
    }

    fn visit_var(&mut self, var: &Var) -> Result<()> {
        if self.symbol_table.lookup(&var.name).is_none() {
            return Err(SemanticError::NotFound(var.name.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Parser;
    use anyhow::Result;

    fn analyze(
        input: &str,
    ) -> Result<std::result::Result<SymbolTable, SemanticError>> {
        let program = Parser::new(input)?.parse()?;

        Ok(SemanticAnalyzer::analyze(&program))
    }

    #[test]
    fn test_declarations_define_symbols() -> Result<()> {
        let table = analyze(
            "PROGRAM P; VAR a, b : INTEGER; y : REAL; BEGIN a := 1 END.",
        )??;

        assert_eq!(table.len(), 5);
        assert_eq!(table.lookup("b"), Some(&Symbol::variable("b", "INTEGER")));
        assert_eq!(table.lookup("y").and_then(Symbol::type_name), Some("REAL"));

        Ok(())
    }

    #[test]
    fn test_undeclared_target() -> Result<()> {
        assert_eq!(
            analyze("PROGRAM P; VAR a : INTEGER; BEGIN x := a END.")?,
            Err(SemanticError::NotDeclared("x".to_string()))
        );

        Ok(())
    }

    #[test]
    fn test_unresolved_operand() -> Result<()> {
        assert_eq!(
            analyze("PROGRAM P; VAR a : INTEGER; BEGIN a := 1 + b END.")?,
            Err(SemanticError::NotFound("b".to_string()))
        );

        Ok(())
    }

    #[test]
    fn test_value_is_checked_before_target() -> Result<()> {
        let error = analyze("PROGRAM P; BEGIN x := y END.")?.unwrap_err();

        assert_eq!(error, SemanticError::NotFound("y".to_string()));
        assert_eq!(error.to_string(), "Name Error y not found");

        Ok(())
    }

    #[test]
    fn test_nested_compound_is_checked() -> Result<()> {
        assert_eq!(
            analyze("PROGRAM P; BEGIN BEGIN number := 2 END END.")?,
            Err(SemanticError::NotDeclared("number".to_string()))
        );

        Ok(())
    }

    #[test]
    fn test_redeclaration_last_wins() -> Result<()> {
        let table = analyze(
            "PROGRAM P; VAR a : INTEGER; a : REAL; BEGIN a := 1.5 END.",
        )??;

        assert_eq!(table.lookup("a"), Some(&Symbol::variable("a", "REAL")));

        Ok(())
    }

    #[test]
    fn test_unused_declaration_is_accepted() -> Result<()> {
        let table = analyze("PROGRAM P; VAR a : REAL; BEGIN END.")??;

        assert_eq!(table.to_string(), "Symbols: INTEGER, REAL, <a:REAL>");

        Ok(())
    }
}
