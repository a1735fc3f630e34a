#[allow(clippy::wildcard_imports)]
use crate::ast::node::*;
use crate::ast::Visitor;
use crate::error::InterpreterError;
use crate::value::Number;
use log::{debug, trace};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, InterpreterError>;

/// Final value of every assigned variable, by name.
pub type GlobalScope = HashMap<String, Number>;

/// Evaluates a [`Program`] into its [`GlobalScope`].
#[derive(Default)]
pub(crate) struct Interpreter {
    global_scope: GlobalScope,
}

impl Interpreter {
    /// Public function for [`Interpreter`]
    pub(crate) fn interpret(program: &Program) -> Result<GlobalScope> {
        let mut interpreter = Interpreter::default();

        program.accept(&mut interpreter)?;

        debug!(
            r#"Interpreted "{}": {:?}"#,
            program.name, interpreter.global_scope
        );

        Ok(interpreter.global_scope)
    }
}

impl Visitor<Result<()>, Result<Number>> for Interpreter {
    fn visit_program(&mut self, program: &Program) -> Result<()> {
        program.block.accept(self)
    }

    fn visit_block(&mut self, block: &Block) -> Result<()> {
        for declaration in &block.declarations {
            declaration.accept(self)?;
        }

        block.compound.accept(self)
    }

    fn visit_var_decl(&mut self, _var_decl: &VarDecl) -> Result<()> {
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
        let number = value.accept(self)?;

        trace!("{} := {}", target.name, number);

        self.global_scope.insert(target.name.clone(), number);

        Ok(())
    }

    fn visit_no_op(&mut self) -> Result<()> {
        Ok(())
    }

    fn visit_binaryop(
        &mut self,
        left: &Expression,
        operator: BinaryOperator,
        right: &Expression,
    ) -> Result<Number> {
        let l = left.accept(self)?;
        let r = right.accept(self)?;

        match operator {
            BinaryOperator::Plus => l.add(r),
            BinaryOperator::Minus => l.sub(r),
            BinaryOperator::Mul => l.mul(r),
            BinaryOperator::IntegerDiv => l.integer_div(r),
            BinaryOperator::FloatDiv => l.float_div(r),
        }
    }

    fn visit_unaryop(
        &mut self,
        operator: UnaryOperator,
        operand: &Expression,
    ) -> Result<Number> {
        let number = operand.accept(self)?;

        match operator {
            UnaryOperator::Plus => Ok(number),
            UnaryOperator::Minus => number.neg(),
        }
    }

    fn visit_num(&mut self, number: Number) -> Result<Number> {
        Ok(number)
    }

    fn visit_var(&mut self, var: &Var) -> Result<Number> {
        self.global_scope
            .get(&var.name)
            .copied()
            .ok_or_else(|| InterpreterError::NameNotFound(var.name.clone()))
    }
}
