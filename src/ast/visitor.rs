#![allow(missing_docs)]

#[allow(clippy::wildcard_imports)]
use crate::ast::node::*;
use crate::value::Number;

/// [Visitor] visits [`Program`] nodes. Statement-level nodes return `S`,
/// expressions return `E`.
pub(crate) trait Visitor<S, E> {
    fn visit_program(&mut self, program: &Program) -> S;

    fn visit_block(&mut self, block: &Block) -> S;

    fn visit_var_decl(&mut self, var_decl: &VarDecl) -> S;

    fn visit_type(&mut self, type_spec: TypeSpec) -> S;

    fn visit_compound(&mut self, compound: &Compound) -> S;

    fn visit_statement(&mut self, statement: &Statement) -> S {
        match statement {
            Statement::Compound(compound) => self.visit_compound(compound),
            Statement::Assign { target, value } => {
                self.visit_assign(target, value)
            }
            Statement::NoOp => self.visit_no_op(),
        }
    }

    fn visit_assign(&mut self, target: &Var, value: &Expression) -> S;

    fn visit_no_op(&mut self) -> S;

    fn visit_expression(&mut self, expression: &Expression) -> E {
        match expression {
            Expression::BinaryOp {
                left,
                operator,
                right,
            } => self.visit_binaryop(left, *operator, right),
            Expression::UnaryOp { operator, operand } => {
                self.visit_unaryop(*operator, operand)
            }
            Expression::Num(number) => self.visit_num(*number),
            Expression::Var(var) => self.visit_var(var),
        }
    }

    fn visit_binaryop(
        &mut self,
        left: &Expression,
        operator: BinaryOperator,
        right: &Expression,
    ) -> E;

    fn visit_unaryop(
        &mut self,
        operator: UnaryOperator,
        operand: &Expression,
    ) -> E;

    fn visit_num(&mut self, number: Number) -> E;

    fn visit_var(&mut self, var: &Var) -> E;
}
