#![allow(missing_docs)]
use crate::ast::visitor::Visitor;
use crate::token::TokenType;
use crate::value::Number;

#[derive(Debug, PartialEq)]
pub struct Program {
    pub(crate) name: String,
    pub(crate) block: Block,
}

impl Program {
    pub(crate) fn new(name: String, block: Block) -> Self {
        Program { name, block }
    }

    pub(crate) fn accept<S, E>(&self, visitor: &mut dyn Visitor<S, E>) -> S {
        visitor.visit_program(self)
    }
}

#[derive(Debug, PartialEq)]
pub struct Block {
    pub(crate) declarations: Vec<VarDecl>,
    pub(crate) compound: Compound,
}

impl Block {
    pub(crate) fn new(declarations: Vec<VarDecl>, compound: Compound) -> Self {
        Block {
            declarations,
            compound,
        }
    }

    pub(crate) fn accept<S, E>(&self, visitor: &mut dyn Visitor<S, E>) -> S {
        visitor.visit_block(self)
    }
}

#[derive(Debug, PartialEq)]
pub struct VarDecl {
    pub(crate) var: Var,
    pub(crate) type_spec: TypeSpec,
}

impl VarDecl {
    pub(crate) fn new(var: Var, type_spec: TypeSpec) -> Self {
        VarDecl { var, type_spec }
    }

    pub(crate) fn accept<S, E>(&self, visitor: &mut dyn Visitor<S, E>) -> S {
        visitor.visit_var_decl(self)
    }
}

/// One of the built-in types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSpec {
    Integer,
    Real,
}

impl TypeSpec {
    /// Name of the built-in type symbol.
    pub(crate) fn name(self) -> &'static str {
        match self {
            TypeSpec::Integer => "INTEGER",
            TypeSpec::Real => "REAL",
        }
    }

    pub(crate) fn accept<S, E>(self, visitor: &mut dyn Visitor<S, E>) -> S {
        visitor.visit_type(self)
    }
}

#[derive(Debug, PartialEq)]
pub struct Compound {
    pub(crate) children: Vec<Statement>,
}

impl Compound {
    pub(crate) fn new(children: Vec<Statement>) -> Self {
        Compound { children }
    }

    pub(crate) fn accept<S, E>(&self, visitor: &mut dyn Visitor<S, E>) -> S {
        visitor.visit_compound(self)
    }
}

#[derive(Debug, PartialEq)]
pub enum Statement {
    Compound(Compound),
    Assign { target: Var, value: Expression },
    NoOp,
}

impl Statement {
    pub(crate) fn accept<S, E>(&self, visitor: &mut dyn Visitor<S, E>) -> S {
        visitor.visit_statement(self)
    }
}

#[derive(Debug, PartialEq)]
pub struct Var {
    pub(crate) name: String,
}

impl Var {
    pub(crate) fn new<S: Into<String>>(name: S) -> Self {
        Var { name: name.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mul,
    IntegerDiv,
    FloatDiv,
}

impl BinaryOperator {
    /// `+` and `-`
    pub(crate) fn additive(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::Plus => Some(Self::Plus),
            TokenType::Minus => Some(Self::Minus),
            _ => None,
        }
    }

    /// `*`, `DIV` and `/`
    pub(crate) fn multiplicative(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::Mul => Some(Self::Mul),
            TokenType::IntegerDiv => Some(Self::IntegerDiv),
            TokenType::FloatDiv => Some(Self::FloatDiv),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl UnaryOperator {
    pub(crate) fn from_token_type(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::Plus => Some(Self::Plus),
            TokenType::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    BinaryOp {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    Num(Number),
    Var(Var),
}

impl Expression {
    pub(crate) fn accept<S, E>(&self, visitor: &mut dyn Visitor<S, E>) -> E {
        visitor.visit_expression(self)
    }
}
