use crate::ast::node::{
    self, BinaryOperator, Expression, Statement, TypeSpec, UnaryOperator,
};
use crate::error::ParserError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use crate::MAX_PARSING_DEPTH;
use log::{debug, trace};

type Result<T> = std::result::Result<T, ParserError>;

/// Reads a stream of [Token]s and builds an Abstract Syntax Tree.
pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a [Parser<'a>] from a string.
    pub(crate) fn new(input_text: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input_text);
        let current_token = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current_token,
            depth: 0,
        })
    }

    /// Run [Parser] to create an Abstract Syntax Tree. All input must be
    /// consumed.
    pub(crate) fn parse(&mut self) -> Result<node::Program> {
        let program = self.program()?;

        if self.current_type() != TokenType::EOF {
            return Err(self.unexpected(TokenType::EOF));
        }

        debug!(r#"Parsed program "{}""#, program.name);

        Ok(program)
    }

    fn current_type(&self) -> TokenType {
        self.current_token.token_type()
    }

    fn unexpected(&self, expected: TokenType) -> ParserError {
        ParserError::UnexpectedToken {
            expected,
            found: self.current_type(),
            line_no: self.current_token.line_no(),
            col_no: self.current_token.col_no(),
        }
    }

    /// Replaces the current token with the next one from the [Lexer] and
    /// returns it.
    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current_token, next))
    }

    fn eat(&mut self, expected: TokenType) -> Result<Token> {
        if self.current_type() != expected {
            return Err(self.unexpected(expected));
        }

        self.advance()
    }

    fn inc_depth(&mut self) -> Result<()> {
        self.depth += 1;

        if self.depth > MAX_PARSING_DEPTH {
            return Err(ParserError::MaxDepth(MAX_PARSING_DEPTH));
        }

        Ok(())
    }

    fn dec_depth(&mut self) {
        self.depth -= 1;
    }

    /// Depth Prefix
    fn dp(&self) -> String {
        (0..self.depth).map(|i| (i % 10).to_string()).collect()
    }

    // Grammar functions
    fn program(&mut self) -> Result<node::Program> {
        // PROGRAM variable SEMI block DOT
        self.inc_depth()?;

        self.eat(TokenType::Program)?;
        let name = self.variable()?.name;

        trace!(r#"{} Program: "{}""#, self.dp(), name);

        self.eat(TokenType::Semi)?;
        let block = self.block()?;
        self.eat(TokenType::Dot)?;

        self.dec_depth();
        Ok(node::Program::new(name, block))
    }

    fn block(&mut self) -> Result<node::Block> {
        // declarations compound_statement
        self.inc_depth()?;
        trace!("{} Block", self.dp());

        let declarations = self.declarations()?;
        let compound = self.compound_statement()?;

        self.dec_depth();
        Ok(node::Block::new(declarations, compound))
    }

    fn declarations(&mut self) -> Result<Vec<node::VarDecl>> {
        // ( VAR ( variable_declaration SEMI )+ )?
        let mut declarations = Vec::new();

        if self.current_type() != TokenType::Var {
            return Ok(declarations);
        }

        self.inc_depth()?;
        trace!("{} Declarations", self.dp());

        self.eat(TokenType::Var)?;

        loop {
            declarations.extend(self.variable_declaration()?);
            self.eat(TokenType::Semi)?;

            if self.current_type() != TokenType::ID {
                break;
            }
        }

        self.dec_depth();
        Ok(declarations)
    }

    fn variable_declaration(&mut self) -> Result<Vec<node::VarDecl>> {
        // ID ( COMMA ID )* COLON type_spec
        let mut vars = vec![self.variable()?];

        while self.current_type() == TokenType::Comma {
            self.eat(TokenType::Comma)?;
            vars.push(self.variable()?);
        }

        self.eat(TokenType::Colon)?;
        let type_spec = self.type_spec()?;

        trace!(
            "{} VarDecl: {} {:?}",
            self.dp(),
            type_spec.name(),
            vars.iter().map(|v| v.name.as_str()).collect::<Vec<&str>>()
        );

        Ok(vars
            .into_iter()
            .map(|var| node::VarDecl::new(var, type_spec))
            .collect())
    }

    fn type_spec(&mut self) -> Result<TypeSpec> {
        // INTEGER | REAL
        if self.current_type() == TokenType::Integer {
            self.eat(TokenType::Integer)?;
            Ok(TypeSpec::Integer)
        } else {
            self.eat(TokenType::Real)?;
            Ok(TypeSpec::Real)
        }
    }

    fn compound_statement(&mut self) -> Result<node::Compound> {
        // BEGIN statement_list END
        self.inc_depth()?;
        trace!("{} Compound", self.dp());

        self.eat(TokenType::Begin)?;
        let children = self.statement_list()?;
        self.eat(TokenType::End)?;

        self.dec_depth();
        Ok(node::Compound::new(children))
    }

    fn statement_list(&mut self) -> Result<Vec<Statement>> {
        // statement ( SEMI statement )*
        let mut statements = vec![self.statement()?];

        while self.current_type() == TokenType::Semi {
            self.eat(TokenType::Semi)?;
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    fn statement(&mut self) -> Result<Statement> {
        // compound_statement | assignment_statement | empty
        match self.current_type() {
            TokenType::Begin => {
                Ok(Statement::Compound(self.compound_statement()?))
            }
            TokenType::ID => self.assignment_statement(),
            _ => {
                trace!("{} NoOp", self.dp());
                Ok(Statement::NoOp)
            }
        }
    }

    fn assignment_statement(&mut self) -> Result<Statement> {
        // variable ASSIGN expr
        self.inc_depth()?;

        let target = self.variable()?;
        trace!(r#"{} Assign: "{}""#, self.dp(), target.name);

        self.eat(TokenType::Assign)?;
        let value = self.expr()?;

        self.dec_depth();
        Ok(Statement::Assign { target, value })
    }

    fn variable(&mut self) -> Result<node::Var> {
        // ID
        let token = self.eat(TokenType::ID)?;
        Ok(node::Var::new(token.into_text()))
    }

    fn expr(&mut self) -> Result<Expression> {
        // term ( ( PLUS | MINUS ) term )*
        self.inc_depth()?;
        trace!("{} Expr", self.dp());

        let mut expression = self.term()?;
        let mut folds = 0;

        while let Some(operator) = BinaryOperator::additive(self.current_type())
        {
            // Every fold nests the tree one level deeper.
            self.inc_depth()?;
            folds += 1;

            self.advance()?;

            expression = Expression::BinaryOp {
                left: Box::new(expression),
                operator,
                right: Box::new(self.term()?),
            };
        }

        self.depth -= folds;
        self.dec_depth();
        Ok(expression)
    }

    fn term(&mut self) -> Result<Expression> {
        // factor ( ( MUL | INTEGER_DIV | FLOAT_DIV ) factor )*
        self.inc_depth()?;
        trace!("{} Term", self.dp());

        let mut expression = self.factor()?;
        let mut folds = 0;

        while let Some(operator) =
            BinaryOperator::multiplicative(self.current_type())
        {
            self.inc_depth()?;
            folds += 1;

            self.advance()?;

            expression = Expression::BinaryOp {
                left: Box::new(expression),
                operator,
                right: Box::new(self.factor()?),
            };
        }

        self.depth -= folds;
        self.dec_depth();
        Ok(expression)
    }

    fn factor(&mut self) -> Result<Expression> {
        // ( PLUS | MINUS ) factor | INTEGER_CONST | REAL_CONST
        // | LPAREN expr RPAREN | variable
        self.inc_depth()?;
        trace!("{} Factor", self.dp());

        let expression = if let Some(operator) =
            UnaryOperator::from_token_type(self.current_type())
        {
            self.advance()?;

            Expression::UnaryOp {
                operator,
                operand: Box::new(self.factor()?),
            }
        } else if let Some(number) = self.current_token.number() {
            self.advance()?;
            Expression::Num(number)
        } else if self.current_type() == TokenType::LParen {
            self.eat(TokenType::LParen)?;
            let expression = self.expr()?;
            self.eat(TokenType::RParen)?;
            expression
        } else {
            Expression::Var(self.variable()?)
        };

        self.dec_depth();
        Ok(expression)
    }
}
