//! Statement parsing - let, return, expression, and block statements.

use monkey_ast::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement};
use monkey_token::Token;

use crate::{Parser, Precedence};

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let let_token = self.current.clone();

        if !self.expect_peek(&Token::Ident(String::new())) {
            return None;
        }
        let name = monkey_ast::Identifier {
            token: self.current.clone(),
            value: self.current.literal(),
        };

        if !self.expect_peek(&Token::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let(LetStatement {
            token: let_token,
            name,
            value,
        }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let return_token = self.current.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement {
            token: return_token,
            value,
        }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expr = self.parse_expression(Precedence::Lowest);

        if self.peek_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement { token, expr }))
    }

    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.current_is(&Token::RBrace) && !self.current_is(&Token::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }
}
