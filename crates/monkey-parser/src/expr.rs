//! Expression parsing - the Pratt parser core plus one function per
//! prefix/infix production.

use monkey_ast::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, IntegerLiteral, NullExpression, PrefixExpression,
};
use monkey_token::Token;

use crate::{Parser, Precedence};

impl<'a> Parser<'a> {
    /// The Pratt parser's core loop: parse a prefix expression for `current`,
    /// then keep absorbing infix operators from `peek` as long as they bind
    /// tighter than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Expression {
        let mut left = match self.parse_prefix() {
            Some(expr) => expr,
            None => {
                self.no_prefix_parse_fn_error(&self.current.clone());
                return Expression::Null(NullExpression);
            }
        };

        while !self.peek_is(&Token::Semicolon) && precedence < self.peek_precedence() {
            if !self.peek_has_infix() {
                return left;
            }
            self.next_token();
            left = self.parse_infix(left);
        }

        left
    }

    fn peek_has_infix(&self) -> bool {
        matches!(
            self.peek,
            Token::Plus
                | Token::Minus
                | Token::Slash
                | Token::Asterisk
                | Token::Eq
                | Token::NotEq
                | Token::Lt
                | Token::Gt
                | Token::LParen
        )
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match &self.current {
            Token::Ident(name) => Some(Expression::Identifier(Identifier {
                token: self.current.clone(),
                value: name.clone(),
            })),
            Token::Int(digits) => Some(self.parse_integer_literal(digits.clone())),
            Token::Bang | Token::Minus => Some(self.parse_prefix_expression()),
            Token::True | Token::False => Some(Expression::Boolean(BooleanLiteral {
                token: self.current.clone(),
                value: self.current_is(&Token::True),
            })),
            Token::LParen => Some(self.parse_grouped_expression()),
            Token::If => Some(self.parse_if_expression()),
            Token::Function => Some(self.parse_function_literal()),
            _ => None,
        }
    }

    /// An INT token always has a prefix parser; an out-of-range digit run is
    /// its own distinct failure (`"could not parse … as integer"`), not a
    /// missing-prefix-handler one, so it must not also fall through to
    /// `no_prefix_parse_fn_error` the way returning `None` here would cause.
    fn parse_integer_literal(&mut self, digits: String) -> Expression {
        match digits.parse::<i64>() {
            Ok(value) => Expression::IntegerLiteral(IntegerLiteral {
                token: self.current.clone(),
                value,
            }),
            Err(_) => {
                self.errors
                    .push(format!("could not parse {digits:?} as integer"));
                Expression::Null(NullExpression)
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Expression {
        let token = self.current.clone();
        let operator = token.literal();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix);
        Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Expression {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(&Token::RParen) {
            return Expression::Null(NullExpression);
        }
        expr
    }

    fn parse_if_expression(&mut self) -> Expression {
        let token = self.current.clone();

        if !self.expect_peek(&Token::LParen) {
            return Expression::Null(NullExpression);
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(&Token::RParen) {
            return Expression::Null(NullExpression);
        }
        if !self.expect_peek(&Token::LBrace) {
            return Expression::Null(NullExpression);
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();
            if !self.expect_peek(&Token::LBrace) {
                return Expression::Null(NullExpression);
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Expression {
        let token = self.current.clone();

        if !self.expect_peek(&Token::LParen) {
            return Expression::Null(NullExpression);
        }
        let parameters = self.parse_function_parameters();

        if !self.expect_peek(&Token::LBrace) {
            return Expression::Null(NullExpression);
        }
        let body = self.parse_block_statement();

        Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        })
    }

    fn parse_function_parameters(&mut self) -> Vec<Identifier> {
        let mut identifiers = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next_token();
            return identifiers;
        }

        self.next_token();
        identifiers.push(self.current_identifier());

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(self.current_identifier());
        }

        if !self.expect_peek(&Token::RParen) {
            return Vec::new();
        }

        identifiers
    }

    fn current_identifier(&self) -> Identifier {
        Identifier {
            token: self.current.clone(),
            value: self.current.literal(),
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Expression {
        if self.current_is(&Token::LParen) {
            return self.parse_call_expression(left);
        }

        let token = self.current.clone();
        let operator = token.literal();
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence);

        Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn parse_call_expression(&mut self, function: Expression) -> Expression {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(&Token::RParen);
        Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    /// Comma-separated expressions at `LOWEST`, terminated by `end`. Used for
    /// both call arguments.
    fn parse_expression_list(&mut self, end: &Token) -> Vec<Expression> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return list;
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest));

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest));
        }

        if !self.expect_peek(end) {
            return Vec::new();
        }

        list
    }
}
