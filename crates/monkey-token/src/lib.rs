//! monkey-token - Lexical token model
//!
//! A token pairs a syntactic kind with the literal source text that produced
//! it. Rather than a `(kind, literal)` struct, each variant of [`Token`]
//! carries its own payload directly — variants with no interesting payload
//! (operators, delimiters, keywords) are unit variants, and the two atom
//! kinds (`Ident`, `Int`) carry the matched source text.
//!
//! Keyword classification (`fn`, `let`, `true`, `false`, `if`, `else`,
//! `return`) happens once, in [`lookup_ident`], so that the lexer never has
//! to special-case keyword spelling itself — it always produces an `Ident`
//! candidate string and asks this module what to do with it.

use std::fmt;

/// A single lexical token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An unrecognized character. Carries the offending character as text.
    Illegal(String),
    /// End of input. Once returned, every subsequent call returns it again.
    Eof,

    /// An identifier that is not one of the reserved keywords.
    Ident(String),
    /// A run of decimal digits, not yet parsed to a number.
    Int(String),

    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    Lt,
    Gt,
    Eq,
    NotEq,

    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// Reconstruct the source text that produced this token.
    ///
    /// Used only for rendering (AST nodes keep the token that begins them
    /// and render its literal); it is never consulted during lexing or
    /// parsing decisions.
    pub fn literal(&self) -> String {
        match self {
            Token::Illegal(s) => s.clone(),
            Token::Eof => String::new(),
            Token::Ident(s) => s.clone(),
            Token::Int(s) => s.clone(),
            Token::Assign => "=".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Bang => "!".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Lt => "<".to_string(),
            Token::Gt => ">".to_string(),
            Token::Eq => "==".to_string(),
            Token::NotEq => "!=".to_string(),
            Token::Comma => ",".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::Function => "fn".to_string(),
            Token::Let => "let".to_string(),
            Token::True => "true".to_string(),
            Token::False => "false".to_string(),
            Token::If => "if".to_string(),
            Token::Else => "else".to_string(),
            Token::Return => "return".to_string(),
        }
    }

    /// A stable, human-readable name for the token's kind, used in parser
    /// diagnostics (e.g. `"expected next token to be X, got Y instead"`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Illegal(_) => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Ident(_) => "IDENT",
            Token::Int(_) => "INT",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Eq => "==",
            Token::NotEq => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// Classify an identifier-shaped run of characters as a keyword token or a
/// plain `Ident`.
pub fn lookup_ident(ident: &str) -> Token {
    match ident {
        "fn" => Token::Function,
        "let" => Token::Let,
        "true" => Token::True,
        "false" => Token::False,
        "if" => Token::If,
        "else" => Token::Else,
        "return" => Token::Return,
        _ => Token::Ident(ident.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_classify_correctly() {
        assert_eq!(lookup_ident("fn"), Token::Function);
        assert_eq!(lookup_ident("let"), Token::Let);
        assert_eq!(lookup_ident("true"), Token::True);
        assert_eq!(lookup_ident("false"), Token::False);
        assert_eq!(lookup_ident("if"), Token::If);
        assert_eq!(lookup_ident("else"), Token::Else);
        assert_eq!(lookup_ident("return"), Token::Return);
    }

    #[test]
    fn non_keywords_become_idents() {
        assert_eq!(lookup_ident("foobar"), Token::Ident("foobar".to_string()));
        assert_eq!(lookup_ident("_x"), Token::Ident("_x".to_string()));
    }

    #[test]
    fn literal_roundtrips_operators() {
        assert_eq!(Token::Eq.literal(), "==");
        assert_eq!(Token::NotEq.literal(), "!=");
        assert_eq!(Token::Assign.literal(), "=");
        assert_eq!(Token::Bang.literal(), "!");
    }
}
