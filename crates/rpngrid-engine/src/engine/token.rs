//! Postfix expression tokenizer.
//!
//! Expressions are split on whitespace; every piece is one of a decimal
//! literal, one of the four operators, something shaped like a cell
//! address, or invalid. Addresses are not decoded here because whether
//! they resolve depends on the grid.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::cell_ref::address_re;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token<'a> {
    Number(f64),
    Operator(Operator),
    Reference(&'a str),
    Invalid(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(text: &'a str) -> Token<'a> {
        if let Some(op) = Operator::from_symbol(text) {
            return Token::Operator(op);
        }
        if number_re().is_match(text) {
            // The pattern only admits plain decimals, which always parse.
            return match text.parse::<f64>() {
                Ok(n) => Token::Number(n),
                Err(_) => Token::Invalid(text),
            };
        }
        if address_re().is_match(text) {
            return Token::Reference(text);
        }
        Token::Invalid(text)
    }
}

/// Split an expression into classified tokens, skipping empty pieces.
pub fn tokenize(expression: &str) -> impl Iterator<Item = Token<'_>> {
    expression.split_whitespace().map(Token::classify)
}

fn number_re() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| {
        Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("number literal regex must compile")
    })
}
