use crate::atom::{classify, Atom};
use lexers::{LispTokenizer, Scanner};
use std::fmt;
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected ')'")]
    UnmatchedCloseParen,
    #[error("{0} token(s) left after the expression")]
    TrailingTokens(usize),
}

/// Parsed program syntax. Immutable once read, may be evaluated many times.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Atom(Atom),
    List(Vec<Expr>),
}

impl Expr {
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Expr::Atom(Atom::Symbol(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Atom(atom) => write!(f, "{}", atom),
            Expr::List(list) => {
                write!(f, "(")?;
                for (i, expr) in list.iter().enumerate() {
                    if i > 0 { write!(f, " ")?; }
                    write!(f, "{}", expr)?;
                }
                write!(f, ")")
            }
        }
    }
}

pub struct Parser;

impl Parser {
    /// Read exactly one expression, leftover tokens are an error.
    pub fn parse_str(source: &str) -> Result<Expr, ParseError> {
        let mut lex = LispTokenizer::scanner(source);
        let expr = Self::read(&mut lex)?;
        match lex.count() {
            0 => Ok(expr),
            n => Err(ParseError::TrailingTokens(n)),
        }
    }

    /// Every top-level expression in `source`, in order.
    pub fn forms(source: &str) -> Forms {
        Forms{lex: LispTokenizer::scanner(source), failed: false}
    }

    /// Read one expression off the front of `lex`.
    pub fn read<I>(lex: &mut Scanner<I>) -> Result<Expr, ParseError>
            where I: Iterator<Item=String> {
        let token = lex.next().ok_or(ParseError::UnexpectedEndOfInput)?;
        match token.as_str() {
            "(" => {
                let mut list = Vec::new();
                while lex.peek().as_deref() != Some(")") { // None fails in read
                    list.push(Self::read(lex)?);
                }
                lex.next(); // get over that ')'
                Ok(Expr::List(list))
            },
            ")" => Err(ParseError::UnmatchedCloseParen),
            _ => Ok(Expr::Atom(classify(&token))),
        }
    }
}

pub struct Forms {
    lex: Scanner<LispTokenizer>,
    failed: bool,
}

impl Iterator for Forms {
    type Item = Result<Expr, ParseError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.lex.peek().is_none() {
            return None;
        }
        let form = Parser::read(&mut self.lex);
        self.lex.ignore();
        self.failed = form.is_err();
        Some(form)
    }
}
