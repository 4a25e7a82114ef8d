//! A small scheme-like interpreter.
//!
//! Source text goes through the tokenizer (`lexers::LispTokenizer`), the
//! reader (`Parser`) and the evaluator, which runs against a chain of `Env`
//! frames. `global_env` builds the standard top-level environment.

extern crate lexers;

// verbose tracing, only with the 'debug' feature
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

mod atom;
mod builtin;
mod env;
mod eval;
mod parser;
mod procedure;
mod value;

pub use atom::{classify, Atom};
pub use builtin::global_env;
pub use env::Env;
pub use eval::{evaluate, run, EvalError, LispError};
pub use parser::{Expr, Forms, ParseError, Parser};
pub use procedure::{Fp, Params, Procedure};
pub use value::Value;

/// Split source text into paren and atom tokens.
pub fn tokenize(source: &str) -> Vec<String> {
    lexers::LispTokenizer::new(source).collect()
}

/// Read exactly one expression from `source`.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::parse_str(source)
}
