use crate::atom::Atom;
use crate::env::Env;
use crate::parser::{Expr, ParseError, Parser};
use crate::procedure::{Params, Procedure};
use crate::value::Value;
use std::rc::Rc;
use thiserror::Error;

macro_rules! check {
    ($argcheck:expr, $err:expr) => {
        if ! $argcheck { return Err($err); }
    }
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum EvalError {
    #[error("unbound symbol '{0}'")]
    UnboundSymbol(String),
    #[error("bad syntax in '{0}' form")]
    SyntaxError(String),
    #[error("expected {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("{0} is not callable")]
    NotCallable(String),
    #[error("expected {expected}, got {got}")]
    WrongType { expected: String, got: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum LispError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalError),
}

/// Evaluate every top-level form of `source` in `env`, returning the last value.
pub fn run(source: &str, env: &Rc<Env>) -> Result<Value, LispError> {
    let mut last = Value::Nil;
    for form in Parser::forms(source) {
        last = evaluate(&form?, env)?;
    }
    Ok(last)
}

pub fn evaluate(expr: &Expr, env: &Rc<Env>) -> Result<Value, EvalError> {
    // (x) is the same as x, one level per call
    let expr = match expr {
        Expr::List(list) if list.len() == 1 => &list[0],
        _ => expr,
    };
    match expr {
        Expr::Atom(Atom::Symbol(sym)) => env.lookup(sym),
        Expr::Atom(Atom::Integer(n)) => Ok(Value::Integer(*n)),
        Expr::Atom(Atom::Float(n)) => Ok(Value::Float(*n)),
        Expr::List(list) => match list.first().and_then(Expr::symbol) {
            None if list.is_empty() => Ok(Value::Nil),
            Some("quote") => {
                check!(list.len() == 2, syntax("quote"));
                Ok(Value::from(&list[1]))
            },
            Some("if") => {
                check!(list.len() == 4, syntax("if"));
                let (test, conseq, alt) = (&list[1], &list[2], &list[3]);
                if evaluate(test, env)?.is_truthy() {
                    evaluate(conseq, env)
                } else {
                    evaluate(alt, env)
                }
            },
            Some("define") => {
                check!(list.len() == 3, syntax("define"));
                let var = list[1].symbol().ok_or_else(|| syntax("define"))?;
                let value = evaluate(&list[2], env)?;
                debug!("define {} = {}", var, value);
                env.define(var, value.clone());
                Ok(value)
            },
            Some("set!") => {
                check!(list.len() == 3, syntax("set!"));
                let var = list[1].symbol().ok_or_else(|| syntax("set!"))?;
                let value = evaluate(&list[2], env)?;
                debug!("set! {} = {}", var, value);
                env.set_existing(var, value.clone())?;
                Ok(value)
            },
            Some("lambda") => {
                check!(list.len() == 3, syntax("lambda"));
                let params = lambda_params(&list[1])?;
                Ok(Value::Proc(Rc::new(
                    Procedure::closure(params, list[2].clone(), env.clone()))))
            },
            Some("begin") => {
                check!(list.len() > 1, syntax("begin"));
                let mut last = Value::Nil;
                for expr in list.iter().skip(1) {
                    last = evaluate(expr, env)?;
                }
                Ok(last)
            },
            _ => apply(list, env),
        }
    }
}

fn syntax(form: &str) -> EvalError {
    EvalError::SyntaxError(form.to_string())
}

fn lambda_params(expr: &Expr) -> Result<Params, EvalError> {
    match expr {
        Expr::Atom(Atom::Symbol(rest)) => Ok(Params::Rest(rest.clone())),
        Expr::List(vars) => vars.iter()
            .map(|var| var.symbol().map(str::to_string).ok_or_else(|| syntax("lambda")))
            .collect::<Result<Vec<_>, _>>()
            .map(Params::Fixed),
        _ => Err(syntax("lambda")),
    }
}

// operator position is evaluated like any other element
fn apply(list: &[Expr], env: &Rc<Env>) -> Result<Value, EvalError> {
    let mut values = list.iter()
        .map(|expr| evaluate(expr, env))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();
    match values.next() {
        Some(Value::Proc(procedure)) => {
            let args: Vec<Value> = values.collect();
            debug!("apply {} to {} arg(s)", procedure, args.len());
            procedure.call(args)
        },
        Some(other) => Err(EvalError::NotCallable(other.kind().to_string())),
        None => Ok(Value::Nil),
    }
}
