use crate::env::Env;
use crate::eval::{evaluate, EvalError};
use crate::parser::Expr;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

pub type Fp = Rc<dyn Fn(&[Value]) -> Result<Value, EvalError>>;

/// How a closure binds its call arguments.
#[derive(Clone, PartialEq, Debug)]
pub enum Params {
    /// `(lambda (a b) ...)`: one argument per name.
    Fixed(Vec<String>),
    /// `(lambda args ...)`: the whole argument list under one name.
    Rest(String),
}

pub enum Procedure {
    Builtin { name: String, fp: Fp },
    Closure { params: Params, body: Expr, env: Rc<Env> },
}

// procedures are only equal to themselves
impl PartialEq for Procedure {
    fn eq(&self, other: &Procedure) -> bool { std::ptr::eq(self, other) }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Procedure::Builtin { name, .. } => write!(f, "#<builtin {}>", name),
            Procedure::Closure { params: Params::Fixed(names), .. } =>
                write!(f, "#<lambda ({})>", names.join(" ")),
            Procedure::Closure { params: Params::Rest(name), .. } =>
                write!(f, "#<lambda {}>", name),
        }
    }
}

impl Procedure {
    pub fn builtin(name: &str, fp: Fp) -> Procedure {
        Procedure::Builtin { name: name.to_string(), fp }
    }

    pub fn closure(params: Params, body: Expr, env: Rc<Env>) -> Procedure {
        Procedure::Closure { params, body, env }
    }

    /// Closures run in a fresh frame under the environment they captured.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        match self {
            Procedure::Builtin { fp, .. } => fp(&args),
            Procedure::Closure { params, body, env } => {
                let frame = Env::new(params, args, Some(env.clone()))?;
                evaluate(body, &Rc::new(frame))
            }
        }
    }
}
