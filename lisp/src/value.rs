use crate::atom::{fmt_float, Atom};
use crate::parser::Expr;
use crate::procedure::Procedure;
use std::fmt;
use std::rc::Rc;

/// Runtime result of evaluation.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Symbol(String),
    List(Vec<Value>),
    Proc(Rc<Procedure>),
    Nil,
}

impl Value {
    /// Only `#f` and `nil` are false.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Nil)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Proc(_) => "procedure",
            Value::Nil => "nil",
        }
    }
}

// quoted syntax becomes data as-is
impl From<&Expr> for Value {
    fn from(expr: &Expr) -> Value {
        match expr {
            Expr::Atom(Atom::Integer(n)) => Value::Integer(*n),
            Expr::Atom(Atom::Float(n)) => Value::Float(*n),
            Expr::Atom(Atom::Symbol(s)) => Value::Symbol(s.clone()),
            Expr::List(list) => Value::List(list.iter().map(Value::from).collect()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", fmt_float(*n)),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::List(list) => {
                write!(f, "(")?;
                for (i, v) in list.iter().enumerate() {
                    if i > 0 { write!(f, " ")?; }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            },
            Value::Proc(p) => write!(f, "{}", p),
            Value::Nil => write!(f, "nil"),
        }
    }
}
