use crate::env::Env;
use crate::eval::EvalError;
use crate::procedure::Procedure;
use crate::value::Value;
use std::cmp::Ordering;
use std::rc::Rc;

// check the argument count before running a builtin
macro_rules! nargs {
    ($args:expr, $n:expr) => {
        if $args.len() != $n {
            return Err(EvalError::ArityMismatch{expected: $n, got: $args.len()});
        }
    }
}

const UNARY_MATH: &[(&str, fn(f64) -> f64)] = &[
    ("sqrt", f64::sqrt), ("cbrt", f64::cbrt),
    ("sin", f64::sin), ("cos", f64::cos), ("tan", f64::tan),
    ("asin", f64::asin), ("acos", f64::acos), ("atan", f64::atan),
    ("sinh", f64::sinh), ("cosh", f64::cosh), ("tanh", f64::tanh),
    ("asinh", f64::asinh), ("acosh", f64::acosh), ("atanh", f64::atanh),
    ("exp", f64::exp), ("log", f64::ln), ("log2", f64::log2), ("log10", f64::log10),
];

const BINARY_MATH: &[(&str, fn(f64, f64) -> f64)] = &[
    ("atan2", f64::atan2), ("hypot", f64::hypot), ("pow", f64::powf),
];

fn wrong_type(expected: &str, got: &Value) -> EvalError {
    EvalError::WrongType{expected: expected.to_string(), got: got.kind().to_string()}
}

fn float(v: &Value) -> Result<f64, EvalError> {
    match v {
        Value::Integer(n) => Ok(*n as f64),
        Value::Float(n) => Ok(*n),
        other => Err(wrong_type("number", other)),
    }
}

fn list(v: &Value) -> Result<&[Value], EvalError> {
    match v {
        Value::List(l) => Ok(l),
        other => Err(wrong_type("list", other)),
    }
}

// integers stay integers, any float in the mix promotes
fn arith(args: &[Value], intop: fn(i64, i64) -> Option<i64>,
         floatop: fn(f64, f64) -> f64) -> Result<Value, EvalError> {
    nargs!(args, 2);
    match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) =>
            intop(*a, *b).map(Value::Integer).ok_or(EvalError::Overflow),
        (a, b) => Ok(Value::Float(floatop(float(a)?, float(b)?))),
    }
}

// integer division rounds towards negative infinity
fn divide(args: &[Value]) -> Result<Value, EvalError> {
    nargs!(args, 2);
    match (&args[0], &args[1]) {
        (Value::Integer(_), Value::Integer(0)) => Err(EvalError::DivisionByZero),
        (Value::Integer(a), Value::Integer(b)) => {
            let q = a.checked_div(*b).ok_or(EvalError::Overflow)?;
            if a % b != 0 && ((*a < 0) != (*b < 0)) {
                Ok(Value::Integer(q - 1))
            } else {
                Ok(Value::Integer(q))
            }
        },
        (a, b) => Ok(Value::Float(float(a)? / float(b)?)),
    }
}

fn compare(args: &[Value], accept: fn(Ordering) -> bool) -> Result<Value, EvalError> {
    nargs!(args, 2);
    let ord = match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (a, b) => float(a)?.partial_cmp(&float(b)?),
    };
    Ok(Value::Bool(ord.map_or(false, accept)))
}

fn cons(args: &[Value]) -> Result<Value, EvalError> {
    nargs!(args, 2);
    let mut l = vec![args[0].clone()];
    l.extend_from_slice(list(&args[1])?);
    Ok(Value::List(l))
}

fn car(args: &[Value]) -> Result<Value, EvalError> {
    nargs!(args, 1);
    Ok(list(&args[0])?.first().cloned().unwrap_or(Value::Nil))
}

fn cdr(args: &[Value]) -> Result<Value, EvalError> {
    nargs!(args, 1);
    match list(&args[0])? {
        [] => Ok(Value::Nil),
        [_, rest @ ..] => Ok(Value::List(rest.to_vec())),
    }
}

fn abs(args: &[Value]) -> Result<Value, EvalError> {
    nargs!(args, 1);
    match &args[0] {
        Value::Integer(n) => n.checked_abs().map(Value::Integer).ok_or(EvalError::Overflow),
        other => Ok(Value::Float(float(other)?.abs())),
    }
}

fn register<F>(env: &Env, name: &str, fp: F)
        where F: Fn(&[Value]) -> Result<Value, EvalError> + 'static {
    env.define(name, Value::Proc(Rc::new(Procedure::builtin(name, Rc::new(fp)))));
}

/// The global environment: arithmetic, comparisons, list and math procedures.
pub fn global_env() -> Rc<Env> {
    let env = Env::root();

    env.define("#t", Value::Bool(true));
    env.define("#f", Value::Bool(false));
    env.define("nil", Value::Nil);
    env.define("pi", Value::Float(std::f64::consts::PI));
    env.define("e", Value::Float(std::f64::consts::E));

    register(&env, "+", |args| arith(args, i64::checked_add, |a, b| a + b));
    register(&env, "-", |args| arith(args, i64::checked_sub, |a, b| a - b));
    register(&env, "*", |args| arith(args, i64::checked_mul, |a, b| a * b));
    register(&env, "/", divide);

    register(&env, ">", |args| compare(args, Ordering::is_gt));
    register(&env, "<", |args| compare(args, Ordering::is_lt));
    register(&env, "=", |args| compare(args, Ordering::is_eq));
    register(&env, ">=", |args| compare(args, Ordering::is_ge));
    register(&env, "<=", |args| compare(args, Ordering::is_le));
    for name in ["eq?", "equal?"] {
        register(&env, name, |args| {
            nargs!(args, 2);
            Ok(Value::Bool(args[0] == args[1]))
        });
    }

    register(&env, "not", |args| {
        nargs!(args, 1);
        Ok(Value::Bool(!args[0].is_truthy()))
    });
    register(&env, "length", |args| {
        nargs!(args, 1);
        Ok(Value::Integer(list(&args[0])?.len() as i64))
    });
    register(&env, "null?", |args| {
        nargs!(args, 1);
        Ok(Value::Bool(match &args[0] {
            Value::Nil => true,
            Value::List(l) => l.is_empty(),
            _ => false,
        }))
    });
    register(&env, "cons", cons);
    register(&env, "car", car);
    register(&env, "cdr", cdr);
    register(&env, "list", |args| Ok(Value::List(args.to_vec())));

    register(&env, "abs", abs);
    for &(name, f) in UNARY_MATH {
        register(&env, name, move |args| {
            nargs!(args, 1);
            Ok(Value::Float(f(float(&args[0])?)))
        });
    }
    for &(name, f) in BINARY_MATH {
        register(&env, name, move |args| {
            nargs!(args, 2);
            Ok(Value::Float(f(float(&args[0])?, float(&args[1])?)))
        });
    }

    Rc::new(env)
}

///////////////////////////////////////////////////////////////////////////////
