use std::fmt;

/// A classified leaf token.
#[derive(Clone, PartialEq, Debug)]
pub enum Atom {
    Integer(i64),
    Float(f64),
    Symbol(String),
}

/// Integer first, then float, anything else is a symbol. Never fails.
pub fn classify(token: &str) -> Atom {
    if let Some(n) = integer(token) {
        Atom::Integer(n)
    } else if let Some(n) = float(token) {
        Atom::Float(n)
    } else {
        Atom::Symbol(token.to_string())
    }
}

fn integer(token: &str) -> Option<i64> {
    if token.starts_with('+') {
        return None;
    }
    token.parse().ok()
}

// only plain decimal/exponent spellings, so 'inf' and 'nan' remain symbols
fn float(token: &str) -> Option<f64> {
    let numeric = token.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c));
    if !numeric || !token.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Floats always print with a fractional part or exponent so they read back as floats.
pub fn fmt_float(n: f64) -> String {
    format!("{:?}", n)
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom::Integer(n) => write!(f, "{}", n),
            Atom::Float(n) => write!(f, "{}", fmt_float(*n)),
            Atom::Symbol(s) => write!(f, "{}", s),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
