use crate::eval::EvalError;
use crate::procedure::Params;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One frame of bindings chained to its lexically enclosing frame.
///
/// Frames are shared through `Rc`: a call frame lives as long as the
/// evaluation using it or any closure created inside it.
pub struct Env {
    syms: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Env>>,
}

impl Env {
    pub fn root() -> Env {
        Env{syms: RefCell::new(HashMap::new()), outer: None}
    }

    /// Bind `args` to `params` positionally in a frame under `outer`.
    pub fn new(params: &Params, args: Vec<Value>,
               outer: Option<Rc<Env>>) -> Result<Env, EvalError> {
        let syms: HashMap<String, Value> = match params {
            Params::Fixed(names) => {
                if names.len() != args.len() {
                    return Err(EvalError::ArityMismatch{
                        expected: names.len(), got: args.len()});
                }
                names.iter().cloned().zip(args).collect()
            },
            Params::Rest(name) => {
                let mut syms = HashMap::new();
                syms.insert(name.clone(), Value::List(args));
                syms
            }
        };
        Ok(Env{syms: RefCell::new(syms), outer})
    }

    pub fn outer(&self) -> Option<&Rc<Env>> {
        self.outer.as_ref()
    }

    /// Nearest frame, this one first, that binds `sym`.
    pub fn find_owner(&self, sym: &str) -> Result<&Env, EvalError> {
        if self.syms.borrow().contains_key(sym) {
            Ok(self)
        } else if let Some(ref outer) = self.outer {
            outer.find_owner(sym)
        } else {
            Err(EvalError::UnboundSymbol(sym.to_string()))
        }
    }

    pub fn lookup(&self, sym: &str) -> Result<Value, EvalError> {
        self.find_owner(sym)?
            .syms.borrow()
            .get(sym)
            .cloned()
            .ok_or_else(|| EvalError::UnboundSymbol(sym.to_string()))
    }

    /// Bind in this frame only, shadowing any outer binding.
    pub fn define(&self, sym: &str, value: Value) {
        self.syms.borrow_mut().insert(sym.to_string(), value);
    }

    /// Rebind `sym` in the frame that already owns it.
    pub fn set_existing(&self, sym: &str, value: Value) -> Result<(), EvalError> {
        self.find_owner(sym)?.syms.borrow_mut().insert(sym.to_string(), value);
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////
