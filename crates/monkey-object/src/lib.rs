//! monkey-object - Runtime value model + lexical Environment
//!
//! Runtime values are tagged unions (`Value`), always passed around as
//! `Rc<Value>` so that a `Function` closure can cheaply share its captured
//! environment and so that `Null`/`True`/`False` can be true singletons:
//! [`null`], [`truthy_bool`] each hand out a clone of one process-wide `Rc`,
//! and `==`/`!=` on non-integer operands (implemented in `monkey-eval`) lean
//! on `Rc::ptr_eq` rather than structural equality — the same "compare a
//! compact handle, not the payload" trick the teacher's `Symbol` interner
//! uses for identifiers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::OnceLock;

use monkey_ast::{BlockStatement, Identifier};

/// A runtime value. Every variant reports a stable [`Value::type_tag`] used
/// verbatim in error messages.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    /// Wraps the value being unwound by a `return`. Blocks propagate this
    /// without unwrapping; only `Program` (top-level) and function
    /// application unwrap it once.
    ReturnValue(Rc<Value>),
    Error(String),
    Function(FunctionValue),
}

/// A closure: the parameter names and body from a `FunctionLiteral`, plus
/// the environment that was active when the literal was evaluated.
#[derive(Debug, Clone)]
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Environment,
}

impl Value {
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Anything other than `Null` and `Boolean(false)` counts as truthy,
    /// including `Integer(0)` and functions.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Null => write!(f, "null"),
            Value::ReturnValue(inner) => write!(f, "{inner}"),
            Value::Error(msg) => write!(f, "ERROR: {msg}"),
            Value::Function(func) => {
                let params: Vec<String> = func.parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), func.body)
            }
        }
    }
}

fn singleton(cell: &OnceLock<Rc<Value>>, make: impl FnOnce() -> Value) -> Rc<Value> {
    cell.get_or_init(|| Rc::new(make())).clone()
}

static NULL_CELL: OnceLock<Rc<Value>> = OnceLock::new();
static TRUE_CELL: OnceLock<Rc<Value>> = OnceLock::new();
static FALSE_CELL: OnceLock<Rc<Value>> = OnceLock::new();

/// The single shared `Null` value for this process.
pub fn null() -> Rc<Value> {
    singleton(&NULL_CELL, || Value::Null)
}

/// The single shared `Boolean(true)` value.
pub fn true_value() -> Rc<Value> {
    singleton(&TRUE_CELL, || Value::Boolean(true))
}

/// The single shared `Boolean(false)` value.
pub fn false_value() -> Rc<Value> {
    singleton(&FALSE_CELL, || Value::Boolean(false))
}

/// Map a native bool to the matching `TRUE`/`FALSE` singleton.
pub fn native_bool(b: bool) -> Rc<Value> {
    if b {
        true_value()
    } else {
        false_value()
    }
}

struct EnvironmentData {
    store: HashMap<String, Rc<Value>>,
    outer: Option<Environment>,
}

/// A mapping from name to value, plus an optional enclosing scope. Cloning
/// an `Environment` clones the handle (`Rc`), not the bindings — the clone
/// still refers to the same mutable store, which is exactly what letting a
/// `Function` value capture "the environment active at its creation" needs.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Environment {
    /// A fresh, empty top-level environment with no enclosing scope.
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            store: HashMap::new(),
            outer: None,
        })))
    }

    /// A new environment enclosing `self`, for a function call's local
    /// bindings.
    pub fn new_enclosed(&self) -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            store: HashMap::new(),
            outer: Some(self.clone()),
        })))
    }

    /// Look up `name`, walking the enclosing chain outward. Insertion is
    /// always local, so a hit in an outer scope never gets cached locally.
    pub fn get(&self, name: &str) -> Option<Rc<Value>> {
        let data = self.0.borrow();
        if let Some(value) = data.store.get(name) {
            return Some(value.clone());
        }
        data.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` to `value` in this scope (never an enclosing one).
    pub fn set(&self, name: impl Into<String>, value: Rc<Value>) -> Rc<Value> {
        self.0.borrow_mut().store.insert(name.into(), value.clone());
        value
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
