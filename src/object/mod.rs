//! Runtime value model.
mod hash_key;

pub use self::hash_key::HashKey;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;

pub type BuiltinFn = fn(&[Object]) -> Object;

/// A runtime value. `Return` and `Error` are control-flow carriers, not
/// user-constructable types; they flow through the evaluator and are
/// unwrapped or propagated per the block/program sequencing rules.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Array(Vec<Object>),
    Hash(IndexMap<HashKey, (Object, Object)>),
    Function {
        parameters: Vec<Identifier>,
        body: BlockStatement,
        env: Rc<RefCell<Environment>>,
    },
    Builtin(BuiltinFn),
    Return(Box<Object>),
    Error(String),
}

impl Object {
    /// The type name as it appears verbatim in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function { .. } => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Return(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Truthiness: everything except `false` and `null` is truthy,
    /// including `0` and the empty string.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(n) => Some(HashKey::Integer(*n)),
            Object::Boolean(b) => Some(HashKey::Boolean(*b)),
            Object::String(s) => Some(HashKey::String(s.clone())),
            _ => None,
        }
    }
}

/// Render a value the way the REPL/CLI prints it.
pub fn inspect(object: &Object) -> String {
    match object {
        Object::Integer(n) => n.to_string(),
        Object::Boolean(b) => b.to_string(),
        Object::String(s) => s.clone(),
        Object::Null => "null".to_string(),
        Object::Array(elements) => {
            let rendered: Vec<String> = elements.iter().map(inspect).collect();
            format!("[{}]", rendered.join(", "))
        }
        Object::Hash(pairs) => {
            let rendered: Vec<String> = pairs
                .values()
                .map(|(k, v)| format!("{}: {}", inspect(k), inspect(v)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
        Object::Function {
            parameters, body, ..
        } => {
            let params: Vec<String> = parameters.iter().map(|p| p.value.clone()).collect();
            format!("fn({}) {{\n{:?}\n}}", params.join(", "), body)
        }
        Object::Builtin(_) => "builtin function".to_string(),
        Object::Return(inner) => inspect(inner),
        Object::Error(message) => format!("ERROR: {message}"),
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", inspect(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_key_only_defined_for_integer_bool_string() {
        assert!(Object::Integer(5).hash_key().is_some());
        assert!(Object::Boolean(true).hash_key().is_some());
        assert!(Object::String("a".into()).hash_key().is_some());
        assert!(Object::Null.hash_key().is_none());
        assert!(Object::Array(vec![]).hash_key().is_none());
    }

    #[test]
    fn truthiness_matches_spec() {
        assert!(Object::Integer(0).is_truthy());
        assert!(Object::String(String::new()).is_truthy());
        assert!(!Object::Boolean(false).is_truthy());
        assert!(!Object::Null.is_truthy());
    }

    #[test]
    fn inspect_array_and_error() {
        let arr = Object::Array(vec![Object::Integer(1), Object::Integer(2)]);
        assert_eq!(inspect(&arr), "[1, 2]");
        let err = Object::Error("boom".into());
        assert_eq!(inspect(&err), "ERROR: boom");
    }
}
