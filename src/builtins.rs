//! Fixed, process-wide table of native functions.
//!
//! Environment lookup precedes this table, so users can shadow a builtin
//! with `let` — that's intentional, not an oversight.
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::object::{BuiltinFn, Object};

static BUILTINS: Lazy<HashMap<&'static str, BuiltinFn>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, BuiltinFn> = HashMap::new();
    m.insert("len", builtin_len);
    m.insert("first", builtin_first);
    m.insert("last", builtin_last);
    m.insert("rest", builtin_rest);
    m.insert("push", builtin_push);
    m
});

pub fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTINS.get(name).copied()
}

fn wrong_arity(got: usize, want: usize) -> Object {
    Object::Error(format!(
        "wrong number of arguments; got {got} but wanted {want}"
    ))
}

fn builtin_len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::String(s) => Object::Integer(s.chars().count() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::Error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

fn builtin_first(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn builtin_last(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn builtin_rest(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Object::Null
            } else {
                Object::Array(elements[1..].to_vec())
            }
        }
        other => Object::Error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn builtin_push(args: &[Object]) -> Object {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match &args[0] {
        Object::Array(elements) => {
            let mut new_elements = elements.clone();
            new_elements.push(args[1].clone());
            Object::Array(new_elements)
        }
        other => Object::Error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[Object]) -> Object {
        lookup(name).expect("builtin present")(args)
    }

    #[test]
    fn len_of_string_and_array() {
        assert!(matches!(
            call("len", &[Object::String("hello world".into())]),
            Object::Integer(11)
        ));
        assert!(matches!(
            call(
                "len",
                &[Object::Array(vec![Object::Integer(1), Object::Integer(2)])]
            ),
            Object::Integer(2)
        ));
    }

    #[test]
    fn len_rejects_unsupported_type() {
        let result = call("len", &[Object::Integer(1)]);
        match result {
            Object::Error(msg) => assert_eq!(msg, "argument to `len` not supported, got INTEGER"),
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn push_does_not_mutate_original() {
        let original = Object::Array(vec![Object::Integer(1)]);
        let result = call("push", &[original.clone(), Object::Integer(2)]);
        let Object::Array(original_elements) = &original else {
            unreachable!()
        };
        assert_eq!(original_elements.len(), 1);
        let Object::Array(new_elements) = result else {
            panic!("expected array");
        };
        assert_eq!(new_elements.len(), 2);
    }

    #[test]
    fn first_last_rest_on_empty_array_yield_null() {
        assert!(matches!(call("first", &[Object::Array(vec![])]), Object::Null));
        assert!(matches!(call("last", &[Object::Array(vec![])]), Object::Null));
        assert!(matches!(call("rest", &[Object::Array(vec![])]), Object::Null));
    }

    #[test]
    fn wrong_arity_message() {
        match call("len", &[Object::Integer(1), Object::Integer(2)]) {
            Object::Error(msg) => {
                assert_eq!(msg, "wrong number of arguments; got 2 but wanted 1")
            }
            _ => panic!("expected error"),
        }
    }
}
