//! Black-box scenarios driven only through the public `evaluate`/`inspect`
//! API, matching the worked examples used to validate the interpreter.
use monkey::environment::Environment;
use monkey::object::inspect;
use monkey::{evaluate, Object};

fn run(src: &str) -> Object {
    let env = Environment::new();
    evaluate(src, &env)
}

#[test]
fn arithmetic_precedence() {
    assert!(matches!(
        run("(5 + 10 * 2 + 15 / 3) * 2 + -10"),
        Object::Integer(50)
    ));
}

#[test]
fn let_bindings_accumulate() {
    assert!(matches!(
        run("let a = 5; let b = a; let c = a + b + 5; c"),
        Object::Integer(15)
    ));
}

#[test]
fn closures_see_outer_bindings_at_call_time() {
    assert!(matches!(
        run("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2)"),
        Object::Integer(4)
    ));
}

#[test]
fn string_concatenation_chain() {
    match run(r#""Hello" + " " + "World!""#) {
        Object::String(s) => assert_eq!(s, "Hello World!"),
        other => panic!("unexpected result: {}", inspect(&other)),
    }
}

#[test]
fn nested_block_return_is_not_unwrapped_early() {
    match run("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }") {
        Object::Error(msg) => assert_eq!(msg, "unknown operator: BOOLEAN + BOOLEAN"),
        other => panic!("unexpected result: {}", inspect(&other)),
    }
}

#[test]
fn function_is_not_a_usable_hash_key() {
    match run(r#"{"name": "Monkey"}[fn(x) { x }]"#) {
        Object::Error(msg) => assert_eq!(msg, "unusable as hash key: FUNCTION"),
        other => panic!("unexpected result: {}", inspect(&other)),
    }
}

#[test]
fn array_indexing_bounds() {
    assert!(matches!(
        run("let a = [1, 2, 3]; a[0] + a[1] + a[2]"),
        Object::Integer(6)
    ));
    assert!(matches!(run("let a = [1, 2, 3]; a[-1]"), Object::Null));
    assert!(matches!(run("let a = [1, 2, 3]; a[3]"), Object::Null));
}

#[test]
fn len_builtin_on_string_and_bad_argument() {
    assert!(matches!(run(r#"len("hello world")"#), Object::Integer(11)));
    match run("len(1)") {
        Object::Error(msg) => assert_eq!(msg, "argument to `len` not supported, got INTEGER"),
        other => panic!("unexpected result: {}", inspect(&other)),
    }
}

#[test]
fn string_indexing_is_unsupported() {
    match run(r#""abc"[0]"#) {
        Object::Error(msg) => assert_eq!(msg, "index operator not supported: STRING"),
        other => panic!("unexpected result: {}", inspect(&other)),
    }
}

#[test]
fn recursive_functions_via_let_self_reference() {
    let src = r#"
        let fact = fn(n) { if (n == 0) { 1 } else { n * fact(n - 1) } };
        fact(5)
    "#;
    assert!(matches!(run(src), Object::Integer(120)));
}

#[test]
fn array_builtins_compose() {
    let src = r#"
        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))))
                }
            };
            iter(arr, [])
        };
        let double = fn(x) { x * 2 };
        map([1, 2, 3, 4], double)
    "#;
    match run(src) {
        Object::Array(elements) => {
            let values: Vec<i64> = elements
                .into_iter()
                .map(|o| match o {
                    Object::Integer(n) => n,
                    _ => panic!("expected integer"),
                })
                .collect();
            assert_eq!(values, vec![2, 4, 6, 8]);
        }
        other => panic!("unexpected result: {}", inspect(&other)),
    }
}

#[test]
fn hash_literal_inspect_preserves_insertion_order() {
    let env = Environment::new();
    let result = evaluate(r#"{"one": 1, "two": 2, "three": 3}"#, &env);
    assert_eq!(inspect(&result), "{ one: 1, two: 2, three: 3 }");
}
