//! Recursive tree-walking evaluator.
use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::*;
use crate::builtins;
use crate::environment::Environment;
use crate::object::Object;

type Env = Rc<RefCell<Environment>>;

fn error(message: impl Into<String>) -> Object {
    Object::Error(message.into())
}

/// Evaluate a full program. A `Return` result is unwrapped here — this is
/// the outermost boundary a `return` can travel to.
pub fn eval_program(program: &Program, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result {
            Object::Return(value) => {
                log::trace!("top-level result: {}", crate::object::inspect(&value));
                return *value;
            }
            Object::Error(_) => {
                log::trace!("top-level result: {}", crate::object::inspect(&result));
                return result;
            }
            _ => {}
        }
    }

    log::trace!("top-level result: {}", crate::object::inspect(&result));
    result
}

/// Evaluate a block. Unlike `eval_program`, `Return`/`Error` are **not**
/// unwrapped here, so they keep propagating outward through nested blocks
/// until a program or function call boundary unwraps them.
fn eval_block(block: &BlockStatement, env: &Env) -> Object {
    let mut result = Object::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result, Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Env) -> Object {
    match statement {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.return_value, env);
            if value.is_error() {
                return value;
            }
            Object::Return(Box::new(value))
        }
        Statement::Let(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(stmt.name.value.clone(), value);
            Object::Null
        }
    }
}

fn eval_expression(expression: &Expression, env: &Env) -> Object {
    match expression {
        Expression::IntegerLiteral(n) => Object::Integer(*n),
        Expression::StringLiteral(s) => Object::String(s.clone()),
        Expression::BooleanLiteral(b) => Object::Boolean(*b),
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::Prefix(expr) => {
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&expr.operator, right)
        }
        Expression::Infix(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&expr.operator, left, right)
        }
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::FunctionLiteral(expr) => Object::Function {
            parameters: expr.parameters.clone(),
            body: expr.body.clone(),
            env: env.clone(),
        },
        Expression::Call(expr) => eval_call_expression(expr, env),
        Expression::ArrayLiteral(expr) => {
            let elements = match eval_expressions(&expr.elements, env) {
                Ok(elements) => elements,
                Err(err) => return err,
            };
            Object::Array(elements)
        }
        Expression::Index(expr) => eval_index_expression(expr, env),
        Expression::HashLiteral(expr) => eval_hash_literal(expr, env),
    }
}

fn eval_identifier(name: &str, env: &Env) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return Object::Builtin(builtin);
    }
    error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(!right.is_truthy()),
        "-" => match right {
            Object::Integer(n) => Object::Integer(-n),
            other => error(format!("unknown operator: -{}", other.type_name())),
        },
        other => error(format!(
            "unknown operator: {other}{}",
            right.type_name()
        )),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, l, r),
        (Object::Boolean(l), Object::Boolean(r)) => match operator {
            "==" => Object::Boolean(l == r),
            "!=" => Object::Boolean(l != r),
            other => error(format!(
                "unknown operator: {} {other} {}",
                left.type_name(),
                right.type_name()
            )),
        },
        _ if left.type_name() != right.type_name() => error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left + right),
        "-" => Object::Integer(left - right),
        "*" => Object::Integer(left * right),
        "/" => Object::Integer(left / right),
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        other => error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::String(format!("{left}{right}")),
        other => error(format!("unknown operator: STRING {other} STRING")),
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Env) -> Object {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block(alternative, env)
    } else {
        Object::Null
    }
}

fn eval_expressions(expressions: &[Expression], env: &Env) -> Result<Vec<Object>, Object> {
    let mut values = Vec::with_capacity(expressions.len());
    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_call_expression(expr: &CallExpression, env: &Env) -> Object {
    let function = eval_expression(&expr.function, env);
    if function.is_error() {
        return function;
    }

    let arguments = match eval_expressions(&expr.arguments, env) {
        Ok(arguments) => arguments,
        Err(err) => return err,
    };

    apply_function(function, arguments)
}

fn apply_function(function: Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            let call_env = Environment::new_enclosed(env);
            // Arity is not checked: extra arguments are discarded, missing
            // ones surface as "identifier not found" when referenced.
            for (param, arg) in parameters.iter().zip(arguments.into_iter()) {
                call_env.borrow_mut().set(param.value.clone(), arg);
            }
            let result = eval_block(&body, &call_env);
            match result {
                Object::Return(value) => *value,
                other => other,
            }
        }
        Object::Builtin(builtin) => builtin(&arguments),
        other => error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_index_expression(expr: &IndexExpression, env: &Env) -> Object {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let index = eval_expression(&expr.index, env);
    if index.is_error() {
        return index;
    }

    match (&left, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Object::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Object::Hash(pairs), _) => match index.hash_key() {
            Some(key) => pairs
                .get(&key)
                .map(|(_, v)| v.clone())
                .unwrap_or(Object::Null),
            None => error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => error(format!(
            "index operator not supported: {}",
            left.type_name()
        )),
    }
}

fn eval_hash_literal(expr: &HashLiteral, env: &Env) -> Object {
    let mut pairs = indexmap::IndexMap::new();

    for (key_expr, value_expr) in &expr.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return error(format!("unusable as hash key: {}", key.type_name()));
        };

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(hash_key, (key, value));
    }

    Object::Hash(pairs)
}

/// Lex, parse, and evaluate `source` in `env`. Refuses to evaluate when
/// parsing produced errors, returning an `Object::Error` summarizing them
/// instead of silently walking a malformed tree.
pub fn evaluate(source: &str, env: &Env) -> Object {
    let mut parser = crate::parser::Parser::from_source(source);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        let messages: Vec<String> = parser.errors.iter().map(|e| e.to_string()).collect();
        return error(messages.join("; "));
    }

    eval_program(&program, env)
}
