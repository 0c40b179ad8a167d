//! monkey-eval - Tree-walking evaluator: `eval(node, env) -> Value`
//!
//! Split across the same statement/expression seam as `monkey-ast`, rather
//! than one `eval` multimethod dispatching on a single node type. The one
//! subtlety worth stating up front: [`eval_block_statement`] does **not**
//! unwrap a `ReturnValue` or stop on an `Error` by discarding it — it passes
//! both straight through so a `return` nested three blocks deep still
//! unwinds all the way out. Only [`eval_program`] (the outermost call) and
//! [`apply_function`] (after a call returns) ever strip the `ReturnValue`
//! wrapper.

use std::rc::Rc;

use monkey_ast::{
    BlockStatement, Expression, IfExpression, InfixExpression, PrefixExpression, Program,
    Statement,
};
use monkey_object::{native_bool, null, Environment, FunctionValue, Value};

/// Evaluate a whole program. A top-level `return` stops evaluation early and
/// unwraps to its payload; a top-level error also stops evaluation, but is
/// returned as-is (still an `Error`, for the caller to render).
pub fn eval_program(program: &Program, env: &Environment) -> Rc<Value> {
    let mut result = null();
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match &*result {
            Value::ReturnValue(inner) => return inner.clone(),
            Value::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// Evaluate a block's statements in order. Unlike [`eval_program`], a
/// `ReturnValue`/`Error` is returned *still wrapped* so an enclosing block or
/// function call can keep propagating it outward.
fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Rc<Value> {
    let mut result = null();
    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(&*result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(stmt: &Statement, env: &Environment) -> Rc<Value> {
    match stmt {
        Statement::Expression(s) => eval_expression(&s.expr, env),
        Statement::Block(block) => eval_block_statement(block, env),
        Statement::Return(s) => {
            let value = eval_expression(&s.value, env);
            if value.is_error() {
                return value;
            }
            Rc::new(Value::ReturnValue(value))
        }
        Statement::Let(s) => {
            let value = eval_expression(&s.value, env);
            if value.is_error() {
                return value;
            }
            env.set(s.name.value.clone(), value);
            null()
        }
    }
}

fn eval_expression(expr: &Expression, env: &Environment) -> Rc<Value> {
    match expr {
        Expression::IntegerLiteral(lit) => Rc::new(Value::Integer(lit.value)),
        Expression::Boolean(lit) => native_bool(lit.value),
        Expression::Null(_) => null(),
        Expression::Identifier(ident) => match env.get(&ident.value) {
            Some(value) => value,
            None => error(format!("identifier not found: {}", ident.value)),
        },
        Expression::Prefix(prefix) => eval_prefix_expression(prefix, env),
        Expression::Infix(infix) => eval_infix_expression(infix, env),
        Expression::If(if_expr) => eval_if_expression(if_expr, env),
        Expression::FunctionLiteral(lit) => Rc::new(Value::Function(FunctionValue {
            parameters: lit.parameters.clone(),
            body: lit.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(call) => {
            let function = eval_expression(&call.function, env);
            if function.is_error() {
                return function;
            }
            let args = eval_expressions(&call.arguments, env);
            if args.len() == 1 && args[0].is_error() {
                return args.into_iter().next().unwrap();
            }
            apply_function(&function, args)
        }
    }
}

fn eval_expressions(exprs: &[Expression], env: &Environment) -> Vec<Rc<Value>> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return vec![value];
        }
        values.push(value);
    }
    values
}

fn apply_function(function: &Value, args: Vec<Rc<Value>>) -> Rc<Value> {
    match function {
        Value::Function(func) => {
            let extended = extend_function_env(func, args);
            let evaluated = eval_block_statement(&func.body, &extended);
            unwrap_return_value(evaluated)
        }
        other => error(format!("not a function: {}", other.type_tag())),
    }
}

/// A call site with too few or too many arguments is not an error: extra
/// arguments are ignored and missing ones are simply never bound, the same
/// as the reference evaluator's `zip(parameters, arguments)`.
fn extend_function_env(func: &FunctionValue, args: Vec<Rc<Value>>) -> Environment {
    let env = func.env.new_enclosed();
    for (param, arg) in func.parameters.iter().zip(args) {
        env.set(param.value.clone(), arg);
    }
    env
}

fn unwrap_return_value(value: Rc<Value>) -> Rc<Value> {
    match &*value {
        Value::ReturnValue(inner) => inner.clone(),
        _ => value,
    }
}

fn eval_prefix_expression(prefix: &PrefixExpression, env: &Environment) -> Rc<Value> {
    let right = eval_expression(&prefix.right, env);
    if right.is_error() {
        return right;
    }
    match prefix.operator.as_str() {
        "!" => native_bool(!right.is_truthy()),
        "-" => match &*right {
            Value::Integer(n) => Rc::new(Value::Integer(-n)),
            other => error(format!("unknown operator: -{}", other.type_tag())),
        },
        op => error(format!("unknown operator: {op}{}", right.type_tag())),
    }
}

fn eval_infix_expression(infix: &InfixExpression, env: &Environment) -> Rc<Value> {
    let left = eval_expression(&infix.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&infix.right, env);
    if right.is_error() {
        return right;
    }

    match (&*left, &*right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(&infix.operator, *l, *r),
        _ if infix.operator == "==" => native_bool(Rc::ptr_eq(&left, &right)),
        _ if infix.operator == "!=" => native_bool(!Rc::ptr_eq(&left, &right)),
        _ if left.type_tag() != right.type_tag() => error(format!(
            "type mismatch: {} {} {}",
            left.type_tag(),
            infix.operator,
            right.type_tag()
        )),
        _ => error(format!(
            "unknown operator: {} {} {}",
            left.type_tag(),
            infix.operator,
            right.type_tag()
        )),
    }
}

/// Integer division truncates toward zero (Rust's native `/`), a free
/// choice left open by the language: every worked example only ever divides
/// non-negative operands, where truncation and floor division agree.
fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Rc<Value> {
    match operator {
        "+" => Rc::new(Value::Integer(left + right)),
        "-" => Rc::new(Value::Integer(left - right)),
        "*" => Rc::new(Value::Integer(left * right)),
        "/" => Rc::new(Value::Integer(left / right)),
        "<" => native_bool(left < right),
        ">" => native_bool(left > right),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        op => error(format!("unknown operator: INTEGER {op} INTEGER")),
    }
}

fn eval_if_expression(if_expr: &IfExpression, env: &Environment) -> Rc<Value> {
    let condition = eval_expression(&if_expr.condition, env);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block_statement(&if_expr.consequence, env)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        null()
    }
}

fn error(message: String) -> Rc<Value> {
    Rc::new(Value::Error(message))
}
