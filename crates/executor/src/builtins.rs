//! Builtin SQL functions. Every function validates its own arity and
//! evaluates its arguments through the `Evaluate` capability, which keeps
//! the registry decoupled from the executor's concrete type.

use {
    crate::{FunctionAritySnafu, Result},
    def::{Row, Value},
    once_cell::sync::Lazy,
    parser::Node,
    snafu::prelude::*,
    std::collections::HashMap,
};

/// The one capability builtins need from their caller: evaluate a
/// sub-expression against the current row.
pub trait Evaluate {
    fn evaluate(&self, expr: &Node, row: &Row) -> Result<Value>;
}

pub(crate) type BuiltinFn = fn(&dyn Evaluate, &Row, &[Node]) -> Result<Value>;

/// Built on first use, immutable afterwards.
static BUILTINS: Lazy<HashMap<&'static str, BuiltinFn>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, BuiltinFn> = HashMap::new();
    registry.insert("lower", lower);
    registry.insert("upper", upper);
    registry.insert("equal_fold", equal_fold);
    registry.insert("string_repeat", string_repeat);
    registry.insert("concat", concat);
    registry
});

/// Case-insensitive lookup.
pub(crate) fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTINS.get(name.to_ascii_lowercase().as_str()).copied()
}

fn check_arity(name: &'static str, expected: usize, args: &[Node]) -> Result<()> {
    ensure!(
        args.len() == expected,
        FunctionAritySnafu {
            name,
            expected,
            actual: args.len(),
        }
    );

    Ok(())
}

fn eval_args(exec: &dyn Evaluate, row: &Row, args: &[Node]) -> Result<Vec<Value>> {
    args.iter().map(|arg| exec.evaluate(arg, row)).collect()
}

fn lower(exec: &dyn Evaluate, row: &Row, args: &[Node]) -> Result<Value> {
    check_arity("lower", 1, args)?;

    let value = exec.evaluate(&args[0], row)?;
    Ok(Value::String(value.to_string().to_lowercase()))
}

fn upper(exec: &dyn Evaluate, row: &Row, args: &[Node]) -> Result<Value> {
    check_arity("upper", 1, args)?;

    let value = exec.evaluate(&args[0], row)?;
    Ok(Value::String(value.to_string().to_uppercase()))
}

fn equal_fold(exec: &dyn Evaluate, row: &Row, args: &[Node]) -> Result<Value> {
    check_arity("equal_fold", 2, args)?;

    let values = eval_args(exec, row, args)?;
    let folded = values[0].to_string().to_lowercase() == values[1].to_string().to_lowercase();
    Ok(Value::Bool(folded))
}

fn string_repeat(exec: &dyn Evaluate, row: &Row, args: &[Node]) -> Result<Value> {
    check_arity("string_repeat", 2, args)?;

    let values = eval_args(exec, row, args)?;
    let count = usize::try_from(values[1].as_int()).unwrap_or(0);
    Ok(Value::String(values[0].to_string().repeat(count)))
}

fn concat(exec: &dyn Evaluate, row: &Row, args: &[Node]) -> Result<Value> {
    check_arity("concat", 2, args)?;

    let values = eval_args(exec, row, args)?;
    Ok(Value::String(format!("{}{}", values[0], values[1])))
}
