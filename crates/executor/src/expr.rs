use {
    crate::{
        builtins::{self, Evaluate},
        Executor, NotAnExpressionSnafu, Result, TypeMismatchSnafu, UnknownFunctionSnafu,
        UnsupportedOperatorSnafu,
    },
    def::{storage::Storage, Row, Value},
    parser::{Node, TokenKind},
    snafu::prelude::*,
};

impl<S: Storage> Evaluate for Executor<S> {
    fn evaluate(&self, expr: &Node, row: &Row) -> Result<Value> {
        match expr {
            Node::Literal(token) => match token.kind {
                // A digit run that does not fit an i64 quietly becomes
                // Null instead of failing the statement.
                TokenKind::Integer => {
                    Ok(token.text.parse().map(Value::Integer).unwrap_or(Value::Null))
                }
                TokenKind::String => Ok(Value::String(token.text.clone())),
                TokenKind::Identifier => Ok(row.get(&token.text)),
                _ => NotAnExpressionSnafu.fail(),
            },
            Node::Binop { left, op, right } => {
                let left = self.evaluate(left, row)?;
                let right = self.evaluate(right, row)?;

                match op {
                    TokenKind::Equal => eval_equal(left, right),
                    // Tokenized and parsed, but without evaluation
                    // semantics in this core.
                    op => UnsupportedOperatorSnafu { op: *op }.fail(),
                }
            }
            Node::FunctionCall { name, args } => {
                let func = builtins::lookup(&name.text).context(UnknownFunctionSnafu {
                    name: name.text.as_str(),
                })?;

                func(self, row, args)
            }
            _ => NotAnExpressionSnafu.fail(),
        }
    }
}

/// Equality is strict about variants: mismatched types are an error,
/// never a coercion. Null equals Null.
fn eval_equal(left: Value, right: Value) -> Result<Value> {
    let equal = match (&left, &right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Integer(l), Value::Integer(r)) => l == r,
        _ => {
            return TypeMismatchSnafu {
                left: left.type_name(),
                right: right.type_name(),
            }
            .fail()
        }
    };

    Ok(Value::Bool(equal))
}
