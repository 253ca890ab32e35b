//! Evaluator seam for embedded dynamic expressions.

use crate::node::{Node, Value};

/// Evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The evaluator cannot resolve the expression.
    #[error("cannot resolve expression `{expr}`")]
    Unresolved {
        /// Source text of the expression.
        expr: String,
    },

    /// Evaluator-specific failure.
    #[error("{0}")]
    Custom(String),
}

/// Resolves one raw argument node to a primitive [`Value`].
///
/// Literal nodes map to their value counterparts and elements become
/// [`Value::Nested`]; how [`Node::Expr`] is resolved is up to the
/// implementation. A failed resolution aborts the whole compile.
pub trait Evaluator {
    /// Resolve `node` to a value.
    fn eval(&self, node: &Node) -> Result<Value, EvalError>;
}

/// Evaluator that resolves literals only.
///
/// Any [`Node::Expr`] fails with [`EvalError::Unresolved`]. This is the
/// default for trees that carry no dynamic content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralEvaluator;

impl Evaluator for LiteralEvaluator {
    fn eval(&self, node: &Node) -> Result<Value, EvalError> {
        match node {
            Node::Text(s) => Ok(Value::Text(s.clone())),
            Node::Number(n) => Ok(Value::Number(*n)),
            Node::Sym(s) => Ok(Value::Sym(s.clone())),
            Node::Element { .. } => Ok(Value::Nested(node.clone())),
            Node::Expr(expr) => Err(EvalError::Unresolved { expr: expr.clone() }),
        }
    }
}
