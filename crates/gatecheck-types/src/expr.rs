use crate::attributes::{AttributeBag, AttributeValue};
use thiserror::Error;

/// Failure to evaluate an expression against an attribute bag.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression '{expr}' failed to evaluate: {reason}")]
    Eval { expr: String, reason: String },

    #[error("attribute '{0}' not present in the request context")]
    MissingAttribute(String),
}

/// Expression evaluator supplied by the request-handling layer.
///
/// The core threads the evaluator through to process functions unchanged;
/// what the expression language looks like is the evaluator's business.
pub trait ExprEvaluator: Send + Sync {
    /// Evaluate an expression to a value.
    fn eval(&self, expr: &str, attrs: &dyn AttributeBag) -> Result<AttributeValue, EvalError>;

    /// Evaluate an expression expected to produce a boolean.
    fn eval_predicate(&self, expr: &str, attrs: &dyn AttributeBag) -> Result<bool, EvalError>;
}
