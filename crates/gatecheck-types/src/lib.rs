//! Stable DTOs and boundary contracts used across the gatecheck workspace.
//!
//! This crate is intentionally boring:
//! - the `Status` result type and its stable code constants
//! - the cacheability hint attached to check results
//! - the per-request attribute model and the read-only bag view
//! - the expression-evaluator contract supplied by the request layer

#![forbid(unsafe_code)]

pub mod attributes;
pub mod cacheability;
pub mod expr;
pub mod status;

pub use attributes::{AttributeBag, AttributeValue, Attributes};
pub use cacheability::CacheabilityInfo;
pub use expr::{EvalError, ExprEvaluator};
pub use status::{Status, code};
