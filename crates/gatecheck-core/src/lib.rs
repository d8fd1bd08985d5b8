//! Pure check compilation and dispatch (no IO).
//!
//! Input: a template registry, a handler reference, and a parsed
//! configuration bundle, all constructed elsewhere.
//! Output: an immutable executor that yields one status per request.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handler;
pub mod registry;

mod compiler;
mod executor;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use compiler::CheckCompiler;
pub use config::{ConfigBundle, InstanceDecl};
pub use error::CompileError;
pub use executor::CheckExecutor;
pub use handler::{CheckHandler, FromHandler, HandlerFactory};
pub use registry::{
    InstanceMap, InstanceParams, ProcessFn, SupportsFn, TemplateInfo, TemplateRegistry,
};
