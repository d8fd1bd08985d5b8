use crate::error::CompileError;
use std::any::Any;
use std::sync::Arc;

/// Adapter-side implementation capable of performing check logic for the
/// templates that declare it compatible.
///
/// Handlers are owned by an external lifecycle manager. The core holds
/// shared references and never closes or mutates a handler; whether a
/// handler blocks or holds resources internally is opaque here.
pub trait CheckHandler: Send + Sync {
    /// Handler identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Hook for runtime capability tests.
    ///
    /// Template compatibility predicates downcast through this to probe for
    /// the concrete type or capability surface they require.
    fn as_any(&self) -> &dyn Any;
}

/// Capability that yields the handler reference to bind at compile time.
///
/// Covers both strategies: wrapping a handler that already exists (see
/// [`FromHandler`]) and building one on demand, in which case resolution
/// may fail.
pub trait HandlerFactory {
    fn resolve(&self) -> Result<Arc<dyn CheckHandler>, CompileError>;
}

/// Factory that yields an existing, externally-owned handler.
pub struct FromHandler(pub Arc<dyn CheckHandler>);

impl HandlerFactory for FromHandler {
    fn resolve(&self) -> Result<Arc<dyn CheckHandler>, CompileError> {
        Ok(Arc::clone(&self.0))
    }
}
