use crate::handler::CheckHandler;
use crate::registry::{InstanceMap, ProcessFn};
use gatecheck_types::{AttributeBag, CacheabilityInfo, ExprEvaluator, Status};
use std::fmt;
use std::sync::Arc;

/// Immutable, pre-bound executable check unit.
///
/// Holds the template's processing function, the resolved handler, and the
/// named instance configurations. Created once per compilation, shared
/// across concurrent requests, and replaced wholesale on configuration
/// change; `execute` never mutates executor state.
pub struct CheckExecutor {
    tmpl_name: String,
    process: ProcessFn,
    handler: Arc<dyn CheckHandler>,
    instances: InstanceMap,
}

impl CheckExecutor {
    pub(crate) fn new(
        tmpl_name: String,
        process: ProcessFn,
        handler: Arc<dyn CheckHandler>,
        instances: InstanceMap,
    ) -> Self {
        Self {
            tmpl_name,
            process,
            handler,
            instances,
        }
    }

    pub fn template_name(&self) -> &str {
        &self.tmpl_name
    }

    pub fn handler(&self) -> &Arc<dyn CheckHandler> {
        &self.handler
    }

    pub fn instances(&self) -> &InstanceMap {
        &self.instances
    }

    /// Evaluate one request and return the status unaltered.
    ///
    /// Narrow contract for callers that do not memoize; the cacheability
    /// hint is dropped. Single attempt, no retries.
    pub fn execute(&self, attrs: &dyn AttributeBag, evaluator: &dyn ExprEvaluator) -> Status {
        self.execute_with_hint(attrs, evaluator).0
    }

    /// Evaluate one request and return the status together with the
    /// cacheability hint for a downstream caching layer.
    pub fn execute_with_hint(
        &self,
        attrs: &dyn AttributeBag,
        evaluator: &dyn ExprEvaluator,
    ) -> (Status, CacheabilityInfo) {
        tracing::trace!(template = %self.tmpl_name, "dispatching check");
        let (status, hint) =
            (self.process)(&self.instances, attrs, evaluator, self.handler.as_ref());
        tracing::trace!(
            template = %self.tmpl_name,
            code = status.code,
            cacheable = hint.is_cacheable(),
            "check evaluated"
        );
        (status, hint)
    }
}

impl fmt::Debug for CheckExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckExecutor")
            .field("tmpl_name", &self.tmpl_name)
            .field("handler", &self.handler.name())
            .field("instances", &self.instances.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
