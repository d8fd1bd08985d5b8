use crate::handler::CheckHandler;
use gatecheck_types::{AttributeBag, CacheabilityInfo, ExprEvaluator, Status};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Opaque, template-shaped instance configuration payload.
///
/// The core never interprets params; the owning template's process function
/// is the only party that knows the shape.
pub type InstanceParams = serde_json::Value;

/// Named instance configurations bound into one executor.
pub type InstanceMap = BTreeMap<String, InstanceParams>;

/// Handler-compatibility predicate carried by a template descriptor.
pub type SupportsFn = Arc<dyn Fn(&dyn CheckHandler) -> bool + Send + Sync>;

/// A template's processing function: evaluates all bound instances against
/// one request's attribute context and produces a status plus a
/// cacheability hint. Must not panic; internal faults are encoded as a
/// nonzero status.
pub type ProcessFn = Arc<
    dyn Fn(&InstanceMap, &dyn AttributeBag, &dyn ExprEvaluator, &dyn CheckHandler) -> (Status, CacheabilityInfo)
        + Send
        + Sync,
>;

/// Descriptor for one named check template.
#[derive(Clone)]
pub struct TemplateInfo {
    supports_handler: SupportsFn,
    process: ProcessFn,
}

impl TemplateInfo {
    pub fn new<S, P>(supports_handler: S, process: P) -> Self
    where
        S: Fn(&dyn CheckHandler) -> bool + Send + Sync + 'static,
        P: Fn(&InstanceMap, &dyn AttributeBag, &dyn ExprEvaluator, &dyn CheckHandler) -> (Status, CacheabilityInfo)
            + Send
            + Sync
            + 'static,
    {
        Self {
            supports_handler: Arc::new(supports_handler),
            process: Arc::new(process),
        }
    }

    /// Whether the given handler can process instances of this template.
    pub fn supports_handler(&self, handler: &dyn CheckHandler) -> bool {
        (self.supports_handler)(handler)
    }

    pub(crate) fn process_fn(&self) -> ProcessFn {
        Arc::clone(&self.process)
    }
}

impl fmt::Debug for TemplateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateInfo").finish_non_exhaustive()
    }
}

/// Immutable template lookup table.
///
/// Built once at process start from adapter/template registration data and
/// handed to the compiler by reference; never mutated afterwards.
#[derive(Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateInfo>,
}

impl TemplateRegistry {
    pub fn new(templates: BTreeMap<String, TemplateInfo>) -> Self {
        Self { templates }
    }

    pub fn lookup(&self, name: &str) -> Option<&TemplateInfo> {
        self.templates.get(name)
    }

    /// Registered template names, in deterministic order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.names())
            .finish()
    }
}
