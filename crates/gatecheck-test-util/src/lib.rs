//! Shared test fixtures for the gatecheck workspace.
//!
//! This crate exists so integration tests across crates can share handlers,
//! canned templates, and builders without each test file re-declaring them.
//! The `WhitelistHandler` + `whitelist_template` pair doubles as the
//! reference example of a capability test done through `as_any` downcasting.

use gatecheck_core::{
    CheckHandler, CompileError, ConfigBundle, HandlerFactory, InstanceDecl, TemplateInfo,
    TemplateRegistry,
};
use gatecheck_types::{
    AttributeBag, AttributeValue, Attributes, CacheabilityInfo, EvalError, ExprEvaluator, Status,
};
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Minimal handler: a name and nothing else.
pub struct FakeHandler {
    name: String,
}

impl FakeHandler {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl CheckHandler for FakeHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory whose handler construction always fails, for exercising the
/// compile-time propagation of handler build errors.
pub struct FailingFactory {
    reason: String,
}

impl FailingFactory {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl HandlerFactory for FailingFactory {
    fn resolve(&self) -> Result<Arc<dyn CheckHandler>, CompileError> {
        Err(CompileError::HandlerBuild(self.reason.clone()))
    }
}

/// Handler carrying a real capability: membership lookup against a fixed
/// allow list. Templates that need this capability probe for the concrete
/// type via `as_any`.
pub struct WhitelistHandler {
    entries: Vec<String>,
}

impl WhitelistHandler {
    pub fn new(entries: &[&str]) -> Self {
        Self {
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn allows(&self, candidate: &str) -> bool {
        self.entries.iter().any(|e| e == candidate)
    }
}

impl CheckHandler for WhitelistHandler {
    fn name(&self) -> &str {
        "whitelist"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Template that only `WhitelistHandler` can process: allows a request when
/// its `source.name` attribute is on the handler's list. Results are
/// cacheable for a minute.
pub fn whitelist_template() -> TemplateInfo {
    TemplateInfo::new(
        |handler| handler.as_any().downcast_ref::<WhitelistHandler>().is_some(),
        |_insts, attrs, _eval, handler| {
            let Some(whitelist) = handler.as_any().downcast_ref::<WhitelistHandler>() else {
                return (
                    Status::with_error("handler lost its whitelist capability"),
                    CacheabilityInfo::default(),
                );
            };
            let source = match attrs.get("source.name") {
                Some(AttributeValue::String(s)) => s.as_str(),
                _ => {
                    return (
                        Status::with_message(
                            gatecheck_types::code::INVALID_ARGUMENT,
                            "source.name attribute missing",
                        ),
                        CacheabilityInfo::default(),
                    );
                }
            };
            let status = if whitelist.allows(source) {
                Status::ok()
            } else {
                Status::permission_denied(format!("'{source}' is not on the list"))
            };
            let hint = CacheabilityInfo {
                valid_duration: Some(Duration::from_secs(60)),
                valid_use_count: 0,
            };
            (status, hint)
        },
    )
}

/// Template that accepts any handler and returns a fixed result.
pub fn static_template(status: Status, hint: CacheabilityInfo) -> TemplateInfo {
    TemplateInfo::new(
        |_| true,
        move |_, _, _, _| (status.clone(), hint.clone()),
    )
}

pub fn registry(templates: Vec<(&str, TemplateInfo)>) -> TemplateRegistry {
    let mut map = BTreeMap::new();
    for (name, info) in templates {
        map.insert(name.to_string(), info);
    }
    TemplateRegistry::new(map)
}

pub fn instance(template: &str, name: &str, params: serde_json::Value) -> InstanceDecl {
    InstanceDecl {
        template: template.to_string(),
        name: name.to_string(),
        params,
    }
}

pub fn bundle(instances: Vec<InstanceDecl>) -> ConfigBundle {
    ConfigBundle { instances }
}

pub fn empty_bag() -> Attributes {
    Attributes::default()
}

/// Evaluator that rejects every expression; useful wherever a test only
/// needs the evaluator threaded through, not used.
pub struct NoopEvaluator;

impl ExprEvaluator for NoopEvaluator {
    fn eval(&self, expr: &str, _attrs: &dyn AttributeBag) -> Result<AttributeValue, EvalError> {
        Err(EvalError::Eval {
            expr: expr.to_string(),
            reason: "noop evaluator".to_string(),
        })
    }

    fn eval_predicate(&self, expr: &str, _attrs: &dyn AttributeBag) -> Result<bool, EvalError> {
        Err(EvalError::Eval {
            expr: expr.to_string(),
            reason: "noop evaluator".to_string(),
        })
    }
}
