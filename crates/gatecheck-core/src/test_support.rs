use crate::config::{ConfigBundle, InstanceDecl};
use crate::handler::CheckHandler;
use crate::registry::{InstanceParams, TemplateInfo, TemplateRegistry};
use gatecheck_types::{AttributeBag, AttributeValue, CacheabilityInfo, EvalError, ExprEvaluator, Status};
use std::any::Any;
use std::collections::BTreeMap;

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

/// Evaluator that rejects every expression. The core must still dispatch
/// through it untouched.
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

pub fn instance(template: &str, name: &str, params: InstanceParams) -> InstanceDecl {
    InstanceDecl {
        template: template.to_string(),
        name: name.to_string(),
        params,
    }
}

pub fn bundle(instances: Vec<InstanceDecl>) -> ConfigBundle {
    ConfigBundle { instances }
}

/// Registry with one template that accepts any handler and returns a fixed
/// status.
pub fn registry_returning(tmpl_name: &str, status: Status) -> TemplateRegistry {
    registry_with(tmpl_name, |_| true, status)
}

pub fn registry_with(
    tmpl_name: &str,
    supports: impl Fn(&dyn CheckHandler) -> bool + Send + Sync + 'static,
    status: Status,
) -> TemplateRegistry {
    let mut templates = BTreeMap::new();
    templates.insert(
        tmpl_name.to_string(),
        TemplateInfo::new(supports, move |_, _, _, _| {
            (status.clone(), CacheabilityInfo::default())
        }),
    );
    TemplateRegistry::new(templates)
}
