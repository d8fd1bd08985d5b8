use crate::config::ConfigBundle;
use crate::error::CompileError;
use crate::executor::CheckExecutor;
use crate::handler::HandlerFactory;
use crate::registry::{InstanceMap, TemplateRegistry};
use tracing::{debug, warn};

/// Validates and binds configuration to a runtime handler for exactly one
/// template.
///
/// Compilation runs once per (template, handler, bundle) combination, on
/// configuration change; the resulting executor is held by the caller and
/// replaced wholesale when configuration changes. Failures are scoped to
/// that one unit and leave unrelated templates untouched.
pub struct CheckCompiler<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> CheckCompiler<'a> {
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Compile `bundle` for `tmpl_name`, binding the handler yielded by
    /// `handler_factory`.
    ///
    /// The bundle must contain only `tmpl_name` instances; the caller
    /// pre-filters per template, and the compiler re-validates and rejects
    /// the first offending entry. Duplicate instance names resolve
    /// last-wins in bundle order.
    pub fn compile(
        &self,
        bundle: &ConfigBundle,
        handler_factory: &dyn HandlerFactory,
        tmpl_name: &str,
    ) -> Result<CheckExecutor, CompileError> {
        let handler = handler_factory.resolve()?;

        let info = self
            .registry
            .lookup(tmpl_name)
            .ok_or_else(|| CompileError::UnknownTemplate(tmpl_name.to_string()))?;

        if !info.supports_handler(handler.as_ref()) {
            return Err(CompileError::HandlerIncompatible {
                handler: handler.name().to_string(),
                template: tmpl_name.to_string(),
            });
        }

        let mut instances = InstanceMap::new();
        for decl in &bundle.instances {
            if decl.template != tmpl_name {
                return Err(CompileError::TemplateMismatch {
                    instance: decl.name.clone(),
                    declared: decl.template.clone(),
                    expected: tmpl_name.to_string(),
                });
            }
            if instances
                .insert(decl.name.clone(), decl.params.clone())
                .is_some()
            {
                warn!(
                    template = tmpl_name,
                    instance = %decl.name,
                    "duplicate instance name, later entry wins"
                );
            }
        }

        debug!(
            template = tmpl_name,
            handler = handler.name(),
            instances = instances.len(),
            "compiled check executor"
        );

        Ok(CheckExecutor::new(
            tmpl_name.to_string(),
            info.process_fn(),
            handler,
            instances,
        ))
    }
}
