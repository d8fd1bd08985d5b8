use thiserror::Error;

/// Compilation failures.
///
/// All variants are routine configuration-validation outcomes, returned to
/// the config-compilation layer and scoped to one (template, handler,
/// bundle) unit. Callers are expected to quarantine the offending
/// configuration and keep any previously valid executor in service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    /// An instance entry declares a template other than the one being
    /// compiled for.
    #[error(
        "instance '{instance}' declares template '{declared}', which \
         is different from expected template '{expected}'"
    )]
    TemplateMismatch {
        instance: String,
        declared: String,
        expected: String,
    },

    /// The resolved handler fails the template's compatibility predicate.
    #[error("handler '{handler}' does not implement interface required by template '{template}'")]
    HandlerIncompatible { handler: String, template: String },

    /// The requested template is absent from the registry.
    #[error("template '{0}' is not present in the registry")]
    UnknownTemplate(String),

    /// A constructing handler factory failed to produce a handler.
    #[error("failed to build handler: {0}")]
    HandlerBuild(String),
}
