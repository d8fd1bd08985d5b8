//! Property-based tests for the compiler and executor.
//!
//! These verify the compilation invariants:
//! - uniform bundles compile to exactly one map entry per distinct name
//! - any foreign-template entry fails compilation
//! - an unsupported handler fails compilation regardless of the bundle
//! - statuses pass through execution unaltered

use crate::compiler::CheckCompiler;
use crate::config::InstanceDecl;
use crate::error::CompileError;
use crate::handler::FromHandler;
use crate::test_support::{FakeHandler, NoopEvaluator, bundle, instance, registry_returning, registry_with};
use gatecheck_types::{Attributes, Status};
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

const TMPL: &str = "listchecker";

/// Strategy for instance and template names.
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,12}").unwrap()
}

/// Strategy for opaque instance params.
fn arb_params() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<i64>().prop_map(|n| json!({ "weight": n })),
        arb_name().prop_map(|s| json!({ "provider": s })),
    ]
}

/// Strategy for a bundle whose entries all declare the compiled template.
fn arb_uniform_bundle() -> impl Strategy<Value = Vec<InstanceDecl>> {
    prop::collection::vec((arb_name(), arb_params()), 0..8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, params)| instance(TMPL, &name, params))
            .collect()
    })
}

/// Strategy for a template name that differs from the compiled one.
fn arb_foreign_template() -> impl Strategy<Value = String> {
    arb_name().prop_filter("must differ from compiled template", |t| t != TMPL)
}

proptest! {
    /// Uniform bundles compile, and the instance map holds exactly one
    /// entry per distinct name, valued by the last occurrence.
    #[test]
    fn uniform_bundles_compile_to_exact_instance_maps(decls in arb_uniform_bundle()) {
        let registry = registry_returning(TMPL, Status::ok());
        let handler: Arc<dyn crate::CheckHandler> = Arc::new(FakeHandler::new("whitelist"));

        let executor = CheckCompiler::new(&registry)
            .compile(&bundle(decls.clone()), &FromHandler(handler), TMPL)
            .unwrap();

        let mut want = BTreeMap::new();
        for decl in &decls {
            want.insert(decl.name.clone(), decl.params.clone());
        }
        prop_assert_eq!(executor.instances(), &want);
    }

    /// A single foreign-template entry anywhere in the bundle fails
    /// compilation with a mismatch diagnostic.
    #[test]
    fn foreign_entries_fail_compilation(
        mut decls in arb_uniform_bundle(),
        foreign in arb_foreign_template(),
        pos in 0usize..8,
    ) {
        let at = pos.min(decls.len());
        decls.insert(at, instance(&foreign, "offending", serde_json::Value::Null));

        let registry = registry_returning(TMPL, Status::ok());
        let handler: Arc<dyn crate::CheckHandler> = Arc::new(FakeHandler::new("whitelist"));

        let err = CheckCompiler::new(&registry)
            .compile(&bundle(decls), &FromHandler(handler), TMPL)
            .unwrap_err();

        prop_assert!(
            matches!(err, CompileError::TemplateMismatch { .. }),
            "want TemplateMismatch, got {err:?}"
        );
        prop_assert!(err.to_string().contains("is different"));
    }

    /// An unsupported handler fails compilation no matter what the bundle
    /// contains.
    #[test]
    fn unsupported_handler_fails_for_any_bundle(decls in arb_uniform_bundle()) {
        let registry = registry_with(TMPL, |_| false, Status::ok());
        let handler: Arc<dyn crate::CheckHandler> = Arc::new(FakeHandler::new("denyall"));

        let err = CheckCompiler::new(&registry)
            .compile(&bundle(decls), &FromHandler(handler), TMPL)
            .unwrap_err();

        prop_assert!(
            matches!(err, CompileError::HandlerIncompatible { .. }),
            "want HandlerIncompatible, got {err:?}"
        );
        prop_assert!(err.to_string().contains("does not implement interface"));
    }

    /// Whatever status the process function produces comes back unaltered.
    #[test]
    fn statuses_pass_through_unaltered(code in 0i32..16, message in arb_name()) {
        let status = Status::with_message(code, message);
        let registry = registry_returning(TMPL, status.clone());
        let handler: Arc<dyn crate::CheckHandler> = Arc::new(FakeHandler::new("whitelist"));

        let executor = CheckCompiler::new(&registry)
            .compile(&bundle(vec![]), &FromHandler(handler), TMPL)
            .unwrap();

        prop_assert_eq!(
            executor.execute(&Attributes::default(), &NoopEvaluator),
            status
        );
    }
}
