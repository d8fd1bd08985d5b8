use crate::registry::InstanceParams;
use serde::{Deserialize, Serialize};

/// One declarative configuration entry: a named, template-typed instance
/// supplying parameters for one check invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstanceDecl {
    /// Name of the template this instance claims to instantiate.
    pub template: String,

    /// Instance name, unique per template within a bundle. Duplicates are
    /// resolved last-wins at compile time.
    pub name: String,

    /// Template-shaped payload, opaque to the core.
    #[serde(default)]
    pub params: InstanceParams,
}

/// Ordered set of instance entries handed to the compiler.
///
/// Produced by an external config-resolution layer; an empty instance list
/// is legal and compiles to an executor with an empty instance map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigBundle {
    #[serde(default)]
    pub instances: Vec<InstanceDecl>,
}
