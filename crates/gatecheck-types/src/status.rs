use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable status codes for check results.
///
/// Code `0` is allow/success; any nonzero code is a denial or an internal
/// failure. The numbering follows the common RPC canon so statuses can be
/// forwarded to transport layers without translation.
pub mod code {
    pub const OK: i32 = 0;
    pub const CANCELLED: i32 = 1;
    pub const UNKNOWN: i32 = 2;
    pub const INVALID_ARGUMENT: i32 = 3;
    pub const NOT_FOUND: i32 = 5;
    pub const PERMISSION_DENIED: i32 = 7;
    pub const RESOURCE_EXHAUSTED: i32 = 8;
    pub const FAILED_PRECONDITION: i32 = 9;
    pub const INTERNAL: i32 = 13;
    pub const UNAVAILABLE: i32 = 14;
}

/// Structured outcome of one check evaluation.
///
/// A `Status` is data, never an error: denials and adapter failures travel
/// through the same channel as allows, distinguished only by `code`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Status {
    pub code: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Status {
    /// The success/allow status.
    pub fn ok() -> Self {
        Self::default()
    }

    /// A status with an explicit code and message.
    pub fn with_message(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Wraps an internal fault as an `INTERNAL` status.
    pub fn with_error(err: impl fmt::Display) -> Self {
        Self::with_message(code::INTERNAL, err.to_string())
    }

    /// A denial with `PERMISSION_DENIED`.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::with_message(code::PERMISSION_DENIED, message)
    }

    pub fn is_ok(&self) -> bool {
        self.code == code::OK
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "code {}", self.code)
        } else {
            write!(f, "code {}: {}", self.code, self.message)
        }
    }
}
