use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hint describing under what conditions a check status may be reused for
/// later requests without re-evaluation.
///
/// Produced by a template's process function alongside the status. This core
/// only carries the hint; consulting it is the job of a downstream caching
/// layer. The default value means "do not cache".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CacheabilityInfo {
    /// Wall-clock validity of the result, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_duration: Option<Duration>,

    /// Number of times the result may be served before re-evaluation.
    /// Zero means no use-count allowance.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub valid_use_count: u64,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl CacheabilityInfo {
    pub fn is_cacheable(&self) -> bool {
        self.valid_duration.is_some() || self.valid_use_count > 0
    }
}
