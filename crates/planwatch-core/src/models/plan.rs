//! Plan catalog entry.

use serde::{Deserialize, Serialize};

/// A plan registered in the orchestration platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Opaque identifier assigned by the platform
    pub plan_id: String,

    /// Human-readable name, not unique across environments
    pub name: String,

    /// Deployment environment the plan belongs to
    pub env: String,
}

impl Plan {
    /// Create a new catalog entry.
    pub fn new(
        plan_id: impl Into<String>,
        name: impl Into<String>,
        env: impl Into<String>,
    ) -> Self {
        Self {
            plan_id: plan_id.into(),
            name: name.into(),
            env: env.into(),
        }
    }
}
