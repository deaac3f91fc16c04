//! Planner configuration.
//!
//! All fields have defaults, so a partial TOML table is enough:
//!
//! ```toml
//! parallel = true
//! max_workers = 4
//! request_policy = "reject"
//! ```

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How malformed course requests are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPolicy {
    /// Drop duplicate and blank ids; an empty request yields one empty schedule.
    #[default]
    Normalize,
    /// Fail with [`InvalidRequest`](crate::error::InvalidRequest) instead.
    Reject,
}

/// Configuration for [`TimetablePlanner`](crate::planner::TimetablePlanner).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Fan the first course's sections out across threads.
    pub parallel: bool,
    /// Worker cap for parallel runs. `None` = available parallelism.
    pub max_workers: Option<NonZeroUsize>,
    /// Request normalization policy.
    pub request_policy: RequestPolicy,
}

impl PlannerConfig {
    /// Default configuration: sequential, normalizing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Enables or disables parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Caps worker threads.
    pub fn with_max_workers(mut self, max_workers: NonZeroUsize) -> Self {
        self.max_workers = Some(max_workers);
        self
    }

    /// Sets the request policy.
    pub fn with_request_policy(mut self, policy: RequestPolicy) -> Self {
        self.request_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = PlannerConfig::new();
        assert!(!c.parallel);
        assert_eq!(c.max_workers, None);
        assert_eq!(c.request_policy, RequestPolicy::Normalize);
    }

    #[test]
    fn test_from_toml() {
        let c = PlannerConfig::from_toml_str(
            r#"
            parallel = true
            max_workers = 4
            request_policy = "reject"
            "#,
        )
        .unwrap();
        assert!(c.parallel);
        assert_eq!(c.max_workers, NonZeroUsize::new(4));
        assert_eq!(c.request_policy, RequestPolicy::Reject);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c = PlannerConfig::from_toml_str("parallel = true").unwrap();
        assert!(c.parallel);
        assert_eq!(c.request_policy, RequestPolicy::Normalize);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(PlannerConfig::from_toml_str("max_workers = 0").is_err());
        assert!(PlannerConfig::from_toml_str("request_policy = \"maybe\"").is_err());
    }
}
