//! Supporting types for driver capabilities.

/// Health status of a model backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HealthStatus {
    /// Backend answered the probe
    #[display("healthy")]
    Healthy,
    /// Backend answered, but not usefully
    #[display("degraded: {}", message)]
    Degraded {
        /// Description of the degradation
        message: String,
    },
    /// Backend did not answer
    #[display("unhealthy: {}", message)]
    Unhealthy {
        /// Description of the problem
        message: String,
    },
}

impl HealthStatus {
    /// True only for [`HealthStatus::Healthy`].
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}
