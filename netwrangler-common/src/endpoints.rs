//! REST endpoint paths consumed by the dashboard.

/// API version prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// A REST endpoint the dashboard polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Network performance metrics (`health_score`, ...).
    PerformanceMetrics,
    /// Per-slice performance summary.
    SlicePerformance,
    /// Detected anomalies.
    Anomalies,
    /// Configured network slices.
    Slices,
}

impl Endpoint {
    /// Path of this endpoint, relative to the server root.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PerformanceMetrics => "/api/v1/performance/metrics",
            Endpoint::SlicePerformance => "/api/v1/slicing/performance",
            Endpoint::Anomalies => "/api/v1/analytics/anomalies",
            Endpoint::Slices => "/api/v1/slicing/slices",
        }
    }

    /// Absolute URL of this endpoint on the given server.
    ///
    /// # Example
    /// ```
    /// use netwrangler_common::endpoints::Endpoint;
    ///
    /// let url = Endpoint::Slices.url("http://localhost:8000/");
    /// assert_eq!(url, "http://localhost:8000/api/v1/slicing/slices");
    /// ```
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_prefix() {
        for endpoint in [
            Endpoint::PerformanceMetrics,
            Endpoint::SlicePerformance,
            Endpoint::Anomalies,
            Endpoint::Slices,
        ] {
            assert!(endpoint.path().starts_with(API_PREFIX));
        }
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(
            Endpoint::PerformanceMetrics.url("http://127.0.0.1:9000"),
            "http://127.0.0.1:9000/api/v1/performance/metrics"
        );
        assert_eq!(
            Endpoint::Anomalies.url("https://noc.example/"),
            "https://noc.example/api/v1/analytics/anomalies"
        );
    }
}
