use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::endpoints::Endpoint;
use crate::error::{Error, FetchError, Result};
use crate::model::{Anomaly, MetricsSnapshot, OperationsSnapshot, SliceList, SliceRecord};

/// HTTP client for the dashboard's REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured server.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        reqwest::Url::parse(&config.base_url).map_err(|e| {
            Error::Config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        tracing::debug!(
            base_url = %config.base_url,
            timeout_ms = config.request_timeout_ms,
            "Created API client"
        );

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and decode its JSON body.
    ///
    /// Any non-2xx status is a failure, even if the body happens to be JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> std::result::Result<T, FetchError> {
        let url = endpoint.url(&self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(&url, e))?;

        tracing::trace!(url = %url, bytes = body.len(), "Fetched");

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url,
            reason: e.to_string(),
        })
    }

    /// Fetch metrics, slice performance and anomalies concurrently.
    ///
    /// Resolves only once all three requests have settled, and fails as a
    /// whole if any one of them fails.
    pub async fn fetch_operations(&self) -> std::result::Result<OperationsSnapshot, FetchError> {
        let (metrics, slice_performance, anomalies) = tokio::try_join!(
            self.get_json::<MetricsSnapshot>(Endpoint::PerformanceMetrics),
            self.get_json::<Value>(Endpoint::SlicePerformance),
            self.get_json::<Vec<Anomaly>>(Endpoint::Anomalies),
        )?;

        tracing::debug!(
            metrics = metrics.numeric().count(),
            anomalies = anomalies.len(),
            "Fetched operations snapshot"
        );

        Ok(OperationsSnapshot {
            metrics,
            slice_performance,
            anomalies,
        })
    }

    /// Fetch the list of network slices.
    pub async fn fetch_slices(&self) -> std::result::Result<Vec<SliceRecord>, FetchError> {
        let list: SliceList = self.get_json(Endpoint::Slices).await?;

        tracing::debug!(slices = list.slices.len(), "Fetched slice list");

        Ok(list.slices)
    }
}
