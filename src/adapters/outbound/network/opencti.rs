use crate::ports::outbound::{BundlePublisher, WorkId};
use crate::shared::error::ConnectorError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// OpenCTI-style publication sink client
///
/// Implements the narrow work protocol of the downstream graph store:
/// initiate a work item, send the bundle for it, mark it processed.
///
/// # Security
/// - Bearer-token authentication
/// - Request timeout (30 seconds)
/// - Does not retry failed requests; the next scheduled run retries with a
///   superset of the unpublished data
pub struct OpenCtiPublisher {
    client: Client,
    base_url: String,
    token: String,
    connector_id: String,
}

#[derive(Debug, Serialize)]
struct InitiateWorkRequest<'a> {
    connector_id: &'a str,
    friendly_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct InitiateWorkResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct SendBundleRequest<'a> {
    work_id: &'a str,
    update: bool,
    bundle: Value,
}

#[derive(Debug, Serialize)]
struct CompleteWorkRequest<'a> {
    message: &'a str,
}

impl OpenCtiPublisher {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new sink client with default configuration
    pub fn new(base_url: &str, token: &str, connector_id: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("ghsa-stix/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            connector_id: connector_id.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(self.endpoint(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| ConnectorError::Transport {
                reason: format!("request to {} failed: {}", path, e),
            })?;

        if !response.status().is_success() {
            return Err(ConnectorError::Transport {
                reason: format!("sink returned status {} for {}", response.status(), path),
            }
            .into());
        }

        Ok(response)
    }
}

#[async_trait]
impl BundlePublisher for OpenCtiPublisher {
    async fn initiate_work(&self, run_label: &str) -> Result<WorkId> {
        let request = InitiateWorkRequest {
            connector_id: &self.connector_id,
            friendly_name: run_label,
        };
        let response = self.post("works", &request).await?;
        let work: InitiateWorkResponse =
            response.json().await.map_err(|e| ConnectorError::Transport {
                reason: format!("sink returned an unreadable work token: {}", e),
            })?;
        Ok(WorkId(work.id))
    }

    async fn send_bundle(&self, work: &WorkId, payload: &str) -> Result<()> {
        let bundle: Value =
            serde_json::from_str(payload).map_err(|e| ConnectorError::Transport {
                reason: format!("bundle payload is not valid JSON: {}", e),
            })?;
        let request = SendBundleRequest {
            work_id: work.as_str(),
            update: true,
            bundle,
        };
        self.post("bundles", &request).await?;
        Ok(())
    }

    async fn complete_work(&self, work: &WorkId, message: &str) -> Result<()> {
        let request = CompleteWorkRequest { message };
        self.post(&format!("works/{}/processed", work.as_str()), &request)
            .await?;
        Ok(())
    }
}
