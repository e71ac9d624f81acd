use std::sync::Arc;

use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::credentials::{API_TOKEN_KEY, CredentialManager};
use crate::providers::hosted::error::HostedProviderError;
use crate::providers::hosted::types::*;

pub struct HostedConfig {
    pub api_url: String,
    pub min_delay: Duration,
}

impl HostedConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            min_delay: Duration::from_millis(200),
        }
    }
}

pub struct HostedProvider {
    config: HostedConfig,
    client: Client,
    token: String,
    rate_limiter: RateLimiter,
}

#[derive(Clone)]
struct RateLimiter {
    last_request: Arc<Mutex<Instant>>,
    min_delay: Duration,
}

impl RateLimiter {
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        let now = Instant::now();
        let elapsed = now.duration_since(*last);

        if elapsed < self.min_delay {
            tokio::time::sleep(self.min_delay - elapsed).await;
        }

        *last = Instant::now();
    }
}

impl HostedProvider {
    pub fn new(
        config: HostedConfig,
        credentials: Arc<dyn CredentialManager>,
    ) -> Result<Self, HostedProviderError> {
        let token = credentials
            .get(API_TOKEN_KEY)
            .map_err(|e| HostedProviderError::Credential(e.to_string()))?;

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let rate_limiter = RateLimiter {
            last_request: Arc::new(Mutex::new(
                Instant::now()
                    .checked_sub(config.min_delay)
                    .unwrap_or_else(Instant::now),
            )),
            min_delay: config.min_delay,
        };

        Ok(Self {
            config,
            client,
            token,
            rate_limiter,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    fn retry_after(response: &reqwest::Response) -> Duration {
        let secs = response
            .headers()
            .get("Retry-After")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(5);
        Duration::from_secs(secs)
    }

    async fn error_from(response: reqwest::Response) -> HostedProviderError {
        let status = response.status();
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            code: "unknown".to_string(),
            message: format!("Unexpected status {status}"),
        });
        HostedProviderError::from_response(status, error)
    }

    /// Sends `request` with auth. A 429 is retried once after its
    /// `Retry-After` delay; a second 429 is returned to the caller.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, HostedProviderError> {
        let retry = request.try_clone();
        self.rate_limiter.wait().await;
        let response = request.bearer_auth(&self.token).send().await?;
        debug!(status = %response.status(), url = %response.url(), "provider response");

        match (response.status(), retry) {
            (StatusCode::TOO_MANY_REQUESTS, Some(retry)) => {
                let delay = Self::retry_after(&response);
                warn!(?delay, url = %response.url(), "rate limited, retrying once");
                tokio::time::sleep(delay).await;
                self.rate_limiter.wait().await;
                let response = retry.bearer_auth(&self.token).send().await?;
                debug!(status = %response.status(), url = %response.url(), "provider response");
                Ok(response)
            }
            _ => Ok(response),
        }
    }

    async fn handle_request<T>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, HostedProviderError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(request).await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub async fn list_zones(&self, max_items: usize) -> Result<Vec<ApiZone>, HostedProviderError> {
        let request = self
            .client
            .get(self.url("/zones"))
            .query(&[("maxitems", max_items)]);
        self.handle_request(request).await
    }

    pub async fn create_zone(&self, name: &str) -> Result<ApiZone, HostedProviderError> {
        let request = self
            .client
            .post(self.url("/zones"))
            .json(&CreateZoneRequest { name });
        self.handle_request(request).await
    }

    pub async fn delete_zone(&self, id: &str, force: bool) -> Result<(), HostedProviderError> {
        let request = self
            .client
            .delete(self.url(&format!("/zones/{id}")))
            .query(&[("force", force)]);
        let response = self.send(request).await?;
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            _ => Err(Self::error_from(response).await),
        }
    }

    pub async fn list_record_sets(
        &self,
        zone_id: &str,
    ) -> Result<Vec<ApiRecordSet>, HostedProviderError> {
        let request = self.client.get(self.url(&format!("/zones/{zone_id}/rrsets")));
        self.handle_request(request).await
    }

    pub async fn create_record_set(
        &self,
        zone_id: &str,
        req: &RecordSetRequest<'_>,
    ) -> Result<ApiRecordSet, HostedProviderError> {
        let request = self
            .client
            .post(self.url(&format!("/zones/{zone_id}/rrsets")))
            .json(req);
        self.handle_request(request).await
    }

    pub async fn update_record_set(
        &self,
        zone_id: &str,
        id: &str,
        req: &RecordSetRequest<'_>,
    ) -> Result<ApiRecordSet, HostedProviderError> {
        let request = self
            .client
            .put(self.url(&format!("/zones/{zone_id}/rrsets/{id}")))
            .json(req);
        self.handle_request(request).await
    }
}
