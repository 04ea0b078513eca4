//! HTTP client for the shop and profile endpoints.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Instant;

use crate::config::ServiceConfig;

use super::error::ServiceError;
use super::traits::{ProfileService, RewardService};
use super::types::{Profile, PurchaseKind, PurchaseRequest, RewardDescriptor};

/// Client for the game's shop and user endpoints.
///
/// Transport, timeouts and response decoding live here; callers only see
/// `RewardDescriptor`, `Profile` or a `ServiceError`.
pub struct HttpShopClient {
    client: Client,
    config: ServiceConfig,
}

impl HttpShopClient {
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ServiceError::Setup(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(status = %status, error = %message, "Service returned an error");

            return Err(ServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Decode(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ServiceError::Decode(format!("Failed to parse response JSON: {}", e)))
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> ServiceError {
    if source.is_timeout() {
        ServiceError::Timeout {
            url: url.to_string(),
        }
    } else {
        ServiceError::Transport {
            url: url.to_string(),
            source,
        }
    }
}

#[async_trait]
impl RewardService for HttpShopClient {
    async fn purchase(&self, kind: PurchaseKind) -> Result<RewardDescriptor, ServiceError> {
        let url = self.config.url_for(&self.config.purchase_path);
        tracing::debug!(url = %url, kind = ?kind, "Sending purchase request");

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .json(&PurchaseRequest { kind })
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let reward: RewardDescriptor = Self::decode(response).await?;
        tracing::debug!(
            latency_ms = start.elapsed().as_millis() as u64,
            tier = %reward.rarity_tier,
            "Purchase completed"
        );
        Ok(reward)
    }
}

#[async_trait]
impl ProfileService for HttpShopClient {
    async fn fetch_current_user(&self) -> Result<Profile, ServiceError> {
        let url = self.config.url_for(&self.config.profile_path);
        tracing::debug!(url = %url, "Fetching current user");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        Self::decode(response).await
    }
}
