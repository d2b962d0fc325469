use std::time::Instant;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::source::FeedSource;
use crate::config::ApiConfig;
use crate::model::FeedItem;

/// Process-wide HTTP client for the trend seed API.
///
/// Holds no per-call state, so one instance can be shared by any number
/// of callers. No retries: a failed call is reported once.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET `url` and decode the JSON body as `T`.
    ///
    /// Logs the outbound request and the response or error.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let request_id = Uuid::new_v4();
        info!(%request_id, method = "GET", url, "Request");

        let started = Instant::now();
        let result = self.do_get(url).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let (status, body) = match result {
            Ok(ok) => ok,
            Err(e) => {
                error!(%request_id, kind = ?e.kind(), elapsed_ms, error = %e, "Response error");
                return Err(e);
            }
        };

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => {
                info!(%request_id, status, elapsed_ms, bytes = body.len(), "Response");
                Ok(value)
            }
            Err(source) => {
                let e = ApiError::Decode {
                    url: url.to_string(),
                    source,
                };
                error!(%request_id, kind = ?e.kind(), status, elapsed_ms, error = %e, "Response error");
                Err(e)
            }
        }
    }

    async fn do_get(&self, url: &str) -> Result<(u16, Vec<u8>), ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify(url, e))?;

        Ok((status.as_u16(), body.to_vec()))
    }

    fn classify(&self, url: &str, source: reqwest::Error) -> ApiError {
        if source.is_timeout() {
            self.timeout_error(url, source.is_connect())
        } else {
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Report the limit that actually fired.
    fn timeout_error(&self, url: &str, while_connecting: bool) -> ApiError {
        if while_connecting {
            ApiError::ConnectTimeout {
                url: url.to_string(),
                seconds: u64::from(self.config.connect_timeout_seconds),
            }
        } else {
            ApiError::Timeout {
                url: url.to_string(),
                seconds: u64::from(self.config.timeout_seconds),
            }
        }
    }
}

impl FeedSource for ApiClient {
    async fn fetch_feed(&self) -> Result<Vec<FeedItem>, ApiError> {
        let url = self.config.feed_url();
        let items: Vec<FeedItem> = self.get_json(&url).await?;
        info!(items = items.len(), "Feed fetched");
        Ok(items)
    }
}
