//! reqwest-backed activities client

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{endpoints, ActivitiesApi, ApiError, ServerMessage};
use crate::config::ApiConfig;
use crate::model::ActivityCatalog;

/// HTTP client for the activities API
pub struct HttpActivitiesApi {
    client: Client,
    base_url: String,
}

impl HttpActivitiesApi {
    /// Create a client for the configured base URL and timeout
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: endpoints::normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a mutation response into its message or a status error
    async fn read_message(response: Response) -> Result<ServerMessage, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            Ok(ServerMessage::from_body(&body))
        } else {
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("request timed out".to_string())
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for HttpActivitiesApi {
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = endpoints::catalog_url(&self.base_url);
        tracing::debug!(%url, "GET catalog");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        response
            .json::<ActivityCatalog>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ServerMessage, ApiError> {
        let url = endpoints::signup_url(&self.base_url, activity, email);
        tracing::debug!(%url, "POST signup");

        let response = self.client.post(&url).send().await.map_err(transport_error)?;
        Self::read_message(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ServerMessage, ApiError> {
        let url = endpoints::participants_url(&self.base_url, activity, email);
        tracing::debug!(%url, "DELETE participant");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_message(response).await
    }
}
