//! HTTP API Client
//!
//! Talks to the activities REST API from the browser.

use activity_board::api::endpoints;
use activity_board::{ActivitiesApi, ActivityCatalog, ApiError, ServerMessage};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use super::console_error;

/// Local storage key holding an API base URL override
const API_BASE_KEY: &str = "activity_board_api_url";

/// Get the API base URL from local storage, or same-origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    endpoints::normalize_base(&url)
}

pub struct GlooActivitiesApi {
    base: String,
}

impl GlooActivitiesApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    console_error(&format!("Network error: {}", e));
    ApiError::Network(e.to_string())
}

async fn read_message(response: Response) -> Result<ServerMessage, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if response.ok() {
        Ok(ServerMessage::from_body(&body))
    } else {
        Err(ApiError::from_status(status, &body))
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for GlooActivitiesApi {
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let response = Request::get(&endpoints::catalog_url(&self.base))
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        response
            .json::<ActivityCatalog>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ServerMessage, ApiError> {
        let response = Request::post(&endpoints::signup_url(&self.base, activity, email))
            .send()
            .await
            .map_err(network_error)?;
        read_message(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ServerMessage, ApiError> {
        let response = Request::delete(&endpoints::participants_url(&self.base, activity, email))
            .send()
            .await
            .map_err(network_error)?;
        read_message(response).await
    }
}
