//! Read-only client for the latest-toots endpoint.

use thiserror::Error;

use super::Post;

/// Path served by the backend. Takes no parameters: every call returns the
/// server's full notion of "latest", independent of prior calls.
pub const LATEST_TOOTS_PATH: &str = "/get_latest_toots";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(String),
    #[error("feed response was not valid JSON: {0}")]
    Decode(String),
    #[error("feed polling is only available in the browser runtime")]
    Unsupported,
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    endpoint: String,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(default_endpoint())
    }
}

impl FeedClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One fetch of the full latest list.
    #[cfg(target_arch = "wasm32")]
    pub async fn latest_toots(&self) -> Result<Vec<Post>, FeedError> {
        let response = gloo_net::http::Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FeedError::Request(err.to_string()))?;

        if !response.ok() {
            return Err(FeedError::Request(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<Post>>()
            .await
            .map_err(|err| FeedError::Decode(err.to_string()))
    }

    /// The poll loop only runs in the browser; server-side rendering keeps
    /// the feed empty and the client fills it in after hydration.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn latest_toots(&self) -> Result<Vec<Post>, FeedError> {
        Err(FeedError::Unsupported)
    }
}

/// Deployments can point the dashboard at another backend by defining a
/// `TOOTBOARD_FEED_ENDPOINT` global before the bundle loads.
fn default_endpoint() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("TOOTBOARD_FEED_ENDPOINT"))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| LATEST_TOOTS_PATH.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        LATEST_TOOTS_PATH.to_string()
    }
}
