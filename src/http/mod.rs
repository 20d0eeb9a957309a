use url::Url;

mod client;
mod error;
#[cfg(target_arch = "wasm32")]
mod fetch;

pub use client::NotificationApi;
pub use error::ApiError;
#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

/// A POST with no body, as issued by the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request. Implemented over `fetch` in the browser and over
/// in-process services in tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}
