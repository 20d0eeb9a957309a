use serde::de::DeserializeOwned;
use url::Url;

use super::{ApiError, ApiRequest, RawResponse, Transport};
use crate::config::{CsrfToken, PanelConfig};
use crate::domain::responses::{DeleteResponse, MarkAllReadResponse, MarkReadResponse};
use crate::domain::NotificationId;

/// Client for the three panel endpoints under the configured base path.
pub struct NotificationApi<T> {
    transport: T,
    base: Url,
    csrf: Option<CsrfToken>,
}

impl<T: Transport> NotificationApi<T> {
    pub fn new(transport: T, config: &PanelConfig) -> Self {
        Self {
            transport,
            base: config.endpoint_base.clone(),
            csrf: config.csrf.clone(),
        }
    }

    pub async fn mark_read(&self, id: &NotificationId) -> Result<MarkReadResponse, ApiError> {
        let url = self.endpoint(&["mark-read", id.as_str()])?;
        self.send(url).await
    }

    pub async fn mark_all_read(&self) -> Result<MarkAllReadResponse, ApiError> {
        let url = self.endpoint(&["mark-all-read"])?;
        self.send(url).await
    }

    pub async fn delete(&self, id: &NotificationId) -> Result<DeleteResponse, ApiError> {
        let url = self.endpoint(&["delete", id.as_str()])?;
        self.send(url).await
    }

    /// Appends percent-encoded segments to the base path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::Endpoint(format!("{} cannot carry path segments", self.base))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn send<R>(&self, url: Url) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Default,
    {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(csrf) = &self.csrf {
            headers.push((csrf.header.clone(), csrf.value.clone()));
        }

        tracing::debug!(url = %url, "sending panel request");
        let response = self.transport.post(ApiRequest { url, headers }).await?;
        decode(response)
    }
}

fn decode<R>(response: RawResponse) -> Result<R, ApiError>
where
    R: DeserializeOwned + Default,
{
    if !response.is_success() {
        return Err(ApiError::rejected(response.status, &response.body));
    }
    if response.body.trim().is_empty() {
        return Ok(R::default());
    }
    Ok(serde_json::from_str(&response.body)?)
}
