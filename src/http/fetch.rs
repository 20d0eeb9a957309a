use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use super::{ApiError, ApiRequest, RawResponse, Transport};

/// `window.fetch` with same-origin credentials.
#[derive(Clone, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

        let headers = Headers::new().map_err(js_error)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_error)?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_credentials(RequestCredentials::SameOrigin);
        init.set_headers(&headers);

        let fetch_request =
            Request::new_with_str_and_init(request.url.as_str(), &init).map_err(js_error)?;
        let value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(RawResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn js_error(value: JsValue) -> ApiError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value
            .as_string()
            .unwrap_or_else(|| "unknown JavaScript error".to_string()),
    };
    ApiError::Transport(message)
}
