#![forbid(unsafe_code)]

//! Contact delivery over the browser's `fetch`.

use folio_extras::contact::{ContactPayload, TransportError};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Posts contact payloads as JSON from the page.
///
/// `fetch` only resolves asynchronously, so this is not a
/// [`FormTransport`](folio_extras::contact::FormTransport): the page model
/// runs in deferred mode and the host feeds the status back.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// POST `payload` and resolve to the response status.
    pub async fn send(&self, payload: &ContactPayload) -> Result<u16, TransportError> {
        let body =
            serde_json::to_string(payload).map_err(|e| TransportError::Encode(e.to_string()))?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_body(&JsValue::from_str(&body));
        let request = Request::new_with_str_and_init(&self.endpoint, &init)
            .map_err(|e| TransportError::Encode(describe(&e)))?;
        let headers = request.headers();
        headers
            .set("Content-Type", "application/json")
            .and_then(|()| headers.set("Accept", "application/json"))
            .map_err(|e| TransportError::Encode(describe(&e)))?;

        let window =
            web_sys::window().ok_or_else(|| TransportError::Network("no window".to_owned()))?;
        debug!(endpoint = %self.endpoint, "posting contact form");
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| TransportError::Network(describe(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| TransportError::Network(describe(&e)))?;
        Ok(response.status())
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
