use gloo_net::http::Request;
use serde::Serialize;
use songbook_lib::api::{ApiError, Endpoint, Reply};
use wasm_bindgen::{JsError, JsValue};

const HTTP_ACCEPT: &str = "application/json";

/// Base URL of the lyrics backend. See build.rs.
const API_BASE: &str = env!("SONGBOOK_API_BASE");

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request failed to complete.
    #[error("{0}")]
    Other(#[from] gloo_net::Error),

    #[error("error deserializing json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FetchError> for JsValue {
    fn from(e: FetchError) -> Self {
        JsError::new(&e.to_string()).into()
    }
}

impl From<&FetchError> for ApiError {
    fn from(e: &FetchError) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Perform a POST request with a json body.
///
/// The response body is decoded whatever the status code, since the backend explains its
/// errors in it.
pub async fn post_json<B: Serialize>(endpoint: Endpoint, body: &B) -> Result<Reply, FetchError> {
    let response = Request::post(&endpoint.url(API_BASE))
        .header("accept", HTTP_ACCEPT)
        .json(body)?
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    let payload = serde_json::from_str(&text)?;

    Ok(Reply { status, payload })
}
