//! Race document fetching
//!
//! The single network access of the page: one `fetch` of the race
//! document, no retry and no timeout.

use js_sys::Uint8Array;
use racecal_core::{Catalog, LoadError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Extract a readable message from a rejected promise value
fn js_error_message(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Fetch `url` and return the response body. Non-2xx statuses are errors.
async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let network = |e: JsValue| LoadError::Network {
        url: url.to_string(),
        message: js_error_message(&e),
    };

    let window = web_sys::window().ok_or_else(|| LoadError::Network {
        url: url.to_string(),
        message: "No window".to_string(),
    })?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network)?;
    let response: Response = response.dyn_into().map_err(network)?;

    if !response.ok() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(network)?)
        .await
        .map_err(network)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

// ─────────────────────────────────────────────────────────────────────────────
// Race Data
// ─────────────────────────────────────────────────────────────────────────────

/// Load and parse the race document
pub async fn fetch_races(url: &str) -> Result<Catalog, LoadError> {
    tracing::info!(url, "Fetching race document");
    let bytes = fetch_bytes(url).await?;
    Catalog::from_json(&bytes)
}
