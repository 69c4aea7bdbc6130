//! HTTP access to the Newton fractal endpoint.
//!
//! Client-side (hydrate): a real `GET` via `gloo-net`.
//! Server-side (SSR): the source resolves to [`FetchError::Unavailable`]
//! without touching the network, since the image is only fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network errors, non-OK statuses, undecodable bodies and malformed images
//! all surface as a [`FetchError`]. Callers treat every variant the same way:
//! report it and keep the view in its loading state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::payload::{FractalImage, FractalResponse, ShapeError};

/// Fixed address of the precomputed fractal.
pub const NEWTON_FRACTAL_ENDPOINT: &str = "http://127.0.0.1:8000/api/newton_fractal/";

/// Failure to obtain a usable fractal image.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("fractal request failed: {0}")]
    Status(u16),
    #[error("invalid fractal body: {0}")]
    Decode(String),
    #[error("fractal body has no `rgb` field")]
    MissingRgb,
    #[error("malformed fractal image: {0}")]
    Shape(#[from] ShapeError),
    #[error("not available on server")]
    Unavailable,
}

/// Something that can produce the fractal image asynchronously.
pub trait FractalSource {
    /// Issue one request for the image.
    fn fetch(&self) -> impl Future<Output = Result<FractalImage, FetchError>>;
}

/// Decode a response body into a validated image.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] for invalid JSON, [`FetchError::MissingRgb`]
/// when the `rgb` field is absent or null, and [`FetchError::Shape`] when the
/// array is not a rectangular 3-channel grid.
pub fn decode_fractal_body(body: &str) -> Result<FractalImage, FetchError> {
    let response: FractalResponse = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let rows = response.rgb.ok_or(FetchError::MissingRgb)?;
    Ok(FractalImage::from_rows(rows)?)
}

/// Fetches the image with a plain `GET` (no headers, query, or body).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpFractalSource {
    endpoint: String,
}

impl HttpFractalSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpFractalSource {
    fn default() -> Self {
        Self::new(NEWTON_FRACTAL_ENDPOINT)
    }
}

impl FractalSource for HttpFractalSource {
    fn fetch(&self) -> impl Future<Output = Result<FractalImage, FetchError>> {
        #[cfg(feature = "hydrate")]
        let endpoint = self.endpoint.clone();
        async move {
            #[cfg(feature = "hydrate")]
            {
                let resp = gloo_net::http::Request::get(&endpoint)
                    .send()
                    .await
                    .map_err(|e| FetchError::Network(e.to_string()))?;
                if !resp.ok() {
                    return Err(FetchError::Status(resp.status()));
                }
                let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
                decode_fractal_body(&body)
            }
            #[cfg(not(feature = "hydrate"))]
            {
                Err(FetchError::Unavailable)
            }
        }
    }
}
