//! [`HttpClient`] backed by an async [`reqwest::Client`].
//!
//! Each `get` spawns one task on the supplied tokio runtime, so callers on
//! any thread can issue requests and completions fire on a runtime worker.
//!
//! ## For contributors
//!
//! Keep this adapter free of feed knowledge.  It only moves bytes and the
//! status code; the mapper decides what a valid payload is.

use std::time::Duration;

use reqwest::Client;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

use super::{HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse};
use crate::error::TransportError;

pub struct ReqwestHttpClient {
    client: Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Build a client whose requests time out after `timeout` and run on
    /// `runtime`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(runtime: Handle, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, runtime })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(runtime: Handle, client: Client) -> Self {
        Self { client, runtime }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let client = self.client.clone();
        let url = url.clone();
        let guard = CompletionGuard(Some(completion));

        self.runtime.spawn(async move {
            let result = fetch(&client, url).await;
            guard.complete(result);
        });
    }
}

/// Holds a completion until the request task finishes.  If the task is
/// dropped first (runtime shut down, task panicked) the completion still
/// fires once, with a transport error.
struct CompletionGuard(Option<HttpClientCompletion>);

impl CompletionGuard {
    fn complete(mut self, result: HttpClientResult) {
        if let Some(completion) = self.0.take() {
            completion(result);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(completion) = self.0.take() {
            warn!("request task dropped before completing");
            completion(Err(TransportError::new("request task dropped before completing")));
        }
    }
}

async fn fetch(client: &Client, url: Url) -> HttpClientResult {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|error| TransportError::new(error.to_string()))?;

    let meta = HttpResponse::new(response.url().clone(), response.status().as_u16());
    let body = response
        .bytes()
        .await
        .map_err(|error| TransportError::new(error.to_string()))?;

    debug!(url = %meta.url, status = meta.status_code, bytes = body.len(), "response received");
    Ok((body.to_vec(), meta))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
