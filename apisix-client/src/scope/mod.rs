//! Resource scopes over the admin API.
//!
//! All scopes funnel through [`Scope::request`]: one outbound call per
//! invocation, no local state, every failure normalized into
//! [`ClientError`](crate::error::ClientError).

pub mod consumer;
pub mod route;

use crate::error::ClientError;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared request plumbing for one admin resource collection.
///
/// Holds the transport, the resolved admin base URL, and a fixed resource
/// prefix (`routes`, `consumers`). Concrete scopes build per-call suffixes
/// and delegate here.
#[derive(Debug, Clone)]
pub(crate) struct Scope {
    http: Client,
    base_url: Arc<str>,
    resource: &'static str,
}

impl Scope {
    pub(crate) fn new(http: Client, base_url: Arc<str>, resource: &'static str) -> Self {
        Self { http, base_url, resource }
    }

    /// Issue one call against `<base>/<resource><path>` and decode the JSON
    /// response body.
    ///
    /// Exactly one slash separates resource and suffix whether or not the
    /// suffix starts with one. Errors carry the suffix as passed in, not the
    /// resolved URL.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let sep = if path.starts_with('/') { "" } else { "/" };
        let url = format!("{}/{}{}{}", self.base_url, self.resource, sep, path);
        debug!(method = %method, resource = self.resource, path, "admin request");

        let mut req = self.http.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|err| {
            warn!(resource = self.resource, path, error = %err, "admin request failed");
            ClientError::from_transport(&err, path)
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(resource = self.resource, path, status = status.as_u16(), "admin request rejected");
            return Err(ClientError::from_status(status, path));
        }

        resp.json::<T>()
            .await
            .map_err(|err| ClientError::from_transport(&err, path))
    }
}

/// Percent-encode a caller-supplied identifier as a single path segment.
fn segment(id: &str) -> String {
    format!("/{}", urlencoding::encode(id))
}
