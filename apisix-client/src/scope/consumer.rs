use super::{Scope, segment};
use crate::error::ClientError;
use apisix_core::{AdminResponse, Consumer};
use reqwest::{Client, Method};
use std::sync::Arc;

/// Operations on the `consumers` collection, keyed by username.
#[derive(Debug, Clone)]
pub struct ConsumerScope {
    scope: Scope,
}

impl ConsumerScope {
    pub(crate) fn new(http: Client, base_url: Arc<str>) -> Self {
        Self { scope: Scope::new(http, base_url, "consumers") }
    }

    /// Fetch a stored consumer by username.
    pub async fn get(&self, username: &str) -> Result<AdminResponse<Consumer>, ClientError> {
        self.scope
            .request::<(), _>(Method::GET, &segment(username), None)
            .await
    }

    /// Create or fully replace the consumer keyed by `consumer.username`.
    /// The payload goes out unmodified.
    pub async fn upsert(&self, consumer: Consumer) -> Result<AdminResponse<Consumer>, ClientError> {
        self.scope
            .request(Method::PUT, &segment(&consumer.username), Some(&consumer))
            .await
    }

    /// Delete the consumer stored under `username`.
    pub async fn delete(&self, username: &str) -> Result<serde_json::Value, ClientError> {
        self.scope
            .request::<(), _>(Method::DELETE, &segment(username), None)
            .await
    }
}
