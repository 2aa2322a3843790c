use super::{Scope, segment};
use crate::error::ClientError;
use apisix_core::upstream::LbType;
use apisix_core::{AdminResponse, Route};
use reqwest::{Client, Method};
use std::sync::Arc;

/// Operations on the `routes` collection.
#[derive(Debug, Clone)]
pub struct RouteScope {
    scope: Scope,
}

impl RouteScope {
    pub(crate) fn new(http: Client, base_url: Arc<str>) -> Self {
        Self { scope: Scope::new(http, base_url, "routes") }
    }

    /// Fetch a stored route by id.
    pub async fn get(&self, id: &str) -> Result<AdminResponse<Route>, ClientError> {
        self.scope
            .request::<(), _>(Method::GET, &segment(id), None)
            .await
    }

    /// Create or fully replace the route stored under `id`.
    ///
    /// When the upstream strategy is unset it is defaulted to roundrobin
    /// before the call; no other caller-supplied field is touched.
    pub async fn upsert(
        &self,
        id: &str,
        mut route: Route,
    ) -> Result<AdminResponse<Route>, ClientError> {
        route.upstream.lb_type.get_or_insert(LbType::Roundrobin);
        self.scope
            .request(Method::PUT, &segment(id), Some(&route))
            .await
    }

    /// Delete the route stored under `id`. Whether deleting a missing id is
    /// an error is up to the gateway; a 404 surfaces as a `ClientError`.
    pub async fn delete(&self, id: &str) -> Result<serde_json::Value, ClientError> {
        self.scope
            .request::<(), _>(Method::DELETE, &segment(id), None)
            .await
    }
}
