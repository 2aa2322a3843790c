use crate::plugins::RoutePlugins;
use crate::upstream::Upstream;
use serde::{Deserialize, Serialize};

/// A Route maps an incoming URI/method pattern to an upstream with
/// plugin-driven behavior — APISIX-compatible.
///
/// The same shape is sent on upsert and comes back inside the response
/// envelope on get; `create_time`/`update_time` are populated by the gateway
/// and never sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Route identifier. The admin API keys routes by the id in the URL
    /// path, so this is optional in the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URI path pattern (supports exact, prefix with `*`).
    pub uri: String,

    /// Allowed HTTP methods (unset = all methods).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<HttpMethod>>,

    /// Upstream this route forwards matched traffic to.
    pub upstream: Upstream,

    /// Plugin chain configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<RoutePlugins>,

    /// Route status (1 = enabled, 0 = disabled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,

    /// Creation timestamp (epoch seconds, gateway-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,

    /// Last update timestamp (epoch seconds, gateway-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
}

impl Route {
    /// Route forwarding `uri` to the given upstream, everything else unset.
    pub fn new(uri: &str, upstream: Upstream) -> Self {
        Self {
            id: None,
            name: None,
            uri: uri.to_string(),
            methods: None,
            upstream,
            plugins: None,
            status: None,
            create_time: None,
            update_time: None,
        }
    }
}

/// HTTP methods allowed on a route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Connect,
    Trace,
}
