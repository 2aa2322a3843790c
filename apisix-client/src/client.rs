use crate::config::ClientConfig;
use crate::scope::consumer::ConsumerScope;
use crate::scope::route::RouteScope;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Transport reused by every client built with `shared = true`.
static SHARED_TRANSPORT: OnceLock<Client> = OnceLock::new();

/// Entry point aggregating the two resource scopes.
///
/// Construction builds (or reuses) the transport and resolves the admin base
/// URL once; the scopes hold no further state and every call is an
/// independent request/response exchange.
#[derive(Debug, Clone)]
pub struct ApisixClient {
    route: RouteScope,
    consumer: ConsumerScope,
}

impl ApisixClient {
    /// Build a client from connection settings.
    ///
    /// # Panics
    ///
    /// Panics when `admin_secret` is not a valid HTTP header value.
    pub fn new(config: &ClientConfig) -> Self {
        let http = if config.shared {
            SHARED_TRANSPORT
                .get_or_init(|| build_transport(config))
                .clone()
        } else {
            build_transport(config)
        };

        let base_url: Arc<str> = config.admin_base().into();
        debug!(base_url = %base_url, shared = config.shared, "admin client ready");

        Self {
            route: RouteScope::new(http.clone(), Arc::clone(&base_url)),
            consumer: ConsumerScope::new(http, base_url),
        }
    }

    pub fn route(&self) -> &RouteScope {
        &self.route
    }

    pub fn consumer(&self) -> &ConsumerScope {
        &self.consumer
    }
}

fn build_transport(config: &ClientConfig) -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(&config.admin_secret)
            .expect("admin secret is not a valid header value"),
    );

    Client::builder()
        .default_headers(headers)
        .build()
        .expect("failed to build HTTP transport")
}
