//! Typed client for the APISIX Admin API.
//!
//! ```no_run
//! use apisix_client::{ApisixClient, ClientConfig};
//! use apisix_core::{Route, Upstream};
//!
//! # async fn run() -> Result<(), apisix_client::ClientError> {
//! let client = ApisixClient::new(&ClientConfig::new("http://localhost", "edd1c9f034335f136f87ad84b625c8f1"));
//!
//! let route = Route::new("/httpbin/*", Upstream::single("httpbin.org:80", 1));
//! client.route().upsert("test-route", route).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod scope;

pub use client::ApisixClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use scope::consumer::ConsumerScope;
pub use scope::route::RouteScope;
