//! Typed catalog of APISIX plugin configurations.
//!
//! Each plugin has an independently defined shape; the catalog structs map
//! the hyphenated wire names onto one optional field per plugin. Unknown
//! plugin names are not part of the contract.

pub mod authentication;
pub mod general;
pub mod security;
pub mod transformation;

use serde::{Deserialize, Serialize};

use authentication::{
    AuthzKeycloakRoutePlugin, BasicAuthConsumerPlugin, BasicAuthRoutePlugin,
    JweDecryptConsumerPlugin, JweDecryptRoutePlugin, JwtAuthConsumerPlugin, JwtAuthRoutePlugin,
    KeyAuthConsumerPlugin, KeyAuthRoutePlugin, OpenIdConnectRoutePlugin,
};
use general::{EchoRoutePlugin, RedirectRoutePlugin};
use security::{CorsRoutePlugin, IpRestrictionRoutePlugin};
use transformation::{
    AttachConsumerLabelRoutePlugin, BodyTransformerRoutePlugin, DeGraphQlRoutePlugin,
    FaultInjectionRoutePlugin, GrpcTranscodeRoutePlugin, GrpcWebRoutePlugin, MockingRoutePlugin,
    ProxyRewriteRoutePlugin, ResponseRewriteRoutePlugin,
};

/// Plugins attachable to a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlugins {
    #[serde(rename = "jwt-auth", skip_serializing_if = "Option::is_none")]
    pub jwt_auth: Option<JwtAuthRoutePlugin>,

    #[serde(rename = "key-auth", skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthRoutePlugin>,

    #[serde(rename = "jwe-decrypt", skip_serializing_if = "Option::is_none")]
    pub jwe_decrypt: Option<JweDecryptRoutePlugin>,

    #[serde(rename = "basic-auth", skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuthRoutePlugin>,

    #[serde(rename = "authz-keycloak", skip_serializing_if = "Option::is_none")]
    pub authz_keycloak: Option<AuthzKeycloakRoutePlugin>,

    #[serde(rename = "openid-connect", skip_serializing_if = "Option::is_none")]
    pub openid_connect: Option<OpenIdConnectRoutePlugin>,

    #[serde(rename = "response-rewrite", skip_serializing_if = "Option::is_none")]
    pub response_rewrite: Option<ResponseRewriteRoutePlugin>,

    #[serde(rename = "proxy-rewrite", skip_serializing_if = "Option::is_none")]
    pub proxy_rewrite: Option<ProxyRewriteRoutePlugin>,

    #[serde(rename = "grpc-transcode", skip_serializing_if = "Option::is_none")]
    pub grpc_transcode: Option<GrpcTranscodeRoutePlugin>,

    #[serde(rename = "grpc-web", skip_serializing_if = "Option::is_none")]
    pub grpc_web: Option<GrpcWebRoutePlugin>,

    #[serde(rename = "fault-injection", skip_serializing_if = "Option::is_none")]
    pub fault_injection: Option<FaultInjectionRoutePlugin>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mocking: Option<MockingRoutePlugin>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraphql: Option<DeGraphQlRoutePlugin>,

    #[serde(rename = "body-transformer", skip_serializing_if = "Option::is_none")]
    pub body_transformer: Option<BodyTransformerRoutePlugin>,

    #[serde(rename = "attach-consumer-label", skip_serializing_if = "Option::is_none")]
    pub attach_consumer_label: Option<AttachConsumerLabelRoutePlugin>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<CorsRoutePlugin>,

    #[serde(rename = "ip-restriction", skip_serializing_if = "Option::is_none")]
    pub ip_restriction: Option<IpRestrictionRoutePlugin>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RedirectRoutePlugin>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<EchoRoutePlugin>,
}

/// Plugins attachable to a consumer (credential side).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumerPlugins {
    #[serde(rename = "jwt-auth", skip_serializing_if = "Option::is_none")]
    pub jwt_auth: Option<JwtAuthConsumerPlugin>,

    #[serde(rename = "key-auth", skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<KeyAuthConsumerPlugin>,

    #[serde(rename = "jwe-decrypt", skip_serializing_if = "Option::is_none")]
    pub jwe_decrypt: Option<JweDecryptConsumerPlugin>,

    #[serde(rename = "basic-auth", skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuthConsumerPlugin>,
}
