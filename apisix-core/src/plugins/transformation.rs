//! Request/response transformation plugins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseRewriteRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<ResponseRewriteHeaders>,
    /// Nginx-variable conditions; the gateway accepts arbitrary
    /// `[var, op, value]` triples, kept as passthrough JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<RewriteFilter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseRewriteHeaders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<Vec<String>>,
    /// Values may be strings, numbers, or booleans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteFilter {
    pub regex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<FilterScope>,
    pub replace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterScope {
    Once,
    Global,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyRewriteRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<RewriteMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_uri: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<ProxyRewriteHeaders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_real_request_uri_unsafe: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyRewriteHeaders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<Vec<String>>,
}

/// Methods proxy-rewrite can rewrite a request to, WebDAV verbs included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RewriteMethod {
    Get,
    Post,
    Put,
    Head,
    Delete,
    Options,
    Mkcol,
    Copy,
    Move,
    Propfind,
    Lock,
    Unlock,
    Patch,
    Trace,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrpcTranscodeRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pb_option: Option<PbOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PbOption {
    Proto2,
    Proto3,
}

/// grpc-web has no documented configuration; enabling it is the config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrpcWebRoutePlugin {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultInjectionRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort: Option<FaultAbort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<FaultDelay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultAbort {
    pub http_status: u16,
    pub percentage: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultDelay {
    /// Delay duration in seconds.
    pub duration: f64,
    pub percentage: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockingRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_example: Option<String>,
    /// JSON-schema-ish mock shape, kept as passthrough JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeGraphQlRoutePlugin {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyTransformerRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<BodyTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<BodyTransform>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyTransform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<BodyInputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyInputFormat {
    Json,
    Xml,
    Encoded,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachConsumerLabelRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_rewrite_vars_passthrough() {
        let json = r#"{"vars":[["status","==",500]],"body":"oops"}"#;
        let plugin: ResponseRewriteRoutePlugin = serde_json::from_str(json).unwrap();
        assert_eq!(plugin.vars.as_ref().unwrap()[0], json!(["status", "==", 500]));
        let back = serde_json::to_value(&plugin).unwrap();
        assert_eq!(back["vars"], json!([["status", "==", 500]]));
    }

    #[test]
    fn test_rewrite_filter_scope() {
        let filter = RewriteFilter {
            regex: "foo".into(),
            scope: Some(FilterScope::Global),
            replace: "bar".into(),
            options: None,
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, json!({"regex": "foo", "scope": "global", "replace": "bar"}));
    }

    #[test]
    fn test_proxy_rewrite_webdav_method() {
        assert_eq!(serde_json::to_string(&RewriteMethod::Propfind).unwrap(), r#""PROPFIND""#);
        let plugin: ProxyRewriteRoutePlugin =
            serde_json::from_str(r#"{"uri":"/new","method":"MKCOL"}"#).unwrap();
        assert_eq!(plugin.method, Some(RewriteMethod::Mkcol));
    }

    #[test]
    fn test_grpc_web_empty_config() {
        assert_eq!(serde_json::to_string(&GrpcWebRoutePlugin {}).unwrap(), "{}");
        let _: GrpcWebRoutePlugin = serde_json::from_str("{}").unwrap();
    }

    #[test]
    fn test_fault_injection_roundtrip() {
        let plugin = FaultInjectionRoutePlugin {
            abort: Some(FaultAbort { http_status: 503, percentage: 50, body: None }),
            delay: Some(FaultDelay { duration: 1.5, percentage: 100 }),
        };
        let json = serde_json::to_string(&plugin).unwrap();
        let decoded: FaultInjectionRoutePlugin = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plugin);
    }

    #[test]
    fn test_body_transformer_formats() {
        let json = r#"{"request":{"input_format":"xml","template":"{{body}}"}}"#;
        let plugin: BodyTransformerRoutePlugin = serde_json::from_str(json).unwrap();
        assert_eq!(plugin.request.unwrap().input_format, Some(BodyInputFormat::Xml));
        assert!(plugin.response.is_none());
    }
}
