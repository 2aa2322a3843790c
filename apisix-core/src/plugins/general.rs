//! General-purpose plugins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedirectRoutePlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_to_https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_uri: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ret_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode_uri: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_query_string: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoRoutePlugin {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_http_to_https() {
        let plugin = RedirectRoutePlugin { http_to_https: Some(true), ..Default::default() };
        assert_eq!(serde_json::to_string(&plugin).unwrap(), r#"{"http_to_https":true}"#);
    }

    #[test]
    fn test_echo_required_body() {
        let plugin: EchoRoutePlugin = serde_json::from_str(r#"{"body":"pong"}"#).unwrap();
        assert_eq!(plugin.body, "pong");
        assert!(serde_json::from_str::<EchoRoutePlugin>("{}").is_err());
    }
}
