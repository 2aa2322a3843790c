//! Security plugins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorsRoutePlugin {
    /// Comma-separated origins, or `*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_origins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_methods: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_headers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expose_headers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_origins_by_regex: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpRestrictionRoutePlugin {
    /// CIDR allow-list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<String>>,
    /// CIDR deny-list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blacklist: Option<Vec<String>>,
    /// Message returned on rejected requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_roundtrip() {
        let plugin = CorsRoutePlugin {
            allow_origins: Some("https://app.example.com".into()),
            allow_credentials: Some(true),
            max_age: Some(3600),
            ..Default::default()
        };
        let json = serde_json::to_string(&plugin).unwrap();
        let decoded: CorsRoutePlugin = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plugin);
    }

    #[test]
    fn test_ip_restriction_whitelist_only() {
        let json = r#"{"whitelist":["10.0.0.0/8","192.168.0.0/16"]}"#;
        let plugin: IpRestrictionRoutePlugin = serde_json::from_str(json).unwrap();
        assert_eq!(plugin.whitelist.unwrap().len(), 2);
        assert!(plugin.blacklist.is_none());
    }
}
