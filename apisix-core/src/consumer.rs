use crate::plugins::ConsumerPlugins;
use serde::{Deserialize, Serialize};

/// Consumer definition — APISIX-compatible.
/// An identity principal the gateway authenticates requests against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    /// Unique username, also the resource key in the admin API.
    pub username: String,

    /// Credential plugins (e.g. key-auth key).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<ConsumerPlugins>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Creation timestamp (epoch seconds, gateway-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,

    /// Last update timestamp (epoch seconds, gateway-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
}

impl Consumer {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            plugins: None,
            desc: None,
            create_time: None,
            update_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::authentication::KeyAuthConsumerPlugin;

    #[test]
    fn test_consumer_minimal() {
        let json = r#"{"username":"bob"}"#;
        let c: Consumer = serde_json::from_str(json).unwrap();
        assert_eq!(c.username, "bob");
        assert!(c.plugins.is_none());
        assert!(c.desc.is_none());
    }

    #[test]
    fn test_consumer_with_key_auth_plugin() {
        let json = r#"{"username":"alice","plugins":{"key-auth":{"key":"secret-key"}}}"#;
        let c: Consumer = serde_json::from_str(json).unwrap();
        let plugins = c.plugins.expect("key-auth plugin must be present");
        assert_eq!(plugins.key_auth.unwrap().key, "secret-key");
    }

    #[test]
    fn test_consumer_serde_roundtrip() {
        let mut c = Consumer::new("alice");
        c.desc = Some("test user".into());
        c.plugins = Some(ConsumerPlugins {
            key_auth: Some(KeyAuthConsumerPlugin { key: "s3cr3t".into() }),
            ..Default::default()
        });
        let json = serde_json::to_string(&c).unwrap();
        let decoded: Consumer = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, c);
    }

    #[test]
    fn test_stored_consumer_with_timestamps() {
        let json = r#"{"username":"carol","create_time":1700000000,"update_time":1700000000}"#;
        let c: Consumer = serde_json::from_str(json).unwrap();
        assert_eq!(c.create_time, Some(1700000000));
    }

    #[test]
    fn test_unset_fields_not_serialized() {
        let json = serde_json::to_string(&Consumer::new("dave")).unwrap();
        assert_eq!(json, r#"{"username":"dave"}"#);
    }
}
