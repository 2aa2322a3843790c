use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upstream attached to a route — APISIX-compatible.
///
/// The strategy is optional on the wire; `RouteScope::upsert` fills in
/// roundrobin when the caller leaves it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upstream {
    /// Load balancer type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub lb_type: Option<LbType>,

    /// Nodes: address → weight.
    pub nodes: HashMap<String, u32>,
}

/// Load balancing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LbType {
    Roundrobin,
    Chash,
    Ewma,
    LeastConn,
}

impl Upstream {
    pub fn new(nodes: HashMap<String, u32>) -> Self {
        Self { lb_type: None, nodes }
    }

    /// Single-node upstream (the common case).
    pub fn single(addr: &str, weight: u32) -> Self {
        Self::new(HashMap::from([(addr.to_string(), weight)]))
    }

    /// Get the first node address (for single-node upstreams).
    pub fn first_node(&self) -> Option<&str> {
        self.nodes.keys().next().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lb_type_wire_names() {
        assert_eq!(serde_json::to_string(&LbType::Roundrobin).unwrap(), r#""roundrobin""#);
        assert_eq!(serde_json::to_string(&LbType::Chash).unwrap(), r#""chash""#);
        assert_eq!(serde_json::to_string(&LbType::Ewma).unwrap(), r#""ewma""#);
        assert_eq!(serde_json::to_string(&LbType::LeastConn).unwrap(), r#""least_conn""#);
    }

    #[test]
    fn test_type_field_rename() {
        let json = r#"{"type":"least_conn","nodes":{"10.0.0.1:9000":1}}"#;
        let us: Upstream = serde_json::from_str(json).unwrap();
        assert_eq!(us.lb_type, Some(LbType::LeastConn));
        assert_eq!(us.nodes["10.0.0.1:9000"], 1);
    }

    #[test]
    fn test_unset_type_not_serialized() {
        let us = Upstream::single("httpbin.org:80", 1);
        let json = serde_json::to_string(&us).unwrap();
        assert!(!json.contains("type"));
        let decoded: Upstream = serde_json::from_str(&json).unwrap();
        assert!(decoded.lb_type.is_none());
    }

    #[test]
    fn test_first_node() {
        let us = Upstream::single("127.0.0.1:8080", 1);
        assert_eq!(us.first_node(), Some("127.0.0.1:8080"));
        assert!(Upstream::new(HashMap::new()).first_node().is_none());
    }

    #[test]
    fn test_weighted_nodes_roundtrip() {
        let us = Upstream::new(HashMap::from([
            ("10.0.0.1:9000".to_string(), 100),
            ("10.0.0.2:9000".to_string(), 50),
        ]));
        let json = serde_json::to_string(&us).unwrap();
        let decoded: Upstream = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.nodes.get("10.0.0.1:9000"), Some(&100));
        assert_eq!(decoded.nodes.get("10.0.0.2:9000"), Some(&50));
    }
}
