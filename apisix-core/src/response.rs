use serde::{Deserialize, Serialize};

/// Envelope the admin API wraps every stored entity in.
///
/// The index fields are omitted by the gateway on writes, so they default
/// to zero there; reads always carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminResponse<T> {
    #[serde(rename = "createdIndex", default)]
    pub created_index: i64,

    #[serde(rename = "modifiedIndex", default)]
    pub modified_index: i64,

    /// Resource key, e.g. `/apisix/consumers/alice`.
    pub key: String,

    /// The entity as stored.
    pub value: T,
}
