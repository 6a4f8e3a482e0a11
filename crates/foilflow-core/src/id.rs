//! Node identifier newtype.
//!
//! Content nodes are keyed by human-readable string ids (`"root"`,
//! `"q_wind_surfer"`, ...). [`NodeId`] wraps the string so that a node id
//! cannot be confused with a title or an answer label at the type level.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The id of the sole designated entry point of every content graph.
pub const ROOT_ID: &str = "root";

/// Stable content node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// The entry point id.
    pub fn root() -> Self {
        NodeId(ROOT_ID.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

// Lets `IndexMap<NodeId, _>` be queried with a plain `&str`.
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_id_is_root() {
        assert!(NodeId::root().is_root());
        assert!(!NodeId::from("prone_q1").is_root());
    }

    #[test]
    fn node_id_display() {
        assert_eq!(format!("{}", NodeId::from("wing_q2")), "wing_q2");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeId::from("res_dock")).unwrap();
        assert_eq!(json, "\"res_dock\"");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "res_dock");
    }

    #[test]
    fn borrow_allows_str_lookup() {
        let mut map = indexmap::IndexMap::new();
        map.insert(NodeId::from("root"), 1);
        assert_eq!(map.get("root"), Some(&1));
    }
}
