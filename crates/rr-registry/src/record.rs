use serde::{Deserialize, Serialize};

use crate::node_type::NodeType;

/// The metadata held for one registered node.
///
/// `registered_at` is fixed when the record is created; `last_updated` is
/// restamped on every metadata change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Role the node was registered as.
    pub node_type: NodeType,

    /// Opaque pointer to the node's off-network metadata document.
    /// Stored verbatim; the registry does not validate its format.
    pub metadata_uri: String,

    /// Block height at which the node was registered.
    pub registered_at: u64,

    /// Block height of the most recent metadata change.
    pub last_updated: u64,
}
