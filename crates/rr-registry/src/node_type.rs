use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// The role a registered node plays on the relay network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Forwards traffic between peers.
    Relay,
    /// Answers RPC queries from clients.
    Rpc,
    /// Indexes network state for fast lookups.
    Indexer,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [NodeType::Relay, NodeType::Rpc, NodeType::Indexer];

    /// Canonical lowercase name, as accepted by registration calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Relay => "relay",
            NodeType::Rpc => "rpc",
            NodeType::Indexer => "indexer",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relay" => Ok(NodeType::Relay),
            "rpc" => Ok(NodeType::Rpc),
            "indexer" => Ok(NodeType::Indexer),
            _ => Err(RegistryError::InvalidNodeType),
        }
    }
}
