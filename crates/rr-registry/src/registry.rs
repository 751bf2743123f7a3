use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{error::RegistryError, node_type::NodeType, record::NodeRecord, MIN_STAKE};

/// The principal→node mapping at the heart of the relay network, together
/// with the admin seat and the stake table that gate its mutations.
///
/// Invariants maintained by this type:
/// - A principal owns at most one [`NodeRecord`].
/// - `registered_at` never changes after a record is created.
/// - A record is only created for a principal whose stake was at least
///   [`MIN_STAKE`] at registration time (not re-checked afterwards).
/// - Exactly one principal holds the admin seat at any moment.
///
/// All state lives in this one struct.  Callers construct a fresh instance
/// per deployment (or per test scenario) rather than sharing a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayRegistry {
    admin: String,
    nodes: HashMap<String, NodeRecord>,
    stakes: HashMap<String, u64>,
    block_height: u64,
}

impl RelayRegistry {
    /// Create an empty registry with `admin` holding the admin seat.
    pub fn new(admin: impl Into<String>) -> Self {
        Self {
            admin: admin.into(),
            nodes: HashMap::new(),
            stakes: HashMap::new(),
            block_height: 0,
        }
    }

    /// The principal currently holding the admin seat.
    pub fn admin(&self) -> &str {
        &self.admin
    }

    /// `true` when `caller` holds the admin seat.
    pub fn is_admin(&self, caller: &str) -> bool {
        caller == self.admin
    }

    /// Bonded stake of `principal`, or 0 when none has been recorded.
    pub fn stake_of(&self, principal: &str) -> u64 {
        self.stakes.get(principal).copied().unwrap_or(0)
    }

    /// Record `principal`'s bonded stake.
    ///
    /// Stands in for the external staking mechanism; the guarded operations
    /// below only ever read the stake table.
    pub fn set_stake(&mut self, principal: impl Into<String>, amount: u64) {
        self.stakes.insert(principal.into(), amount);
    }

    /// The block height used to stamp records.
    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// Move the height stamp.  The registry never advances this itself; the
    /// surrounding chain does.
    pub fn set_block_height(&mut self, height: u64) {
        self.block_height = height;
    }

    /// Hand the admin seat to `new_admin`.
    ///
    /// Only the current admin may do this, and the old admin loses its
    /// privilege the moment the call returns.  `new_admin` is accepted
    /// verbatim, with no format validation.
    pub fn transfer_admin(
        &mut self,
        caller: &str,
        new_admin: impl Into<String>,
    ) -> Result<(), RegistryError> {
        if !self.is_admin(caller) {
            return Err(RegistryError::NotAuthorized);
        }

        self.admin = new_admin.into();
        Ok(())
    }

    /// Register `caller` as a node of the given type.
    ///
    /// The checks run in a fixed order (existing registration, then node
    /// type, then stake), so the surfaced error is deterministic when more
    /// than one precondition fails at once.  On success the new record is
    /// stamped with the current block height in both height fields.
    pub fn register_node(
        &mut self,
        caller: &str,
        node_type: &str,
        metadata_uri: impl Into<String>,
    ) -> Result<(), RegistryError> {
        if self.nodes.contains_key(caller) {
            return Err(RegistryError::AlreadyRegistered);
        }
        let node_type: NodeType = node_type.parse()?;
        if self.stake_of(caller) < MIN_STAKE {
            return Err(RegistryError::InsufficientStake);
        }

        self.nodes.insert(
            caller.to_string(),
            NodeRecord {
                node_type,
                metadata_uri: metadata_uri.into(),
                registered_at: self.block_height,
                last_updated: self.block_height,
            },
        );
        Ok(())
    }

    /// Point `caller`'s record at a new metadata URI and restamp
    /// `last_updated`.  The node type and `registered_at` are untouched.
    pub fn update_metadata(
        &mut self,
        caller: &str,
        new_uri: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let height = self.block_height;
        let record = self
            .nodes
            .get_mut(caller)
            .ok_or(RegistryError::NotRegistered)?;

        record.metadata_uri = new_uri.into();
        record.last_updated = height;
        Ok(())
    }

    /// Drop `caller`'s record entirely.
    ///
    /// Nothing of the old record survives; the principal may register again
    /// later as if for the first time.
    pub fn deregister_node(&mut self, caller: &str) -> Result<(), RegistryError> {
        if self.nodes.remove(caller).is_none() {
            return Err(RegistryError::NotRegistered);
        }
        Ok(())
    }

    /// Look up the record owned by `owner`.
    pub fn node(&self, owner: &str) -> Result<&NodeRecord, RegistryError> {
        self.nodes.get(owner).ok_or(RegistryError::NotRegistered)
    }

    /// `true` when `principal` currently owns a record.
    pub fn is_registered(&self, principal: &str) -> bool {
        self.nodes.contains_key(principal)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over `(principal, record)` pairs, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeRecord)> {
        self.nodes.iter().map(|(p, r)| (p.as_str(), r))
    }
}
