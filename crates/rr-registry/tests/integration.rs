/// End-to-end tests for the relay registry state machine.
///
/// Each test builds a fresh registry, seeds the stake table the way a real
/// deployment's staking mechanism would, and walks one operator flow:
/// admin handover, the registration gates, metadata updates, deregistration.
use rr_registry::{NodeType, RegistryError, RelayRegistry};

const ADMIN: &str = "ST1ADMIN";
const NODE: &str = "ST2NODE";
const URI: &str = "https://node.example.com/meta";
const ALT_URI: &str = "https://node.example.com/alt-meta";

fn deployment() -> RelayRegistry {
    let mut reg = RelayRegistry::new(ADMIN);
    reg.set_block_height(1000);
    reg.set_stake(NODE, 1000);
    reg
}

#[test]
fn admin_handover_revokes_the_old_admin() {
    let mut reg = deployment();

    reg.transfer_admin(ADMIN, "ST1NEW").unwrap();
    assert_eq!(reg.admin(), "ST1NEW");

    assert_eq!(
        reg.transfer_admin(ADMIN, "ST1THIRD"),
        Err(RegistryError::NotAuthorized)
    );
}

#[test]
fn staked_principal_registers_and_is_queryable() {
    let mut reg = deployment();

    reg.register_node(NODE, "relay", URI).unwrap();

    let record = reg.node(NODE).unwrap();
    assert_eq!(record.node_type, NodeType::Relay);
    assert_eq!(record.metadata_uri, URI);
    assert_eq!(record.registered_at, reg.block_height());
    assert_eq!(record.last_updated, reg.block_height());
}

#[test]
fn registration_is_not_idempotent() {
    let mut reg = deployment();

    reg.register_node(NODE, "rpc", URI).unwrap();
    assert_eq!(
        reg.register_node(NODE, "rpc", URI),
        Err(RegistryError::AlreadyRegistered)
    );
}

#[test]
fn unstaked_principal_cannot_register() {
    let mut reg = deployment();
    reg.set_stake(NODE, 0);

    assert_eq!(
        reg.register_node(NODE, "indexer", URI),
        Err(RegistryError::InsufficientStake)
    );
    assert!(reg.is_empty());
}

#[test]
fn metadata_update_replaces_uri_and_restamps() {
    let mut reg = deployment();
    reg.register_node(NODE, "rpc", URI).unwrap();

    reg.set_block_height(1005);
    reg.update_metadata(NODE, ALT_URI).unwrap();

    let record = reg.node(NODE).unwrap();
    assert_eq!(record.metadata_uri, ALT_URI);
    assert_eq!(record.last_updated, 1005);
    assert_eq!(record.registered_at, 1000, "registration stamp is immutable");
}

#[test]
fn metadata_update_requires_registration() {
    let mut reg = deployment();
    assert_eq!(
        reg.update_metadata(NODE, URI),
        Err(RegistryError::NotRegistered)
    );
}

#[test]
fn deregistration_leaves_no_residual_state() {
    let mut reg = deployment();
    reg.register_node(NODE, "relay", URI).unwrap();

    reg.deregister_node(NODE).unwrap();
    assert_eq!(reg.node(NODE), Err(RegistryError::NotRegistered));

    // A fresh registration for the same principal succeeds again.
    reg.register_node(NODE, "relay", URI).unwrap();
    assert!(reg.is_registered(NODE));
}

#[test]
fn lookup_succeeds_exactly_while_registered() {
    let mut reg = deployment();

    assert!(reg.node(NODE).is_err());
    reg.register_node(NODE, "indexer", URI).unwrap();
    assert!(reg.node(NODE).is_ok());
    reg.deregister_node(NODE).unwrap();
    assert!(reg.node(NODE).is_err());
}

#[test]
fn numeric_error_codes_are_stable() {
    assert_eq!(RegistryError::NotAuthorized.code(), 100);
    assert_eq!(RegistryError::AlreadyRegistered.code(), 101);
    assert_eq!(RegistryError::NotRegistered.code(), 102);
    assert_eq!(RegistryError::InsufficientStake.code(), 103);
    assert_eq!(RegistryError::InvalidNodeType.code(), 104);
}
