use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// One instruction in a replayable registry scenario.
///
/// Serialised with an `op` tag so scenario files read naturally:
/// `{ "op": "register-node", "caller": "...", "node_type": "relay", ... }`.
///
/// `seed-stake` and `set-block-height` stand in for the two external
/// mechanisms a real deployment would have (the staking contract and chain
/// progress); the remaining ops map one-to-one onto registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Step {
    SeedStake {
        principal: String,
        amount: u64,
    },
    SetBlockHeight {
        height: u64,
    },
    TransferAdmin {
        caller: String,
        new_admin: String,
    },
    RegisterNode {
        caller: String,
        node_type: String,
        metadata_uri: String,
    },
    UpdateMetadata {
        caller: String,
        metadata_uri: String,
    },
    DeregisterNode {
        caller: String,
    },
    GetNode {
        owner: String,
    },
}

/// Expected outcome of a step, for self-checking scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expect {
    /// The step must succeed.
    Ok,
    /// The step must fail with this numeric error code.
    Error(u32),
}

/// A step plus its optional expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioStep {
    #[serde(flatten)]
    pub step: Step,

    /// When present, the replay aborts if the outcome differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Expect>,
}

impl From<Step> for ScenarioStep {
    fn from(step: Step) -> Self {
        Self { step, expect: None }
    }
}

/// A complete registry scenario: who starts in the admin seat, plus the
/// steps to replay against a fresh registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Principal seated as admin before the first step runs.
    pub admin: String,

    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Parse a scenario from its JSON file format.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }
}
