use rr_registry::{RegistryError, RelayRegistry};

use crate::{
    error::ScenarioError,
    step::{Expect, Scenario, Step},
};

/// What actually happened when one step ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Ok,
    Failed(RegistryError),
}

impl StepOutcome {
    fn describe(&self) -> String {
        match self {
            StepOutcome::Ok => "ok".to_string(),
            StepOutcome::Failed(e) => format!("error {} ({e})", e.code()),
        }
    }
}

/// The result of replaying a full scenario.
#[derive(Debug)]
pub struct Replay {
    /// One outcome per step, in order.
    pub outcomes: Vec<StepOutcome>,

    /// The registry as it stood after the final step.
    pub registry: RelayRegistry,
}

/// Replay `scenario` against a fresh [`RelayRegistry`].
///
/// Steps run in order.  A step carrying an expectation aborts the replay with
/// [`ScenarioError::Mismatch`] when the outcome differs; steps without one
/// are recorded and the replay continues either way, so a scenario can walk
/// through expected failures.
pub fn run(scenario: &Scenario) -> Result<Replay, ScenarioError> {
    let mut registry = RelayRegistry::new(scenario.admin.clone());
    let mut outcomes = Vec::with_capacity(scenario.steps.len());

    for (index, entry) in scenario.steps.iter().enumerate() {
        let outcome = apply(&mut registry, &entry.step);

        if let Some(expect) = entry.expect {
            check(index, expect, outcome)?;
        }
        outcomes.push(outcome);
    }

    Ok(Replay { outcomes, registry })
}

fn apply(registry: &mut RelayRegistry, step: &Step) -> StepOutcome {
    let result = match step {
        Step::SeedStake { principal, amount } => {
            registry.set_stake(principal.clone(), *amount);
            Ok(())
        }
        Step::SetBlockHeight { height } => {
            registry.set_block_height(*height);
            Ok(())
        }
        Step::TransferAdmin { caller, new_admin } => {
            registry.transfer_admin(caller, new_admin.clone())
        }
        Step::RegisterNode {
            caller,
            node_type,
            metadata_uri,
        } => registry.register_node(caller, node_type, metadata_uri.clone()),
        Step::UpdateMetadata {
            caller,
            metadata_uri,
        } => registry.update_metadata(caller, metadata_uri.clone()),
        Step::DeregisterNode { caller } => registry.deregister_node(caller),
        Step::GetNode { owner } => registry.node(owner).map(|_| ()),
    };

    match result {
        Ok(()) => StepOutcome::Ok,
        Err(e) => StepOutcome::Failed(e),
    }
}

fn check(step: usize, expect: Expect, outcome: StepOutcome) -> Result<(), ScenarioError> {
    let satisfied = match (expect, outcome) {
        (Expect::Ok, StepOutcome::Ok) => true,
        (Expect::Error(code), StepOutcome::Failed(e)) => e.code() == code,
        _ => false,
    };

    if satisfied {
        Ok(())
    } else {
        Err(ScenarioError::Mismatch {
            step,
            expected: match expect {
                Expect::Ok => "ok".to_string(),
                Expect::Error(code) => format!("error {code}"),
            },
            got: outcome.describe(),
        })
    }
}
