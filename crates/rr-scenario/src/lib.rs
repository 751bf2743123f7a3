pub mod error;
pub mod runner;
pub mod step;

pub use error::ScenarioError;
pub use runner::{run, Replay, StepOutcome};
pub use step::{Expect, Scenario, ScenarioStep, Step};
