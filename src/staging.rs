//! Two-phase commit for planned changes.
//!
//! Operations only produce [`Change`] values. `stage_and_run` shows them,
//! asks the operator once and applies them in order.

mod change;
mod executor;

pub use change::Change;
pub use executor::{Confirm, Outcome, PROMPT, StdinConfirm, stage_and_run};

#[cfg(test)]
mod tests;
