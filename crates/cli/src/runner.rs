//! Check executor with error isolation.
//!
//! Instances run on a rayon pool; the order-preserving collect keeps the
//! report deterministic regardless of completion order. One instance's
//! failure, error, or panic never affects any other instance: a raised
//! check failure becomes `Fail`, anything else a check raises (including a
//! panic) becomes `Error`, and the run continues.

use rayon::prelude::*;

use crate::checks::{CheckContext, CheckIssue};
use crate::report::{Outcome, OutcomeKind};
use crate::resolver::CheckInstance;

/// Execute every instance, producing one outcome each, in instance order.
pub fn run_checks(instances: Vec<CheckInstance>, ctx: &CheckContext) -> Vec<Outcome> {
    instances
        .into_par_iter()
        .map(|instance| execute(instance, ctx))
        .collect()
}

fn execute(instance: CheckInstance, ctx: &CheckContext) -> Outcome {
    tracing::debug!("running {}", instance.run_id);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        instance.check.execute(&instance.binding, ctx)
    }));

    let kind = match result {
        Ok(Ok(())) => OutcomeKind::Pass,
        Ok(Err(CheckIssue::Failed(message))) => OutcomeKind::Fail(message),
        Ok(Err(CheckIssue::Error(message))) => OutcomeKind::Error(message),
        Err(_) => OutcomeKind::Error("internal error: check panicked".to_string()),
    };

    Outcome {
        check_name: instance.check.name().to_string(),
        index: instance.check.common().index,
        severity: instance.check.severity(),
        entity_ids: instance.binding.entity_ids(),
        run_id: instance.run_id,
        kind,
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
