//! Planning a synchronous tick.
//!
//! A plan is computed entirely from the state as of the start of the tick:
//! first the enabled transitions are collected, then filtered by their
//! guards. Applying the plan removes every required step of every fired
//! transition before adding any executed step, which makes the outcome
//! independent of transition order.

use crate::core::{is_enabled, is_valid, Result, RuntimeState};
use crate::model::{Model, StepId, TransitionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The effect of one tick, computed but not yet committed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickPlan {
    fired: Vec<TransitionId>,
    deactivate: BTreeSet<StepId>,
    activate: BTreeSet<StepId>,
}

impl TickPlan {
    /// Compute the plan for the next tick of `model` from `state`.
    ///
    /// Fails if any enabled transition's guard fails to evaluate. Guards of
    /// transitions that are not enabled are never evaluated.
    pub fn compute(model: &Model, state: &RuntimeState) -> Result<Self> {
        let mut plan = Self::default();

        for transition in model.transitions.iter().filter(|t| is_enabled(t, state)) {
            if !is_valid(transition, state)? {
                continue;
            }

            plan.fired.push(transition.id);
            plan.deactivate.extend(transition.required.iter().copied());

            for step in &transition.executed {
                if model.has_step(*step) {
                    plan.activate.insert(*step);
                } else {
                    tracing::warn!(
                        transition = %transition.id,
                        step = %step,
                        "Transition executes a step missing from the model, skipping"
                    );
                }
            }
        }

        Ok(plan)
    }

    /// Transitions that fire, in model order.
    pub fn fired(&self) -> &[TransitionId] {
        &self.fired
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }

    /// Steps removed by the deactivation phase.
    pub fn deactivate(&self) -> &BTreeSet<StepId> {
        &self.deactivate
    }

    /// Steps added by the activation phase.
    pub fn activate(&self) -> &BTreeSet<StepId> {
        &self.activate
    }

    /// `(active \ deactivate) ∪ activate`
    pub fn next_active(&self, active: &BTreeSet<StepId>) -> BTreeSet<StepId> {
        active
            .difference(&self.deactivate)
            .chain(self.activate.iter())
            .copied()
            .collect()
    }
}
