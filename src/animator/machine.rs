//! The animation engine.

use crate::animator::tick::TickPlan;
use crate::builder::AnimatorConfig;
use crate::core::{
    is_enabled, is_valid, AnimationError, Result, RuntimeState, TickHistory, TickRecord,
    TickReport,
};
use crate::model::{Model, StepId, Transition, TransitionId};
use chrono::Utc;
use std::sync::Arc;

/// Animates a GRAFCET model one synchronous tick at a time.
///
/// The model is shared and read-only; the runtime state belongs to this
/// animator and only changes through [`tick`](Self::tick) and
/// [`reset`](Self::reset).
///
/// # Example
///
/// ```rust
/// use grafcet_animator::animator::Animator;
/// use grafcet_animator::builder::{ModelBuilder, TransitionBuilder};
/// use grafcet_animator::model::{StepId, TransitionId};
///
/// let model = ModelBuilder::new()
///     .initial_step(1)
///     .step(2)
///     .transition(TransitionBuilder::new(1).requires([1]).executes([2]))
///     .build()
///     .unwrap();
///
/// let mut animator = Animator::new(model).unwrap();
/// assert!(animator.is_enabled(TransitionId::new(1)).unwrap());
///
/// animator.tick().unwrap();
/// assert!(!animator.is_active(StepId::new(1)));
/// assert!(animator.is_active(StepId::new(2)));
/// ```
#[derive(Clone, Debug)]
pub struct Animator {
    model: Arc<Model>,
    config: AnimatorConfig,
    initial: RuntimeState,
    state: RuntimeState,
    history: TickHistory,
    ticks: u64,
}

impl Animator {
    /// Create an animator with the default configuration.
    ///
    /// Fails with [`AnimationError::UnsupportedVariableType`] if a variable
    /// is declared with a type other than `boolean` or `integer`.
    pub fn new(model: impl Into<Arc<Model>>) -> Result<Self> {
        Self::with_config(model, AnimatorConfig::default())
    }

    pub fn with_config(model: impl Into<Arc<Model>>, config: AnimatorConfig) -> Result<Self> {
        let model = model.into();
        let initial = RuntimeState::initialize(&model)?;

        tracing::debug!(
            steps = model.steps.len(),
            transitions = model.transitions.len(),
            variables = model.variables.len(),
            active = initial.active_set().len(),
            "Animator initialized"
        );

        Ok(Self {
            model,
            config,
            state: initial.clone(),
            initial,
            history: TickHistory::new(),
            ticks: 0,
        })
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Current runtime state (read-only)
    pub fn state(&self) -> &RuntimeState {
        &self.state
    }

    pub fn history(&self) -> &TickHistory {
        &self.history
    }

    /// Number of ticks committed since construction or the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_active(&self, step: StepId) -> bool {
        self.state.is_active(step)
    }

    pub fn active_steps(&self) -> impl Iterator<Item = StepId> + '_ {
        self.state.active_steps()
    }

    pub fn boolean_variable(&self, name: &str) -> Option<bool> {
        self.state.boolean_variable(name)
    }

    pub fn integer_variable(&self, name: &str) -> Option<i32> {
        self.state.integer_variable(name)
    }

    /// Whether every required step of the transition is active.
    pub fn is_enabled(&self, transition: TransitionId) -> Result<bool> {
        Ok(is_enabled(self.transition(transition)?, &self.state))
    }

    /// Whether the transition's guard currently holds.
    pub fn is_valid(&self, transition: TransitionId) -> Result<bool> {
        is_valid(self.transition(transition)?, &self.state)
    }

    /// Whether the transition would fire on the next tick.
    pub fn is_firable(&self, transition: TransitionId) -> Result<bool> {
        let transition = self.transition(transition)?;
        if !is_enabled(transition, &self.state) {
            return Ok(false);
        }
        is_valid(transition, &self.state)
    }

    /// Enabled transitions, in model order.
    pub fn enabled_transitions(&self) -> Vec<TransitionId> {
        self.model
            .transitions
            .iter()
            .filter(|t| is_enabled(t, &self.state))
            .map(|t| t.id)
            .collect()
    }

    /// The plan the next tick would commit (pure).
    pub fn plan(&self) -> Result<TickPlan> {
        TickPlan::compute(&self.model, &self.state)
    }

    /// Fire every enabled transition whose guard holds, simultaneously.
    ///
    /// On error the active steps are left exactly as they were.
    pub fn tick(&mut self) -> Result<TickReport> {
        let plan = self.plan()?;
        Ok(self.commit(plan))
    }

    /// Tick until a tick fires nothing.
    ///
    /// Returns the number of ticks that fired before the fixed point, or
    /// `None` if all `max_ticks` ticks fired.
    pub fn settle(&mut self, max_ticks: u64) -> Result<Option<u64>> {
        for fired in 0..max_ticks {
            if self.tick()?.is_stable() {
                return Ok(Some(fired));
            }
        }
        Ok(None)
    }

    /// Return to the start state and clear history.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.history = TickHistory::new();
        self.ticks = 0;
    }

    fn transition(&self, id: TransitionId) -> Result<&Transition> {
        self.model
            .transition(id)
            .ok_or(AnimationError::UnknownTransition(id))
    }

    fn commit(&mut self, plan: TickPlan) -> TickReport {
        let before = self.state.active_set();
        let after = plan.next_active(before);

        self.ticks += 1;
        let report = TickReport {
            tick: self.ticks,
            fired: plan.fired().to_vec(),
            deactivated: before.difference(&after).copied().collect(),
            activated: after.difference(before).copied().collect(),
        };

        if report.is_stable() {
            tracing::trace!(tick = report.tick, "Tick fired nothing");
        } else {
            tracing::debug!(
                tick = report.tick,
                fired = report.fired.len(),
                deactivated = report.deactivated.len(),
                activated = report.activated.len(),
                "Tick committed"
            );
            for transition in &report.fired {
                tracing::trace!(tick = report.tick, transition = %transition, "Transition fired");
            }
            self.record(&report);
        }

        self.state.commit_active(after);
        report
    }

    fn record(&mut self, report: &TickReport) {
        if !self.config.record_history {
            return;
        }

        let record = TickRecord {
            report: report.clone(),
            timestamp: Utc::now(),
        };
        self.history.push(record, self.config.history_limit);
    }
}
