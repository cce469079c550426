//! Guard expression evaluation.
//!
//! Guards are pure: evaluation reads the runtime state and never changes it,
//! so the same expression against the same state always gives the same
//! answer.

use super::error::{AnimationError, Result};
use super::state::RuntimeState;
use crate::model::{Expression, Transition};

/// Evaluate a guard expression against a runtime state.
///
/// Referencing an undeclared boolean variable is an error rather than
/// `false`, and so is any operator outside the guard language.
///
/// # Example
///
/// ```rust
/// use grafcet_animator::core::{evaluate, RuntimeState};
/// use grafcet_animator::model::{Expression, Model, Step, StepId, Variable, VariableKind};
///
/// let model = Model {
///     steps: vec![Step { id: StepId::new(1), initial: true }],
///     transitions: vec![],
///     variables: vec![Variable::new("ready", VariableKind::Boolean, Some("false"))],
/// };
/// let state = RuntimeState::initialize(&model).unwrap();
///
/// let guard = Expression::or(
///     Expression::variable("ready"),
///     Expression::step(StepId::new(1)),
/// );
/// assert_eq!(evaluate(&guard, &state), Ok(true));
///
/// let missing = Expression::variable("unknown");
/// assert!(evaluate(&missing, &state).is_err());
/// ```
pub fn evaluate(expr: &Expression, state: &RuntimeState) -> Result<bool> {
    match expr {
        Expression::True => Ok(true),
        Expression::False => Ok(false),
        Expression::Step { step } => Ok(state.is_active(*step)),
        Expression::Variable { name } => {
            state
                .boolean_variable(name)
                .ok_or_else(|| AnimationError::UnknownVariable { name: name.clone() })
        }
        Expression::And { left, right } => Ok(evaluate(left, state)? && evaluate(right, state)?),
        Expression::Or { left, right } => Ok(evaluate(left, state)? || evaluate(right, state)?),
        Expression::Unsupported { op } => {
            Err(AnimationError::UnsupportedExpression { op: op.clone() })
        }
    }
}

/// Whether every required step of the transition is active.
///
/// Independent of the guard. A transition with no required steps is always
/// enabled.
pub fn is_enabled(transition: &Transition, state: &RuntimeState) -> bool {
    transition
        .required
        .iter()
        .all(|step| state.is_active(*step))
}

/// Whether the transition's guard holds. A missing guard always holds.
pub fn is_valid(transition: &Transition, state: &RuntimeState) -> Result<bool> {
    transition
        .condition
        .as_ref()
        .map_or(Ok(true), |condition| evaluate(condition, state))
}
