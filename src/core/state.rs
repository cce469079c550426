//! Runtime state of an animated model.
//!
//! The runtime state holds what changes while a model runs: which steps are
//! active and the current value of every declared variable. It is owned by a
//! single [`Animator`](crate::animator::Animator) and only readable from the
//! outside.

use super::error::{AnimationError, Result};
use crate::model::{Model, StepId, VariableKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Active steps and variable stores.
///
/// Booleans and integers live in separate stores, so the same name may be
/// declared once per type.
///
/// # Example
///
/// ```rust
/// use grafcet_animator::core::RuntimeState;
/// use grafcet_animator::model::{Model, Step, StepId, Variable, VariableKind};
///
/// let model = Model {
///     steps: vec![
///         Step { id: StepId::new(1), initial: true },
///         Step { id: StepId::new(2), initial: false },
///     ],
///     transitions: vec![],
///     variables: vec![Variable::new("x", VariableKind::Integer, Some("5"))],
/// };
///
/// let state = RuntimeState::initialize(&model).unwrap();
/// assert!(state.is_active(StepId::new(1)));
/// assert!(!state.is_active(StepId::new(2)));
/// assert_eq!(state.integer_variable("x"), Some(5));
/// assert_eq!(state.boolean_variable("x"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeState {
    active: BTreeSet<StepId>,
    booleans: HashMap<String, bool>,
    integers: HashMap<String, i32>,
}

impl RuntimeState {
    /// Build the start state of a model.
    ///
    /// Every initial step becomes active. Each variable takes its initial
    /// literal, or `false`/`0` when none is given. Fails on the first
    /// variable with an unrecognized type or an unparseable integer literal.
    pub fn initialize(model: &Model) -> Result<Self> {
        let mut state = Self {
            active: model.initial_steps().collect(),
            ..Self::default()
        };

        for variable in &model.variables {
            let literal = variable.initial.as_deref();
            match variable.kind() {
                Some(VariableKind::Integer) => {
                    let value = literal
                        .map(|text| parse_integer(&variable.name, text))
                        .transpose()?
                        .unwrap_or_default();
                    state.integers.insert(variable.name.clone(), value);
                }
                Some(VariableKind::Boolean) => {
                    let value = literal.is_some_and(parse_boolean);
                    state.booleans.insert(variable.name.clone(), value);
                }
                None => {
                    return Err(AnimationError::UnsupportedVariableType {
                        name: variable.name.clone(),
                        kind: variable.kind.clone(),
                    });
                }
            }
        }

        Ok(state)
    }

    /// Whether the step is active. Unknown steps are never active.
    pub fn is_active(&self, step: StepId) -> bool {
        self.active.contains(&step)
    }

    /// Active steps in ascending order.
    pub fn active_steps(&self) -> impl Iterator<Item = StepId> + '_ {
        self.active.iter().copied()
    }

    pub fn active_set(&self) -> &BTreeSet<StepId> {
        &self.active
    }

    pub fn boolean_variable(&self, name: &str) -> Option<bool> {
        self.booleans.get(name).copied()
    }

    pub fn integer_variable(&self, name: &str) -> Option<i32> {
        self.integers.get(name).copied()
    }

    /// Replace the active set in one assignment.
    pub(crate) fn commit_active(&mut self, active: BTreeSet<StepId>) {
        self.active = active;
    }
}

/// Integer literals are base-10 `i32`.
pub(crate) fn parse_integer(name: &str, literal: &str) -> Result<i32> {
    literal
        .parse()
        .map_err(|_| AnimationError::InvalidInitialValue {
            name: name.to_string(),
            literal: literal.to_string(),
        })
}

/// Boolean literals are `true` ignoring ASCII case; any other text is `false`.
pub(crate) fn parse_boolean(literal: &str) -> bool {
    literal.eq_ignore_ascii_case("true")
}
