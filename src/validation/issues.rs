//! Structural problems a model can have.

use crate::model::{StepId, TransitionId};
use thiserror::Error;

/// One problem found while checking a model
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelIssue {
    #[error("Step {0} is declared more than once")]
    DuplicateStep(StepId),

    #[error("Transition {0} is declared more than once")]
    DuplicateTransition(TransitionId),

    #[error("Transition {transition} requires unknown step {step}")]
    UnknownRequiredStep {
        transition: TransitionId,
        step: StepId,
    },

    #[error("Transition {transition} executes unknown step {step}")]
    UnknownExecutedStep {
        transition: TransitionId,
        step: StepId,
    },

    #[error("Guard of transition {transition} tests unknown step {step}")]
    UnknownGuardStep {
        transition: TransitionId,
        step: StepId,
    },

    #[error("Guard of transition {transition} reads undeclared boolean variable '{name}'")]
    UnknownGuardVariable {
        transition: TransitionId,
        name: String,
    },

    #[error("Guard of transition {transition} uses unsupported operator '{op}'")]
    UnsupportedOperator { transition: TransitionId, op: String },

    #[error("Variable '{name}' has unsupported type '{kind}'")]
    UnsupportedVariableType { name: String, kind: String },

    #[error("Variable '{name}' has invalid initial value '{literal}'")]
    InvalidInitialValue { name: String, literal: String },
}
