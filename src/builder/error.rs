//! Build errors for model and animator builders.

use crate::model::{StepId, TransitionId};
use thiserror::Error;

/// Errors that can occur when building a model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Step {0} declared more than once")]
    DuplicateStep(StepId),

    #[error("Transition {0} declared more than once")]
    DuplicateTransition(TransitionId),

    #[error("Variable '{name}' declared more than once as {kind}")]
    DuplicateVariable { name: String, kind: String },
}
