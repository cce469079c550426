//! Errors raised while building or animating a model.

use crate::model::TransitionId;
use thiserror::Error;

/// Errors that can occur when constructing an animator or evaluating a tick.
///
/// None of these are recovered inside the engine. A failing operation leaves
/// the runtime state exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Unsupported type '{kind}' for variable named '{name}'")]
    UnsupportedVariableType { name: String, kind: String },

    #[error("Invalid initial value '{literal}' for variable named '{name}'")]
    InvalidInitialValue { name: String, literal: String },

    #[error("Transition {0} does not exist in the model")]
    UnknownTransition(TransitionId),

    #[error("Guard references undeclared boolean variable '{name}'")]
    UnknownVariable { name: String },

    #[error("Unsupported guard operator '{op}'")]
    UnsupportedExpression { op: String },
}

/// Result alias for animator operations.
pub type Result<T> = std::result::Result<T, AnimationError>;
