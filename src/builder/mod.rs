//! Builder API for ergonomic model and animator construction.
//!
//! This module provides fluent builders for creating models in code and for
//! configuring animators, with minimal boilerplate.

pub mod animator;
pub mod error;
pub mod model;
pub mod transition;

pub use animator::{AnimatorBuilder, AnimatorConfig};
pub use error::BuildError;
pub use model::ModelBuilder;
pub use transition::TransitionBuilder;

use crate::model::{Expression, StepId};

/// Guard that holds while every listed step is active.
///
/// An empty list gives [`Expression::True`].
///
/// # Example
///
/// ```
/// use grafcet_animator::builder::all_active;
/// use grafcet_animator::model::{Expression, StepId};
///
/// let guard = all_active([3, 4]);
/// assert_eq!(
///     guard,
///     Expression::and(
///         Expression::step(StepId::new(3)),
///         Expression::step(StepId::new(4)),
///     )
/// );
/// ```
pub fn all_active(steps: impl IntoIterator<Item = u32>) -> Expression {
    steps
        .into_iter()
        .map(|id| Expression::step(StepId::new(id)))
        .reduce(Expression::and)
        .unwrap_or(Expression::True)
}

/// Guard that holds while any listed step is active.
///
/// An empty list gives [`Expression::False`].
pub fn any_active(steps: impl IntoIterator<Item = u32>) -> Expression {
    steps
        .into_iter()
        .map(|id| Expression::step(StepId::new(id)))
        .reduce(Expression::or)
        .unwrap_or(Expression::False)
}
