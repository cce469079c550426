//! Builder for constructing transitions.

use crate::model::{Expression, StepId, Transition, TransitionId};

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use grafcet_animator::builder::TransitionBuilder;
/// use grafcet_animator::model::{Expression, StepId};
///
/// let transition = TransitionBuilder::new(2)
///     .requires([2])
///     .executes([1])
///     .when(Expression::and(
///         Expression::step(StepId::new(3)),
///         Expression::step(StepId::new(4)),
///     ))
///     .build();
///
/// assert_eq!(transition.required, vec![StepId::new(2)]);
/// assert!(transition.condition.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct TransitionBuilder {
    id: TransitionId,
    required: Vec<StepId>,
    executed: Vec<StepId>,
    condition: Option<Expression>,
}

impl TransitionBuilder {
    /// Create a builder for the transition with this id.
    pub fn new(id: u32) -> Self {
        Self {
            id: TransitionId::new(id),
            required: Vec::new(),
            executed: Vec::new(),
            condition: None,
        }
    }

    /// Add steps that must be active for the transition to be enabled.
    pub fn requires(mut self, steps: impl IntoIterator<Item = u32>) -> Self {
        self.required.extend(steps.into_iter().map(StepId::new));
        self
    }

    /// Add steps activated when the transition fires.
    pub fn executes(mut self, steps: impl IntoIterator<Item = u32>) -> Self {
        self.executed.extend(steps.into_iter().map(StepId::new));
        self
    }

    /// Set the guard condition (optional).
    pub fn when(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn build(self) -> Transition {
        Transition {
            id: self.id,
            required: self.required,
            executed: self.executed,
            condition: self.condition,
        }
    }
}
