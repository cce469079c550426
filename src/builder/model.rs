//! Builder for constructing models.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::model::{Model, Step, StepId, Transition, Variable, VariableKind};
use std::collections::HashSet;

/// Builder for constructing models with a fluent API.
///
/// Steps, transitions and variables keep their declaration order. Duplicate
/// identifiers are reported by [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct ModelBuilder {
    steps: Vec<Step>,
    transitions: Vec<Transition>,
    variables: Vec<Variable>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a step that is active at start.
    pub fn initial_step(mut self, id: u32) -> Self {
        self.steps.push(Step {
            id: StepId::new(id),
            initial: true,
        });
        self
    }

    pub fn step(mut self, id: u32) -> Self {
        self.steps.push(Step {
            id: StepId::new(id),
            initial: false,
        });
        self
    }

    /// Add a transition using a builder.
    pub fn transition(mut self, builder: TransitionBuilder) -> Self {
        self.transitions.push(builder.build());
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn variable(mut self, name: &str, kind: VariableKind, initial: Option<&str>) -> Self {
        self.variables.push(Variable::new(name, kind, initial));
        self
    }

    pub fn boolean(self, name: &str, initial: Option<bool>) -> Self {
        let literal = initial.map(|value| value.to_string());
        self.variable(name, VariableKind::Boolean, literal.as_deref())
    }

    pub fn integer(self, name: &str, initial: Option<i32>) -> Self {
        let literal = initial.map(|value| value.to_string());
        self.variable(name, VariableKind::Integer, literal.as_deref())
    }

    /// Add a variable exactly as declared, including types the animator
    /// does not support.
    pub fn declare(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    /// Build the model.
    /// Returns an error on the first duplicate identifier.
    pub fn build(self) -> Result<Model, BuildError> {
        let mut steps = HashSet::new();
        for step in &self.steps {
            if !steps.insert(step.id) {
                return Err(BuildError::DuplicateStep(step.id));
            }
        }

        let mut transitions = HashSet::new();
        for transition in &self.transitions {
            if !transitions.insert(transition.id) {
                return Err(BuildError::DuplicateTransition(transition.id));
            }
        }

        let mut variables = HashSet::new();
        for variable in &self.variables {
            if !variables.insert((variable.kind.as_str(), variable.name.as_str())) {
                return Err(BuildError::DuplicateVariable {
                    name: variable.name.clone(),
                    kind: variable.kind.clone(),
                });
            }
        }

        Ok(Model {
            steps: self.steps,
            transitions: self.transitions,
            variables: self.variables,
        })
    }
}
