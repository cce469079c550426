//! Static GRAFCET model consumed by the animator.
//!
//! A model is plain data: steps, transitions, variables and guard
//! expressions. It is produced by a loader (or by
//! [`ModelBuilder`](crate::builder::ModelBuilder)) and never mutated by the
//! engine, so one model can be shared between several animators through an
//! `Arc`.

mod expression;
mod ids;

pub use expression::Expression;
pub use ids::{StepId, TransitionId};

use serde::{Deserialize, Serialize};

/// A step of the chart. Whether it is active is runtime state, not model data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    #[serde(default)]
    pub initial: bool,
}

/// A transition between steps.
///
/// `required` and `executed` are declared independently; they may overlap
/// and need not mirror each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub id: TransitionId,
    /// Steps that must all be active for the transition to be enabled
    #[serde(default)]
    pub required: Vec<StepId>,
    /// Steps activated when the transition fires
    #[serde(default)]
    pub executed: Vec<StepId>,
    /// Guard; `None` always holds
    #[serde(default)]
    pub condition: Option<Expression>,
}

/// Recognized variable types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Boolean,
    Integer,
}

impl VariableKind {
    /// Parse a declared type name. Returns `None` for anything unrecognized.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "boolean" => Some(Self::Boolean),
            "integer" => Some(Self::Integer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
        }
    }
}

/// A declared variable.
///
/// The type is kept as declared text; the animator rejects unknown types at
/// construction time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Initial value literal, e.g. `"5"` or `"true"`
    #[serde(default)]
    pub initial: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, kind: VariableKind, initial: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: kind.as_str().to_string(),
            initial: initial.map(str::to_string),
        }
    }

    /// The declared type, if recognized.
    pub fn kind(&self) -> Option<VariableKind> {
        VariableKind::parse(&self.kind)
    }
}

/// A complete GRAFCET model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Model {
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn has_step(&self, id: StepId) -> bool {
        self.step(id).is_some()
    }

    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.iter().find(|transition| transition.id == id)
    }

    /// Steps flagged as initial, in declaration order.
    pub fn initial_steps(&self) -> impl Iterator<Item = StepId> + '_ {
        self.steps
            .iter()
            .filter(|step| step.initial)
            .map(|step| step.id)
    }
}
