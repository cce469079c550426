//! Model checks using Validation.

use crate::core::parse_integer;
use crate::model::{Expression, Model, Transition, VariableKind};
use crate::validation::issues::ModelIssue;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ModelIssue>>;

/// Check a model, accumulating ALL issues.
/// Returns Validation::Success(()) if the model is well formed.
/// Returns Validation::Failure with every issue otherwise.
pub fn validate_model(model: &Model) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    let mut steps = HashSet::new();
    for step in &model.steps {
        if !steps.insert(step.id) {
            checks.push(Validation::fail(ModelIssue::DuplicateStep(step.id)));
        }
    }

    let mut transitions = HashSet::new();
    for transition in &model.transitions {
        if !transitions.insert(transition.id) {
            checks.push(Validation::fail(ModelIssue::DuplicateTransition(
                transition.id,
            )));
        }
    }

    let booleans: HashSet<&str> = model
        .variables
        .iter()
        .filter(|variable| variable.kind() == Some(VariableKind::Boolean))
        .map(|variable| variable.name.as_str())
        .collect();

    for transition in &model.transitions {
        checks.extend(check_transition(model, transition, &booleans));
    }

    for variable in &model.variables {
        let check = match (variable.kind(), variable.initial.as_deref()) {
            (None, _) => Validation::fail(ModelIssue::UnsupportedVariableType {
                name: variable.name.clone(),
                kind: variable.kind.clone(),
            }),
            (Some(VariableKind::Integer), Some(literal))
                if parse_integer(&variable.name, literal).is_err() =>
            {
                Validation::fail(ModelIssue::InvalidInitialValue {
                    name: variable.name.clone(),
                    literal: literal.to_string(),
                })
            }
            _ => Validation::success(()),
        };
        checks.push(check);
    }

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}

/// Every issue in the model, in discovery order. Empty when well formed.
pub fn model_issues(model: &Model) -> Vec<ModelIssue> {
    match validate_model(model) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(issues) => issues.iter().cloned().collect(),
    }
}

fn check_transition(
    model: &Model,
    transition: &Transition,
    booleans: &HashSet<&str>,
) -> Vec<Check> {
    let mut checks = Vec::new();

    for step in &transition.required {
        if !model.has_step(*step) {
            checks.push(Validation::fail(ModelIssue::UnknownRequiredStep {
                transition: transition.id,
                step: *step,
            }));
        }
    }

    for step in &transition.executed {
        if !model.has_step(*step) {
            checks.push(Validation::fail(ModelIssue::UnknownExecutedStep {
                transition: transition.id,
                step: *step,
            }));
        }
    }

    if let Some(condition) = &transition.condition {
        condition.walk(&mut |node| {
            let issue = match node {
                Expression::Step { step } if !model.has_step(*step) => {
                    ModelIssue::UnknownGuardStep {
                        transition: transition.id,
                        step: *step,
                    }
                }
                Expression::Variable { name } if !booleans.contains(name.as_str()) => {
                    ModelIssue::UnknownGuardVariable {
                        transition: transition.id,
                        name: name.clone(),
                    }
                }
                Expression::Unsupported { op } => ModelIssue::UnsupportedOperator {
                    transition: transition.id,
                    op: op.clone(),
                },
                _ => return,
            };
            checks.push(Validation::fail(issue));
        });
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ModelBuilder, TransitionBuilder};
    use crate::model::{StepId, TransitionId, Variable};

    #[test]
    fn well_formed_model_passes() {
        let model = ModelBuilder::new()
            .initial_step(1)
            .step(2)
            .boolean("go", None)
            .transition(
                TransitionBuilder::new(1)
                    .requires([1])
                    .executes([2])
                    .when(Expression::variable("go")),
            )
            .build()
            .unwrap();

        assert!(validate_model(&model).is_success());
        assert!(model_issues(&model).is_empty());
    }

    #[test]
    fn checks_accumulate_all_issues() {
        let model = ModelBuilder::new()
            .initial_step(1)
            .integer("count", None)
            .declare(Variable {
                name: "label".to_string(),
                kind: "string".to_string(),
                initial: None,
            })
            .transition(
                TransitionBuilder::new(1)
                    .requires([1, 5])
                    .executes([6])
                    .when(Expression::and(
                        Expression::variable("count"),
                        Expression::unsupported("bnot"),
                    )),
            )
            .build()
            .unwrap();

        let result = validate_model(&model);

        match result {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 5);

                let has_required = issues
                    .iter()
                    .any(|i| matches!(i, ModelIssue::UnknownRequiredStep { .. }));
                let has_executed = issues
                    .iter()
                    .any(|i| matches!(i, ModelIssue::UnknownExecutedStep { .. }));
                let has_variable = issues
                    .iter()
                    .any(|i| matches!(i, ModelIssue::UnknownGuardVariable { .. }));
                let has_operator = issues
                    .iter()
                    .any(|i| matches!(i, ModelIssue::UnsupportedOperator { .. }));
                let has_type = issues
                    .iter()
                    .any(|i| matches!(i, ModelIssue::UnsupportedVariableType { .. }));

                assert!(has_required);
                assert!(has_executed);
                assert!(has_variable);
                assert!(has_operator);
                assert!(has_type);
            }
            Validation::Success(_) => panic!("Expected issues, got success"),
        }
    }

    #[test]
    fn duplicate_identifiers_are_reported() {
        let mut model = ModelBuilder::new()
            .initial_step(1)
            .transition(TransitionBuilder::new(1))
            .build()
            .unwrap();
        model.steps.push(model.steps[0].clone());
        model.transitions.push(model.transitions[0].clone());

        let issues = model_issues(&model);

        assert_eq!(
            issues,
            vec![
                ModelIssue::DuplicateStep(StepId::new(1)),
                ModelIssue::DuplicateTransition(TransitionId::new(1)),
            ]
        );
    }

    #[test]
    fn guard_on_unknown_step_is_reported() {
        let model = ModelBuilder::new()
            .initial_step(1)
            .transition(TransitionBuilder::new(2).when(Expression::step(StepId::new(9))))
            .build()
            .unwrap();

        assert_eq!(
            model_issues(&model),
            vec![ModelIssue::UnknownGuardStep {
                transition: TransitionId::new(2),
                step: StepId::new(9),
            }]
        );
    }

    #[test]
    fn invalid_integer_literal_is_reported() {
        let model = ModelBuilder::new()
            .variable("x", VariableKind::Integer, Some("1.5"))
            .variable("flag", VariableKind::Boolean, Some("maybe"))
            .build()
            .unwrap();

        assert_eq!(
            model_issues(&model),
            vec![ModelIssue::InvalidInitialValue {
                name: "x".to_string(),
                literal: "1.5".to_string(),
            }]
        );
    }
}
