//! Guard condition expressions.
//!
//! Guards form a small closed language: boolean literals, step activity,
//! boolean variable values, and binary conjunction/disjunction. There is no
//! negation and no reference to integer variables.

use super::ids::StepId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A guard condition tree.
///
/// On the wire an expression is a map tagged by `"op"`, using the operator
/// names `true`, `false`, `step`, `variable`, `band` and `bor`. Any other
/// operator is kept as [`Expression::Unsupported`] so evaluation can report
/// it instead of the model failing to load. A known operator with missing or
/// mistyped operands is a load error.
///
/// # Example
///
/// ```rust
/// use grafcet_animator::model::{Expression, StepId};
///
/// let guard = Expression::and(
///     Expression::step(StepId::new(3)),
///     Expression::step(StepId::new(4)),
/// );
///
/// let json = serde_json::to_string(&guard).unwrap();
/// let parsed: Expression = serde_json::from_str(&json).unwrap();
/// assert_eq!(guard, parsed);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Expression {
    True,
    False,
    /// True while the step is active
    Step { step: StepId },
    /// Value of a declared boolean variable
    Variable { name: String },
    #[serde(rename = "band")]
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    #[serde(rename = "bor")]
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Operator outside the guard language, carried through from a loader
    #[serde(untagged)]
    Unsupported { op: String },
}

impl Expression {
    pub fn step(step: StepId) -> Self {
        Self::Step { step }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unsupported(op: impl Into<String>) -> Self {
        Self::Unsupported { op: op.into() }
    }

    /// Operator names of the guard language.
    pub const OPERATORS: [&'static str; 6] = ["true", "false", "step", "variable", "band", "bor"];

    /// Visit every node of the tree, parents before children, left before right.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expression)) {
        visit(self);
        if let Self::And { left, right } | Self::Or { left, right } = self {
            left.walk(visit);
            right.walk(visit);
        }
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(tag = "op", rename_all = "lowercase")]
        enum ExpressionWire {
            True,
            False,
            Step {
                step: StepId,
            },
            Variable {
                name: String,
            },
            #[serde(rename = "band")]
            And {
                left: Box<Expression>,
                right: Box<Expression>,
            },
            #[serde(rename = "bor")]
            Or {
                left: Box<Expression>,
                right: Box<Expression>,
            },
        }

        let value = serde_json::Value::deserialize(deserializer)?;
        let op = match value.get("op") {
            Some(serde_json::Value::String(op)) => op.as_str(),
            Some(_) => return Err(D::Error::custom("guard operator must be a string")),
            None => return Err(D::Error::missing_field("op")),
        };

        if !Self::OPERATORS.contains(&op) {
            return Ok(Self::unsupported(op));
        }

        let expression = match ExpressionWire::deserialize(value).map_err(D::Error::custom)? {
            ExpressionWire::True => Self::True,
            ExpressionWire::False => Self::False,
            ExpressionWire::Step { step } => Self::Step { step },
            ExpressionWire::Variable { name } => Self::Variable { name },
            ExpressionWire::And { left, right } => Self::And { left, right },
            ExpressionWire::Or { left, right } => Self::Or { left, right },
        };
        Ok(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_use_wire_names() {
        let json = serde_json::to_value(Expression::or(
            Expression::True,
            Expression::variable("toto"),
        ))
        .unwrap();

        assert_eq!(json["op"], "bor");
        assert_eq!(json["left"]["op"], "true");
        assert_eq!(json["right"]["op"], "variable");
        assert_eq!(json["right"]["name"], "toto");
    }

    #[test]
    fn step_operand_is_numeric() {
        let parsed: Expression = serde_json::from_str(r#"{"op":"step","step":3}"#).unwrap();
        assert_eq!(parsed, Expression::step(StepId::new(3)));
    }

    #[test]
    fn unknown_operator_is_preserved() {
        let parsed: Expression = serde_json::from_str(r#"{"op":"bnot"}"#).unwrap();
        assert_eq!(parsed, Expression::unsupported("bnot"));
    }

    #[test]
    fn unknown_operator_inside_known_one_is_preserved() {
        let parsed: Expression = serde_json::from_str(
            r#"{"op":"bor","left":{"op":"false"},"right":{"op":"bnot","arg":{"op":"true"}}}"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            Expression::or(Expression::False, Expression::unsupported("bnot"))
        );
    }

    #[test]
    fn malformed_step_operand_fails_to_load() {
        let result = serde_json::from_str::<Expression>(r#"{"op":"step","step":"x"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Expression>(r#"{"op":"step","step":"3"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_operand_fails_to_load() {
        let result = serde_json::from_str::<Expression>(r#"{"op":"band","left":{"op":"true"}}"#);

        let error = result.unwrap_err().to_string();
        assert!(error.contains("right"), "unexpected error: {error}");
    }

    #[test]
    fn missing_operator_fails_to_load() {
        assert!(serde_json::from_str::<Expression>(r#"{"step":3}"#).is_err());
        assert!(serde_json::from_str::<Expression>(r#"{"op":7}"#).is_err());
    }

    #[test]
    fn walk_visits_all_nodes_in_order() {
        let expr = Expression::and(
            Expression::step(StepId::new(1)),
            Expression::or(Expression::variable("a"), Expression::False),
        );

        let mut seen = Vec::new();
        expr.walk(&mut |node| seen.push(node.clone()));

        assert_eq!(seen.len(), 5);
        assert_eq!(seen[1], Expression::step(StepId::new(1)));
        assert_eq!(seen[3], Expression::variable("a"));
        assert_eq!(seen[4], Expression::False);
    }
}
