//! Accumulating structural checks for models.
//!
//! The animator trusts its model and never calls these checks itself. They
//! are for loaders and tooling that want every problem reported in a single
//! pass, so they use Stillwater's `Validation` instead of failing at the
//! first issue.
//!
//! # Example
//!
//! ```rust
//! use grafcet_animator::builder::{ModelBuilder, TransitionBuilder};
//! use grafcet_animator::validation::{model_issues, validate_model};
//!
//! let model = ModelBuilder::new()
//!     .initial_step(1)
//!     .transition(TransitionBuilder::new(1).requires([1]).executes([2, 3]))
//!     .build()
//!     .unwrap();
//!
//! assert!(validate_model(&model).is_failure());
//! assert_eq!(model_issues(&model).len(), 2);
//! ```

pub mod issues;
pub mod rules;

pub use issues::ModelIssue;
pub use rules::{model_issues, validate_model};
