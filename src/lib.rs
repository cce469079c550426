//! Grafcet Animator: a synchronous animation engine for GRAFCET charts
//!
//! A GRAFCET chart describes discrete control logic as steps connected by
//! guarded transitions. The animator keeps the set of active steps of a
//! model and advances it one tick at a time: every transition whose required
//! steps are all active and whose guard holds fires simultaneously.
//!
//! # Core Concepts
//!
//! - **Model**: Immutable steps, transitions, variables and guards
//! - **Runtime State**: Active steps plus boolean and integer variable stores
//! - **Guards**: Pure expressions over step activity and boolean variables
//! - **Tick**: Two-phase update (all deactivations, then all activations)
//!   computed from the start-of-tick state, so firing order never matters
//!
//! # Example
//!
//! ```rust
//! use grafcet_animator::animator::Animator;
//! use grafcet_animator::builder::{all_active, ModelBuilder, TransitionBuilder};
//! use grafcet_animator::model::StepId;
//!
//! let model = ModelBuilder::new()
//!     .initial_step(1)
//!     .step(2)
//!     .step(3)
//!     .step(4)
//!     .transition(TransitionBuilder::new(1).requires([1]).executes([2, 3, 4]))
//!     .transition(
//!         TransitionBuilder::new(2)
//!             .requires([2])
//!             .executes([1])
//!             .when(all_active([3, 4])),
//!     )
//!     .transition(TransitionBuilder::new(3).requires([3, 4]))
//!     .build()
//!     .unwrap();
//!
//! let mut animator = Animator::new(model).unwrap();
//!
//! animator.tick().unwrap();
//! assert!(!animator.is_active(StepId::new(1)));
//! assert!(animator.is_active(StepId::new(2)));
//!
//! animator.tick().unwrap();
//! let active: Vec<_> = animator.active_steps().collect();
//! assert_eq!(active, vec![StepId::new(1)]);
//! ```

pub mod animator;
pub mod builder;
pub mod core;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use animator::{AnimationError, Animator, TickPlan};
pub use builder::{AnimatorBuilder, AnimatorConfig, ModelBuilder, TransitionBuilder};
pub use core::{RuntimeState, TickHistory, TickReport};
pub use model::{Expression, Model, StepId, TransitionId};
