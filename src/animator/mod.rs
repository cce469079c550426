//! The animation engine: construction, queries and the synchronous tick.
//!
//! # Key Concepts
//!
//! - **Enabled**: every required step of a transition is active
//! - **Valid**: the transition's guard holds
//! - **Tick**: all enabled and valid transitions fire at once, computed from
//!   the start-of-tick state and committed in one assignment

mod machine;
mod tick;

pub use crate::core::{AnimationError, Result};
pub use machine::Animator;
pub use tick::TickPlan;
