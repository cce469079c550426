//! Runtime state and pure evaluation.
//!
//! This module contains the pure parts of the animator:
//! - The runtime state (active steps and variable stores)
//! - Guard evaluation and transition enablement
//! - Immutable tick history
//!
//! Nothing here mutates a state it was handed; the
//! [`Animator`](crate::animator::Animator) owns the only mutable state.

mod error;
mod guard;
mod history;
mod state;

pub use error::{AnimationError, Result};
pub use guard::{evaluate, is_enabled, is_valid};
pub use history::{TickHistory, TickRecord, TickReport};
pub use state::RuntimeState;

pub(crate) use state::parse_integer;
