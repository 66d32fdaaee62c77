//! Enter/exit transitions driven by a boolean "open" intent.
//!
//! [`Transition`] is the lifecycle primitive: it walks an element through
//! `entering -> entered -> exiting -> exited` on a fixed timeout.
//! [`TransitionController`] sits on top of it, derives the primitive's
//! `active` input from the caller's intent, and refuses to re-open while an
//! exit is still in flight.

pub mod controller;
pub mod error;
pub mod phase;
pub mod styles;
pub mod transition;

pub use controller::{LifecycleState, TransitionController, TransitionControllerBuilder};
pub use error::{Error, Result};
pub use phase::Phase;
pub use styles::{AnimationStyles, Easing, PhaseStyle};
pub use transition::{Transition, TransitionConfig, TransitionEvent, DEFAULT_TIMEOUT};
