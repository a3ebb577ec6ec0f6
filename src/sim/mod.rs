//! Behavior simulation module
//!
//! All of the cat's decision making lives here. This module must be pure and deterministic:
//! - One call per fixed tick, no wall clock
//! - No randomness (idle choices arrive through `TickInput`)
//! - No rendering or platform dependencies

pub mod action;
pub mod geometry;
pub mod state;
pub mod tick;

pub use action::Action;
pub use geometry::{
    Direction, PetPosition, PointerPosition, classify_octant, classify_quadrant, distance,
    is_within, octant_between, quadrant_between, step_toward,
};
pub use state::{BehaviorState, VisualState};
pub use tick::{TickInput, advance, render, step};
