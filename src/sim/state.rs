//! Behavior states and rendered frames
//!
//! A state owns only its own counters. Entering a state always starts from
//! zeroed counters; nothing is carried across a transition.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::geometry::PetPosition;

/// Current behavior of the cat
///
/// `tick` counts ticks spent since the last threshold, `even` picks the
/// second frame of a two-frame loop and `count` counts completed loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Before the first tick
    #[default]
    Initial,
    Still { tick: u32 },
    Yawn { tick: u32 },
    PostYawn { tick: u32 },
    Itch { tick: u32, even: bool, count: u32 },
    PostItch { tick: u32 },
    Scratch { tick: u32, even: bool, count: u32 },
    PostScratch { tick: u32 },
    Sleep { tick: u32, even: bool },
    Alert { tick: u32 },
    Run { tick: u32, even: bool },
}

impl BehaviorState {
    pub fn still() -> Self {
        BehaviorState::Still { tick: 0 }
    }

    pub fn yawn() -> Self {
        BehaviorState::Yawn { tick: 0 }
    }

    pub fn post_yawn() -> Self {
        BehaviorState::PostYawn { tick: 0 }
    }

    pub fn itch() -> Self {
        BehaviorState::Itch {
            tick: 0,
            even: false,
            count: 0,
        }
    }

    pub fn post_itch() -> Self {
        BehaviorState::PostItch { tick: 0 }
    }

    pub fn scratch() -> Self {
        BehaviorState::Scratch {
            tick: 0,
            even: false,
            count: 0,
        }
    }

    pub fn post_scratch() -> Self {
        BehaviorState::PostScratch { tick: 0 }
    }

    pub fn sleep() -> Self {
        BehaviorState::Sleep {
            tick: 0,
            even: false,
        }
    }

    pub fn alert() -> Self {
        BehaviorState::Alert { tick: 0 }
    }

    pub fn run() -> Self {
        BehaviorState::Run {
            tick: 0,
            even: false,
        }
    }

    /// Variant name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            BehaviorState::Initial => "Initial",
            BehaviorState::Still { .. } => "Still",
            BehaviorState::Yawn { .. } => "Yawn",
            BehaviorState::PostYawn { .. } => "PostYawn",
            BehaviorState::Itch { .. } => "Itch",
            BehaviorState::PostItch { .. } => "PostItch",
            BehaviorState::Scratch { .. } => "Scratch",
            BehaviorState::PostScratch { .. } => "PostScratch",
            BehaviorState::Sleep { .. } => "Sleep",
            BehaviorState::Alert { .. } => "Alert",
            BehaviorState::Run { .. } => "Run",
        }
    }

    /// True when both states are the same variant, counters aside
    pub fn same_variant(&self, other: &BehaviorState) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Idle animations that can follow Still
    pub fn is_idle_animation(&self) -> bool {
        matches!(
            self,
            BehaviorState::Yawn { .. } | BehaviorState::Itch { .. } | BehaviorState::Scratch { .. }
        )
    }
}

/// One rendered frame: where to draw the cat and which sprite to show.
///
/// `action` is `None` when no sprite exists for the situation (a diagonal
/// scratch, or the Initial state); the driver keeps the previous sprite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub position: PetPosition,
    pub action: Option<Action>,
}

impl VisualState {
    pub fn new(position: DVec2, action: Action) -> Self {
        Self {
            position,
            action: Some(action),
        }
    }

    /// Frame that keeps the current sprite
    pub fn unchanged(position: DVec2) -> Self {
        Self {
            position,
            action: None,
        }
    }
}
