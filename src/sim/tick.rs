//! Fixed-tick behavior transitions
//!
//! `advance` decides the next state, `render` turns a state into a frame.
//! Both are pure: same input, same output, nothing mutated.

use super::action::Action;
use super::geometry::{
    PetPosition, PointerPosition, is_within, octant_between, quadrant_between, step_toward,
};
use super::state::{BehaviorState, VisualState};
use crate::settings::{Config, StillTransition};

/// Snapshot handed to the machine for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Current cat position
    pub pet: PetPosition,
    /// Pointer position sampled for this tick
    pub pointer: PointerPosition,
    /// Idle animation that follows Still if Still ends on this tick
    pub still_transition: StillTransition,
}

impl TickInput {
    /// Input using the configured default idle animation
    pub fn new(pet: PetPosition, pointer: PointerPosition, config: &Config) -> Self {
        Self {
            pet,
            pointer,
            still_transition: config.still_transition,
        }
    }

    pub fn with_still_transition(mut self, choice: StillTransition) -> Self {
        self.still_transition = choice;
        self
    }

    /// Pointer within the proximity radius (inclusive)
    #[inline]
    pub fn pointer_nearby(&self, config: &Config) -> bool {
        is_within(self.pet, self.pointer, config.proximity_radius)
    }
}

/// Count one more tick; `None` once the threshold is reached
fn count_up(tick: u32, threshold: u32) -> Option<u32> {
    let tick = tick.saturating_add(1);
    (tick < threshold).then_some(tick)
}

/// One tick of a two-frame loop: returns (tick, even, wrapped)
fn oscillate(tick: u32, even: bool, threshold: u32) -> (u32, bool, bool) {
    let tick = tick.saturating_add(1);
    if tick >= threshold {
        (0, !even, true)
    } else {
        (tick, even, false)
    }
}

fn idle_after_still(choice: StillTransition) -> BehaviorState {
    match choice {
        StillTransition::Yawn => BehaviorState::yawn(),
        StillTransition::Itch => BehaviorState::itch(),
        StillTransition::Scratch => BehaviorState::scratch(),
    }
}

/// Decide the state for the next tick
pub fn advance(state: BehaviorState, input: &TickInput, config: &Config) -> BehaviorState {
    let nearby = input.pointer_nearby(config);

    match state {
        BehaviorState::Initial => BehaviorState::still(),

        BehaviorState::Still { tick } => {
            if !nearby {
                return BehaviorState::alert();
            }
            match count_up(tick, config.still_ticks) {
                Some(tick) => BehaviorState::Still { tick },
                None => idle_after_still(input.still_transition),
            }
        }

        BehaviorState::Yawn { tick } => {
            if !nearby {
                return BehaviorState::alert();
            }
            match count_up(tick, config.yawn_ticks) {
                Some(tick) => BehaviorState::Yawn { tick },
                None => BehaviorState::post_yawn(),
            }
        }

        BehaviorState::PostYawn { tick } => {
            if !nearby {
                return BehaviorState::alert();
            }
            match count_up(tick, config.post_yawn_ticks) {
                Some(tick) => BehaviorState::PostYawn { tick },
                None => BehaviorState::sleep(),
            }
        }

        // Sleeps until disturbed
        BehaviorState::Sleep { tick, even } => {
            if !nearby {
                return BehaviorState::alert();
            }
            let (tick, even, _) = oscillate(tick, even, config.sleep_ticks);
            BehaviorState::Sleep { tick, even }
        }

        BehaviorState::Itch { tick, even, count } => {
            if !nearby {
                return BehaviorState::alert();
            }
            let (tick, even, wrapped) = oscillate(tick, even, config.itch_ticks);
            let count = if wrapped { count.saturating_add(1) } else { count };
            if count >= config.itch_count {
                BehaviorState::post_itch()
            } else {
                BehaviorState::Itch { tick, even, count }
            }
        }

        BehaviorState::PostItch { tick } => {
            if !nearby {
                return BehaviorState::alert();
            }
            match count_up(tick, config.post_itch_ticks) {
                Some(tick) => BehaviorState::PostItch { tick },
                None => BehaviorState::yawn(),
            }
        }

        BehaviorState::Scratch { tick, even, count } => {
            if !config.scratch_disables_alert && !nearby {
                return BehaviorState::alert();
            }
            let (tick, even, wrapped) = oscillate(tick, even, config.scratch_ticks);
            let count = if wrapped { count.saturating_add(1) } else { count };
            if count >= config.scratch_count {
                BehaviorState::post_scratch()
            } else {
                BehaviorState::Scratch { tick, even, count }
            }
        }

        BehaviorState::PostScratch { tick } => {
            if !nearby {
                return BehaviorState::alert();
            }
            match count_up(tick, config.post_scratch_ticks) {
                Some(tick) => BehaviorState::PostScratch { tick },
                None => BehaviorState::yawn(),
            }
        }

        BehaviorState::Alert { tick } => {
            if nearby {
                return BehaviorState::still();
            }
            match count_up(tick, config.alert_ticks) {
                Some(tick) => BehaviorState::Alert { tick },
                None => BehaviorState::run(),
            }
        }

        // Chases until it catches up
        BehaviorState::Run { tick, even } => {
            if nearby {
                return BehaviorState::still();
            }
            let (tick, even, _) = oscillate(tick, even, config.run_ticks);
            BehaviorState::Run { tick, even }
        }
    }
}

/// Render a state into a frame. Only Run moves the cat.
pub fn render(state: BehaviorState, input: &TickInput, config: &Config) -> VisualState {
    let pet = input.pet;

    match state {
        BehaviorState::Initial => VisualState::unchanged(pet),

        BehaviorState::Still { .. }
        | BehaviorState::PostYawn { .. }
        | BehaviorState::PostItch { .. }
        | BehaviorState::PostScratch { .. } => VisualState::new(pet, Action::Still),

        BehaviorState::Yawn { .. } => VisualState::new(pet, Action::Yawn),

        BehaviorState::Sleep { even, .. } => VisualState::new(pet, Action::sleep(even)),

        BehaviorState::Itch { even, .. } => VisualState::new(pet, Action::itch(even)),

        BehaviorState::Scratch { even, .. } => VisualState {
            position: pet,
            action: Action::scratch(quadrant_between(pet, input.pointer), even),
        },

        BehaviorState::Alert { .. } => VisualState::new(pet, Action::Alert),

        BehaviorState::Run { even, .. } => {
            // Direction is taken before the step
            let dir = octant_between(pet, input.pointer);
            let position = step_toward(pet, input.pointer, config.step);
            VisualState::new(position, Action::run(dir, even))
        }
    }
}

/// Advance then render with the same input, as a driver does once per tick
pub fn step(
    state: BehaviorState,
    input: &TickInput,
    config: &Config,
) -> (BehaviorState, VisualState) {
    let next = advance(state, input, config);
    let frame = render(next, input, config);
    (next, frame)
}
