//! Tick driver
//!
//! Owns the only mutable cells around the pure state machine: the cat's
//! position, the last pointer sample and the current state. Platform glue
//! feeds pointer samples in and calls [`Neko::tick`] on a fixed cadence.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::{Config, StillTransition};
use crate::sim::{BehaviorState, TickInput, VisualState, render, step};

/// How the driver picks the idle animation that follows Still
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePolicy {
    /// Always the same animation
    Fixed(StillTransition),
    /// Yawn, Itch, Scratch, Yawn, ... advancing each time an idle animation starts
    Cycle,
    /// Seeded random pick each time an idle animation starts
    Random,
}

/// A cat on a surface
pub struct Neko {
    config: Config,
    state: BehaviorState,
    pet: DVec2,
    pointer: DVec2,
    policy: IdlePolicy,
    still_transition: StillTransition,
    rng: Pcg32,
    ticks: u64,
}

impl Neko {
    /// Cat at the origin, idle animation fixed to the configured default
    pub fn new(config: Config) -> Self {
        let policy = IdlePolicy::Fixed(config.still_transition);
        Self::with_policy(config, policy, 0)
    }

    pub fn with_policy(config: Config, policy: IdlePolicy, seed: u64) -> Self {
        let still_transition = match policy {
            IdlePolicy::Fixed(choice) => choice,
            IdlePolicy::Cycle | IdlePolicy::Random => config.still_transition,
        };
        Self {
            config,
            state: BehaviorState::Initial,
            pet: DVec2::ZERO,
            pointer: DVec2::ZERO,
            policy,
            still_transition,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        }
    }

    /// Place the cat somewhere other than the origin
    pub fn at(mut self, position: DVec2) -> Self {
        self.pet = position;
        self
    }

    /// Record a pointer sample; the last one before a tick wins
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    pub fn state(&self) -> BehaviorState {
        self.state
    }

    pub fn position(&self) -> DVec2 {
        self.pet
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Idle animation that will follow Still next
    pub fn still_transition(&self) -> StillTransition {
        self.still_transition
    }

    fn input(&self) -> TickInput {
        TickInput::new(self.pet, self.pointer, &self.config)
            .with_still_transition(self.still_transition)
    }

    /// Frame for the current state without advancing (used before the first tick)
    pub fn current_frame(&self) -> VisualState {
        render(self.state, &self.input(), &self.config)
    }

    /// Advance one tick and return the frame to display
    pub fn tick(&mut self) -> VisualState {
        let input = self.input();
        let (next, frame) = step(self.state, &input, &self.config);

        if !next.same_variant(&self.state) {
            log::debug!(
                "tick {}: {} -> {} at ({:.1}, {:.1})",
                self.ticks,
                self.state.name(),
                next.name(),
                frame.position.x,
                frame.position.y
            );
            if next.is_idle_animation() && matches!(self.state, BehaviorState::Still { .. }) {
                self.pick_next_idle();
            }
        }

        self.state = next;
        self.pet = frame.position;
        self.ticks += 1;
        frame
    }

    fn pick_next_idle(&mut self) {
        let next = match self.policy {
            IdlePolicy::Fixed(choice) => choice,
            IdlePolicy::Cycle => self.still_transition.next(),
            IdlePolicy::Random => StillTransition::from_index(self.rng.random_range(0..3)),
        };
        if next != self.still_transition {
            log::trace!(
                "next idle animation: {} -> {}",
                self.still_transition.as_str(),
                next.as_str()
            );
        }
        self.still_transition = next;
    }
}
