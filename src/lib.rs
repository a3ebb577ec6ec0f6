//! WebNeko - a virtual cat that chases the pointer
//!
//! Core modules:
//! - `sim`: Pure behavior state machine (geometry, action labels, transitions)
//! - `settings`: Tunable configuration and presets
//! - `wire`: External wire form of a rendered frame, sprite URLs
//! - `driver`: Platform-independent tick driver and idle policy
//! - `platform`: Browser glue (image element, pointer listeners, timer)

pub mod driver;
pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod wire;

pub use driver::{IdlePolicy, Neko};
pub use error::NekoError;
pub use settings::{Config, Preset, StillTransition};
pub use sim::{Action, BehaviorState, Direction, TickInput, VisualState, advance, render};

/// Driver constants
pub mod consts {
    /// Time between two ticks of the state machine (milliseconds)
    pub const TICK_MS: u32 = 300;

    /// Rendered sprite width in CSS pixels
    pub const SPRITE_SIZE_PX: u32 = 32;

    /// Where the sprite sheet lives; each frame is `<base>/<action>.gif`
    pub const DEFAULT_SPRITE_BASE_URL: &str = "https://b1nary.tk/ass/webneko.net/socks";
}
