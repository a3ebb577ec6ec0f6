//! Behavior tuning
//!
//! Supplied once at startup. The state machine only ever reads it.
//! The web build reads it from LocalStorage.

use serde::{Deserialize, Serialize};

use crate::error::{NekoError, Result};

/// Idle animation that follows Still
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StillTransition {
    #[default]
    Yawn,
    Itch,
    Scratch,
}

impl StillTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            StillTransition::Yawn => "Yawn",
            StillTransition::Itch => "Itch",
            StillTransition::Scratch => "Scratch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yawn" => Some(StillTransition::Yawn),
            "itch" => Some(StillTransition::Itch),
            "scratch" => Some(StillTransition::Scratch),
            _ => None,
        }
    }

    /// Legacy numeric encoding: 1 is Itch, 2 is Scratch, anything else Yawn
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => StillTransition::Itch,
            2 => StillTransition::Scratch,
            _ => StillTransition::Yawn,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            StillTransition::Yawn => 0,
            StillTransition::Itch => 1,
            StillTransition::Scratch => 2,
        }
    }

    /// Next choice in rotation: Yawn, Itch, Scratch, Yawn, ...
    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % 3)
    }
}

/// Tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Current tuning: quick to get bored, scratches through interruptions
    #[default]
    Standard,
    /// Older tuning: tighter radius, long stare before idling
    Classic,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Standard => "Standard",
            Preset::Classic => "Classic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "default" => Some(Preset::Standard),
            "classic" => Some(Preset::Classic),
            _ => None,
        }
    }
}

/// Behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Distance covered per Run tick (pixels)
    pub step: f64,
    /// Pointer counts as nearby within this distance (pixels, inclusive)
    pub proximity_radius: f64,
    /// Default idle animation after Still; drivers may override per tick
    pub still_transition: StillTransition,

    // === Ticks per state ===
    pub still_ticks: u32,
    pub yawn_ticks: u32,
    pub post_yawn_ticks: u32,
    pub sleep_ticks: u32,
    pub alert_ticks: u32,
    pub run_ticks: u32,

    pub itch_ticks: u32,
    /// Itch loops before resting
    pub itch_count: u32,
    pub post_itch_ticks: u32,

    pub scratch_ticks: u32,
    /// Scratch loops before resting
    pub scratch_count: u32,
    pub post_scratch_ticks: u32,
    /// Keep scratching even if the pointer wanders off
    pub scratch_disables_alert: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 15.0,
            proximity_radius: 20.0,
            still_transition: StillTransition::Itch,

            still_ticks: 4,
            yawn_ticks: 4,
            post_yawn_ticks: 4,
            sleep_ticks: 2,
            alert_ticks: 2,
            run_ticks: 0,

            itch_ticks: 1,
            itch_count: 6,
            post_itch_ticks: 4,

            scratch_ticks: 2,
            scratch_count: 4,
            post_scratch_ticks: 4,
            scratch_disables_alert: true,
        }
    }
}

impl Config {
    /// Create a config from a preset
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a preset over the current values
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::Standard => {
                let defaults = Self::default();
                self.proximity_radius = defaults.proximity_radius;
                self.still_ticks = defaults.still_ticks;
                self.still_transition = defaults.still_transition;
                self.scratch_disables_alert = defaults.scratch_disables_alert;
            }
            Preset::Classic => {
                self.proximity_radius = 15.0;
                self.still_ticks = 15;
                self.still_transition = StillTransition::Yawn;
                self.scratch_disables_alert = false;
            }
        }
    }

    /// Reject geometry that cannot describe a distance. Zero is fine.
    pub fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(NekoError::InvalidConfig(format!(
                "step must be a non-negative number, got {}",
                self.step
            )));
        }
        if !self.proximity_radius.is_finite() || self.proximity_radius < 0.0 {
            return Err(NekoError::InvalidConfig(format!(
                "proximity_radius must be a non-negative number, got {}",
                self.proximity_radius
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "webneko_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }
}
