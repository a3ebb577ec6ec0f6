//! External form of a rendered frame
//!
//! A frame travels as `{"action": "<label>", "x": <px>, "y": <px>}`. An empty
//! action string means "keep the current sprite".

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{Action, VisualState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireVisualState {
    pub action: String,
    pub x: f64,
    pub y: f64,
}

impl From<&VisualState> for WireVisualState {
    fn from(frame: &VisualState) -> Self {
        Self {
            action: frame.action.map(|a| a.as_str()).unwrap_or_default().to_string(),
            x: frame.position.x,
            y: frame.position.y,
        }
    }
}

impl TryFrom<WireVisualState> for VisualState {
    type Error = crate::error::NekoError;

    fn try_from(wire: WireVisualState) -> Result<Self> {
        let action = if wire.action.is_empty() {
            None
        } else {
            Some(wire.action.parse::<Action>()?)
        };
        Ok(VisualState {
            position: DVec2::new(wire.x, wire.y),
            action,
        })
    }
}

impl VisualState {
    pub fn to_wire(&self) -> WireVisualState {
        WireVisualState::from(self)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_wire())?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let wire: WireVisualState = serde_json::from_str(json)?;
        VisualState::try_from(wire)
    }
}

/// Sprite locator for one frame: `<base>/<action>.gif`
pub fn sprite_url(base: &str, action: Action) -> String {
    format!("{}/{}.gif", base.trim_end_matches('/'), action)
}

/// Every sprite locator, for preloading
pub fn sprite_urls(base: &str) -> Vec<String> {
    Action::ALL.iter().map(|&a| sprite_url(base, a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NekoError;
    use crate::settings::Config;
    use crate::sim::{BehaviorState, TickInput, render};

    #[test]
    fn test_every_label_survives_the_wire() {
        for (i, action) in Action::ALL.into_iter().enumerate() {
            let frame = VisualState::new(DVec2::new(i as f64 * 1.5, -(i as f64) / 3.0), action);
            let back = VisualState::from_json(&frame.to_json().unwrap()).unwrap();
            assert_eq!(back, frame);
        }
    }

    #[test]
    fn test_run_positions_survive_the_wire() {
        let config = Config::default();
        let mut lossy = Vec::new();
        for i in 0..100 {
            for j in 0..100 {
                let pet = DVec2::new(i as f64 * 7.3 - 311.0, j as f64 * 3.1 + 0.7);
                let pointer = DVec2::new(j as f64 * 11.9 - 40.0, i as f64 * -5.7 + 13.0);
                let input = TickInput::new(pet, pointer, &config);
                let frame = render(BehaviorState::run(), &input, &config);
                let back = VisualState::from_json(&frame.to_json().unwrap()).unwrap();
                if back != frame {
                    lossy.push((frame.position, back.position));
                }
            }
        }
        assert!(lossy.is_empty(), "{} frames changed, first {:?}", lossy.len(), lossy.first());
    }

    #[test]
    fn test_empty_action_means_unchanged() {
        let frame = VisualState::unchanged(DVec2::new(4.0, 2.0));
        let wire = frame.to_wire();
        assert_eq!(wire.action, "");
        assert_eq!(VisualState::try_from(wire).unwrap(), frame);
    }

    #[test]
    fn test_wire_shape() {
        let frame = VisualState::new(DVec2::new(3.0, 4.0), Action::SERun1);
        let json: serde_json::Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(json["action"], "serun1");
        assert_eq!(json["x"], 3.0);
        assert_eq!(json["y"], 4.0);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = VisualState::from_json(r#"{"action":"moonwalk","x":0,"y":0}"#).unwrap_err();
        assert!(matches!(err, NekoError::UnknownAction(ref s) if s == "moonwalk"));
    }

    #[test]
    fn test_sprite_url() {
        assert_eq!(sprite_url("/socks", Action::Yawn), "/socks/yawn.gif");
        assert_eq!(sprite_url("/socks/", Action::NWRun2), "/socks/nwrun2.gif");
        assert_eq!(sprite_urls("s").len(), Action::ALL.len());
    }
}
