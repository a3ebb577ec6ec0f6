//! Sprite action labels
//!
//! The closed set of frames the cat can show. Each label doubles as the sprite
//! file stem, see [`crate::wire::sprite_url`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::geometry::Direction;
use crate::error::NekoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Action {
    Alert,
    Still,
    Yawn,
    Itch1,
    Itch2,
    Sleep1,
    Sleep2,
    NRun1,
    NRun2,
    NERun1,
    NERun2,
    ERun1,
    ERun2,
    SERun1,
    SERun2,
    SRun1,
    SRun2,
    SWRun1,
    SWRun2,
    WRun1,
    WRun2,
    NWRun1,
    NWRun2,
    NScratch1,
    NScratch2,
    EScratch1,
    EScratch2,
    SScratch1,
    SScratch2,
    WScratch1,
    WScratch2,
}

impl Action {
    /// Every implemented frame, in sprite sheet order
    pub const ALL: [Action; 31] = [
        Action::Alert,
        Action::Still,
        Action::Yawn,
        // itch
        Action::Itch1,
        Action::Itch2,
        // sleep
        Action::Sleep1,
        Action::Sleep2,
        // run
        Action::NRun1,
        Action::NRun2,
        Action::NERun1,
        Action::NERun2,
        Action::ERun1,
        Action::ERun2,
        Action::SERun1,
        Action::SERun2,
        Action::SRun1,
        Action::SRun2,
        Action::SWRun1,
        Action::SWRun2,
        Action::WRun1,
        Action::WRun2,
        Action::NWRun1,
        Action::NWRun2,
        // scratch
        Action::NScratch1,
        Action::NScratch2,
        Action::EScratch1,
        Action::EScratch2,
        Action::SScratch1,
        Action::SScratch2,
        Action::WScratch1,
        Action::WScratch2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Alert => "alert",
            Action::Still => "still",
            Action::Yawn => "yawn",
            Action::Itch1 => "itch1",
            Action::Itch2 => "itch2",
            Action::Sleep1 => "sleep1",
            Action::Sleep2 => "sleep2",
            Action::NRun1 => "nrun1",
            Action::NRun2 => "nrun2",
            Action::NERun1 => "nerun1",
            Action::NERun2 => "nerun2",
            Action::ERun1 => "erun1",
            Action::ERun2 => "erun2",
            Action::SERun1 => "serun1",
            Action::SERun2 => "serun2",
            Action::SRun1 => "srun1",
            Action::SRun2 => "srun2",
            Action::SWRun1 => "swrun1",
            Action::SWRun2 => "swrun2",
            Action::WRun1 => "wrun1",
            Action::WRun2 => "wrun2",
            Action::NWRun1 => "nwrun1",
            Action::NWRun2 => "nwrun2",
            Action::NScratch1 => "nscratch1",
            Action::NScratch2 => "nscratch2",
            Action::EScratch1 => "escratch1",
            Action::EScratch2 => "escratch2",
            Action::SScratch1 => "sscratch1",
            Action::SScratch2 => "sscratch2",
            Action::WScratch1 => "wscratch1",
            Action::WScratch2 => "wscratch2",
        }
    }

    /// Two-frame pick: `even` selects the second frame
    fn frame(even: bool, first: Action, second: Action) -> Action {
        if even { second } else { first }
    }

    pub fn itch(even: bool) -> Action {
        Self::frame(even, Action::Itch1, Action::Itch2)
    }

    pub fn sleep(even: bool) -> Action {
        Self::frame(even, Action::Sleep1, Action::Sleep2)
    }

    /// Running frame for any of the 8 directions
    pub fn run(dir: Direction, even: bool) -> Action {
        match dir {
            Direction::N => Self::frame(even, Action::NRun1, Action::NRun2),
            Direction::NE => Self::frame(even, Action::NERun1, Action::NERun2),
            Direction::E => Self::frame(even, Action::ERun1, Action::ERun2),
            Direction::SE => Self::frame(even, Action::SERun1, Action::SERun2),
            Direction::S => Self::frame(even, Action::SRun1, Action::SRun2),
            Direction::SW => Self::frame(even, Action::SWRun1, Action::SWRun2),
            Direction::W => Self::frame(even, Action::WRun1, Action::WRun2),
            Direction::NW => Self::frame(even, Action::NWRun1, Action::NWRun2),
        }
    }

    /// Scratching frame. Only the 4 major directions have sprites.
    pub fn scratch(dir: Direction, even: bool) -> Option<Action> {
        match dir {
            Direction::N => Some(Self::frame(even, Action::NScratch1, Action::NScratch2)),
            Direction::E => Some(Self::frame(even, Action::EScratch1, Action::EScratch2)),
            Direction::S => Some(Self::frame(even, Action::SScratch1, Action::SScratch2)),
            Direction::W => Some(Self::frame(even, Action::WScratch1, Action::WScratch2)),
            Direction::NE | Direction::SE | Direction::SW | Direction::NW => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = NekoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| NekoError::UnknownAction(s.to_string()))
    }
}

impl TryFrom<String> for Action {
    type Error = NekoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Action> for &'static str {
    fn from(a: Action) -> Self {
        a.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<&str> = Action::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(labels.len(), Action::ALL.len());
    }

    #[test]
    fn test_parse_every_label() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().ok(), Some(action));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "nescratch1".parse::<Action>(),
            Err(NekoError::UnknownAction(s)) if s == "nescratch1"
        ));
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn test_run_frames_cover_all_directions() {
        let frames: HashSet<Action> = Direction::ALL
            .iter()
            .flat_map(|&d| [Action::run(d, false), Action::run(d, true)])
            .collect();
        assert_eq!(frames.len(), 16);
        assert_eq!(Action::run(Direction::W, false), Action::WRun1);
        assert_eq!(Action::run(Direction::W, true), Action::WRun2);
    }

    #[test]
    fn test_scratch_diagonals_have_no_sprite() {
        assert_eq!(Action::scratch(Direction::N, true), Some(Action::NScratch2));
        assert_eq!(Action::scratch(Direction::E, false), Some(Action::EScratch1));
        for dir in [Direction::NE, Direction::SE, Direction::SW, Direction::NW] {
            assert_eq!(Action::scratch(dir, false), None);
            assert_eq!(Action::scratch(dir, true), None);
        }
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Action::NERun2).unwrap();
        assert_eq!(json, "\"nerun2\"");
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Action::NERun2);
        assert!(serde_json::from_str::<Action>("\"dance\"").is_err());
    }
}
