//! # Orientation
//!
//! The four orientations a user can pick, and the fixed table mapping each
//! one to the rotation keyword understood by `xrandr`/`gnome-randr` and the
//! libinput calibration matrix that keeps touches lined up with the picture.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Landscape; don't rotate.
    Normal,
    /// Portrait, right side up. The picture is turned counter clockwise.
    Left,
    /// Portrait, left side up. The picture is turned clockwise.
    Right,
    /// Upside down.
    Inverted,
}

impl Orientation {
    /// Menu order. The position plus one is the user-facing choice number.
    pub const ALL: [Orientation; 4] = [
        Orientation::Normal,
        Orientation::Left,
        Orientation::Right,
        Orientation::Inverted,
    ];

    /// Map a menu choice to an orientation. Anything outside 1-4 has no
    /// mapping and is rejected rather than defaulted.
    pub fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(Self::Normal),
            2 => Ok(Self::Left),
            3 => Ok(Self::Right),
            4 => Ok(Self::Inverted),
            other => Err(Error::InvalidChoice(other.to_string())),
        }
    }

    /// Parse a raw menu answer such as `"3\n"`.
    pub fn parse_choice(answer: &str) -> Result<Self> {
        let answer = answer.trim();
        answer
            .parse::<i64>()
            .map_err(|_| Error::InvalidChoice(answer.to_owned()))
            .and_then(Self::from_choice)
    }

    pub fn choice(&self) -> u8 {
        match *self {
            Self::Normal => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::Inverted => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::Normal => "Landscape (normal)",
            Self::Left => "Portrait (right side up)",
            Self::Right => "Portrait (left side up)",
            Self::Inverted => "Inverted (upside down)",
        }
    }

    /// Rotation keyword passed to `--rotate`.
    pub fn keyword(&self) -> &'static str {
        match *self {
            Self::Normal => "normal",
            Self::Left => "left",
            Self::Right => "right",
            Self::Inverted => "inverted",
        }
    }

    /// First two rows of the affine transform for `LIBINPUT_CALIBRATION_MATRIX`.
    pub fn calibration_matrix(&self) -> &'static str {
        match *self {
            Self::Normal => "1 0 0 0 1 0",
            Self::Left => "0 1 0 -1 0 1",
            Self::Right => "0 -1 1 1 0 0",
            Self::Inverted => "-1 0 1 0 -1 1",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Accepts either a menu number or a rotation keyword.
impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.keyword() == wanted)
            .map(Ok)
            .unwrap_or_else(|| Self::parse_choice(&wanted))
    }
}
