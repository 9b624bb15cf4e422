//! Session detection.
//!
//! `XDG_SESSION_TYPE` is read once at startup; the resulting kind is passed
//! around explicitly from then on.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

pub const SESSION_TYPE_VAR: &str = "XDG_SESSION_TYPE";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    X11,
    /// Wayland, driven through GNOME's display configuration.
    Wayland,
}

impl SessionKind {
    pub fn from_env() -> Result<Self> {
        Self::from_session_type(env::var(SESSION_TYPE_VAR).ok().as_deref())
    }

    /// Unknown or missing session types are refused instead of guessed.
    pub fn from_session_type(value: Option<&str>) -> Result<Self> {
        match value {
            Some(value) => value.parse(),
            None => Err(Error::UnsupportedSession("<unset>".to_owned())),
        }
    }
}

impl FromStr for SessionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x11" => Ok(Self::X11),
            "wayland" => Ok(Self::Wayland),
            _ => Err(Error::UnsupportedSession(s.to_owned())),
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::X11 => f.write_str("x11"),
            Self::Wayland => f.write_str("wayland"),
        }
    }
}
