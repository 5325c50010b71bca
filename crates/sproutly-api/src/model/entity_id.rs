// ── Core identity type ──
//
// The backend issues opaque ids -- historically MongoDB ObjectId strings,
// UUIDs for newer resources. EntityId unifies both behind one ergonomic
// interface so consumers never care which they hold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Canonical identifier for any Sproutly entity.
///
/// Transparently wraps either a UUID or a backend-native id string
/// (e.g. a 24-hex-digit ObjectId). Compares and displays as the
/// underlying value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Uuid(Uuid),
    Native(String),
}

impl EntityId {
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            Self::Native(_) => None,
        }
    }

    pub fn as_native(&self) -> Option<&str> {
        match self {
            Self::Native(s) => Some(s),
            Self::Uuid(_) => None,
        }
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::Native(String::new())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Native(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<Uuid> for EntityId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match Uuid::parse_str(&s) {
            Ok(u) => Self::Uuid(u),
            Err(_) => Self::Native(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}
