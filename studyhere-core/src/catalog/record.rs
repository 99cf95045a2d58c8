//! Study space records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSpaceIdError;

/// Unique identifier of a study space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(pub u32);

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpaceId {
    type Err = ParseSpaceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(SpaceId)
            .map_err(|_| ParseSpaceIdError(s.to_string()))
    }
}

impl From<u32> for SpaceId {
    fn from(value: u32) -> Self {
        SpaceId(value)
    }
}

/// How loud a space usually is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Quiet,
    Medium,
    Lively,
}

impl NoiseLevel {
    /// Raw token, as stored in catalog files and matched by search
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseLevel::Quiet => "quiet",
            NoiseLevel::Medium => "medium",
            NoiseLevel::Lively => "lively",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            NoiseLevel::Quiet => "Quiet",
            NoiseLevel::Medium => "Medium",
            NoiseLevel::Lively => "Lively",
        }
    }
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical study location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRecord {
    /// Unique, never reassigned
    pub id: SpaceId,

    /// Display name
    pub name: String,

    /// Grouping label (campus, building)
    pub building: String,

    /// Seating limit
    pub capacity: u32,

    /// Whether the space is currently open
    pub open_now: bool,

    /// Whether power outlets are available
    pub outlets: bool,

    /// Typical noise level
    pub noise: NoiseLevel,

    /// Decorative label
    #[serde(default)]
    pub emoji: String,
}

impl SpaceRecord {
    pub fn availability_label(&self) -> &'static str {
        if self.open_now {
            "Open now"
        } else {
            "Closed"
        }
    }

    pub fn outlets_label(&self) -> &'static str {
        if self.outlets {
            "Outlets available"
        } else {
            "Few/no outlets"
        }
    }
}
