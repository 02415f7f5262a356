use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::WayfindError;

/// A named location in the travel graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place(String);

impl Place {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Place {
    fn from(name: &str) -> Self {
        Place(name.to_string())
    }
}

impl From<String> for Place {
    fn from(name: String) -> Self {
        Place(name)
    }
}

impl Borrow<str> for Place {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// How an edge may be travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Road,
    Sky,
    Water,
}

impl TravelMode {
    /// All modes, in the order routes are reported.
    pub const ALL: [TravelMode; 3] = [TravelMode::Road, TravelMode::Sky, TravelMode::Water];

    /// Lower-case name used on the command line and in route headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Road => "road",
            TravelMode::Sky => "sky",
            TravelMode::Water => "water",
        }
    }

    /// Draw a mode uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Capitalized name, as it appears in the graph dump (`by Road`).
impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::Road => write!(f, "Road"),
            TravelMode::Sky => write!(f, "Sky"),
            TravelMode::Water => write!(f, "Water"),
        }
    }
}

impl FromStr for TravelMode {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "road" => Ok(TravelMode::Road),
            "sky" => Ok(TravelMode::Sky),
            "water" => Ok(TravelMode::Water),
            other => Err(WayfindError::UnknownMode(other.to_string())),
        }
    }
}

/// A directed, mode-tagged connection between two distinct places
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: Place,
    pub to: Place,
    pub mode: TravelMode,
}
