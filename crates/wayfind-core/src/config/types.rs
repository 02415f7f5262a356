use serde::{Deserialize, Serialize};

use crate::graph::Place;

/// Place set used when no configuration file names one.
pub const DEFAULT_PLACES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Miami"];

/// Configuration file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

fn default_places() -> Vec<Place> {
    DEFAULT_PLACES.into_iter().map(Place::from).collect()
}

/// Wayfind configuration (`config.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Place set, in graph order
    #[serde(default = "default_places")]
    pub places: Vec<Place>,

    /// Seed for graph generation; a fresh random graph is built when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Endpoints for the default tour
    #[serde(default)]
    pub tour: TourConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            places: default_places(),
            seed: None,
            tour: TourConfig::default(),
        }
    }
}

/// Tour endpoints; unset ends fall back to the first and last place
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Place>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Place>,
}
