//! Configuration for wayfind
//!
//! Configuration lives in `config.toml`, either passed explicitly or found in
//! the user config directory. Every field is optional; missing fields fall
//! back to the built-in place set with an unseeded graph.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bail_config;
use crate::error::{Result, WayfindError};
use crate::graph::{validate_places, Graph, Place};

pub use global::default_config_path;
pub use types::{Config, TourConfig, CONFIG_FILE, DEFAULT_PLACES};

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WayfindError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)
            .map_err(|e| WayfindError::io_operation("read", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), places = config.places.len(), "load_config");
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Otherwise the default config file is used
    /// when present, and built-in defaults when not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = default_config_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| WayfindError::io_operation("create directory", parent.display(), e))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| WayfindError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| WayfindError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Check the place set and tour endpoints.
    pub fn validate(&self) -> Result<()> {
        validate_places(&self.places)?;

        for (label, endpoint) in [("from", &self.tour.from), ("to", &self.tour.to)] {
            if let Some(place) = endpoint {
                if !self.places.contains(place) {
                    bail_config!("tour.{label} is not a known place: {place}");
                }
            }
        }
        Ok(())
    }

    /// Tour endpoints with overrides applied; defaults to first and last place.
    pub fn tour_endpoints(&self, from: Option<&str>, to: Option<&str>) -> Result<(Place, Place)> {
        let from = from
            .map(Place::from)
            .or_else(|| self.tour.from.clone())
            .or_else(|| self.places.first().cloned());
        let to = to
            .map(Place::from)
            .or_else(|| self.tour.to.clone())
            .or_else(|| self.places.last().cloned());

        match (from, to) {
            (Some(from), Some(to)) => Ok((from, to)),
            _ => bail_config!("place set is empty"),
        }
    }

    /// Generate this configuration's graph. `seed` overrides the configured
    /// seed; with neither, the generator is seeded from the OS.
    pub fn generate_graph(&self, seed: Option<u64>) -> Result<Graph> {
        let mut rng = match seed.or(self.seed) {
            Some(seed) => {
                tracing::debug!(seed, "seeded graph generation");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Graph::generate(&self.places, &mut rng)
    }
}

/// Write the default configuration to `path` (or the default location).
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };

    if path.exists() && !force {
        return Err(WayfindError::already_exists(
            "config file",
            path.display(),
        ));
    }

    Config::default().save(&path)?;
    tracing::debug!(path = %path.display(), "init_config");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TravelMode;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.places.len(), 5);
        assert_eq!(config.places[0].as_str(), "New York");
        assert_eq!(config.places[4].as_str(), "Miami");
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            places: vec!["Oslo".into(), "Bergen".into(), "Tromso".into()],
            seed: Some(42),
            tour: TourConfig {
                from: Some("Bergen".into()),
                to: None,
            },
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed = 7\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.places, Config::default().places);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, WayfindError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "places = [unterminated").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(WayfindError::Toml(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_unknown_tour_places() {
        let dupes = Config {
            places: vec!["A".into(), "A".into()],
            ..Config::default()
        };
        assert!(matches!(
            dupes.validate(),
            Err(WayfindError::InvalidConfig { .. })
        ));

        let bad_tour = Config {
            tour: TourConfig {
                from: None,
                to: Some("Atlantis".into()),
            },
            ..Config::default()
        };
        let err = bad_tour.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: tour.to is not a known place: Atlantis"
        );
    }

    #[test]
    fn test_tour_endpoints_precedence() {
        let mut config = Config::default();
        let (from, to) = config.tour_endpoints(None, None).unwrap();
        assert_eq!((from.as_str(), to.as_str()), ("New York", "Miami"));

        config.tour.from = Some("Chicago".into());
        let (from, to) = config.tour_endpoints(None, None).unwrap();
        assert_eq!((from.as_str(), to.as_str()), ("Chicago", "Miami"));

        let (from, to) = config.tour_endpoints(Some("Houston"), Some("Chicago")).unwrap();
        assert_eq!((from.as_str(), to.as_str()), ("Houston", "Chicago"));
    }

    #[test]
    fn test_generate_graph_with_seed_is_reproducible() {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        let a = config.generate_graph(None).unwrap();
        let b = config.generate_graph(None).unwrap();
        assert_eq!(a, b);

        let c = config.generate_graph(Some(11)).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_generate_graph_modes_are_valid() {
        let graph = Config::default().generate_graph(Some(3)).unwrap();
        assert_eq!(graph.edge_count(), 20);
        assert!(graph.edges().all(|e| TravelMode::ALL.contains(&e.mode)));
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let written = init_config(Some(&path), false).unwrap();
        assert_eq!(written, path);
        assert_eq!(Config::load(&path).unwrap(), Config::default());

        assert!(matches!(
            init_config(Some(&path), false),
            Err(WayfindError::AlreadyExists { .. })
        ));
        assert!(init_config(Some(&path), true).is_ok());
    }
}
