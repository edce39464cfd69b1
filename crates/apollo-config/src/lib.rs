use apollo::{ComparisonSettings, OrbConfig, DEFAULT_ASPECT_CAP};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Widest orb a settings file may ask for.
pub const MAX_ORB: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageSettings {
    pub charts_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            charts_dir: PathBuf::from("data/charts"),
            cache_dir: PathBuf::from("data/cache"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApolloSettings {
    pub comparison: ComparisonSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct ComparisonToml {
    #[serde(default = "default_aspect_cap")]
    aspect_cap: usize,
    #[serde(default)]
    modern_rulers: bool,
}

fn default_aspect_cap() -> usize {
    DEFAULT_ASPECT_CAP
}

#[derive(Debug, Clone, Deserialize)]
struct StorageToml {
    #[serde(default)]
    charts_dir: Option<PathBuf>,
    #[serde(default)]
    cache_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    orbs: Option<OrbConfig>,
    #[serde(default)]
    comparison: Option<ComparisonToml>,
    #[serde(default)]
    storage: Option<StorageToml>,
}

const SEARCH_PATHS: [&str; 2] = ["configs/apollo.toml", "../../configs/apollo.toml"];

/// Try the usual relative locations for `configs/apollo.toml`.
pub fn read_settings_toml_text() -> anyhow::Result<String> {
    for p in &SEARCH_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("loaded settings from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load apollo.toml from {:?}", SEARCH_PATHS);
}

pub fn validate_orbs(orbs: &OrbConfig) -> anyhow::Result<()> {
    for (name, value) in orbs.entries() {
        if !value.is_finite() || !(0.0..=MAX_ORB).contains(&value) {
            anyhow::bail!("orbs.{name} must be between 0 and {MAX_ORB} degrees, got {value}");
        }
    }
    Ok(())
}

/// Parse settings from TOML text. Every section and field is optional.
pub fn parse_settings(text: &str) -> anyhow::Result<ApolloSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse apollo.toml: {e}"))?;

    let orbs = root.orbs.unwrap_or_default();
    validate_orbs(&orbs)?;

    let (aspect_cap, modern_rulers) = match root.comparison {
        Some(ComparisonToml {
            aspect_cap,
            modern_rulers,
        }) => (aspect_cap, modern_rulers),
        None => (DEFAULT_ASPECT_CAP, false),
    };
    if aspect_cap == 0 {
        anyhow::bail!("comparison.aspect_cap must be at least 1");
    }

    let defaults = StorageSettings::default();
    let storage = match root.storage {
        Some(StorageToml {
            charts_dir,
            cache_dir,
        }) => StorageSettings {
            charts_dir: charts_dir.unwrap_or(defaults.charts_dir),
            cache_dir: cache_dir.unwrap_or(defaults.cache_dir),
        },
        None => defaults,
    };

    Ok(ApolloSettings {
        comparison: ComparisonSettings {
            orbs,
            aspect_cap,
            modern_rulers,
        },
        storage,
    })
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<ApolloSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_settings(&text)
}

/// Settings from the first `apollo.toml` found, or defaults when there is none.
pub fn load_settings() -> anyhow::Result<ApolloSettings> {
    match read_settings_toml_text() {
        Ok(text) => parse_settings(&text),
        Err(e) => {
            log::info!("{e}; using default settings");
            Ok(ApolloSettings::default())
        }
    }
}
