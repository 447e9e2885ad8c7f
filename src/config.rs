use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::features::hashing::{HashAlgorithm, UnknownHashError};

/// Effective settings after all overrides are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Hash algorithm used by `hash` when none is given
    pub default_hash: String,
    /// Random values tried by `selftest` when `--cycles` is absent
    pub selftest_cycles: u64,
    /// Seed used by `selftest` when `--seed` is absent
    pub selftest_seed: Option<u64>,
}

/// One settings file. Every key is optional so files can override selectively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverlay {
    #[serde(default)]
    pub default_hash: Option<String>,
    #[serde(default)]
    pub selftest_cycles: Option<u64>,
    #[serde(default)]
    pub selftest_seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    settings: SettingsOverlay,
}

/// Settings together with the files they were read from.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub sources: Vec<PathBuf>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<SettingsOverlay, toml::de::Error> {
        let file: SettingsFile = toml::from_str(content)?;
        Ok(file.settings)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../settings.toml");
        let overlay = Self::from_toml(content)?;
        Ok(Settings {
            default_hash: overlay
                .default_hash
                .ok_or("built-in settings lack default_hash")?,
            selftest_cycles: overlay
                .selftest_cycles
                .ok_or("built-in settings lack selftest_cycles")?,
            selftest_seed: overlay.selftest_seed,
        })
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<SettingsOverlay, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load settings with user overrides from standard locations
    /// 1. Start with built-in settings
    /// 2. Override with ~/.config/base62-256/settings.toml if it exists
    /// 3. Override with ./base62-256.toml if it exists in current directory
    /// 4. Override with `explicit` if given; this one must load
    pub fn load_with_overrides(
        explicit: Option<&str>,
        quiet: bool,
    ) -> Result<LoadedSettings, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;
        let mut sources = Vec::new();

        let mut optional = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            optional.push(config_dir.join("base62-256").join("settings.toml"));
        }
        optional.push(PathBuf::from("base62-256.toml"));

        for path in optional {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overlay) => {
                    settings.merge(overlay);
                    sources.push(path);
                }
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: Failed to load settings from {:?}: {}", path, e);
                    }
                }
            }
        }

        if let Some(explicit) = explicit {
            let path = PathBuf::from(shellexpand::tilde(explicit).as_ref());
            let overlay = Self::load_from_file(&path)
                .map_err(|e| format!("Cannot load settings from '{}': {}", explicit, e))?;
            settings.merge(overlay);
            sources.push(path);
        }

        Ok(LoadedSettings { settings, sources })
    }

    /// Apply every key the overlay sets
    pub fn merge(&mut self, overlay: SettingsOverlay) {
        if let Some(default_hash) = overlay.default_hash {
            self.default_hash = default_hash;
        }
        if let Some(cycles) = overlay.selftest_cycles {
            self.selftest_cycles = cycles;
        }
        if overlay.selftest_seed.is_some() {
            self.selftest_seed = overlay.selftest_seed;
        }
    }

    pub fn hash_algorithm(&self) -> Result<HashAlgorithm, UnknownHashError> {
        HashAlgorithm::from_str(&self.default_hash)
    }
}
