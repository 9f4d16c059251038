use super::{
    generator::GeneratorConfig,
    session::SessionConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::NameGenError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "namegen.toml";
const ENV_PREFIX: &str = "NAMEGEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), NameGenError> {
        self.generator.validate()?;
        self.session.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![self.generator.to_manifest(), self.session.to_manifest()]
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layers defaults, a TOML file and `NAMEGEN_<SECTION>__<FIELD>`
    /// environment variables. An explicit `path` must exist; the default
    /// file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, NameGenError> {
        let file = match path {
            Some(path) => File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config: AppConfig = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| NameGenError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        log::info!(
            "Loaded configuration (population {}, lengths {}..={}, mutation rate {})",
            config.generator.population_size,
            config.generator.min_length,
            config.generator.max_length,
            config.generator.mutation_rate
        );

        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), NameGenError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| NameGenError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| NameGenError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_inner(self) -> AppConfig {
        self.config
    }

    /// Applies `f` and keeps the result only if it validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), NameGenError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("namegen-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let path = temp_path("roundtrip");
        let mut manager = ConfigManager::new();
        manager
            .update(|config| {
                config.generator.population_size = 7;
                config.session.seed = Some(99);
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let loaded = ConfigManager::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.get().generator.population_size, 7);
        assert_eq!(loaded.get().session.seed, Some(99));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[generator]\nmutation_rate = 0.5\n").unwrap();

        let loaded = ConfigManager::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.get().generator.mutation_rate, 0.5);
        assert_eq!(loaded.get().generator.max_length, 10);
        assert_eq!(loaded.get().session, SessionConfig::default());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = temp_path("invalid");
        std::fs::write(&path, "[generator]\nmin_length = 12\nmax_length = 4\n").unwrap();

        let result = ConfigManager::load(Some(&path));
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = temp_path("does-not-exist");
        assert!(matches!(
            ConfigManager::load(Some(&path)),
            Err(NameGenError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejected_update_keeps_previous_config() {
        let mut manager = ConfigManager::new();
        let result = manager.update(|config| config.session.max_attempts = 0);
        assert!(result.is_err());
        assert_eq!(manager.get().session.max_attempts, 10_000);
    }
}
