use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::error::NameGenError;
use serde::{Deserialize, Serialize};

/// Longest word any operation may be asked to build.
pub const MAX_WORD_LENGTH: usize = 64;
/// Upper bound for `population_size` and `random_selection`.
pub const MAX_POPULATION_SIZE: usize = 10_000;

/// Breeding parameters. Also carried live inside `GenerationState`,
/// where `set` edits them and re-runs `validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub mutation_rate: f64,
    pub population_size: usize,
    pub random_selection: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 10,
            mutation_rate: 0.2,
            population_size: 20,
            random_selection: 2,
        }
    }
}

impl ConfigSection for GeneratorConfig {
    fn section_name() -> &'static str {
        "generator"
    }

    fn validate(&self) -> Result<(), NameGenError> {
        if self.min_length < 1 {
            return Err(NameGenError::InvalidArgument(
                "min_length must be at least 1".to_string()
            ));
        }
        if self.min_length > self.max_length {
            return Err(NameGenError::InvalidArgument(format!(
                "min_length ({}) must not exceed max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if self.max_length > MAX_WORD_LENGTH {
            return Err(NameGenError::InvalidArgument(format!(
                "max_length must be at most {}",
                MAX_WORD_LENGTH
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(NameGenError::InvalidArgument(
                "mutation_rate must be between 0 and 1".to_string()
            ));
        }
        if self.population_size < 1 {
            return Err(NameGenError::InvalidArgument(
                "population_size must be at least 1".to_string()
            ));
        }
        if self.population_size > MAX_POPULATION_SIZE {
            return Err(NameGenError::InvalidArgument(format!(
                "population_size must be at most {}",
                MAX_POPULATION_SIZE
            )));
        }
        if self.random_selection > MAX_POPULATION_SIZE {
            return Err(NameGenError::InvalidArgument(format!(
                "random_selection must be at most {}",
                MAX_POPULATION_SIZE
            )));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: Self::section_name().to_string(),
            fields: vec![
                FieldManifest {
                    name: "min_length".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.min_length),
                    min: Some(1.0),
                    max: Some(MAX_WORD_LENGTH as f64),
                    description: "Shortest word the generator produces".to_string(),
                },
                FieldManifest {
                    name: "max_length".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.max_length),
                    min: Some(1.0),
                    max: Some(MAX_WORD_LENGTH as f64),
                    description: "Longest word the generator produces".to_string(),
                },
                FieldManifest {
                    name: "mutation_rate".to_string(),
                    field_type: "float".to_string(),
                    default: serde_json::json!(defaults.mutation_rate),
                    min: Some(0.0),
                    max: Some(1.0),
                    description: "Chance of mutating each letter and of each appended letter".to_string(),
                },
                FieldManifest {
                    name: "population_size".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.population_size),
                    min: Some(1.0),
                    max: Some(MAX_POPULATION_SIZE as f64),
                    description: "Number of words in every generation".to_string(),
                },
                FieldManifest {
                    name: "random_selection".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.random_selection),
                    min: Some(0.0),
                    max: Some(MAX_POPULATION_SIZE as f64),
                    description: "Survivors picked at random when fewer than 2 were selected".to_string(),
                },
            ],
        }
    }
}
