use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::engines::generation::sampling::DEFAULT_MAX_ATTEMPTS;
use crate::engines::generation::synthesis::DEFAULT_MAX_CONSONANT_RUN;
use crate::error::NameGenError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed seed for reproducible sessions; entropy when unset.
    pub seed: Option<u64>,
    /// Cap on rejection-sampling retries per word.
    pub max_attempts: usize,
    pub max_consonant_run: usize,
    pub clear_on_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_consonant_run: DEFAULT_MAX_CONSONANT_RUN,
            clear_on_start: true,
        }
    }
}

impl ConfigSection for SessionConfig {
    fn section_name() -> &'static str {
        "session"
    }

    fn validate(&self) -> Result<(), NameGenError> {
        if self.max_attempts == 0 {
            return Err(NameGenError::Configuration(
                "max_attempts must be at least 1".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: Self::section_name().to_string(),
            fields: vec![
                FieldManifest {
                    name: "seed".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::Value::Null,
                    min: Some(0.0),
                    max: None,
                    description: "Random seed; leave unset for a fresh session every run".to_string(),
                },
                FieldManifest {
                    name: "max_attempts".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.max_attempts),
                    min: Some(1.0),
                    max: None,
                    description: "Retries allowed while looking for a word with a vowel".to_string(),
                },
                FieldManifest {
                    name: "max_consonant_run".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(defaults.max_consonant_run),
                    min: Some(0.0),
                    max: None,
                    description: "Consonants in a row before a vowel is forced".to_string(),
                },
                FieldManifest {
                    name: "clear_on_start".to_string(),
                    field_type: "bool".to_string(),
                    default: serde_json::json!(defaults.clear_on_start),
                    min: None,
                    max: None,
                    description: "Clear the terminal when the session starts".to_string(),
                },
            ],
        }
    }
}
