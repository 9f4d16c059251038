use crate::error::NameGenError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), NameGenError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Configuration manifest, rendered by `help config`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl ConfigManifest {
    /// One line per field: `section.name (type, default X, range) - description`
    pub fn render(&self) -> String {
        self.fields
            .iter()
            .map(|field| {
                let range = match (field.min, field.max) {
                    (Some(min), Some(max)) => format!(", {}..={}", min, max),
                    (Some(min), None) => format!(", >= {}", min),
                    (None, Some(max)) => format!(", <= {}", max),
                    (None, None) => String::new(),
                };
                format!(
                    "{}.{} ({}, default {}{}) - {}",
                    self.section,
                    field.name,
                    field.field_type,
                    field.default,
                    range,
                    field.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
