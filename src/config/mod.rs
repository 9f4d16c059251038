pub mod traits;
pub mod generator;
pub mod session;
pub mod manager;

pub use manager::{ConfigManager, AppConfig, DEFAULT_CONFIG_FILE};
pub use generator::GeneratorConfig;
pub use session::SessionConfig;
pub use traits::{ConfigSection, ConfigManifest, FieldManifest};
