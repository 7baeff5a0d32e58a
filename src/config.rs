//! Class path configuration
//!
//! Loads the ordered list of directory and archive roots a `ClassPath` searches.
//!
//! ```toml
//! class_path = ["target/classes", "lib/app.jar"]
//! ```

use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::locator::ClassPathEntry;

#[derive(Debug, Deserialize, Clone)]
pub struct ClassPathConfig {
    /// Roots searched in order; archives are recognized by extension
    pub class_path: Vec<String>,
}

impl ClassPathConfig {
    /// Load configuration from a file; the format follows its extension
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = Config::builder().add_source(File::from(path)).build()?;
        Self::from_settings(settings)
    }

    /// Load configuration from TOML text
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, config::ConfigError> {
        let config: ClassPathConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.class_path.is_empty() {
            return Err(config::ConfigError::Message(
                "class_path cannot be empty".into(),
            ));
        }

        if self.class_path.iter().any(|entry| entry.trim().is_empty()) {
            return Err(config::ConfigError::Message(
                "class_path entries cannot be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn entries(&self) -> Vec<ClassPathEntry> {
        self.class_path.iter().map(ClassPathEntry::infer).collect()
    }
}
