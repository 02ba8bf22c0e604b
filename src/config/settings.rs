use crate::errors::{LoraStackError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub stack: StackConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the graph host serving /object_info
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    /// File holding the published field value, relative to the workspace root
    pub field_file: String,
    /// Lower bound accepted for strength input
    pub strength_min: f64,
    /// Upper bound accepted for strength input
    pub strength_max: f64,
    /// Step hint for strength input
    pub strength_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            stack: StackConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8188".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            field_file: "lora_stack.json".to_string(),
            strength_min: -2.0,
            strength_max: 2.0,
            strength_step: 0.1,
        }
    }
}

impl Settings {
    /// Create default settings for a workspace
    pub fn default_for_workspace(catalog_url: Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(url) = catalog_url {
            settings.catalog.url = url;
        }
        settings
    }

    /// Load settings from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LoraStackError::config(format!("Failed to read config file: {e}")))?;

        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| LoraStackError::config(format!("Failed to parse config file: {e}")))?;

        Ok(settings)
    }

    /// Save settings to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        crate::utils::atomic_file::write_json(path, self)
    }

    /// Update a configuration value by key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return Err(LoraStackError::config(format!(
                "Invalid config key format: {key}"
            )));
        }

        match (parts[0], parts[1]) {
            ("catalog", "url") => self.catalog.url = value.to_string(),
            ("catalog", "timeout_secs") => {
                self.catalog.timeout_secs = value
                    .parse()
                    .map_err(|_| LoraStackError::config(format!("Invalid number: {value}")))?;
            }
            ("stack", "field_file") => self.stack.field_file = value.to_string(),
            ("stack", "strength_min") => {
                self.stack.strength_min = value
                    .parse()
                    .map_err(|_| LoraStackError::config(format!("Invalid number: {value}")))?;
            }
            ("stack", "strength_max") => {
                self.stack.strength_max = value
                    .parse()
                    .map_err(|_| LoraStackError::config(format!("Invalid number: {value}")))?;
            }
            ("stack", "strength_step") => {
                self.stack.strength_step = value
                    .parse()
                    .map_err(|_| LoraStackError::config(format!("Invalid number: {value}")))?;
            }
            _ => return Err(LoraStackError::config(format!("Unknown config key: {key}"))),
        }

        Ok(())
    }

    /// Get a configuration value by key
    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return Err(LoraStackError::config(format!(
                "Invalid config key format: {key}"
            )));
        }

        let value = match (parts[0], parts[1]) {
            ("catalog", "url") => self.catalog.url.clone(),
            ("catalog", "timeout_secs") => self.catalog.timeout_secs.to_string(),
            ("stack", "field_file") => self.stack.field_file.clone(),
            ("stack", "strength_min") => self.stack.strength_min.to_string(),
            ("stack", "strength_max") => self.stack.strength_max.to_string(),
            ("stack", "strength_step") => self.stack.strength_step.to_string(),
            _ => return Err(LoraStackError::config(format!("Unknown config key: {key}"))),
        };

        Ok(value)
    }

    /// All configuration entries as (key, value) pairs, for listing
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("catalog.url", self.catalog.url.clone()),
            ("catalog.timeout_secs", self.catalog.timeout_secs.to_string()),
            ("stack.field_file", self.stack.field_file.clone()),
            ("stack.strength_min", self.stack.strength_min.to_string()),
            ("stack.strength_max", self.stack.strength_max.to_string()),
            ("stack.strength_step", self.stack.strength_step.to_string()),
        ]
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.catalog.url)
            .map_err(|e| LoraStackError::config(format!("Invalid catalog URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(LoraStackError::config(
                "Catalog URL must start with http:// or https://",
            ));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(LoraStackError::config("Catalog timeout must be non-zero"));
        }

        if self.stack.field_file.is_empty() {
            return Err(LoraStackError::config("Field file name must not be empty"));
        }

        if self.stack.strength_min >= self.stack.strength_max {
            return Err(LoraStackError::config(format!(
                "Invalid strength range: {}..{}",
                self.stack.strength_min, self.stack.strength_max
            )));
        }

        if self.stack.strength_step <= 0.0 {
            return Err(LoraStackError::config("Strength step must be positive"));
        }

        Ok(())
    }
}
