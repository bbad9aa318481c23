/// Registry settings
use serde::{Deserialize, Serialize};
use std::path::Path;
use tune_core::{CatalogError, Result};

/// Tunables for a `Registry`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistrySettings {
    /// Length of every top-N chart
    #[serde(default = "default_chart_limit")]
    pub chart_limit: usize,

    /// Clock value after construction and after `reset()`
    #[serde(default = "default_initial_timestamp")]
    pub initial_timestamp: u64,
}

impl RegistrySettings {
    /// Load settings from an optional file and the environment
    ///
    /// Environment variables use the `TUNE_` prefix, e.g. `TUNE_CHART_LIMIT=10`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TUNE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = settings
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.chart_limit == 0 {
            return Err(CatalogError::Config(
                "chart_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_chart_limit() -> usize {
    5
}

fn default_initial_timestamp() -> u64 {
    0
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            chart_limit: default_chart_limit(),
            initial_timestamp: default_initial_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_settings() {
        let settings = RegistrySettings::default();
        assert_eq!(settings.chart_limit, 5);
        assert_eq!(settings.initial_timestamp, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "chart_limit = 3").unwrap();

        let settings = RegistrySettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.chart_limit, 3);
        assert_eq!(settings.initial_timestamp, 0);
    }

    #[test]
    fn zero_chart_limit_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "chart_limit = 0").unwrap();

        let err = RegistrySettings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = RegistrySettings::load(Some(Path::new("/nonexistent/tune.toml"))).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}
