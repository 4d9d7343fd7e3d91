use anyhow::{Context, Result};
use std::path::PathBuf;

/// Credentials and output configuration, assembled once at startup and
/// passed down explicitly.
#[derive(Debug, Clone)]
pub struct BackupConfig {
    pub user: String,
    pub password: String,
    pub account: String,
    /// Optional output path from `HARVEST_CSV_OUTPUT_FILE`
    pub output_path: Option<PathBuf>,
}

impl BackupConfig {
    /// Read the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any required credential variable is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            user: require_var("HARVEST_USER")?,
            password: require_var("HARVEST_PASSWORD")?,
            account: require_var("HARVEST_ACCOUNT")?,
            output_path: std::env::var_os("HARVEST_CSV_OUTPUT_FILE").map(PathBuf::from),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Environment variable {name} is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_var_missing() {
        let err = require_var("SIROS_TEST_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("SIROS_TEST_UNSET_VAR"));
    }

    #[test]
    fn test_require_var_present() {
        std::env::set_var("SIROS_TEST_PRESENT_VAR", "value");
        assert_eq!(require_var("SIROS_TEST_PRESENT_VAR").unwrap(), "value");
    }
}
