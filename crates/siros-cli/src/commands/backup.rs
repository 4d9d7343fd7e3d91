//! The `backup` command: export all Harvest time entries to a CSV file.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use siros_export::{run_backup, BackupOptions, ColumnSchema};
use siros_harvest::HarvestApi;

use crate::config::BackupConfig;

const DEFAULT_OUTPUT: &str = "data.csv";

pub async fn backup_command(
    file: Option<PathBuf>,
    from: Option<NaiveDate>,
    minimal: bool,
) -> Result<()> {
    let BackupConfig {
        user,
        password,
        account,
        output_path,
    } = BackupConfig::from_env()?;

    let api = HarvestApi::new(user, password, &account)?;

    let mut options = BackupOptions::new(resolve_output_path(file, output_path));
    if let Some(from) = from {
        options.from = from;
    }
    if minimal {
        options.schema = ColumnSchema::Minimal;
    }

    println!("Backing up Harvest entries to CSV");

    let summary = run_backup(&api, &options).await?;

    println!(
        "Wrote {} entries to {}",
        summary.entries,
        summary.output_path.display()
    );
    Ok(())
}

/// CLI argument wins over the environment; `data.csv` is the last resort
fn resolve_output_path(file: Option<PathBuf>, env_path: Option<PathBuf>) -> PathBuf {
    file.or(env_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_prefers_argument() {
        let path = resolve_output_path(
            Some(PathBuf::from("arg.csv")),
            Some(PathBuf::from("env.csv")),
        );
        assert_eq!(path, PathBuf::from("arg.csv"));
    }

    #[test]
    fn test_output_path_falls_back_to_env() {
        let path = resolve_output_path(None, Some(PathBuf::from("env.csv")));
        assert_eq!(path, PathBuf::from("env.csv"));
    }

    #[test]
    fn test_output_path_defaults() {
        let path = resolve_output_path(None, None);
        assert_eq!(path, PathBuf::from("data.csv"));
    }
}
