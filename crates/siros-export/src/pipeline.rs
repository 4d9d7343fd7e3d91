//! The backup pipeline: authenticate, load reference data, fetch entries,
//! format, sort, write.
//!
//! Strictly sequential; each stage aborts the run on the first error.

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use siros_harvest::TimeTrackingService;

use crate::lookup::LookupTables;
use crate::row::{format_entry, sort_rows, ColumnSchema, ExportRow};
use crate::writer::write_csv;

/// Options for a backup run.
///
/// The date range and column schema are explicit configuration rather than
/// embedded constants; the defaults reproduce the historical behavior
/// (everything since 2010-01-01, richest schema, sorted by entry id).
#[derive(Debug, Clone)]
pub struct BackupOptions {
    pub output_path: PathBuf,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub schema: ColumnSchema,
    pub sort_by_id: bool,
}

impl BackupOptions {
    /// Options with the historical defaults, "to" computed at call time
    #[must_use]
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            from: default_from(),
            to: Local::now().date_naive(),
            schema: ColumnSchema::Full,
            sort_by_id: true,
        }
    }
}

/// The arbitrary very old lower bound used for full-history exports
#[must_use]
pub fn default_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid constant date")
}

/// What a completed run produced, for operator feedback
#[derive(Debug)]
pub struct BackupSummary {
    pub projects: usize,
    pub entries: usize,
    pub output_path: PathBuf,
}

/// Run the full backup pipeline against a time-tracking service.
///
/// # Errors
///
/// Returns an error if the credential probe fails, any fetch fails, a foreign
/// id on a fetched entry does not resolve, or the output file cannot be
/// written. No stage is retried and no partial output is produced on the
/// formatting path.
pub async fn run_backup<S: TimeTrackingService>(
    service: &S,
    options: &BackupOptions,
) -> Result<BackupSummary> {
    if !service.validate_credentials().await? {
        bail!("Unable to log in to {}", service.service_name());
    }

    log::info!("Populating project map");
    let clients = service.list_clients().await?;
    let projects = service.list_projects().await?;
    log::info!("Populating user map");
    let users = service.list_users().await?;
    log::info!("Populating task map");
    let tasks = service.list_tasks().await?;

    let tables = LookupTables::build(&clients, &projects, &users, &tasks)?;

    let project_ids = tables.project_ids();
    log::info!(
        "Retrieving entries for {} projects ({} to {})",
        project_ids.len(),
        options.from,
        options.to
    );

    let mut entries = Vec::new();
    for (i, project_id) in project_ids.iter().enumerate() {
        let project_entries = service
            .project_entries(*project_id, options.from, options.to)
            .await?;
        log::info!(
            "Project {project_id}: {} entries ({}/{})",
            project_entries.len(),
            i + 1,
            project_ids.len()
        );
        entries.extend(project_entries);
    }

    log::info!("Formatting {} time entries", entries.len());
    let mut rows: Vec<ExportRow> = entries
        .iter()
        .map(|entry| format_entry(entry, &tables))
        .collect::<Result<_>>()?;

    if options.sort_by_id {
        sort_rows(&mut rows);
    }

    write_csv(&options.output_path, options.schema, &rows)?;

    Ok(BackupSummary {
        projects: project_ids.len(),
        entries: rows.len(),
        output_path: options.output_path.clone(),
    })
}

// ============================================================================
// Tests
// ============================================================================
