//! Row formatting: joining a raw time entry against the lookup tables.

use anyhow::Result;
use chrono::NaiveDate;

use siros_harvest::models::DayEntry;

use crate::lookup::LookupTables;

/// Column set written to the CSV.
///
/// `Full` is the richest observed schema; `Minimal` is a projection of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSchema {
    Full,
    Minimal,
}

impl ColumnSchema {
    /// Header row for this schema, in column order
    #[must_use]
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Full => &[
                "Date",
                "Client",
                "Project",
                "Task",
                "Notes",
                "Hours",
                "Hours rounded",
                "First name",
                "Last name",
                "Created on",
                "Updated on",
                "Harvest ID",
                "Project ID",
                "User ID",
                "Project hourly rate",
                "Task ID",
                "Client ID",
            ],
            Self::Minimal => &[
                "Date",
                "Client",
                "Project",
                "Task",
                "Notes",
                "Hours",
                "First name",
                "Last name",
            ],
        }
    }
}

/// A fully joined, denormalized export row
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub client: String,
    pub project: String,
    pub task: String,
    pub notes: String,
    pub hours: f64,
    pub hours_rounded: f64,
    pub first_name: String,
    pub last_name: String,
    pub created_on: String,
    pub updated_on: String,
    pub harvest_id: u64,
    pub project_id: u64,
    pub user_id: u64,
    pub project_hourly_rate: Option<f64>,
    pub task_id: u64,
    pub client_id: u64,
}

impl ExportRow {
    /// Render the row as CSV fields in the column order of `schema`
    #[must_use]
    pub fn to_record(&self, schema: ColumnSchema) -> Vec<String> {
        let mut record = vec![
            self.date.to_string(),
            self.client.clone(),
            self.project.clone(),
            self.task.clone(),
            self.notes.clone(),
            self.hours.to_string(),
        ];
        match schema {
            ColumnSchema::Minimal => {
                record.push(self.first_name.clone());
                record.push(self.last_name.clone());
            }
            ColumnSchema::Full => {
                record.push(self.hours_rounded.to_string());
                record.push(self.first_name.clone());
                record.push(self.last_name.clone());
                record.push(self.created_on.clone());
                record.push(self.updated_on.clone());
                record.push(self.harvest_id.to_string());
                record.push(self.project_id.to_string());
                record.push(self.user_id.to_string());
                record.push(
                    self.project_hourly_rate
                        .map(|r| r.to_string())
                        .unwrap_or_default(),
                );
                record.push(self.task_id.to_string());
                record.push(self.client_id.to_string());
            }
        }
        record
    }
}

/// Round hours up to the next quarter-hour increment.
///
/// Billing rounds up, never to nearest: 1.26 bills as 1.5.
#[must_use]
pub fn round_hours(hours: f64) -> f64 {
    (hours * 4.0).ceil() / 4.0
}

/// Join a raw time entry against the lookup tables.
///
/// Pure: the same entry and tables always yield the same row.
///
/// # Errors
///
/// Returns an error if any foreign id on the entry does not resolve.
pub fn format_entry(entry: &DayEntry, tables: &LookupTables) -> Result<ExportRow> {
    let project = tables.project(entry.project_id)?;
    let client = tables.client_name(entry.project_id)?;
    let task = tables.task_name(entry.task_id)?;
    let (first_name, last_name) = tables.user_name(entry.user_id)?;

    Ok(ExportRow {
        date: entry.spent_at,
        client: client.to_string(),
        project: project.name.clone(),
        task: task.to_string(),
        notes: entry.notes.clone().unwrap_or_default(),
        hours: entry.hours,
        hours_rounded: round_hours(entry.hours),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        created_on: entry.created_at.clone(),
        updated_on: entry.updated_at.clone(),
        harvest_id: entry.id,
        project_id: entry.project_id,
        user_id: entry.user_id,
        project_hourly_rate: project.hourly_rate,
        task_id: entry.task_id,
        client_id: project.client_id,
    })
}

/// Sort rows ascending by source entry id.
///
/// Ids are unique in practice; equal ids compare equal.
pub fn sort_rows(rows: &mut [ExportRow]) {
    rows.sort_by_key(|row| row.harvest_id);
}

// ============================================================================
// Tests
// ============================================================================
