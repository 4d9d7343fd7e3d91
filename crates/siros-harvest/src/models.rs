//! Typed records for the Harvest v1 API.
//!
//! The v1 API wraps every element of a collection response under a type key
//! (`[{"client": {...}}, ...]`), so each record has a matching wrapper struct
//! used only during deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Harvest billing client (the entity a project belongs to)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
}

/// Harvest project
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    pub client_id: u64,
}

/// Harvest user
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

/// Harvest task (category of work attached to an entry)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
}

/// A single recorded time entry (Harvest calls these "day entries")
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DayEntry {
    pub id: u64,
    pub project_id: u64,
    pub task_id: u64,
    pub user_id: u64,
    pub spent_at: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// ============================================================================
// v1 collection wrappers
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ClientWrapper {
    pub client: Client,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectWrapper {
    pub project: Project,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserWrapper {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskWrapper {
    pub task: Task,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DayEntryWrapper {
    pub day_entry: DayEntry,
}

// ============================================================================
// Tests
// ============================================================================
