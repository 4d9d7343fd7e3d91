//! In-memory lookup tables built from Harvest reference data.
//!
//! The tables are built once per run, before any time entries are fetched,
//! and are read-only afterwards. Every foreign id referenced by a time entry
//! must resolve here; a missing key is a fatal error, never a blank cell.

use anyhow::{bail, Result};
use std::collections::HashMap;

use siros_harvest::models::{Client, Project, Task, User};

/// Per-project reference data kept for row formatting
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub name: String,
    pub hourly_rate: Option<f64>,
    pub client_id: u64,
}

/// Lookup tables resolving the foreign ids carried by a time entry
#[derive(Debug, Default)]
pub struct LookupTables {
    projects: HashMap<u64, ProjectInfo>,
    project_clients: HashMap<u64, String>,
    users: HashMap<u64, (String, String)>,
    tasks: HashMap<u64, String>,
}

impl LookupTables {
    /// Build the tables from freshly fetched reference data.
    ///
    /// Client names are resolved per project at build time, so entry fetching
    /// only starts once every project's client reference is known to be valid.
    ///
    /// # Errors
    ///
    /// Returns an error if a project references a client id absent from the
    /// client list.
    pub fn build(
        clients: &[Client],
        projects: &[Project],
        users: &[User],
        tasks: &[Task],
    ) -> Result<Self> {
        let client_names: HashMap<u64, &str> =
            clients.iter().map(|c| (c.id, c.name.as_str())).collect();

        let mut tables = Self::default();

        for project in projects {
            let Some(client_name) = client_names.get(&project.client_id) else {
                bail!(
                    "Project {} ('{}') references unknown client {}",
                    project.id,
                    project.name,
                    project.client_id
                );
            };
            tables.projects.insert(
                project.id,
                ProjectInfo {
                    name: project.name.clone(),
                    hourly_rate: project.hourly_rate,
                    client_id: project.client_id,
                },
            );
            tables
                .project_clients
                .insert(project.id, (*client_name).to_string());
        }

        for user in users {
            tables
                .users
                .insert(user.id, (user.first_name.clone(), user.last_name.clone()));
        }

        for task in tasks {
            tables.tasks.insert(task.id, task.name.clone());
        }

        Ok(tables)
    }

    /// All known project ids, ascending, for deterministic fetch order
    #[must_use]
    pub fn project_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.projects.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of known projects
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Resolve a project id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the project table
    pub fn project(&self, project_id: u64) -> Result<&ProjectInfo> {
        self.projects
            .get(&project_id)
            .ok_or_else(|| anyhow::anyhow!("Time entry references unknown project {project_id}"))
    }

    /// Resolve a project id to its client name
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the project table
    pub fn client_name(&self, project_id: u64) -> Result<&str> {
        self.project_clients
            .get(&project_id)
            .map(String::as_str)
            .ok_or_else(|| anyhow::anyhow!("No client known for project {project_id}"))
    }

    /// Resolve a user id to (first name, last name)
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the user table
    pub fn user_name(&self, user_id: u64) -> Result<(&str, &str)> {
        self.users
            .get(&user_id)
            .map(|(first, last)| (first.as_str(), last.as_str()))
            .ok_or_else(|| anyhow::anyhow!("Time entry references unknown user {user_id}"))
    }

    /// Resolve a task id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the task table
    pub fn task_name(&self, task_id: u64) -> Result<&str> {
        self.tasks
            .get(&task_id)
            .map(String::as_str)
            .ok_or_else(|| anyhow::anyhow!("Time entry references unknown task {task_id}"))
    }
}

// ============================================================================
// Tests
// ============================================================================
