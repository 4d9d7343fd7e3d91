use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Client, DayEntry, Project, Task, User};

/// Generic trait for a hosted time-tracking service.
///
/// The backup pipeline only talks to this seam, so it can run against the
/// real Harvest API or an in-memory fake in tests.
#[async_trait]
pub trait TimeTrackingService: Send + Sync {
    /// Validate API credentials with a lightweight status probe
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable
    async fn validate_credentials(&self) -> Result<bool>;

    /// List all billing clients
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails
    async fn list_clients(&self) -> Result<Vec<Client>>;

    /// List all projects
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// List all users
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails
    async fn list_users(&self) -> Result<Vec<User>>;

    /// List all tasks
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Fetch all time entries for a project within a date range (inclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails
    async fn project_entries(
        &self,
        project_id: u64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DayEntry>>;

    /// Get the service name
    #[must_use]
    fn service_name(&self) -> &'static str;
}
