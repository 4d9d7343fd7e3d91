use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::http::ResponseExt;
use crate::models::{
    Client, ClientWrapper, DayEntry, DayEntryWrapper, Project, ProjectWrapper, Task, TaskWrapper,
    User, UserWrapper,
};
use crate::traits::TimeTrackingService;

// ============================================================================
// Harvest Client
// ============================================================================

/// Harvest v1 API client
///
/// Authenticates with HTTP basic auth against the account subdomain
/// (`https://{account}.harvestapp.com`).
pub struct HarvestApi {
    user: String,
    password: String,
    base_url: String,
    client: reqwest::Client,
}

impl HarvestApi {
    /// Create a new Harvest client
    ///
    /// # Arguments
    /// * `user` - Harvest account email
    /// * `password` - Harvest account password
    /// * `account` - Account subdomain (from the Harvest URL)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(user: String, password: String, account: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            user,
            password,
            base_url: format!("https://{account}.harvestapp.com"),
            client,
        })
    }

    /// Build an API URL under the account subdomain
    fn build_url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Make an authenticated GET request
    async fn get<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await
            .context("Failed to send request to Harvest API")?
            .ensure_success("Harvest")
            .await?;

        response
            .json()
            .await
            .context("Failed to parse Harvest API response")
    }

    /// Issue the rate limit status probe used to verify the session
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable
    async fn rate_limit_status(&self) -> Result<reqwest::Response> {
        let url = self.build_url("account/rate_limit_status");
        log::debug!("GET {url}");

        self.client
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to connect to Harvest API")
    }
}

// ============================================================================
// TimeTrackingService Trait Implementation
// ============================================================================

#[async_trait]
impl TimeTrackingService for HarvestApi {
    async fn validate_credentials(&self) -> Result<bool> {
        let response = self.rate_limit_status().await?;
        Ok(response.status().is_success())
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let url = self.build_url("clients");
        let wrappers: Vec<ClientWrapper> = self.get(&url).await?;
        Ok(wrappers.into_iter().map(|w| w.client).collect())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = self.build_url("projects");
        let wrappers: Vec<ProjectWrapper> = self.get(&url).await?;
        Ok(wrappers.into_iter().map(|w| w.project).collect())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        // Harvest exposes users under /people
        let url = self.build_url("people");
        let wrappers: Vec<UserWrapper> = self.get(&url).await?;
        Ok(wrappers.into_iter().map(|w| w.user).collect())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.build_url("tasks");
        let wrappers: Vec<TaskWrapper> = self.get(&url).await?;
        Ok(wrappers.into_iter().map(|w| w.task).collect())
    }

    async fn project_entries(
        &self,
        project_id: u64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DayEntry>> {
        let url = self.build_url(&format!(
            "projects/{project_id}/entries?from={}&to={}",
            from.format("%Y%m%d"),
            to.format("%Y%m%d")
        ));
        let wrappers: Vec<DayEntryWrapper> = self.get(&url).await?;
        Ok(wrappers.into_iter().map(|w| w.day_entry).collect())
    }

    fn service_name(&self) -> &'static str {
        "harvest"
    }
}

// ============================================================================
// Tests
// ============================================================================
