mod client;
mod error;
mod map;
mod resource;

pub use error::ClickUpError;
pub use map::{parse_priority, parse_status, parse_task, parse_user};
pub use resource::*;

use client::Client;
use log::*;
use serde_json::Value;

/// Responsible for synchronous interaction with the ClickUp API including
/// transformation of task response data into explicitly-defined types.
///
/// Workspace, space, folder and list objects are returned as raw JSON;
/// only task-shaped responses run through the mapping layer.
pub struct ClickUp {
    client: Client,
}

impl ClickUp {
    /// Returns a new instance for the given personal access token.
    ///
    pub fn new(access_token: &str) -> ClickUp {
        debug!("Initializing ClickUp client...");
        ClickUp {
            client: Client::new(access_token, "https://api.clickup.com/api/v2"),
        }
    }

    /// Returns the raw workspace objects the token has access to.
    ///
    pub fn teams(&self) -> Result<Vec<Value>, ClickUpError> {
        debug!("Requesting teams...");
        self.client.get_array("/team", "teams", &[])
    }

    /// Returns the raw space objects for the team.
    ///
    pub fn spaces(&self, team_id: &str) -> Result<Vec<Value>, ClickUpError> {
        debug!("Requesting spaces for team {}...", team_id);
        self.client
            .get_array(&format!("/team/{}/space", team_id), "spaces", &[])
    }

    /// Returns the raw folder objects for the space.
    ///
    pub fn folders(&self, space_id: &str) -> Result<Vec<Value>, ClickUpError> {
        debug!("Requesting folders for space {}...", space_id);
        self.client
            .get_array(&format!("/space/{}/folder", space_id), "folders", &[])
    }

    /// Returns the raw list objects for the folder.
    ///
    pub fn lists(&self, folder_id: &str) -> Result<Vec<Value>, ClickUpError> {
        debug!("Requesting lists for folder {}...", folder_id);
        self.client
            .get_array(&format!("/folder/{}/list", folder_id), "lists", &[])
    }

    /// Returns the raw list objects that live directly in the space,
    /// outside any folder.
    ///
    pub fn folderless_lists(&self, space_id: &str) -> Result<Vec<Value>, ClickUpError> {
        debug!("Requesting folderless lists for space {}...", space_id);
        self.client
            .get_array(&format!("/space/{}/list", space_id), "lists", &[])
    }

    /// Returns the raw task objects for the list. Query parameters
    /// (`include_closed`, `subtasks`, `page`, ...) pass through verbatim.
    ///
    pub fn tasks_from_list(
        &self,
        list_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Value>, ClickUpError> {
        debug!("Requesting tasks for list {}...", list_id);
        self.client
            .get_array(&format!("/list/{}/task", list_id), "tasks", params)
    }

    /// Returns the raw task objects for the team. Query parameters pass
    /// through verbatim.
    ///
    pub fn tasks_from_team(
        &self,
        team_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Value>, ClickUpError> {
        debug!("Requesting tasks for team {}...", team_id);
        self.client
            .get_array(&format!("/team/{}/task", team_id), "tasks", params)
    }

    /// Returns the raw object for a single task.
    ///
    pub fn task(&self, task_id: &str) -> Result<Value, ClickUpError> {
        debug!("Requesting task {}...", task_id);
        self.client.get(&format!("/task/{}", task_id), &[])
    }

    /// Returns every task in the team as a typed [`Task`], in the order
    /// the API returned them.
    ///
    pub fn team_tasks(
        &self,
        team_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Task>, ClickUpError> {
        let raw_tasks = self.tasks_from_team(team_id, params)?;
        debug!("Mapping {} tasks for team {}...", raw_tasks.len(), team_id);
        raw_tasks.iter().map(parse_task).collect()
    }

    /// Returns every task in the list as a typed [`Task`], in the order
    /// the API returned them.
    ///
    pub fn list_tasks(
        &self,
        list_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Task>, ClickUpError> {
        let raw_tasks = self.tasks_from_list(list_id, params)?;
        debug!("Mapping {} tasks for list {}...", raw_tasks.len(), list_id);
        raw_tasks.iter().map(parse_task).collect()
    }
}
