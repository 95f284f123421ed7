use chrono::{DateTime, TimeZone, Utc};
use fake::Dummy;
use serde_json::Value;

/// Defines user data structure.
///
/// A defaulted user (substituted when a task carries no `creator`) has
/// an `id` of zero and empty fields.
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub color: String,
    pub profile_picture: Option<String>,
}

/// Defines task status data structure.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq)]
pub struct Status {
    pub status: String,
    pub color: String,
    pub status_type: String,
    pub orderindex: i64,
}

/// Defines task priority data structure.
///
/// `orderindex` is a string here while [`Status::orderindex`] is an
/// integer; the upstream API disagrees with itself and the distinction
/// is kept as-is.
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Priority {
    pub id: String,
    pub priority: String,
    pub color: String,
    pub orderindex: String,
}

/// Defines task data structure.
///
/// An immutable snapshot of a remote task at fetch time. Fields whose
/// internal structure the API does not guarantee (checklists, tags,
/// custom fields, dependency links, container metadata) are kept as raw
/// JSON values rather than modeled types.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub text_content: String,
    pub description: String,
    pub status: Status,
    pub orderindex: String,
    pub date_created: String,
    pub date_updated: String,
    pub date_closed: Option<String>,
    pub date_done: Option<String>,
    pub creator: User,
    pub assignees: Vec<User>,
    pub watchers: Vec<User>,
    pub checklists: Vec<Value>,
    pub tags: Vec<Value>,
    pub parent: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub points: Option<i64>,
    pub time_estimate: Option<i64>,
    pub time_spent: Option<i64>,
    pub custom_fields: Vec<Value>,
    pub dependencies: Vec<Value>,
    pub linked_tasks: Vec<Value>,
    pub team_id: String,
    pub url: String,
    pub permission_level: String,
    pub list: Value,
    pub project: Value,
    pub folder: Value,
    pub space: Value,
}

impl Task {
    /// Creation time, parsed from ClickUp's epoch-millisecond string.
    ///
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_millis(&self.date_created)
    }

    /// Last-update time, parsed from ClickUp's epoch-millisecond string.
    ///
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        parse_millis(&self.date_updated)
    }

    /// Due time, if the task has one.
    ///
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_date.as_deref().and_then(parse_millis)
    }
}

fn parse_millis(raw: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = raw.parse().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}
