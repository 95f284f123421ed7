//! Conversion of raw ClickUp JSON into typed records.
//!
//! Every function in this module is a pure mapping over a
//! `serde_json::Value`: the same input always produces the same record,
//! missing optional fields become documented defaults, and collections
//! keep their source order. Only a missing required identifier (task
//! `id`, user `id`) is an error.

use serde_json::Value;

use super::error::ClickUpError;
use super::resource::{Priority, Status, Task, User};

/// Parse one raw user object into a [`User`].
///
/// The `id` must be present and integral; every other field falls back
/// to its default (empty string, or `None` for the profile picture).
pub fn parse_user(raw: &Value) -> Result<User, ClickUpError> {
    let id = raw
        .get("id")
        .and_then(Value::as_i64)
        .ok_or(ClickUpError::MissingField { field: "user.id" })?;

    Ok(User {
        id,
        username: str_or_empty(raw, "username"),
        email: str_or_empty(raw, "email"),
        color: str_or_empty(raw, "color"),
        profile_picture: opt_str(raw, "profilePicture"),
    })
}

/// Parse one raw status object into a [`Status`].
///
/// Total: an empty or partial object yields a status with defaulted
/// fields, never an error.
pub fn parse_status(raw: &Value) -> Status {
    Status {
        status: str_or_empty(raw, "status"),
        color: str_or_empty(raw, "color"),
        status_type: str_or_empty(raw, "type"),
        orderindex: raw.get("orderindex").and_then(Value::as_i64).unwrap_or(0),
    }
}

/// Parse one raw priority value into an optional [`Priority`].
///
/// JSON `null` means the task has no priority at all and maps to
/// `None`. An object, even an empty one, maps to `Some` with defaulted
/// fields, so the two cases stay distinguishable.
pub fn parse_priority(raw: &Value) -> Option<Priority> {
    if raw.is_null() {
        return None;
    }
    Some(Priority {
        id: string_or_number(raw, "id"),
        priority: str_or_empty(raw, "priority"),
        color: str_or_empty(raw, "color"),
        orderindex: string_or_number(raw, "orderindex"),
    })
}

/// Parse one raw task object into a [`Task`].
///
/// Nested users run through [`parse_user`] in source order. A task
/// without a `status` key gets an all-default [`Status`]; a task
/// without a `creator` key gets a defaulted [`User`]. Opaque arrays
/// (checklists, tags, custom fields, dependency links) and container
/// metadata objects pass through unchanged.
pub fn parse_task(raw: &Value) -> Result<Task, ClickUpError> {
    let id = raw
        .get("id")
        .and_then(Value::as_str)
        .ok_or(ClickUpError::MissingField { field: "task.id" })?
        .to_string();

    let creator = match raw.get("creator") {
        Some(user) => parse_user(user)?,
        None => User::default(),
    };

    Ok(Task {
        id,
        name: str_or_empty(raw, "name"),
        text_content: str_or_empty(raw, "text_content"),
        description: str_or_empty(raw, "description"),
        status: raw.get("status").map(parse_status).unwrap_or_default(),
        orderindex: string_or_number(raw, "orderindex"),
        date_created: str_or_empty(raw, "date_created"),
        date_updated: str_or_empty(raw, "date_updated"),
        date_closed: opt_str(raw, "date_closed"),
        date_done: opt_str(raw, "date_done"),
        creator,
        assignees: parse_users(raw, "assignees")?,
        watchers: parse_users(raw, "watchers")?,
        checklists: array_or_empty(raw, "checklists"),
        tags: array_or_empty(raw, "tags"),
        parent: opt_str(raw, "parent"),
        priority: raw.get("priority").and_then(parse_priority),
        due_date: opt_str(raw, "due_date"),
        start_date: opt_str(raw, "start_date"),
        points: opt_i64(raw, "points"),
        time_estimate: opt_i64(raw, "time_estimate"),
        time_spent: opt_i64(raw, "time_spent"),
        custom_fields: array_or_empty(raw, "custom_fields"),
        dependencies: array_or_empty(raw, "dependencies"),
        linked_tasks: array_or_empty(raw, "linked_tasks"),
        team_id: str_or_empty(raw, "team_id"),
        url: str_or_empty(raw, "url"),
        permission_level: str_or_empty(raw, "permission_level"),
        list: object_or_empty(raw, "list"),
        project: object_or_empty(raw, "project"),
        folder: object_or_empty(raw, "folder"),
        space: object_or_empty(raw, "space"),
    })
}

fn parse_users(raw: &Value, key: &str) -> Result<Vec<User>, ClickUpError> {
    match raw.get(key).and_then(Value::as_array) {
        Some(users) => users.iter().map(parse_user).collect(),
        None => Ok(Vec::new()),
    }
}

fn str_or_empty(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn opt_str(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn opt_i64(raw: &Value, key: &str) -> Option<i64> {
    raw.get(key).and_then(Value::as_i64)
}

// The API returns some index fields as a number on one endpoint and a
// string on another; either form is accepted and kept as a string.
fn string_or_number(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn array_or_empty(raw: &Value, key: &str) -> Vec<Value> {
    raw.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn object_or_empty(raw: &Value, key: &str) -> Value {
    match raw.get(key) {
        Some(value) if value.is_object() => value.clone(),
        _ => Value::Object(serde_json::Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_user_full() {
        let raw = json!({
            "id": 183,
            "username": "Jerry Krusinski",
            "email": "jerry@example.com",
            "color": "#7b68ee",
            "profilePicture": "https://attachments.clickup.com/profile.jpg"
        });
        let user = parse_user(&raw).unwrap();
        assert_eq!(user.id, 183);
        assert_eq!(user.username, "Jerry Krusinski");
        assert_eq!(user.email, "jerry@example.com");
        assert_eq!(user.color, "#7b68ee");
        assert_eq!(
            user.profile_picture.as_deref(),
            Some("https://attachments.clickup.com/profile.jpg")
        );
    }

    #[test]
    fn test_parse_user_defaults_optional_fields() {
        let user = parse_user(&json!({ "id": 42 })).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.username, "");
        assert_eq!(user.email, "");
        assert_eq!(user.color, "");
        assert!(user.profile_picture.is_none());
    }

    #[test]
    fn test_parse_user_missing_id_fails() {
        let err = parse_user(&json!({ "username": "ghost" })).unwrap_err();
        assert!(matches!(
            err,
            ClickUpError::MissingField { field: "user.id" }
        ));
    }

    #[test]
    fn test_parse_user_non_integer_id_fails() {
        let err = parse_user(&json!({ "id": "183" })).unwrap_err();
        assert!(matches!(err, ClickUpError::MissingField { .. }));
    }

    #[test]
    fn test_parse_status_full() {
        let raw = json!({
            "status": "in progress",
            "color": "#d3d3d3",
            "type": "custom",
            "orderindex": 1
        });
        let status = parse_status(&raw);
        assert_eq!(status.status, "in progress");
        assert_eq!(status.color, "#d3d3d3");
        assert_eq!(status.status_type, "custom");
        assert_eq!(status.orderindex, 1);
    }

    #[test]
    fn test_parse_status_empty_object_is_default() {
        assert_eq!(parse_status(&json!({})), Status::default());
    }

    #[test]
    fn test_parse_status_partial() {
        let status = parse_status(&json!({ "status": "open" }));
        assert_eq!(status.status, "open");
        assert_eq!(status.color, "");
        assert_eq!(status.status_type, "");
        assert_eq!(status.orderindex, 0);
    }

    #[test]
    fn test_parse_priority_null_is_none() {
        assert_eq!(parse_priority(&Value::Null), None);
    }

    #[test]
    fn test_parse_priority_empty_object_is_some_default() {
        let priority = parse_priority(&json!({})).unwrap();
        assert_eq!(priority.id, "");
        assert_eq!(priority.priority, "");
        assert_eq!(priority.color, "");
        assert_eq!(priority.orderindex, "");
    }

    #[test]
    fn test_parse_priority_full() {
        let raw = json!({
            "id": "2",
            "priority": "high",
            "color": "#ffcc00",
            "orderindex": "2"
        });
        let priority = parse_priority(&raw).unwrap();
        assert_eq!(priority.id, "2");
        assert_eq!(priority.priority, "high");
        assert_eq!(priority.color, "#ffcc00");
        assert_eq!(priority.orderindex, "2");
    }

    #[test]
    fn test_parse_priority_numeric_index_kept_as_string() {
        // Some endpoints return priority ids and indexes as numbers.
        let priority = parse_priority(&json!({ "id": 2, "orderindex": 2 })).unwrap();
        assert_eq!(priority.id, "2");
        assert_eq!(priority.orderindex, "2");
    }

    #[test]
    fn test_parse_task_minimal() {
        let task = parse_task(&json!({ "id": "abc", "name": "Fix bug" })).unwrap();
        assert_eq!(task.id, "abc");
        assert_eq!(task.name, "Fix bug");
        assert_eq!(task.status, Status::default());
        assert_eq!(task.priority, None);
        assert!(task.assignees.is_empty());
        assert!(task.watchers.is_empty());
        assert_eq!(task.creator, User::default());
        assert!(task.checklists.is_empty());
        assert!(task.dependencies.is_empty());
        assert_eq!(task.list, json!({}));
        assert_eq!(task.parent, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_parse_task_missing_id_fails() {
        let err = parse_task(&json!({ "name": "Fix bug" })).unwrap_err();
        assert!(matches!(
            err,
            ClickUpError::MissingField { field: "task.id" }
        ));
    }

    #[test]
    fn test_parse_task_assignee_order_preserved() {
        let raw = json!({
            "id": "abc",
            "name": "Ship it",
            "assignees": [{ "id": 3 }, { "id": 1 }, { "id": 2 }]
        });
        let task = parse_task(&raw).unwrap();
        let ids: Vec<i64> = task.assignees.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_task_bad_assignee_fails() {
        let raw = json!({
            "id": "abc",
            "assignees": [{ "id": 1 }, { "username": "no id" }]
        });
        assert!(parse_task(&raw).is_err());
    }

    #[test]
    fn test_parse_task_present_creator_without_id_fails() {
        let raw = json!({ "id": "abc", "creator": { "username": "ghost" } });
        assert!(parse_task(&raw).is_err());
    }

    #[test]
    fn test_parse_task_passthrough_fields_unchanged() {
        let checklists = json!([{ "id": "cl1", "items": [1, 2, 3] }]);
        let tags = json!([{ "name": "urgent", "tag_fg": "#fff" }]);
        let custom_fields = json!([{ "id": "cf1", "value": { "nested": true } }]);
        let dependencies = json!(["dep1", "dep2"]);
        let linked_tasks = json!([{ "link_id": "l1" }]);
        let list = json!({ "id": "901", "name": "Sprint 4" });
        let project = json!({ "id": "p1" });
        let folder = json!({ "id": "f1", "hidden": false });
        let space = json!({ "id": "s1" });

        let raw = json!({
            "id": "abc",
            "checklists": checklists.clone(),
            "tags": tags.clone(),
            "custom_fields": custom_fields.clone(),
            "dependencies": dependencies.clone(),
            "linked_tasks": linked_tasks.clone(),
            "list": list.clone(),
            "project": project.clone(),
            "folder": folder.clone(),
            "space": space.clone()
        });
        let task = parse_task(&raw).unwrap();

        assert_eq!(Value::Array(task.checklists.clone()), checklists);
        assert_eq!(Value::Array(task.tags.clone()), tags);
        assert_eq!(Value::Array(task.custom_fields.clone()), custom_fields);
        assert_eq!(Value::Array(task.dependencies.clone()), dependencies);
        assert_eq!(Value::Array(task.linked_tasks.clone()), linked_tasks);
        assert_eq!(task.list, list);
        assert_eq!(task.project, project);
        assert_eq!(task.folder, folder);
        assert_eq!(task.space, space);
    }

    #[test]
    fn test_parse_task_full() {
        let raw = json!({
            "id": "9hz",
            "name": "Updated Task Name",
            "text_content": "Updated Task Content",
            "description": "Updated Task Content",
            "status": {
                "status": "in progress",
                "color": "#d3d3d3",
                "type": "custom",
                "orderindex": 1
            },
            "orderindex": "1.00000000000000000000000000000000",
            "date_created": "1567780450202",
            "date_updated": "1567780450202",
            "date_closed": null,
            "date_done": null,
            "creator": {
                "id": 183,
                "username": "John Doe",
                "email": "john@example.com",
                "color": "#827718",
                "profilePicture": "https://attachments.clickup.com/profile.jpg"
            },
            "assignees": [{ "id": 184, "username": "Jane" }],
            "watchers": [{ "id": 183 }, { "id": 184 }],
            "checklists": [],
            "tags": [],
            "parent": "8hz",
            "priority": { "id": "1", "priority": "urgent", "color": "#f50000", "orderindex": "1" },
            "due_date": "1567780450202",
            "start_date": null,
            "points": 3,
            "time_estimate": 8640000,
            "time_spent": 120000,
            "custom_fields": [],
            "dependencies": [],
            "linked_tasks": [],
            "team_id": "1234",
            "url": "https://app.clickup.com/t/9hz",
            "permission_level": "create",
            "list": { "id": "123" },
            "project": { "id": "456" },
            "folder": { "id": "456" },
            "space": { "id": "789" }
        });
        let task = parse_task(&raw).unwrap();

        assert_eq!(task.id, "9hz");
        assert_eq!(task.name, "Updated Task Name");
        assert_eq!(task.status.status, "in progress");
        assert_eq!(task.status.orderindex, 1);
        assert_eq!(task.creator.id, 183);
        assert_eq!(task.assignees.len(), 1);
        assert_eq!(task.assignees[0].username, "Jane");
        assert_eq!(task.watchers.len(), 2);
        assert_eq!(task.parent.as_deref(), Some("8hz"));
        let priority = task.priority.as_ref().unwrap();
        assert_eq!(priority.priority, "urgent");
        assert_eq!(priority.orderindex, "1");
        assert_eq!(task.due_date.as_deref(), Some("1567780450202"));
        assert_eq!(task.start_date, None);
        assert_eq!(task.points, Some(3));
        assert_eq!(task.time_estimate, Some(8640000));
        assert_eq!(task.time_spent, Some(120000));
        assert_eq!(task.team_id, "1234");
        assert_eq!(task.url, "https://app.clickup.com/t/9hz");
        assert_eq!(task.permission_level, "create");
    }

    #[test]
    fn test_parse_task_is_deterministic() {
        let raw = json!({
            "id": "abc",
            "name": "Same in, same out",
            "assignees": [{ "id": 1 }, { "id": 2 }],
            "priority": { "id": "3", "priority": "normal" }
        });
        assert_eq!(parse_task(&raw).unwrap(), parse_task(&raw).unwrap());
    }

    #[test]
    fn test_parse_task_null_status_is_default() {
        let task = parse_task(&json!({ "id": "abc", "status": null })).unwrap();
        assert_eq!(task.status, Status::default());
    }
}
