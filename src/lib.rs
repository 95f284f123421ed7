//! A client library for the ClickUp v2 API.
//!
//! Wraps the workspace/team → space → folder → list → task resource
//! hierarchy behind a small synchronous client and converts raw task
//! JSON into explicitly-defined record types.
//!
//! ```no_run
//! use clickup_client::ClickUp;
//!
//! # fn main() -> Result<(), clickup_client::ClickUpError> {
//! let clickup = ClickUp::new("pk_personal_token");
//! for task in clickup.team_tasks("123", &[("include_closed", "true")])? {
//!     println!("{}: {}", task.id, task.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod clickup;
pub mod config;
pub mod error;

pub use clickup::{
    parse_priority, parse_status, parse_task, parse_user, ClickUp, ClickUpError, Priority, Status,
    Task, User,
};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
