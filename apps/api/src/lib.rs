//! Smart Task API Library
//!
//! Task-tracking backend whose core is a capacity-constrained task
//! reassignment engine: it moves or unassigns the lower-priority work of
//! over-committed team members and records every move for audit.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
