// Task domain module
// Contains the task entity and its priority/status value objects

#![allow(clippy::module_inception)]

pub mod task;
pub mod value_objects;

pub use task::Task;
pub use value_objects::{TaskPriority, TaskStatus};
