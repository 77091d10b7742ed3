// Project domain module
// A project belongs to exactly one team; tasks belong to projects

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A project owned by a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: Uuid,
    team_id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project for a team
    ///
    /// # Returns
    /// * `Ok(Project)` - New project
    /// * `Err(String)` - If the name is empty
    pub fn new(team_id: Uuid, name: String, description: Option<String>) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Project name required".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            team_id,
            name,
            description,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Project from persistence layer data
    pub fn from_persistence(
        id: Uuid,
        team_id: Uuid,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            name,
            description,
            created_at,
        }
    }
}
