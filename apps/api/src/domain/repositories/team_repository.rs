use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::team::Team;

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams together with
/// their ordered member lists.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team and its members (insert or update)
    async fn save(&self, team: &Team) -> Result<(), String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;

    /// Find all teams owned by a specific user
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String>;
}
