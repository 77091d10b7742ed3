use super::events::TeamEvent;
use super::value_objects::{Capacity, Member};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// A named group of members owned by a single user. Member order is
/// significant: the reassignment engine walks members in this order.
///
/// # Invariants
/// - Name cannot be empty
/// - Every member name is non-empty
/// - Every member capacity is within `0..=5`
/// - Member ids are unique within the team
///
/// # Example
/// ```
/// use smart_task_api::domain::team::Team;
/// use smart_task_api::domain::team::value_objects::Capacity;
/// use uuid::Uuid;
///
/// let (mut team, events) = Team::new("Platform".to_string(), Uuid::new_v4())
///     .expect("valid team");
/// team.add_member("Alice".to_string(), None, Capacity::new(3).unwrap())
///     .expect("valid member");
///
/// assert_eq!(team.name(), "Platform");
/// assert_eq!(team.members().len(), 1);
/// assert!(!events.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    owner_id: Uuid,
    members: Vec<Member>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team aggregate with no members
    ///
    /// # Arguments
    /// * `name` - The team's name (cannot be empty)
    /// * `owner_id` - ID of the user owning the team
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and events generated
    /// * `Err(String)` - If the name is empty
    pub fn new(name: String, owner_id: Uuid) -> Result<(Self, Vec<TeamEvent>), String> {
        if name.trim().is_empty() {
            return Err("Team name required".to_string());
        }

        let team = Self {
            id: Uuid::new_v4(),
            name,
            owner_id,
            members: Vec::new(),
            created_at: Utc::now(),
        };

        let events = vec![TeamEvent::Created {
            team_id: team.id,
            name: team.name.clone(),
            owner_id: team.owner_id,
        }];

        Ok((team, events))
    }

    /// Appends a member to the end of the member list
    ///
    /// # Returns
    /// * `Ok((Uuid, TeamEvent))` - The new member's id and a MemberAdded event
    /// * `Err(String)` - If the member name is empty
    pub fn add_member(
        &mut self,
        name: String,
        role: Option<String>,
        capacity: Capacity,
    ) -> Result<(Uuid, TeamEvent), String> {
        if name.trim().is_empty() {
            return Err("Member name required".to_string());
        }

        let member = Member::new(name, role, capacity);
        let member_id = member.id;
        self.members.push(member);

        Ok((
            member_id,
            TeamEvent::MemberAdded {
                team_id: self.id,
                member_id,
                capacity: capacity.value(),
            },
        ))
    }

    /// Removes a member, keeping the order of the remaining ones
    pub fn remove_member(&mut self, member_id: Uuid) -> Result<TeamEvent, String> {
        let idx = self
            .members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| format!("Member not found: {}", member_id))?;

        self.members.remove(idx);

        Ok(TeamEvent::MemberRemoved {
            team_id: self.id,
            member_id,
        })
    }

    /// Returns true if the given user owns this team
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ID of the owning user
    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    /// Returns the members in list order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        owner_id: Uuid,
        members: Vec<Member>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner_id,
            members,
            created_at,
        }
    }
}
