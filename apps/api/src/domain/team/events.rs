use uuid::Uuid;

/// Domain events that occur within the Team aggregate
///
/// These events represent important business moments in a team's lifecycle.
/// They are used for:
/// - Publishing to external systems
/// - Auditing team activities
///
/// # Example
/// ```
/// use smart_task_api::domain::team::events::TeamEvent;
/// use uuid::Uuid;
///
/// let event = TeamEvent::Created {
///     team_id: Uuid::new_v4(),
///     name: "Platform".to_string(),
///     owner_id: Uuid::new_v4(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        /// ID of the newly created team
        team_id: Uuid,
        /// The team's display name
        name: String,
        /// User who owns the team
        owner_id: Uuid,
    },
    /// Fired when a member joins the team
    MemberAdded {
        team_id: Uuid,
        member_id: Uuid,
        capacity: usize,
    },
    /// Fired when a member leaves the team
    MemberRemoved { team_id: Uuid, member_id: Uuid },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
            TeamEvent::MemberAdded { team_id, .. } => *team_id,
            TeamEvent::MemberRemoved { team_id, .. } => *team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_created_event() {
        let team_id = Uuid::new_v4();
        let event = TeamEvent::Created {
            team_id,
            name: "Test team".to_string(),
            owner_id: Uuid::new_v4(),
        };

        assert_eq!(event.team_id(), team_id);
    }

    #[test]
    fn member_events_carry_team_id() {
        let team_id = Uuid::new_v4();
        let member_id = Uuid::new_v4();

        let added = TeamEvent::MemberAdded {
            team_id,
            member_id,
            capacity: 2,
        };
        let removed = TeamEvent::MemberRemoved { team_id, member_id };

        assert_eq!(added.team_id(), team_id);
        assert_eq!(removed.team_id(), team_id);
    }
}
