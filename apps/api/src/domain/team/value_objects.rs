use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on simultaneously assigned tasks for a single member
pub const MAX_CAPACITY: u8 = 5;

/// Number of tasks a member can hold at the same time
///
/// # Invariants
/// - Value is within `0..=MAX_CAPACITY`
/// - Is immutable after construction
///
/// # Example
/// ```
/// use smart_task_api::domain::team::value_objects::Capacity;
///
/// let capacity = Capacity::new(3).expect("valid capacity");
/// assert_eq!(capacity.value(), 3);
/// assert!(Capacity::new(6).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Capacity(u8);

impl Capacity {
    /// Creates a new Capacity value object
    ///
    /// # Returns
    /// * `Ok(Capacity)` - If the value is between 0 and 5
    /// * `Err(String)` - Otherwise
    pub fn new(value: i64) -> Result<Self, String> {
        if (0..=i64::from(MAX_CAPACITY)).contains(&value) {
            Ok(Capacity(value as u8))
        } else {
            Err(format!(
                "capacity must be between 0 and {} (got {})",
                MAX_CAPACITY, value
            ))
        }
    }

    /// Returns the capacity as a plain count
    pub fn value(&self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Capacity::new(value)
    }
}

impl From<Capacity> for i64 {
    fn from(capacity: Capacity) -> Self {
        i64::from(capacity.0)
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member of a team
///
/// Members are owned by their team; `id` is stable within the team and is
/// what tasks reference through `assigned_member`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub capacity: Capacity,
}

impl Member {
    /// Creates a member with a fresh id
    pub fn new(name: impl Into<String>, role: Option<String>, capacity: Capacity) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            capacity,
        }
    }
}
