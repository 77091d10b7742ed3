// Capacity-constrained task reassignment
//
// snapshot   -> per-member capacity records, overflow detection, target selection
// candidates -> eviction order of an overloaded member's tasks
// engine     -> greedy per-member drain producing the moves to apply
// recorder   -> audit entries for applied moves
// service    -> loads a team, applies the plan through the repositories

pub mod candidates;
pub mod engine;
pub mod errors;
pub mod recorder;
pub mod service;
pub mod snapshot;

pub use engine::{RebalancePlan, Rebalancer, Reassignment};
pub use errors::{RebalanceError, RebalanceResult};
pub use recorder::ActivityRecorder;
pub use service::{RebalanceReport, RebalanceService};
pub use snapshot::{CapacityRecord, CapacitySnapshot};
