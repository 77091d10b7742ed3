// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod activity;
pub mod project;
pub mod rebalance;
pub mod repositories;
pub mod task;
pub mod team;
