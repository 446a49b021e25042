//! Personal task management.
//!
//! Every task belongs to exactly one owner and every operation is scoped to
//! that owner. Tasks point at seeded priority and status records, carry a
//! progress percentage, and are listed either as active work or as fully
//! completed history. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
