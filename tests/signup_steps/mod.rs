//! Step definitions for signup scenarios.

mod given;
mod when;
pub mod world;
