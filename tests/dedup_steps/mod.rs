//! Step definitions for example deduplication scenarios.

mod given;
mod then;
mod when;
pub mod world;
