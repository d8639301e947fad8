//! Step definitions for extraction task scenarios.

mod given;
mod then;
mod when;
pub mod world;
