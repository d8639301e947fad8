//! Best-effort compilation of acquired source trees.
//!
//! Builder plugins may generate compiled artifacts the extractor relies on.
//! No single plugin is required to succeed.

pub mod adapters;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
