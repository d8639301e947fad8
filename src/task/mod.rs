//! Extraction task lifecycle.
//!
//! An extraction task mines one project: it checks the project is new,
//! binds it to the registered source API, acquires and builds its sources,
//! extracts usage examples, removes near-duplicates and persists the result.
//! Whatever happens, a started task ends `Finished` with its result recorded.
//!
//! - Domain types in [`domain`]
//! - The stage pipeline in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
