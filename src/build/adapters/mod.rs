//! Adapter implementations of the builder port.

pub mod command;

pub use command::CommandBuilder;
