//! Helpers for turning captured panics into error detail.

use std::any::Any;

/// Extracts a readable message from a panic payload.
///
/// Panics raised with a string literal or a formatted message yield that
/// message; any other payload yields a fixed placeholder.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
