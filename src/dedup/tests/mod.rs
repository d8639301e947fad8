//! Unit tests for example deduplication.
