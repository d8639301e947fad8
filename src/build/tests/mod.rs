//! Unit tests for build orchestration.
