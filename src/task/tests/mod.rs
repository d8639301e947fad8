//! Unit tests for extraction task lifecycle.

mod domain_tests;
