//! Unit tests for the extraction boundary.

mod adapter_tests;
