//! Unit tests for source acquisition.

mod dispatcher_tests;
