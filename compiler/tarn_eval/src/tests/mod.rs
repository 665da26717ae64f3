//! Program-level tests that cut across modules.
//!
//! `tree` holds parse-tree constructors shared with the per-module tests.


mod call_tests;
