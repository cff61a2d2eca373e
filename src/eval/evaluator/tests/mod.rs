//! Tests for the evaluator, its configuration and reports

mod core_tests;
