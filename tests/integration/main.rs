//! Integration test harness

mod api_tests;
