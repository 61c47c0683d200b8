//! Integration tests driving the full router over the in-memory store

mod api_tests;
