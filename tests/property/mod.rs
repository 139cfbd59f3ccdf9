//! Property-based tests for target-string handling
