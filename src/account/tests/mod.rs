//! Unit tests for account credentials and signup.
