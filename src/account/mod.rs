//! Account credentials and signup.
//!
//! Usernames and passwords are checked against format rules before an
//! account is created, and usernames must be unique in the user store.
//! Password hashing and session handling stay behind ports.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
