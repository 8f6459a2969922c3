//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the storage and hashing adapters and HTTP handling.

pub mod adapters;
pub mod http;

pub use adapters::{InMemoryUserStore, PasswordHasher, UserStore};
