//! Infrastructure adapters module
//!
//! This module contains adapters for storage and password hashing.

pub mod user_store;
pub mod password_hasher;

pub use user_store::{InMemoryUserStore, UserStore};
pub use password_hasher::PasswordHasher;
