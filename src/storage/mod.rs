//! This module defines the storage interface for users and its in-memory
//! implementation.
pub mod users;

pub use users::{InMemoryUserStore, StoreError, UserFilter, UserStore};
