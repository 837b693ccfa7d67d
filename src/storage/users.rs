//! This module defines the storage interface and implementation for users.
use crate::logging::{msg, Logger};
use crate::types::User;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;

const PREALLOCATE_USERS: usize = 100;

/// Errors a user store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Substring criteria for searching users.
///
/// Empty strings count as absent criteria.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl UserFilter {
    fn criteria(&self) -> [Option<&str>; 4] {
        [&self.name, &self.phone_number, &self.country, &self.city]
            .map(|c| c.as_deref().filter(|value| !value.is_empty()))
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.criteria().iter().all(Option::is_none)
    }

    /// Whether every set criterion is a substring of the matching field.
    pub fn matches(&self, user: &User) -> bool {
        let fields = [
            &user.name,
            &user.phone_number,
            &user.country,
            &user.city,
        ];

        self.criteria()
            .into_iter()
            .zip(fields)
            .all(|(criterion, field)| criterion.map_or(true, |c| field.contains(c)))
    }
}

/// A trait for storing and searching users.
///
/// Every call takes the logger of the operation on whose behalf it runs, so
/// storage details end up in that operation's log.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Stores `users`, keeping their order.
    ///
    /// # Errors
    ///
    /// This function will return an error if the users cannot be stored.
    async fn create_users(&self, users: Vec<User>, log: &dyn Logger) -> Result<(), StoreError>;

    /// Returns every user matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// This function will return an error if the store cannot be read.
    async fn search_users(
        &self,
        filter: &UserFilter,
        log: &dyn Logger,
    ) -> Result<Vec<User>, StoreError>;
}

/// A `UserStore` kept in memory for the lifetime of the process.
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::with_capacity(PREALLOCATE_USERS))
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Returns a copy of all stored users.
    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_users(&self, users: Vec<User>, log: &dyn Logger) -> Result<(), StoreError> {
        log.debug(msg!("Storing {} users: {:?}", users.len(), users.clone()));

        let mut stored = self.users.write().await;
        stored.extend(users);
        log.debug(msg!("InMemoryUserStore now holds {} users", stored.len()));
        Ok(())
    }

    async fn search_users(
        &self,
        filter: &UserFilter,
        log: &dyn Logger,
    ) -> Result<Vec<User>, StoreError> {
        log.debug(msg!("SearchUsers filter: {:?}", filter.clone()));

        let stored = self.users.read().await;
        let results: Vec<User> = stored
            .iter()
            .filter(|user| filter.matches(user))
            .cloned()
            .inspect(|user| log.debug(msg!("SearchUsers selected: {:?}", user.clone())))
            .collect();

        Ok(results)
    }
}
