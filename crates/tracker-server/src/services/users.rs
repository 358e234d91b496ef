//! User service

use std::sync::Arc;
use tracing::{error, info};
use tracker_core::{NewUser, Result, TrackerError, User, UserStore};

pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Persist a user. Empty and duplicate usernames are accepted.
    pub async fn create_user(&self, username: &str) -> Result<User> {
        info!("Creating user: username={:?}", username);

        let user = self
            .store
            .create_user(&NewUser::new(username))
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                TrackerError::UserCreationFailed(e)
            })?;

        info!("User created: id={}", user.id);
        Ok(user)
    }

    /// Every user, in insertion order
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.store.list_users().await.map_err(|e| {
            error!("Failed to list users: {}", e);
            TrackerError::UserListingFailed(e)
        })
    }
}
