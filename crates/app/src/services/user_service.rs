//! User service: use-cases for managing user records.

use usercrud_domain::error::{CrudError, NotFoundError};
use usercrud_domain::id::UserId;
use usercrud_domain::time::truncate_to_seconds;
use usercrud_domain::user::{User, UserParams};

use crate::ports::{Clock, SystemClock, UserRepository};

/// Application service for user CRUD operations.
///
/// Reads the clock once per write so every record carries the time it was
/// actually created or changed.
pub struct UserService<R, C = SystemClock> {
    repo: R,
    clock: C,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository and the system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: UserRepository, C: Clock> UserService<R, C> {
    /// Create a new service with an explicit clock.
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, CrudError> {
        self.repo.get_all().await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, CrudError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Create a new user with a server-assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::Conflict`] if the id collides with an existing
    /// row, or a storage error from the repository.
    #[tracing::instrument(skip(self, params), fields(user_name = %params.name))]
    pub async fn create_user(&self, params: UserParams) -> Result<User, CrudError> {
        let user = User::from_params(params, self.clock.now());
        let created = self.repo.create(user).await?;
        tracing::debug!(id = %created.id, "user created");
        Ok(created)
    }

    /// Update name, age and address of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`CrudError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, params))]
    pub async fn update_user(&self, id: UserId, params: UserParams) -> Result<User, CrudError> {
        let now = truncate_to_seconds(self.clock.now());
        self.repo
            .update(id, params, now)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a user by id. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), CrudError> {
        self.repo.delete(id).await
    }
}

fn not_found(id: UserId) -> CrudError {
    NotFoundError {
        entity: "User",
        id: id.to_string(),
    }
    .into()
}
