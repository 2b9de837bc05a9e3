//! Storage port: repository trait for user persistence.

use std::future::Future;

use usercrud_domain::error::CrudError;
use usercrud_domain::id::UserId;
use usercrud_domain::time::Timestamp;
use usercrud_domain::user::{User, UserParams};

/// Repository for persisting and querying [`User`]s.
///
/// Every method issues a single statement against the backing store.
pub trait UserRepository {
    /// Insert a new user.
    ///
    /// Fails with [`CrudError::Conflict`] when the identifier already exists.
    fn create(&self, user: User) -> impl Future<Output = Result<User, CrudError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, CrudError>> + Send;

    /// Get all users, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, CrudError>> + Send;

    /// Overwrite name, age and address and set `updated_at`.
    ///
    /// Returns the stored record after the update, or `None` when no row
    /// matches `id`.
    fn update(
        &self,
        id: UserId,
        params: UserParams,
        updated_at: Timestamp,
    ) -> impl Future<Output = Result<Option<User>, CrudError>> + Send;

    /// Delete a user by its unique identifier. Missing rows are not an error.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), CrudError>> + Send;
}
