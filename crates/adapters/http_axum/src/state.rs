//! Shared application state for axum handlers.

use std::sync::Arc;

use usercrud_app::ports::{Clock, SystemClock, UserRepository};
use usercrud_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and clock types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R, C = SystemClock> {
    /// User CRUD service.
    pub user_service: Arc<UserService<R, C>>,
}

impl<R, C> Clone for AppState<R, C> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: UserRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(user_service: UserService<R, C>) -> Self {
        Self {
            user_service: Arc::new(user_service),
        }
    }
}
