//! JSON handler modules and the route table.

#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{delete, get, post};

use usercrud_app::ports::{Clock, UserRepository};

use crate::state::AppState;

/// Build the user routes.
///
/// The trailing-slash forms of `/update/` and `/delete/` are the "empty id"
/// requests and get their own fixed answers.
pub fn routes<R, C>() -> Router<AppState<R, C>>
where
    R: UserRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/users", get(users::list::<R, C>))
        .route("/user", post(users::create::<R, C>))
        .route("/user/{id}", get(users::get::<R, C>))
        .route("/update/", post(users::update_without_id))
        .route("/update/{id}", post(users::update::<R, C>))
        .route("/delete/", delete(users::delete_without_id))
        .route("/delete/{id}", delete(users::delete::<R, C>))
}
