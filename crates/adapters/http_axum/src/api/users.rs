//! JSON handlers for user records.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use usercrud_app::ports::{Clock, UserRepository};
use usercrud_domain::error::ValidationError;
use usercrud_domain::id::UserId;
use usercrud_domain::user::{User, UserParams};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Success,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Success => Json("success").into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Success,
    MissingId,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Success => Json("success update").into_response(),
            Self::MissingId => {
                (StatusCode::INTERNAL_SERVER_ERROR, "must have id for param").into_response()
            }
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Success,
    MissingId,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Success => Json("delete success").into_response(),
            Self::MissingId => (StatusCode::OK, "param must not nil").into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<UserId, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingId);
    }
    UserId::from_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// `GET /users`
pub async fn list<R, C>(State(state): State<AppState<R, C>>) -> Result<ListResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /user/{id}`
pub async fn get<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let user_id = parse_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /user`
pub async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    Json(params): Json<UserParams>,
) -> Result<CreateResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.user_service.create_user(params).await?;
    Ok(CreateResponse::Success)
}

/// `POST /update/{id}`
pub async fn update<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    Json(params): Json<UserParams>,
) -> Result<UpdateResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let user_id = match parse_id(&id) {
        Ok(user_id) => user_id,
        Err(ValidationError::MissingId) => return Ok(UpdateResponse::MissingId),
        Err(err) => return Err(err.into()),
    };
    state.user_service.update_user(user_id, params).await?;
    Ok(UpdateResponse::Success)
}

/// `POST /update/`
pub async fn update_without_id() -> UpdateResponse {
    UpdateResponse::MissingId
}

/// `DELETE /delete/{id}`
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let user_id = match parse_id(&id) {
        Ok(user_id) => user_id,
        Err(ValidationError::MissingId) => return Ok(DeleteResponse::MissingId),
        Err(err) => return Err(err.into()),
    };
    state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::Success)
}

/// `DELETE /delete/`
pub async fn delete_without_id() -> DeleteResponse {
    DeleteResponse::MissingId
}
