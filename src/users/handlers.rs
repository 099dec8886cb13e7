//! `/api/users` route handlers.
//!
//! Each handler runs its stages in order: resolve the id (when the route has
//! one), validate the input, then act on the store. A failing stage returns
//! its [`ApiError`] through `?` and nothing after it runs.

use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::status::Status;

use super::schema::{self, LIST_QUERY, ListQuery, NEW_USER, USER_FIELDS};
use super::{FieldFilter, NewUser, Resolved, User, UserFields, resolve_user};

/// `GET /api/users[?filter=<field>&value=<substring>]`
///
/// Filters only when both parameters are present and non-empty.
pub async fn list_users(req: Request, state: AppState) -> Result<Json<Vec<User>>, ApiError> {
    let query: ListQuery = schema::check(&LIST_QUERY, &schema::query(&req))?;
    let filter = match (query.filter, query.value) {
        (Some(field), Some(value)) if !field.is_empty() && !value.is_empty() => {
            Some(FieldFilter::new(&field, value)?)
        }
        _ => None,
    };

    let store = state.users.lock().await;
    let users = store
        .list()
        .filter(|user| filter.as_ref().is_none_or(|f| f.matches(user)))
        .cloned()
        .collect();
    Ok(Json(users))
}

/// `POST /api/users`
pub async fn create_user(req: Request, state: AppState) -> Result<Response, ApiError> {
    let new: NewUser = schema::check(&NEW_USER, &schema::body(&req)?)?;
    let user = state.users.lock().await.insert(new);
    debug!(id = user.id, username = ?user.username, "user created");

    let location = format!("/api/users/{}", user.id);
    Ok((Status::Created, Json(user)).into_response().with_header("location", &location))
}

/// `GET /api/users/{id}`
pub async fn get_user(req: Request, state: AppState) -> Result<Json<User>, ApiError> {
    let Resolved { store, position } = resolve_user(&req, &state.users).await?;
    let user = store.get(position).cloned().ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

/// `PUT /api/users/{id}`
pub async fn replace_user(req: Request, state: AppState) -> Result<Status, ApiError> {
    let Resolved { mut store, position } = resolve_user(&req, &state.users).await?;
    let fields: UserFields = schema::check(&USER_FIELDS, &schema::body(&req)?)?;
    let user = store.replace_at(position, fields).ok_or(ApiError::NotFound)?;
    debug!(id = user.id, "user replaced");
    Ok(Status::Ok)
}

/// `PATCH /api/users/{id}`
pub async fn merge_user(req: Request, state: AppState) -> Result<Status, ApiError> {
    let Resolved { mut store, position } = resolve_user(&req, &state.users).await?;
    let patch: UserFields = schema::check(&USER_FIELDS, &schema::body(&req)?)?;
    let user = store.merge_at(position, patch).ok_or(ApiError::NotFound)?;
    debug!(id = user.id, "user updated");
    Ok(Status::Ok)
}

/// `DELETE /api/users/{id}`
pub async fn delete_user(req: Request, state: AppState) -> Result<Status, ApiError> {
    let Resolved { mut store, position } = resolve_user(&req, &state.users).await?;
    let user = store.remove_at(position).ok_or(ApiError::NotFound)?;
    debug!(id = user.id, "user deleted");
    Ok(Status::Ok)
}
