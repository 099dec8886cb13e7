//! Resolves the `{id}` path parameter to a position in the store.

use tokio::sync::MutexGuard;

use crate::error::ApiError;
use crate::request::Request;

use super::{Position, Store, UserId, Users};

/// A located record. The store stays locked for as long as this lives, so
/// `position` cannot go stale underneath the handler.
pub struct Resolved<'a> {
    pub store: MutexGuard<'a, Store>,
    pub position: Position,
}

/// Parses the `id` path parameter. Anything that is not an integer is a
/// bad request.
pub fn parse_id(req: &Request) -> Result<UserId, ApiError> {
    req.param("id")
        .and_then(|raw| raw.parse().ok())
        .ok_or(ApiError::BadRequest)
}

/// Parses the id, then locks the store and finds the record.
///
/// A malformed id fails before the store is touched. This never mutates
/// the store.
pub async fn resolve_user<'a>(req: &Request, users: &'a Users) -> Result<Resolved<'a>, ApiError> {
    let id = parse_id(req)?;
    let store = users.lock().await;
    let position = store.find_by_id(id).ok_or(ApiError::NotFound)?;
    Ok(Resolved { store, position })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::method::Method;

    fn with_id(id: &str) -> Request {
        let mut req = Request::new(Method::Get, "/api/users", "");
        req.params.insert("id".to_owned(), id.to_owned());
        req
    }

    #[tokio::test]
    async fn finds_existing_record() {
        let users = Users::new(Store::seeded());
        let resolved = resolve_user(&with_id("3"), &users).await.unwrap();
        assert_eq!(resolved.store.get(resolved.position).unwrap().username.as_deref(), Some("Rey"));
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let users = Users::new(Store::seeded());
        for id in ["0", "6", "-1", "9999999"] {
            let err = resolve_user(&with_id(id), &users).await.err();
            assert!(matches!(err, Some(ApiError::NotFound)), "id {id}");
        }
    }

    #[tokio::test]
    async fn malformed_id_never_waits_for_the_store() {
        let users = Users::new(Store::seeded());
        let _held = users.lock().await;
        for id in ["abc", "1.5", "", "12abc", "99999999999999999999"] {
            let res = tokio::time::timeout(Duration::from_secs(1), resolve_user(&with_id(id), &users))
                .await
                .expect("resolver touched the locked store");
            assert!(matches!(res.err(), Some(ApiError::BadRequest)), "id {id:?}");
        }
    }

    #[test]
    fn missing_param_is_bad_request() {
        let req = Request::new(Method::Get, "/api/users", "");
        assert!(matches!(parse_id(&req), Err(ApiError::BadRequest)));
    }
}
