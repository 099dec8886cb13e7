//! Error types.
//!
//! [`Error`] surfaces infrastructure failures: binding to a port or serving
//! connections. [`ApiError`] is a request-level failure that short-circuits
//! a handler and becomes a 4xx response.

use serde_json::json;
use thiserror::Error;

use crate::response::{IntoResponse, Json, Response};
use crate::status::Status;
use crate::validate::FieldError;

/// The error type returned by the server's fallible operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// A request that cannot be served as asked.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing identifier.
    #[error("bad request")]
    BadRequest,

    /// Well-formed identifier with no matching record.
    #[error("not found")]
    NotFound,

    /// One or more fields failed validation.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The body is not JSON.
    #[error("malformed body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest => Response::status(Status::BadRequest),
            Self::NotFound => Response::status(Status::NotFound),
            Self::Validation(errors) => {
                (Status::BadRequest, Json(json!({ "error": errors }))).into_response()
            }
            Self::MalformedBody(e) => (
                Status::BadRequest,
                Json(json!({
                    "error": [{ "type": "body", "location": "body", "msg": e.to_string() }],
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Location;

    #[test]
    fn bare_errors_have_no_body() {
        let res = ApiError::BadRequest.into_response();
        assert_eq!(res.status_code(), 400);
        assert!(res.body().is_empty());

        let res = ApiError::NotFound.into_response();
        assert_eq!(res.status_code(), 404);
        assert!(res.body().is_empty());
    }

    #[test]
    fn validation_errors_are_listed_under_error() {
        let err = ApiError::Validation(vec![FieldError::new(
            Location::Body,
            "username",
            "Username cannot be empty",
            None,
        )]);
        let res = err.into_response();
        assert_eq!(res.status_code(), 400);

        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["error"][0]["path"], "username");
        assert_eq!(body["error"][0]["location"], "body");
        assert_eq!(body["error"][0]["msg"], "Username cannot be empty");
    }

    #[test]
    fn malformed_body_is_a_bad_request() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let res = ApiError::from(e).into_response();
        assert_eq!(res.status_code(), 400);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["error"][0]["type"], "body");
    }
}
