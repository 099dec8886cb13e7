//! Validation schemas for the users endpoints.

use std::sync::LazyLock;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::request::Request;
use crate::validate::{Field, Location, Rule, Schema};

const USERNAME_EMPTY: &str = "Username cannot be empty";
const USERNAME_NOT_STRING: &str = "Username must be a string";
const USERNAME_LENGTH: &str = "Username must be between 3 and 32 characters";
const DISPLAY_NAME_NOT_STRING: &str = "Display name must be a string";

/// Body of a create: `username` is required.
pub(super) static NEW_USER: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(Location::Body)
        .field(
            Field::required("username")
                .rule(Rule::NotEmpty(USERNAME_EMPTY))
                .rule(Rule::IsString(USERNAME_NOT_STRING))
                .rule(Rule::Length { min: 3, max: 32, msg: USERNAME_LENGTH }),
        )
        .field(Field::optional("displayName").rule(Rule::IsString(DISPLAY_NAME_NOT_STRING)))
});

/// Body of a replace or partial update. No rules: only the known fields are
/// kept.
pub(super) static USER_FIELDS: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(Location::Body)
        .field(Field::optional("username"))
        .field(Field::optional("displayName"))
});

/// Query of the list endpoint.
pub(super) static LIST_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(Location::Query)
        .field(Field::optional("filter").rule(Rule::IsString("Filter must be a string")))
        .field(Field::optional("value").rule(Rule::IsString("Value must be a string")))
});

#[derive(Debug, Default, Deserialize)]
pub(super) struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Validates `input` and decodes the sanitized fields into `T`.
pub(super) fn check<T: DeserializeOwned>(schema: &Schema, input: &Value) -> Result<T, ApiError> {
    let sanitized = schema.validate(input).map_err(ApiError::Validation)?;
    Ok(serde_json::from_value(Value::Object(sanitized))?)
}

/// The request body as JSON.
///
/// An empty body, or one not sent as `application/json`, reads as `{}`.
pub(super) fn body(req: &Request) -> Result<Value, ApiError> {
    if req.body().trim_ascii().is_empty() || !is_json(req) {
        return Ok(Value::Object(Map::new()));
    }
    Ok(req.json()?)
}

fn is_json(req: &Request) -> bool {
    req.header("content-type")
        .and_then(|value| value.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/json"))
}

/// The query string as a JSON object of strings.
pub(super) fn query(req: &Request) -> Value {
    Value::Object(
        req.query_pairs()
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect(),
    )
}
