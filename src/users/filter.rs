//! Substring filtering on a named user field.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::ApiError;
use crate::validate::{FieldError, Location};

use super::User;

type Accessor = fn(&User) -> Option<Cow<'_, str>>;

fn id(user: &User) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(user.id.to_string()))
}

fn username(user: &User) -> Option<Cow<'_, str>> {
    user.username.as_deref().map(Cow::Borrowed)
}

fn display_name(user: &User) -> Option<Cow<'_, str>> {
    user.display_name.as_deref().map(Cow::Borrowed)
}

/// Filterable fields by their JSON name.
const FIELDS: &[(&str, Accessor)] = &[
    ("id", id),
    ("username", username),
    ("displayName", display_name),
];

/// Keeps users whose named field contains a substring.
#[derive(Clone, Debug)]
pub struct FieldFilter {
    accessor: Accessor,
    needle: String,
}

impl FieldFilter {
    /// Fails with a `filter` validation error for names that are not user
    /// fields.
    pub fn new(field: &str, needle: impl Into<String>) -> Result<Self, ApiError> {
        let accessor = FIELDS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, accessor)| *accessor)
            .ok_or_else(|| {
                ApiError::Validation(vec![FieldError::new(
                    Location::Query,
                    "filter",
                    "Filter must name a user field",
                    Some(Value::String(field.to_owned())),
                )])
            })?;
        Ok(Self { accessor, needle: needle.into() })
    }

    /// A user with no value for the field never matches.
    pub fn matches(&self, user: &User) -> bool {
        (self.accessor)(user).is_some_and(|text| text.contains(self.needle.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::Store;

    fn matching(field: &str, needle: &str) -> Vec<i64> {
        let filter = FieldFilter::new(field, needle).unwrap();
        Store::seeded().list().filter(|u| filter.matches(u)).map(|u| u.id).collect()
    }

    #[test]
    fn username_substring() {
        assert_eq!(matching("username", "an"), [1]);
        assert_eq!(matching("username", "ay"), [2, 4]);
        assert_eq!(matching("username", "AN"), Vec::<i64>::new());
    }

    #[test]
    fn display_name_and_id() {
        assert_eq!(matching("displayName", "u"), [1, 2, 3, 4, 5]);
        assert_eq!(matching("id", "3"), [3]);
    }

    #[test]
    fn absent_field_never_matches() {
        let user = User { id: 9, username: None, display_name: None };
        assert!(!FieldFilter::new("displayName", "").unwrap().matches(&user));
        assert!(!FieldFilter::new("username", "").unwrap().matches(&user));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = FieldFilter::new("password", "x").unwrap_err();
        let ApiError::Validation(errors) = err else { panic!("expected validation error") };
        assert_eq!(errors[0].path(), "filter");
    }
}
