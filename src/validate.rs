//! Schema-driven input validation.
//!
//! A [`Schema`] lists fields and, for each, an ordered list of [`Rule`]s.
//! Every rule of every checked field runs; failures accumulate rather than
//! stopping at the first one. The sanitized output keeps only the schema's
//! fields that were actually present in the input.

use serde::Serialize;
use serde_json::{Map, Value};

/// Where a validated value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Query,
}

/// A single failed rule on a single field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    kind: &'static str,
    location: Location,
    path: String,
    msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl FieldError {
    pub fn new(
        location: Location,
        path: impl Into<String>,
        msg: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        Self { kind: "field", location, path: path.into(), msg: msg.into(), value }
    }

    pub fn path(&self) -> &str { &self.path }
    pub fn msg(&self) -> &str { &self.msg }
}

/// A check applied to one field's value.
#[derive(Clone, Debug)]
pub enum Rule {
    /// Present, non-null, and non-empty once rendered as text.
    NotEmpty(&'static str),
    /// A JSON string.
    IsString(&'static str),
    /// Text length, in characters, within `min..=max`.
    Length { min: usize, max: usize, msg: &'static str },
}

impl Rule {
    fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            Self::NotEmpty(_) => !as_text(value).is_empty(),
            Self::IsString(_) => matches!(value, Some(Value::String(_))),
            Self::Length { min, max, .. } => {
                let len = as_text(value).chars().count();
                (*min..=*max).contains(&len)
            }
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotEmpty(msg) | Self::IsString(msg) | Self::Length { msg, .. } => *msg,
        }
    }
}

/// Renders a value the way a form field would read it. Missing and `null`
/// render as the empty string.
fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// One named field and the rules applied to it.
#[derive(Clone, Debug)]
pub struct Field {
    name: &'static str,
    optional: bool,
    rules: Vec<Rule>,
}

impl Field {
    /// A field that is checked even when absent.
    pub fn required(name: &'static str) -> Self {
        Self { name, optional: false, rules: Vec::new() }
    }

    /// A field whose rules are skipped when it is absent.
    pub fn optional(name: &'static str) -> Self {
        Self { name, optional: true, rules: Vec::new() }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// An ordered set of fields validated together.
#[derive(Clone, Debug)]
pub struct Schema {
    location: Location,
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(location: Location) -> Self {
        Self { location, fields: Vec::new() }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Validates `input` against every field.
    ///
    /// Non-object input is treated as an object with no fields. On success
    /// the returned map holds the schema fields present in `input`, and
    /// nothing else.
    pub fn validate(&self, input: &Value) -> Result<Map<String, Value>, Vec<FieldError>> {
        let empty = Map::new();
        let object = input.as_object().unwrap_or(&empty);

        let mut errors = Vec::new();
        let mut sanitized = Map::new();

        for field in &self.fields {
            let value = object.get(field.name);
            if value.is_none() && field.optional {
                continue;
            }
            for rule in &field.rules {
                if !rule.passes(value) {
                    errors.push(FieldError::new(
                        self.location,
                        field.name,
                        rule.message(),
                        value.cloned(),
                    ));
                }
            }
            if let Some(value) = value {
                sanitized.insert(field.name.to_owned(), value.clone());
            }
        }

        if errors.is_empty() { Ok(sanitized) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn username_schema() -> Schema {
        Schema::new(Location::Body)
            .field(
                Field::required("username")
                    .rule(Rule::NotEmpty("empty"))
                    .rule(Rule::IsString("not a string"))
                    .rule(Rule::Length { min: 3, max: 32, msg: "length" }),
            )
            .field(Field::optional("displayName").rule(Rule::IsString("display not a string")))
    }

    fn messages(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(FieldError::msg).collect()
    }

    #[test]
    fn accepts_valid_input_and_drops_unknown_fields() {
        let out = username_schema()
            .validate(&json!({ "username": "Ann", "admin": true }))
            .unwrap();
        assert_eq!(Value::Object(out), json!({ "username": "Ann" }));
    }

    #[test]
    fn accumulates_every_failing_rule() {
        let errors = username_schema().validate(&json!({})).unwrap_err();
        assert_eq!(messages(&errors), ["empty", "not a string", "length"]);
        assert!(errors.iter().all(|e| e.path() == "username"));
    }

    #[test]
    fn numbers_are_not_strings_but_have_length() {
        let errors = username_schema().validate(&json!({ "username": 12345 })).unwrap_err();
        assert_eq!(messages(&errors), ["not a string"]);
    }

    #[test]
    fn too_short_fails_only_length() {
        let errors = username_schema().validate(&json!({ "username": "a" })).unwrap_err();
        assert_eq!(messages(&errors), ["length"]);
        assert_eq!(errors[0].path(), "username");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let name = "é".repeat(32);
        assert!(username_schema().validate(&json!({ "username": name })).is_ok());
        let name = "é".repeat(33);
        assert!(username_schema().validate(&json!({ "username": name })).is_err());
    }

    #[test]
    fn optional_fields_are_checked_when_present() {
        let errors = username_schema()
            .validate(&json!({ "username": "Ann", "displayName": 4 }))
            .unwrap_err();
        assert_eq!(messages(&errors), ["display not a string"]);
    }

    #[test]
    fn non_object_input_has_no_fields() {
        let errors = username_schema().validate(&json!(["Ann"])).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn errors_serialise_with_location_and_value() {
        let errors = username_schema().validate(&json!({ "username": "a" })).unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors[0]).unwrap(),
            json!({
                "type": "field",
                "location": "body",
                "path": "username",
                "msg": "length",
                "value": "a",
            }),
        );
    }
}
