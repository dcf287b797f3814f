//! Declarative request validation.
//!
//! A [`Validator`] holds per-field rule lists. Every rule of every field is
//! checked, so a single response reports all failures at once. Only when no
//! rule fails is the input converted into a typed value via [`FromInput`].

use salvo::{oapi::ToSchema, prelude::Request};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

use crate::errors::ApiError;

mod rules;

pub(crate) use rules::{Rule, boolean, integer, number, text};

/// Where a validated field was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Location {
    /// Path parameter
    Params,

    /// JSON request body
    Body,
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldError {
    /// Always `field`
    #[serde(rename = "type")]
    pub kind: String,

    /// The received value, when one was sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// User-facing message of the failed rule
    pub msg: String,

    /// Name of the field
    pub path: String,

    /// Where the field was read from
    pub location: Location,
}

/// Path parameters and body fields of one request.
#[derive(Debug, Default)]
pub(crate) struct Input {
    params: Map<String, Value>,
    body: Map<String, Value>,
}

impl Input {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn with_param(mut self, name: &str, value: String) -> Self {
        self.params.insert(name.to_owned(), Value::String(value));
        self
    }

    /// Use `body` as the body fields. Anything but a JSON object counts as an
    /// empty body.
    #[must_use]
    pub(crate) fn with_body(mut self, body: Value) -> Self {
        self.body = match body {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        self
    }

    /// Read the request body as JSON; a missing or malformed body counts as empty.
    pub(crate) async fn with_request_body(self, req: &mut Request) -> Self {
        let body = req.parse_json::<Value>().await.unwrap_or_default();

        self.with_body(body)
    }

    pub(crate) fn get(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.get(field),
        }
    }

    pub(crate) fn param(&self, field: &str) -> Option<&Value> {
        self.get(Location::Params, field)
    }

    pub(crate) fn body(&self, field: &str) -> Option<&Value> {
        self.get(Location::Body, field)
    }
}

/// Typed value built from an [`Input`] that has already passed validation.
pub(crate) trait FromInput: Sized {
    /// `None` only if the input does not satisfy the rules this type relies on.
    fn from_input(input: &Input) -> Option<Self>;
}

#[derive(Debug)]
struct Check {
    rule: Rule,
    message: &'static str,
}

/// Rules for a single field, checked in declaration order.
#[derive(Debug)]
pub(crate) struct FieldRules {
    location: Location,
    field: &'static str,
    checks: Vec<Check>,
}

impl FieldRules {
    pub(crate) fn param(field: &'static str) -> Self {
        Self {
            location: Location::Params,
            field,
            checks: Vec::new(),
        }
    }

    pub(crate) fn body(field: &'static str) -> Self {
        Self {
            location: Location::Body,
            field,
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.checks.push(Check { rule, message });
        self
    }
}

#[derive(Debug, Default)]
pub(crate) struct Validator {
    fields: Vec<FieldRules>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    /// Every failed rule, ordered by field then rule declaration.
    pub(crate) fn validate(&self, input: &Input) -> Vec<FieldError> {
        self.fields
            .iter()
            .flat_map(|field| {
                let value = input.get(field.location, field.field);

                field
                    .checks
                    .iter()
                    .filter(move |check| !check.rule.check(value))
                    .map(move |check| FieldError {
                        kind: "field".to_owned(),
                        value: value.cloned(),
                        msg: check.message.to_owned(),
                        path: field.field.to_owned(),
                        location: field.location,
                    })
            })
            .collect()
    }

    /// Validate `input` and convert it into `T`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] listing every failed rule, or
    /// [`ApiError::Internal`] if `T` cannot be built from input these rules
    /// accepted.
    pub(crate) fn extract<T: FromInput>(&self, input: &Input) -> Result<T, ApiError> {
        let errors = self.validate(input);

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        T::from_input(input).ok_or_else(|| {
            error!(
                "validated input could not be converted to {}",
                std::any::type_name::<T>()
            );

            ApiError::Internal
        })
    }
}
