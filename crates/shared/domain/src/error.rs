//! Domain-level errors.
//!
//! A failed field constraint is the only error the schema layer produces.
//! It is independent of the HTTP layer that eventually reports it.

use std::borrow::Cow;

use thiserror::Error;

use crate::schema::Constraint;

/// A single field that violated one of its declared constraints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} {constraint}")]
pub struct ValidationFailure {
    /// Offending field, dotted when nested (`person.age`)
    pub field: Cow<'static, str>,
    /// The constraint the value did not satisfy
    pub constraint: Constraint,
}

impl ValidationFailure {
    /// Create a failure for a top-level field
    pub fn new(field: impl Into<Cow<'static, str>>, constraint: Constraint) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }

    /// Prefix the field name with the name of the enclosing object
    pub fn nested(self, parent: &str) -> Self {
        Self {
            field: Cow::Owned(format!("{}.{}", parent, self.field)),
            constraint: self.constraint,
        }
    }
}

/// Every constraint violation found while validating one input.
///
/// An empty collection is never returned as an error; see [`ValidationFailures::finish`].
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", join(.0))]
pub struct ValidationFailures(Vec<ValidationFailure>);

fn join(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationFailures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the failure of a field check, if any, and pass the value through.
    pub fn check<T>(&mut self, result: Result<T, ValidationFailure>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(failure) => {
                self.0.push(failure);
                None
            }
        }
    }

    /// Merge the failures of an embedded object, keeping its field names.
    pub fn merge<T>(&mut self, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(inner) => {
                self.0.extend(inner.0);
                None
            }
        }
    }

    /// Merge the failures of a nested object under `parent`.
    pub fn nest<T>(&mut self, parent: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(inner) => {
                self.0
                    .extend(inner.0.into_iter().map(|failure| failure.nested(parent)));
                None
            }
        }
    }

    /// The coerced value when nothing failed, otherwise every failure.
    ///
    /// `value` is `None` only when a check has already recorded a failure,
    /// so an empty collection is never returned as an error.
    pub fn finish<T>(self, value: Option<T>) -> DomainResult<T> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(self),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&ValidationFailure> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.0.iter()
    }

    /// Whether any failure concerns `field`
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|failure| failure.field == field)
    }
}

impl From<ValidationFailure> for ValidationFailures {
    fn from(failure: ValidationFailure) -> Self {
        Self(vec![failure])
    }
}

impl IntoIterator for ValidationFailures {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result type alias for schema validation
pub type DomainResult<T> = Result<T, ValidationFailures>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_field_and_constraint() {
        let failure = ValidationFailure::new("age", Constraint::GreaterThan(0));
        assert_eq!(failure.to_string(), "age must be > 0");
    }

    #[test]
    fn test_nested_failure_is_dotted() {
        let failure = ValidationFailure::new("city", Constraint::Required).nested("location");
        assert_eq!(failure.field, "location.city");
    }

    #[test]
    fn test_empty_collection_is_ok() {
        assert_eq!(ValidationFailures::new().finish(Some(20)), Ok(20));
    }

    #[test]
    fn test_finish_keeps_failures() {
        let mut failures = ValidationFailures::new();
        let age = failures.check(Err::<i64, _>(ValidationFailure::new("age", Constraint::Required)));

        let err = failures.finish(age).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.contains_field("age"));
    }

    #[test]
    fn test_collects_every_failure() {
        let mut failures = ValidationFailures::new();
        failures.check::<()>(Err(ValidationFailure::new("first_name", Constraint::MinLength(1))));
        failures.check(Ok(20));
        failures.nest::<()>(
            "person",
            Err(ValidationFailure::new("age", Constraint::AtMost(115)).into()),
        );

        let err = failures.finish(Some(())).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.contains_field("first_name"));
        assert!(err.contains_field("person.age"));
        assert_eq!(
            err.to_string(),
            "first_name must have at least 1 characters, person.age must be <= 115"
        );
    }
}
