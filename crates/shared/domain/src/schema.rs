//! Declarative field constraints and the generic validator that applies them.
//!
//! A [`FieldSpec`] is declared once as a `const` and is then used to check
//! candidate values regardless of where they came from: path, query, form or
//! JSON body. Shapes that group several fields implement [`Schema`], which
//! coerces a loosely-typed raw form into the strongly-typed value.

use std::fmt;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use validator::{ValidateEmail, ValidateLength, ValidateRange};

use crate::constants::DEFAULT_MAX_AGE;
use crate::error::{DomainResult, ValidationFailure};
use crate::fields::AGE;

/// A single declarative constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The field must be present
    Required,
    /// The value must have the named type (`an integer`, `a string`, ...)
    Type(&'static str),
    /// Minimum number of characters (inclusive)
    MinLength(usize),
    /// Maximum number of characters (inclusive)
    MaxLength(usize),
    /// Exclusive lower bound
    GreaterThan(i64),
    /// Inclusive upper bound
    AtMost(i64),
    /// Syntactically valid e-mail address
    Email,
    /// One of a closed set of names
    OneOf(&'static [&'static str]),
}

impl Constraint {
    /// Check a textual value. Numeric constraints do not apply to text.
    fn admits_str(&self, value: &str) -> bool {
        match *self {
            Constraint::MinLength(min) => value.validate_length(Some(min as u64), None, None),
            Constraint::MaxLength(max) => value.validate_length(None, Some(max as u64), None),
            Constraint::Email => value.validate_email(),
            Constraint::OneOf(choices) => choices.contains(&value),
            Constraint::Required
            | Constraint::Type(_)
            | Constraint::GreaterThan(_)
            | Constraint::AtMost(_) => true,
        }
    }

    /// Check an integer value. Textual constraints do not apply to integers.
    fn admits_int(&self, value: i64) -> bool {
        match *self {
            Constraint::GreaterThan(min) => value.validate_range(None, None, Some(min), None),
            Constraint::AtMost(max) => value.validate_range(None, Some(max), None, None),
            _ => true,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "is required"),
            Constraint::Type(kind) => write!(f, "must be {}", kind),
            Constraint::MinLength(min) => write!(f, "must have at least {} characters", min),
            Constraint::MaxLength(max) => write!(f, "must have at most {} characters", max),
            Constraint::GreaterThan(min) => write!(f, "must be > {}", min),
            Constraint::AtMost(max) => write!(f, "must be <= {}", max),
            Constraint::Email => write!(f, "must be a valid email address"),
            Constraint::OneOf(choices) => write!(f, "must be one of {}", choices.join(", ")),
        }
    }
}

/// Name of the type a raw JSON value is expected to have.
pub trait Expected {
    const EXPECTED: &'static str;
}

impl Expected for String {
    const EXPECTED: &'static str = "a string";
}

impl Expected for i64 {
    const EXPECTED: &'static str = "an integer";
}

impl Expected for bool {
    const EXPECTED: &'static str = "a boolean";
}

/// A raw JSON value that may or may not have the expected type.
///
/// Deserializing a `Candidate` never fails, so a value of the wrong type is
/// reported against its own field instead of aborting the whole body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Candidate<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// A field name together with the constraints its value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    pub const fn new(name: &'static str, constraints: &'static [Constraint]) -> Self {
        Self { name, constraints }
    }

    fn fail(&self, constraint: Constraint) -> ValidationFailure {
        ValidationFailure::new(self.name, constraint)
    }

    /// Validate a text value, returning it unchanged on success.
    pub fn check_str<'v>(&self, value: &'v str) -> Result<&'v str, ValidationFailure> {
        match self.constraints.iter().find(|c| !c.admits_str(value)) {
            Some(violated) => Err(self.fail(*violated)),
            None => Ok(value),
        }
    }

    /// Validate an optional text value. Absence always passes.
    pub fn check_optional_str<'v>(
        &self,
        value: Option<&'v str>,
    ) -> Result<Option<&'v str>, ValidationFailure> {
        value.map(|v| self.check_str(v)).transpose()
    }

    /// Validate an integer value against the declared constraints.
    pub fn check_int(&self, value: i64) -> Result<i64, ValidationFailure> {
        self.check_int_with(value, &[])
    }

    /// Validate an integer against the declared constraints plus runtime ones.
    pub fn check_int_with(
        &self,
        value: i64,
        extra: &[Constraint],
    ) -> Result<i64, ValidationFailure> {
        match self
            .constraints
            .iter()
            .chain(extra)
            .find(|c| !c.admits_int(value))
        {
            Some(violated) => Err(self.fail(*violated)),
            None => Ok(value),
        }
    }

    /// Turn an absent value into a `Required` failure for this field.
    pub fn require<T>(&self, value: Option<T>) -> Result<T, ValidationFailure> {
        value.ok_or_else(|| self.fail(Constraint::Required))
    }

    /// Parse an integer out of a text source (path, query string or form).
    pub fn parse_int(&self, value: &str) -> Result<i64, ValidationFailure> {
        value
            .trim()
            .parse()
            .map_err(|_| self.fail(Constraint::Type(i64::EXPECTED)))
    }

    /// Unwrap an optional JSON candidate, failing when it has the wrong type.
    pub fn accept<T: Expected>(
        &self,
        candidate: Option<Candidate<T>>,
    ) -> Result<Option<T>, ValidationFailure> {
        match candidate {
            None => Ok(None),
            Some(Candidate::Valid(value)) => Ok(Some(value)),
            Some(Candidate::Invalid(_)) => Err(self.fail(Constraint::Type(T::EXPECTED))),
        }
    }

    /// Coerce a required text value and check it.
    pub fn take_str(&self, value: Option<String>) -> Result<String, ValidationFailure> {
        let value = self.require(value)?;
        self.check_str(&value)?;
        Ok(value)
    }

    /// Check an optional text value, keeping ownership.
    pub fn take_optional_str(
        &self,
        value: Option<String>,
    ) -> Result<Option<String>, ValidationFailure> {
        if let Some(value) = value.as_deref() {
            self.check_str(value)?;
        }
        Ok(value)
    }
}

/// Bounds that are configurable at runtime rather than fixed in a [`FieldSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Inclusive upper bound for every age field
    pub max_age: i64,
}

impl Limits {
    pub fn new(max_age: i64) -> Self {
        Self { max_age }
    }

    /// Validate an age: strictly positive and at most `max_age`.
    pub fn check_age(&self, age: i64) -> Result<i64, ValidationFailure> {
        AGE.check_int_with(age, &[Constraint::AtMost(self.max_age)])
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

/// A shape whose fields are coerced and validated together.
pub trait Schema: Sized {
    /// Wire form: every field optional, enumerations and numbers left loose
    type Raw: DeserializeOwned;

    /// Coerce every field of `raw` and report all violations at once.
    fn validate(raw: Self::Raw, limits: &Limits) -> DomainResult<Self>;
}
