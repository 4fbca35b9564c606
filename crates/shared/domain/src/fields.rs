//! Field constraints, declared once for every inbound shape.

use crate::constants::{
    HAIR_COLORS, MAX_CONTACT_NAME_LENGTH, MAX_NAME_LENGTH, MAX_USERNAME_LENGTH,
    MIN_CONTACT_MESSAGE_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::schema::{Constraint, FieldSpec};

// =============================================================================
// Person
// =============================================================================

pub const FIRST_NAME: FieldSpec = FieldSpec::new(
    "first_name",
    &[
        Constraint::MinLength(MIN_NAME_LENGTH),
        Constraint::MaxLength(MAX_NAME_LENGTH),
    ],
);

pub const LAST_NAME: FieldSpec = FieldSpec::new(
    "last_name",
    &[
        Constraint::MinLength(MIN_NAME_LENGTH),
        Constraint::MaxLength(MAX_NAME_LENGTH),
    ],
);

/// Lower bound only; the upper bound comes from [`crate::Limits`].
pub const AGE: FieldSpec = FieldSpec::new("age", &[Constraint::GreaterThan(0)]);

pub const HAIR_COLOR: FieldSpec = FieldSpec::new("hair_color", &[Constraint::OneOf(HAIR_COLORS)]);

pub const IS_MARRIED: FieldSpec = FieldSpec::new("is_married", &[]);

pub const PASSWORD: FieldSpec =
    FieldSpec::new("password", &[Constraint::MinLength(MIN_PASSWORD_LENGTH)]);

pub const PERSON_ID: FieldSpec = FieldSpec::new("person_id", &[Constraint::GreaterThan(0)]);

pub const CITY: FieldSpec = FieldSpec::new("city", &[]);

pub const STATE: FieldSpec = FieldSpec::new("state", &[]);

pub const COUNTRY: FieldSpec = FieldSpec::new("country", &[]);

/// Embedded objects of the update request
pub const PERSON: FieldSpec = FieldSpec::new("person", &[]);

pub const LOCATION: FieldSpec = FieldSpec::new("location", &[]);

/// Optional name filter on the person details query
pub const QUERY_NAME: FieldSpec = FieldSpec::new(
    "name",
    &[
        Constraint::MinLength(MIN_NAME_LENGTH),
        Constraint::MaxLength(MAX_NAME_LENGTH),
    ],
);

// =============================================================================
// Login
// =============================================================================

pub const USERNAME: FieldSpec = FieldSpec::new(
    "username",
    &[
        Constraint::MinLength(1),
        Constraint::MaxLength(MAX_USERNAME_LENGTH),
    ],
);

/// The login form only requires a password to be present
pub const LOGIN_PASSWORD: FieldSpec = FieldSpec::new("password", &[Constraint::MinLength(1)]);

// =============================================================================
// Contact
// =============================================================================

pub const CONTACT_FIRST_NAME: FieldSpec = FieldSpec::new(
    "first_name",
    &[
        Constraint::MinLength(MIN_NAME_LENGTH),
        Constraint::MaxLength(MAX_CONTACT_NAME_LENGTH),
    ],
);

pub const CONTACT_LAST_NAME: FieldSpec = FieldSpec::new(
    "last_name",
    &[
        Constraint::MinLength(MIN_NAME_LENGTH),
        Constraint::MaxLength(MAX_CONTACT_NAME_LENGTH),
    ],
);

pub const EMAIL: FieldSpec = FieldSpec::new("email", &[Constraint::Email]);

pub const MESSAGE: FieldSpec = FieldSpec::new(
    "message",
    &[Constraint::MinLength(MIN_CONTACT_MESSAGE_LENGTH)],
);

// =============================================================================
// Upload
// =============================================================================

pub const IMAGE: FieldSpec = FieldSpec::new("image", &[Constraint::Required]);
