//! Domain-level constants.
//!
//! These constants define the bounds enforced by the person schemas.

// =============================================================================
// Person
// =============================================================================

/// Minimum length of a person's first or last name
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum length of a person's first or last name
pub const MAX_NAME_LENGTH: usize = 50;

/// Default inclusive upper bound for a person's age
pub const DEFAULT_MAX_AGE: i64 = 115;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Login
// =============================================================================

/// Maximum username length accepted by the login form
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Message returned after a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

// =============================================================================
// Contact
// =============================================================================

/// Maximum length of the names on the contact form
pub const MAX_CONTACT_NAME_LENGTH: usize = 20;

/// Minimum length of a contact message
pub const MIN_CONTACT_MESSAGE_LENGTH: usize = 20;

// =============================================================================
// Hair color
// =============================================================================

/// Accepted hair color names, in declaration order
pub const HAIR_COLORS: &[&str] = &["white", "brown", "black", "blonde", "red"];
