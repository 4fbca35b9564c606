//! Domain layer - Person schemas and the field validation they rely on.
//!
//! This crate contains pure validation logic with no HTTP dependencies.
//! The API crate feeds it candidate values extracted from requests.

pub mod constants;
pub mod error;
pub mod fields;
pub mod person;
pub mod schema;

pub use constants::*;
pub use error::{DomainResult, ValidationFailure, ValidationFailures};
pub use person::{
    HairColor, Location, LoginOut, Person, PersonBase, PersonOut, PersonWithLocation, RawLocation,
    RawPerson, RawPersonBase,
};
pub use schema::{Candidate, Constraint, Expected, FieldSpec, Limits, Schema};
