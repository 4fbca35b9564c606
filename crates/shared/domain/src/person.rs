//! Person domain entity and related types.
//!
//! Inbound shapes are deserialized into their `Raw*` wire form first and then
//! coerced through [`Schema::validate`], so every missing, mistyped or
//! out-of-range field is reported by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{HAIR_COLORS, LOGIN_SUCCESS_MESSAGE};
use crate::error::{DomainResult, ValidationFailure, ValidationFailures};
use crate::fields::{
    AGE, CITY, COUNTRY, FIRST_NAME, HAIR_COLOR, IS_MARRIED, LAST_NAME, PASSWORD, STATE,
};
use crate::schema::{Candidate, Constraint, Expected, Limits, Schema};

/// Where a person lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Location {
    #[cfg_attr(feature = "openapi", schema(example = "Hill Valley"))]
    pub city: String,
    #[cfg_attr(feature = "openapi", schema(example = "California"))]
    pub state: String,
    #[cfg_attr(feature = "openapi", schema(example = "USA"))]
    pub country: String,
}

/// Wire form of [`Location`]
#[derive(Debug, Deserialize)]
pub struct RawLocation {
    pub city: Option<Candidate<String>>,
    pub state: Option<Candidate<String>>,
    pub country: Option<Candidate<String>>,
}

impl Expected for RawLocation {
    const EXPECTED: &'static str = "an object";
}

impl Schema for Location {
    type Raw = RawLocation;

    fn validate(raw: RawLocation, _limits: &Limits) -> DomainResult<Self> {
        let mut failures = ValidationFailures::new();
        let city = failures.check(CITY.accept(raw.city).and_then(|v| CITY.take_str(v)));
        let state = failures.check(STATE.accept(raw.state).and_then(|v| STATE.take_str(v)));
        let country = failures.check(COUNTRY.accept(raw.country).and_then(|v| COUNTRY.take_str(v)));

        let location = match (city, state, country) {
            (Some(city), Some(state), Some(country)) => Some(Location {
                city,
                state,
                country,
            }),
            _ => None,
        };
        failures.finish(location)
    }
}

/// Hair color enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    pub const ALL: [HairColor; 5] = [
        HairColor::White,
        HairColor::Brown,
        HairColor::Black,
        HairColor::Blonde,
        HairColor::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HairColor::White => "white",
            HairColor::Brown => "brown",
            HairColor::Black => "black",
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
        }
    }
}

impl FromStr for HairColor {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HairColor::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ValidationFailure::new(HAIR_COLOR.name, Constraint::OneOf(HAIR_COLORS)))
    }
}

impl fmt::Display for HairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields shared by inbound and outbound person shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBase {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
}

/// Wire form of [`PersonBase`]; `hair_color` stays text until coerced
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RawPersonBase {
    /// Between 1 and 50 characters
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "Marty", min_length = 1, max_length = 50)
    )]
    pub first_name: Option<Candidate<String>>,
    /// Between 1 and 50 characters
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "McFly", min_length = 1, max_length = 50)
    )]
    pub last_name: Option<Candidate<String>>,
    /// Strictly positive, capped by the configured maximum age
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 17, minimum = 1))]
    pub age: Option<Candidate<i64>>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<HairColor>, example = "brown"))]
    pub hair_color: Option<Candidate<String>>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<bool>, example = false))]
    pub is_married: Option<Candidate<bool>>,
}

impl Schema for PersonBase {
    type Raw = RawPersonBase;

    fn validate(raw: RawPersonBase, limits: &Limits) -> DomainResult<Self> {
        let mut failures = ValidationFailures::new();
        let first_name = failures.check(
            FIRST_NAME
                .accept(raw.first_name)
                .and_then(|v| FIRST_NAME.take_str(v)),
        );
        let last_name = failures.check(
            LAST_NAME
                .accept(raw.last_name)
                .and_then(|v| LAST_NAME.take_str(v)),
        );
        let age = failures.check(
            AGE.accept(raw.age)
                .and_then(|v| AGE.require(v))
                .and_then(|v| limits.check_age(v)),
        );
        let hair_color = failures.check(
            HAIR_COLOR
                .accept(raw.hair_color)
                .and_then(|v| v.map(|name| name.parse::<HairColor>()).transpose()),
        );
        let is_married = failures.check(IS_MARRIED.accept(raw.is_married));

        let base = match (first_name, last_name, age, hair_color, is_married) {
            (Some(first_name), Some(last_name), Some(age), Some(hair_color), Some(is_married)) => {
                Some(PersonBase {
                    first_name,
                    last_name,
                    age,
                    hair_color,
                    is_married,
                })
            }
            _ => None,
        };
        failures.finish(base)
    }
}

/// Inbound person, carrying a write-only password.
///
/// Not `Serialize`: responses go through [`PersonOut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub base: PersonBase,
    pub password: String,
}

/// Wire form of [`Person`]
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RawPerson {
    #[serde(flatten)]
    pub base: RawPersonBase,
    /// At least 6 characters
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "hoverboard", min_length = 6)
    )]
    pub password: Option<Candidate<String>>,
}

impl Expected for RawPerson {
    const EXPECTED: &'static str = "an object";
}

impl Schema for Person {
    type Raw = RawPerson;

    fn validate(raw: RawPerson, limits: &Limits) -> DomainResult<Self> {
        let mut failures = ValidationFailures::new();
        let base = failures.merge(PersonBase::validate(raw.base, limits));
        let password = failures.check(
            PASSWORD
                .accept(raw.password)
                .and_then(|v| PASSWORD.take_str(v)),
        );

        let person = match (base, password) {
            (Some(base), Some(password)) => Some(Person { base, password }),
            _ => None,
        };
        failures.finish(person)
    }
}

/// Person response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonOut {
    #[cfg_attr(feature = "openapi", schema(example = "Marty"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "McFly"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = 17))]
    pub age: i64,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
}

impl From<PersonBase> for PersonOut {
    fn from(base: PersonBase) -> Self {
        Self {
            first_name: base.first_name,
            last_name: base.last_name,
            age: base.age,
            hair_color: base.hair_color,
            is_married: base.is_married,
        }
    }
}

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        Self::from(person.base)
    }
}

impl From<&Person> for PersonOut {
    fn from(person: &Person) -> Self {
        Self::from(person.base.clone())
    }
}

/// Updated person together with their location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonWithLocation {
    #[serde(flatten)]
    pub person: PersonOut,
    #[serde(flatten)]
    pub location: Location,
}

impl PersonWithLocation {
    pub fn new(person: impl Into<PersonOut>, location: Location) -> Self {
        Self {
            person: person.into(),
            location,
        }
    }
}

/// Login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginOut {
    /// At most 20 characters
    #[cfg_attr(feature = "openapi", schema(example = "marty", max_length = 20))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "Login successful!"))]
    pub message: String,
}

impl LoginOut {
    /// Canned success response for `username`
    pub fn success(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DomainResult<Person> {
        let raw: RawPerson = serde_json::from_str(json).unwrap();
        Person::validate(raw, &Limits::default())
    }

    fn marty() -> Person {
        parse(r#"{"first_name":"Marty","last_name":"McFly","age":20,"password":"abcdef"}"#)
            .unwrap()
    }

    #[test]
    fn test_valid_person() {
        let person = marty();
        assert_eq!(person.base.first_name, "Marty");
        assert_eq!(person.base.age, 20);
        assert_eq!(person.base.hair_color, None);
        assert_eq!(person.base.is_married, None);
        assert_eq!(person.password, "abcdef");
    }

    #[test]
    fn test_optional_fields_are_coerced() {
        let person = parse(
            r#"{"first_name":"Marty","last_name":"McFly","age":20,"password":"abcdef","hair_color":"brown","is_married":null}"#,
        )
        .unwrap();

        assert_eq!(person.base.hair_color, Some(HairColor::Brown));
        assert_eq!(person.base.is_married, None);
    }

    #[test]
    fn test_empty_first_name_fails() {
        let err = parse(r#"{"first_name":"","last_name":"McFly","age":20,"password":"abcdef"}"#)
            .unwrap_err();

        assert_eq!(err.len(), 1);
        let failure = err.first().unwrap();
        assert_eq!(failure.field, "first_name");
        assert_eq!(failure.constraint, Constraint::MinLength(1));
    }

    #[test]
    fn test_age_over_limit_fails() {
        let err = parse(r#"{"first_name":"Marty","last_name":"McFly","age":200,"password":"abcdef"}"#)
            .unwrap_err();
        assert!(err.contains_field("age"));
    }

    #[test]
    fn test_age_alone_reports_age_and_every_missing_field() {
        let err = parse(r#"{"age":200}"#).unwrap_err();

        let age = err.iter().find(|f| f.field == "age").unwrap();
        assert_eq!(age.constraint, Constraint::AtMost(115));
        for field in ["first_name", "last_name", "password"] {
            let failure = err.iter().find(|f| f.field == field).unwrap();
            assert_eq!(failure.constraint, Constraint::Required);
        }
        assert_eq!(err.len(), 4);
    }

    #[test]
    fn test_unknown_hair_color_does_not_hide_other_failures() {
        let err = parse(
            r#"{"first_name":"","last_name":"McFly","age":20,"hair_color":"green","password":"abcdef"}"#,
        )
        .unwrap_err();

        assert!(err.contains_field("first_name"));
        assert!(err.contains_field("hair_color"));
        assert_eq!(
            err.to_string(),
            "first_name must have at least 1 characters, hair_color must be one of white, brown, black, blonde, red"
        );
    }

    #[test]
    fn test_wrong_types_are_reported_per_field() {
        let err = parse(
            r#"{"first_name":7,"last_name":"McFly","age":"twenty","is_married":"yes","password":"abcdef"}"#,
        )
        .unwrap_err();

        let constraint = |field: &str| err.iter().find(|f| f.field == field).unwrap().constraint;
        assert_eq!(constraint("first_name"), Constraint::Type("a string"));
        assert_eq!(constraint("age"), Constraint::Type("an integer"));
        assert_eq!(constraint("is_married"), Constraint::Type("a boolean"));
    }

    #[test]
    fn test_short_password_fails() {
        let err = parse(r#"{"first_name":"Marty","last_name":"McFly","age":20,"password":"abc"}"#)
            .unwrap_err();
        assert_eq!(err.first().unwrap().constraint, Constraint::MinLength(6));
    }

    #[test]
    fn test_all_failures_reported() {
        let json = format!(
            r#"{{"first_name":"","last_name":"{}","age":0,"password":""}}"#,
            "x".repeat(51)
        );

        let err = parse(&json).unwrap_err();
        assert_eq!(err.len(), 4);
    }

    #[test]
    fn test_hair_color_membership() {
        for name in ["white", "brown", "black", "blonde", "red"] {
            let color: HairColor = name.parse().unwrap();
            assert_eq!(color.to_string(), name);
        }
        let err = "green".parse::<HairColor>().unwrap_err();
        assert_eq!(err.field, "hair_color");
        assert_eq!(
            err.to_string(),
            "hair_color must be one of white, brown, black, blonde, red"
        );
    }

    #[test]
    fn test_location_requires_every_field() {
        let raw: RawLocation = serde_json::from_str(r#"{"city":"Hill Valley"}"#).unwrap();

        let err = Location::validate(raw, &Limits::default()).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.contains_field("state"));
        assert!(err.contains_field("country"));
    }

    #[test]
    fn test_person_out_omits_password() {
        let mut person = marty();
        person.base.hair_color = Some(HairColor::Brown);

        let json = serde_json::to_value(PersonOut::from(&person)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["first_name"], "Marty");
        assert_eq!(json["hair_color"], "brown");
        assert_eq!(json["is_married"], serde_json::Value::Null);
    }

    #[test]
    fn test_person_with_location_is_flat() {
        let location = Location {
            city: "Hill Valley".to_string(),
            state: "California".to_string(),
            country: "USA".to_string(),
        };

        let json = serde_json::to_value(PersonWithLocation::new(marty(), location)).unwrap();
        assert_eq!(json["city"], "Hill Valley");
        assert_eq!(json["last_name"], "McFly");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_login_out_message() {
        let out = LoginOut::success("marty");
        assert_eq!(out.username, "marty");
        assert_eq!(out.message, LOGIN_SUCCESS_MESSAGE);
    }
}
