//! Person handlers.

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use domain::fields::{AGE, LOCATION, PERSON, PERSON_ID, QUERY_NAME};
use domain::{
    Candidate, DomainResult, Limits, Location, Person, PersonOut, PersonWithLocation,
    RawLocation, RawPerson, Schema, ValidationFailures,
};

use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

/// Key used in the details response when no name was given
const ANONYMOUS_KEY: &str = "null";

/// Person details query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonDetailsQuery {
    /// Person name, between 1 and 50 characters
    #[param(example = "Marty", min_length = 1, max_length = 50)]
    pub name: Option<String>,
    /// Person age, strictly positive and capped
    #[param(value_type = i64, example = 17, minimum = 1)]
    pub age: Option<String>,
}

/// Validated person details query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetails {
    pub name: Option<String>,
    pub age: i64,
}

impl Schema for PersonDetails {
    type Raw = PersonDetailsQuery;

    fn validate(raw: PersonDetailsQuery, limits: &Limits) -> DomainResult<Self> {
        let mut failures = ValidationFailures::new();
        let name = failures.check(QUERY_NAME.take_optional_str(raw.name));
        let age = failures.check(
            AGE.require(raw.age)
                .and_then(|age| AGE.parse_int(&age))
                .and_then(|age| limits.check_age(age)),
        );

        let details = match (name, age) {
            (Some(name), Some(age)) => Some(PersonDetails { name, age }),
            _ => None,
        };
        failures.finish(details)
    }
}

/// Person id path parameter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonPath {
    /// Person id, strictly positive
    #[param(value_type = i64, example = 1, minimum = 1)]
    pub person_id: String,
}

/// Validated person id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonId(pub i64);

impl Schema for PersonId {
    type Raw = PersonPath;

    fn validate(raw: PersonPath, _limits: &Limits) -> DomainResult<Self> {
        let id = PERSON_ID
            .parse_int(&raw.person_id)
            .and_then(|id| PERSON_ID.check_int(id))?;
        Ok(PersonId(id))
    }
}

/// Person update request: each part is embedded under its own key
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePersonRequest {
    #[schema(value_type = RawPerson)]
    pub person: Option<Candidate<RawPerson>>,
    #[schema(value_type = Location)]
    pub location: Option<Candidate<RawLocation>>,
}

/// Validated person update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonUpdate {
    pub person: Person,
    pub location: Location,
}

impl Schema for PersonUpdate {
    type Raw = UpdatePersonRequest;

    fn validate(raw: UpdatePersonRequest, limits: &Limits) -> DomainResult<Self> {
        let mut failures = ValidationFailures::new();
        let person = failures
            .check(PERSON.accept(raw.person).and_then(|p| PERSON.require(p)))
            .and_then(|p| failures.nest(PERSON.name, Person::validate(p, limits)));
        let location = failures
            .check(LOCATION.accept(raw.location).and_then(|l| LOCATION.require(l)))
            .and_then(|l| failures.nest(LOCATION.name, Location::validate(l, limits)));

        let update = match (person, location) {
            (Some(person), Some(location)) => Some(PersonUpdate { person, location }),
            _ => None,
        };
        failures.finish(update)
    }
}

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/person/new", post(create_person))
        .route("/person/details", get(show_person_details))
        .route("/person/detail/:person_id", get(show_person))
        .route("/person/:person_id", put(update_person))
}

/// Create a person
///
/// The password is accepted but never returned.
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "Persons",
    request_body = RawPerson,
    responses(
        (status = 201, description = "Person created", body = PersonOut),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> (StatusCode, Json<PersonOut>) {
    tracing::info!(
        first_name = %person.base.first_name,
        last_name = %person.base.last_name,
        "Person created"
    );
    (StatusCode::CREATED, Json(PersonOut::from(person)))
}

/// Show person details from query parameters
#[utoipa::path(
    get,
    path = "/person/details",
    tag = "Persons",
    params(PersonDetailsQuery),
    responses(
        (status = 200, description = "Name mapped to age", body = HashMap<String, i64>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person_details(
    ValidatedQuery(query): ValidatedQuery<PersonDetails>,
) -> Json<HashMap<String, i64>> {
    let name = query.name.unwrap_or_else(|| ANONYMOUS_KEY.to_string());
    Json(HashMap::from([(name, query.age)]))
}

/// Check whether a person exists
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "Persons",
    params(PersonPath),
    responses(
        (status = 200, description = "Person id mapped to existence", body = HashMap<String, bool>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person(
    ValidatedPath(PersonId(person_id)): ValidatedPath<PersonId>,
) -> Json<HashMap<String, bool>> {
    Json(HashMap::from([(person_id.to_string(), true)]))
}

/// Update a person and their location
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "Persons",
    params(PersonPath),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Person updated", body = PersonWithLocation),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_person(
    ValidatedPath(PersonId(person_id)): ValidatedPath<PersonId>,
    ValidatedJson(payload): ValidatedJson<PersonUpdate>,
) -> Json<PersonWithLocation> {
    tracing::info!(person_id, "Person updated");
    Json(PersonWithLocation::new(payload.person, payload.location))
}
