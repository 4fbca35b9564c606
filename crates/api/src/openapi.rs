//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::LoginForm;
use crate::handlers::contact_handler::ContactForm;
use crate::handlers::home_handler::HelloResponse;
use crate::handlers::person_handler::UpdatePersonRequest;
use crate::handlers::upload_handler::{ImageInfo, ImageUpload};
use domain::{
    HairColor, Location, LoginOut, PersonOut, PersonWithLocation, RawPerson, RawPersonBase,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person API",
        version = "0.1.0",
        description = "Request validation for path, query, body, form, header, cookie and file inputs"
    ),
    paths(
        crate::handlers::home_handler::home,
        crate::handlers::person_handler::create_person,
        crate::handlers::person_handler::show_person_details,
        crate::handlers::person_handler::show_person,
        crate::handlers::person_handler::update_person,
        crate::handlers::auth_handler::login,
        crate::handlers::contact_handler::contact,
        crate::handlers::upload_handler::post_image,
    ),
    components(
        schemas(
            // Domain types
            HairColor,
            Location,
            RawPersonBase,
            RawPerson,
            PersonOut,
            PersonWithLocation,
            LoginOut,
            // Handler types
            HelloResponse,
            UpdatePersonRequest,
            LoginForm,
            ContactForm,
            ImageUpload,
            ImageInfo,
        )
    ),
    tags(
        (name = "Home", description = "Greeting"),
        (name = "Persons", description = "Person validation endpoints"),
        (name = "Auth", description = "Login form"),
        (name = "Contact", description = "Contact form with header and cookie"),
        (name = "Upload", description = "File upload"),
    )
)]
pub struct ApiDoc;
