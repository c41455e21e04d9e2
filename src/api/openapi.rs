//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, users};
use crate::error::ErrorResponse;
use crate::models::{book, loan, user};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "eLibrary API",
        version = "1.0.0",
        description = "Book lending REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/elibrary/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::get_book,
        books::create_book,
        // Users
        users::create_user,
        // Loans
        loans::borrow_book,
        loans::extend_loan,
        loans::return_book,
    ),
    components(schemas(
        book::CreateBook,
        book::BookProjection,
        user::CreateUser,
        user::UserProjection,
        loan::LoanRequest,
        loan::LoanProjection,
        books::BookResponse,
        users::UserResponse,
        loans::LoanResponse,
        health::HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "books", description = "Book catalog"),
        (name = "users", description = "Library users"),
        (name = "loans", description = "Borrowing, extending and returning"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
