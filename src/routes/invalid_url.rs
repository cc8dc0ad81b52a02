use actix_web::error::{InternalError, PathError};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};

const INVALID_URL: &str = "Invalid url";

// the default service - whatever no resource matched, whatever the method
pub async fn invalid_url(request: HttpRequest) -> HttpResponse {
    tracing::info!(path = %request.path(), "No route matched");
    not_found()
}

// a url that matched a pattern but whose segments don't fit the handler's
// types (e.g. an operand bigger than an i32) is just as invalid
pub fn path_error_handler(error: PathError, _request: &HttpRequest) -> actix_web::Error {
    InternalError::from_response(error, not_found()).into()
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(INVALID_URL)
}
