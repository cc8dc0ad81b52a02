use crate::domain::{is_form_content_type, render_greeting, NameSources};
use crate::routes::{error_chain_fmt, RouteDescriptor};
use crate::session_state::{SessionError, TypedSession};
use actix_web::http::header::{ContentType, CONTENT_TYPE};
use actix_web::http::{Method, StatusCode};
use actix_web::{web, FromRequest, HttpRequest, HttpResponse, ResponseError};

pub static GREETING: RouteDescriptor = RouteDescriptor {
    name: Some("greeting"),
    display_name: "Hello",
    description: "Say a greeting for a name.",
    methods: &[Method::GET, Method::POST, Method::PUT],
    // `.*` lets the name run over several segments - /hello/a/b greets "a/b"
    patterns: &["/hello", "/hello/{name:.*}"],
};

// GET, POST and PUT all land here and are treated the same.
// The query string is deserialised into ordered pairs, so "first match wins"
// keeps meaning something when a key is repeated.
#[tracing::instrument(
    name = "Greet",
    skip(request, query, payload, session),
    fields(name = tracing::field::Empty)
)]
pub async fn greet(
    request: HttpRequest,
    query: web::Query<Vec<(String, String)>>,
    payload: web::Payload, // the raw body stream - only drained for form posts
    session: TypedSession, // the cookie-defined session (see session_state)
) -> Result<HttpResponse, GreetError> {
    // touch the session before anything else - it happens whatever we answer
    session.mark_once()?;

    tracing::info!(headers = %format_headers(&request), "Request headers");
    tracing::info!(query = %format_pairs(&query), "Query parameters");

    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    // only look in the body when it is declared as a plain form
    let form = if is_form_content_type(content_type) {
        // buffered here rather than as an extractor, so a big non-form body
        // is never read (and never trips the payload size limit)
        let body = web::Bytes::from_request(&request, &mut payload.into_inner())
            .await
            .map_err(GreetError::UnreadableBody)?;
        let form: Vec<(String, String)> =
            serde_urlencoded::from_bytes(&body).map_err(GreetError::InvalidForm)?;
        tracing::info!(form = %format_pairs(&form), "Form fields");
        Some(form)
    } else {
        None
    };

    let sources = NameSources {
        path: request.match_info().get("name"),
        query: &query,
        form: form.as_deref(),
    };
    let name = sources.resolve();
    if let Some(name) = name {
        tracing::Span::current().record("name", tracing::field::display(name));
    }

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(render_greeting(name)))
}

// "key: 'value'" one per line - the headers as the client sent them
fn format_headers(request: &HttpRequest) -> String {
    request
        .headers()
        .iter()
        .map(|(key, value)| {
            format!(
                "{}: '{}'",
                key,
                value.to_str().unwrap_or("<non-visible ascii>")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}: '{}'", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(thiserror::Error)]
pub enum GreetError {
    #[error("The form body could not be read: {0}")]
    UnreadableBody(actix_web::Error),
    #[error("The form body could not be decoded")]
    InvalidForm(#[source] serde_urlencoded::de::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

// follow the error chain back to its source for context
impl std::fmt::Debug for GreetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for GreetError {
    fn status_code(&self) -> StatusCode {
        match self {
            // e.g. 413 when the form is over the payload limit
            GreetError::UnreadableBody(e) => e.as_response_error().status_code(),
            GreetError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            GreetError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
