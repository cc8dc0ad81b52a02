use crate::domain::{Calculation, CalculationError, Operation, INVALID_OPERATION_MESSAGE};
use crate::routes::{error_chain_fmt, RouteDescriptor};
use actix_web::http::header::ContentType;
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpResponse, ResponseError};

// The regexes are the type constraints: an operator is letters only and the
// operands are (optionally negative) integers. Anything else never reaches
// `calculate` - and a number too big for an i32 fails path extraction, which
// startup turns into the same 404 as an unknown url.
pub static MATH: RouteDescriptor = RouteDescriptor {
    name: Some("math"),
    display_name: "Calculator",
    description: "Do basic math.",
    methods: &[Method::GET],
    patterns: &[
        r"/{op:[A-Za-z]+}/{left:-?\d+}",
        r"/{op:[A-Za-z]+}/{left:-?\d+}/{right:-?\d+}",
    ],
};

// deserialised from the url segments - `right` is missing on the short pattern
#[derive(serde::Deserialize, Debug)]
pub struct Expression {
    op: String,
    left: i32,
    right: Option<i32>,
}

#[tracing::instrument(name = "Calculate")]
pub async fn calculate(path: web::Path<Expression>) -> Result<HttpResponse, CalculatorError> {
    let Expression { op, left, right } = path.into_inner();

    // an unknown operator is still a 200 - the body tells the client what went wrong
    let body = match Operation::parse(&op) {
        Some(operation) => Calculation::new(operation, left, right).render()?,
        None => INVALID_OPERATION_MESSAGE.to_string(),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body))
}

#[derive(thiserror::Error)]
pub enum CalculatorError {
    // divide by zero or overflow - the client asked for something we can't compute
    #[error(transparent)]
    Arithmetic(#[from] CalculationError),
}

impl std::fmt::Debug for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// the default error_response writes our Display message as a text body
impl ResponseError for CalculatorError {
    fn status_code(&self) -> StatusCode {
        match self {
            CalculatorError::Arithmetic(_) => StatusCode::BAD_REQUEST,
        }
    }
}
