use crate::routes::RouteDescriptor;
use actix_web::http::Method;
use actix_web::{HttpResponse, Responder};

// no symbolic name - it is for the load balancer, not the help page
pub static HEALTH_CHECK: RouteDescriptor = RouteDescriptor {
    name: None,
    display_name: "Health check",
    description: "Is the server up?",
    methods: &[Method::GET],
    patterns: &["/health_check"],
};

// handler for health check get requests
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok() // an OK status Http response - many options in the docs
}
