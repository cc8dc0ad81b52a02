use actix_web::http::Method;
use actix_web::{web, HttpResponse};

// Everything we know about a route - startup registers the resource from
// this, and the help page lists it. No reflection over actix internals.
#[derive(Debug)]
pub struct RouteDescriptor {
    // symbolic name - only named routes are listed on the help page
    pub name: Option<&'static str>,
    pub display_name: &'static str,
    pub description: &'static str,
    pub methods: &'static [Method],
    // actix patterns, exactly as they are registered
    pub patterns: &'static [&'static str],
}

pub static HELP: RouteDescriptor = RouteDescriptor {
    name: Some("help"),
    display_name: "The Help: this",
    description: "Displays all endpoints available.",
    methods: &[Method::GET],
    patterns: &["/"],
};

// one entry on the help page - camelCase on the wire
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteListing {
    pub display_name: String,
    pub description: String,
    pub method: String,
    pub pattern: String,
    pub name: String,
}

/// The registry of every route the app serves, in registration order.
pub struct RouteTable {
    routes: Vec<&'static RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<&'static RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// Named routes only - unnamed ones (e.g. the health check) are skipped.
    pub fn listing(&self) -> Vec<RouteListing> {
        self.routes
            .iter()
            .filter_map(|route| {
                let name = route.name.filter(|n| !n.is_empty())?;
                Some(RouteListing {
                    display_name: route.display_name.to_string(),
                    description: route.description.to_string(),
                    method: join(route.methods.iter().map(Method::as_str)),
                    pattern: join(route.patterns.iter().copied()),
                    name: name.to_string(),
                })
            })
            .collect()
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}

// GET / - json array describing the named routes
#[tracing::instrument(name = "List routes", skip(route_table))]
pub async fn help(route_table: web::Data<RouteTable>) -> HttpResponse {
    HttpResponse::Ok().json(route_table.listing())
}
