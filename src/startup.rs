use crate::configuration::{SessionSettings, Settings};
use crate::routes::{
    self, RouteDescriptor, RouteTable, GREETING, HEALTH_CHECK, HELP, MATH,
};
use actix_session::config::{PersistentSession, TtlExtensionPolicy};
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{time, Key};
use actix_web::dev::Server;
use actix_web::{web, App, FromRequest, Handler, HttpServer, Resource, Responder};
use anyhow::Context;
use secrecy::ExposeSecret;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A struct to hold the server and the port it is bound to
// (we need the port when it was picked by the OS - ie port 0)
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Binds the listener and builds the server - but does not start it.
    ///
    /// # Errors
    ///
    /// This function will return an error if the address can't be bound or
    /// the session key is unusable.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind to {}", address))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, configuration.session)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

// every route we serve - in the order they are matched, and the order
// the help page lists them
pub fn route_table() -> RouteTable {
    RouteTable::new(vec![&GREETING, &MATH, &HELP, &HEALTH_CHECK])
}

// one actix resource per descriptor - a route per method, all to the same handler
fn resource<F, Args>(descriptor: &RouteDescriptor, handler: F) -> Resource
where
    F: Handler<Args>,
    Args: FromRequest + 'static,
    F::Output: Responder + 'static,
{
    let mut resource = web::resource(descriptor.patterns.to_vec());
    if let Some(name) = descriptor.name {
        resource = resource.name(name);
    }
    descriptor.methods.iter().fold(resource, |resource, method| {
        resource.route(web::method(method.clone()).to(handler.clone()))
    })
}

/// Starts and runs the server, wrapped in request tracing and cookie sessions.
///
/// We return a server instance from this - so it can be run async in main.
/// Note this function is not async!!
///
/// # Errors
///
/// This function will return an error if the session key is shorter than
/// 64 bytes or the server fails to start.
pub fn run(listener: TcpListener, session: SessionSettings) -> Result<Server, anyhow::Error> {
    // the cookie is signed and encrypted with this - Key::from panics below 64 bytes
    let secret = session.secret_key.expose_secret().as_bytes();
    if secret.len() < 64 {
        anyhow::bail!("The session secret key must be at least 64 bytes long");
    }
    let secret_key = Key::from(secret);

    // the session is dropped after this long without a request
    let idle_timeout =
        time::Duration::try_from(session.idle_timeout()).context("Idle timeout is too large")?;

    // Wrap the registry using web::Data, which boils down to an Arc smart pointer
    // this must be done because it will be cloned onto each worker thread
    let route_table = web::Data::new(route_table());

    let cookie_name = session.cookie_name.clone();
    let secure_cookie = session.secure_cookie;

    let server = HttpServer::new(move || {
        // the session middleware needs its own copy of the key on every worker
        let session_middleware =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_name(cookie_name.clone())
                .cookie_secure(secure_cookie)
                .session_lifecycle(
                    PersistentSession::default()
                        .session_ttl(idle_timeout)
                        .session_ttl_extension_policy(TtlExtensionPolicy::OnEveryRequest),
                )
                .build();

        App::new()
            .wrap(session_middleware)
            .wrap(TracingLogger::default()) // one span per request, with a request id
            // a path that matched a pattern but didn't deserialise is a 404 too
            .app_data(web::PathConfig::default().error_handler(routes::path_error_handler))
            .app_data(route_table.clone())
            // order matters - /hello/... must be tried before /{op}/{left}
            .service(resource(&GREETING, routes::greet))
            .service(resource(&MATH, routes::calculate))
            .service(resource(&HELP, routes::help))
            .service(resource(&HEALTH_CHECK, routes::health_check))
            // anything else
            .default_service(web::to(routes::invalid_url))
    })
    // give up on clients that take too long to send a request (body included)
    .client_request_timeout(session.io_timeout())
    .listen(listener)? // binds to the port identified by listener
    .run(); // run the server

    //.await // Don't call await here - if you want to run other tasks async, return the server.

    Ok(server)
}
