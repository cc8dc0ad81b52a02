use actix_session::{Session, SessionGetError, SessionInsertError};

use actix_session::SessionExt;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

// we want a strongly typed API built on top of Session
// to avoid issues when things get complicated - otherwise we rely on
// Strings to access the right data (e.g. Session::get<String>("once"))
// we therefore wrap Session in a struct and only expose what the
// handlers need - the keys live here as consts
pub struct TypedSession(Session);

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("Failed to read the session state")]
    Get(#[from] SessionGetError),
    #[error("Failed to write the session state")]
    Insert(#[from] SessionInsertError),
}

impl TypedSession {
    const ONCE_KEY: &'static str = "once";
    const ONCE_VALUE: &'static str = "True";

    /// Record that this session has been seen - only the first call writes.
    ///
    /// Nothing ever reads the value back to decide anything.
    pub fn mark_once(&self) -> Result<(), SessionError> {
        if self.0.get::<String>(Self::ONCE_KEY)?.is_none() {
            self.0.insert(Self::ONCE_KEY, Self::ONCE_VALUE)?;
        }
        Ok(())
    }
}

// instead of just taking a Session as an argument to the handler
// we have implemented this new type as an actix_web extractor
impl FromRequest for TypedSession {
    // This is a complicated way of saying
    // "We return the same error returned by the
    // implementation of `FromRequest` for `Session`".
    type Error = <Session as FromRequest>::Error;
    // From request expects a `Future` as return type to allow for extractors
    // that need to perform asynchronous operations (e.g. a HTTP call)
    // We do not have a `Future`, because we don't perform any I/O,
    // so we wrap `TypedSession` into `Ready` to convert it into a `Future` that
    // resolves to the wrapped value the first time it's polled by the executor.
    type Future = Ready<Result<TypedSession, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
