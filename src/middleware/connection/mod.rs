//! Per-request database connection.
//!
//! [`Manager`] wraps each agent resource. It checks one connection out of
//! the pool before the route's extractors run and stores it in the request
//! extensions, so the body is read while the connection is held. Handlers take it
//! with the [`Connection`] extractor. The connection goes back to the pool
//! when the `Connection` value is dropped, so every exit path of a handler
//! releases it exactly once. A request rejected by an extractor never reaches
//! its handler; dropping the request clears its extensions and releases the
//! connection the same way.

mod manager;
mod manager_middleware;

pub use manager::*;
pub use manager_middleware::*;

use crate::helpers::JsonResponse;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use sqlx::{pool::PoolConnection, MySql, MySqlConnection};
use std::future::{ready, Ready};
use std::ops::{Deref, DerefMut};

pub(crate) const CONNECT_ERROR: &str = "Error connecting to database";

pub struct Connection(PoolConnection<MySql>);

impl Connection {
    pub(crate) fn new(conn: PoolConnection<MySql>) -> Self {
        Self(conn)
    }

    /// Give the connection back to the pool now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Deref for Connection {
    type Target = MySqlConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Connection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromRequest for Connection {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let conn = req.extensions_mut().remove::<Connection>();
        ready(conn.ok_or_else(|| {
            tracing::error!("no database connection attached to {}", req.path());
            JsonResponse::build().internal_server_error(CONNECT_ERROR)
        }))
    }
}
