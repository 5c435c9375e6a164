//! # HTTP Resource Handler
//!
//! Axum server exposing the Person CRUD endpoints under `/api/persons`.

mod config;
mod errors;
mod person_routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use person_routes::{person_routes, PersonState};
pub use server::HttpServer;
