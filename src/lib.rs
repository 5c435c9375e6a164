//! rolodex - a minimal person directory served over a REST API
//!
//! Three layers, each a thin pass-through to the one below:
//! HTTP handler -> service -> store.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod person;
pub mod service;
pub mod store;
