//! API Module
//!
//! HTTP handlers and routing for the calculator REST API.
//!
//! # Endpoints
//! - `GET /add?x=&y=` and likewise `/subtract`, `/multiply`, `/divide`
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
