//! Calc Cache - An arithmetic HTTP service with a response cache
//!
//! Serves add, subtract, multiply and divide over query parameters and
//! caches each result for a minute, renewing the window on every hit.

pub mod api;
pub mod cache;
pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;

pub use api::AppState;
pub use calculator::Calculator;
pub use config::Config;
pub use operations::{Operation, OperationRegistry};
