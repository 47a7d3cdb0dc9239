//! Calc API - a small calculator HTTP service
//!
//! Calc API exposes four endpoints:
//! - A root status message
//! - A health check
//! - A binary arithmetic calculation endpoint
//! - The catalog of supported operations
//!
//! The calculation core is pure and free of HTTP concepts; the `api` module
//! maps it onto status codes and JSON bodies.

pub mod api;
pub mod calculator;
pub mod config;
pub mod error;

pub use error::{Error, Result};
