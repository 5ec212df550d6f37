//! Utility module
//!
//! - [`AppError`] - API error type
//! - [`validation`] - request validation
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
