//! API route modules
//!
//! - [`health`] - liveness, detailed health and endpoint index
//! - [`employees`] - employee CRUD

pub mod employees;
pub mod health;
