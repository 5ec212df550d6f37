//! Shared types for the employee directory
//!
//! Wire models and response bodies used by both the server and the client.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Employee, EmployeeCreate, EmployeeUpdate};
pub use response::{EndpointIndex, ErrorBody, HealthResponse};
