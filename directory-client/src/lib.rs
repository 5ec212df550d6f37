//! Directory Client - terminal client for the employee directory
//!
//! Talks to the directory server over HTTP and renders a TUI for
//! browsing, searching, and editing employee records.

pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod subscription;
pub mod tui;

pub use app::{App, Command, Outcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use subscription::{Fetch, SearchSubscription};
