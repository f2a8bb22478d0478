//! # users-api
//!
//! A minimal user-resource HTTP service with a mockable service boundary.
//!
//! The crate wires three small pieces together:
//!
//! - **[`UserService`](modules::user::UserService)**: the async trait owning
//!   user data. Lookup misses come back as `None` and write outcomes as
//!   booleans; nothing else is signaled.
//! - **User endpoint handlers**: axum handlers translating each request into
//!   a single service call and mapping the result onto a status code
//!   (200/404 for reads, 201/400 for creation, 200/404 for deletion).
//! - **[`AppState`]**: shared state carrying the service as a trait object,
//!   so tests can swap in a stub with canned responses.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use users_api::modules::user::InMemoryUserService;
//! use users_api::server::{self, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::new(Arc::new(InMemoryUserService::new()));
//!     let app = server::app(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod modules;
pub mod server;

// Re-export core types
pub use error::{ApiError, Result};
pub use server::AppState;
