//! Application state and router assembly.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::modules::user::{self, UserService};

mod shutdown;

pub use shutdown::shutdown_signal;

/// Shared state handed to every handler.
///
/// Carries the service as a trait object so the composition root (or a
/// test) decides the implementation.
#[derive(Clone)]
pub struct AppState {
    user_service: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    pub fn user_service(&self) -> &dyn UserService {
        self.user_service.as_ref()
    }
}

/// Assemble the application router: user routes nested under their base
/// path, with request-cycle tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(user::controller::BASE_PATH, user::controller::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
