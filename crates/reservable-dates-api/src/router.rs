use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::CorsError;
use crate::handlers;
use crate::state::AppState;

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// An empty list means any origin.
    pub fn parse<S: AsRef<str>>(origins: &[S]) -> Result<Self, CorsError> {
        if origins.is_empty() {
            return Ok(CorsOrigins::Any);
        }
        origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o.as_ref().trim())
                    .map_err(|_| CorsError::InvalidOrigin(o.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CorsOrigins::List)
    }

    fn layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
                Method::HEAD,
            ])
            .allow_headers(Any);
        match self {
            CorsOrigins::Any => layer.allow_origin(Any),
            CorsOrigins::List(origins) => layer.allow_origin(AllowOrigin::list(origins.clone())),
        }
    }
}

/// Create the application router with routes and middleware.
pub fn create_router(state: AppState, cors: &CorsOrigins) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/reservable_dates", post(handlers::reservable_dates))
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer())
        .with_state(state)
}
