//! HTTP API
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /health | [`health::health_check`] |
//! | POST | /employees | [`employees::create`] |
//! | GET | /employees | [`employees::list`] |
//! | GET | /employees/{id} | [`employees::get_by_id`] |
//! | PUT | /employees | [`employees::update`] |
//! | DELETE | /employees/{id} | [`employees::delete`] |

pub mod employees;
pub mod extract;
pub mod health;
pub mod middleware;

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::get;
use http::{HeaderName, HeaderValue};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(employees::router())
}

/// Build the fully configured application
///
/// Used by the HTTP server and by the API tests.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .with_state(state)
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Copy the request ID onto the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Outermost: assign a request ID unless the client sent one
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
