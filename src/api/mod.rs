//! HTTP surface of the service.
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | GET | `/` | no |
//! | GET | `/health` | no |
//! | GET | `/menu` | no |
//! | GET | `/menu/{item_id}` | no |
//! | POST | `/order` | no |
//! | GET | `/order` | bearer |
//! | GET | `/order/{order_id}` | no |
//! | PUT | `/order/{order_id}/status` | bearer |
//! | POST | `/login` | no |
//! | GET | `/categories` | no |
//!
//! Errors are JSON `{"detail": "..."}`; see [`ApiError`].

use std::any::Any;

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, warn};

pub mod auth;
pub mod error;
pub mod handlers;
pub mod state;

pub use auth::Authenticated;
pub use error::{ApiError, ErrorBody};
pub use state::AppState;

use crate::config::CorsOrigins;
use handlers::*;

pub fn router(state: AppState, cors_origins: &CorsOrigins) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/menu", get(menu_handler))
        .route("/menu/{item_id}", get(menu_item_handler))
        .route("/order", post(create_order_handler).get(list_orders_handler))
        .route("/order/{order_id}", get(order_handler))
        .route("/order/{order_id}/status", put(order_status_handler))
        .route("/login", post(login_handler))
        .route("/categories", get(categories_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(AnyOrigin).allow_headers(AnyOrigin);

    match origins {
        CorsOrigins::Any => cors.allow_origin(AnyOrigin),
        CorsOrigins::List(list) => {
            let allowed = list.iter().filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| warn!(%origin, "Ignoring malformed CORS origin"))
                    .ok()
            });
            cors.allow_origin(AllowOrigin::list(allowed))
        }
    }
}

/// Unhandled failures become a 500 whose detail is the panic message.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Internal Server Error".to_string()
    };

    error!(%detail, "Handler panicked");
    ApiError::Internal(detail).into_response()
}
