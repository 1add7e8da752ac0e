mod error;
mod page;
mod routes;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use page::render_index_page;
pub use routes::{ACCESS_TOKEN_HEADER, SEND_MESSAGE_PATH};
pub use state::AppState;

use page::index_handler;
use routes::{method_not_allowed, send_message_handler};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            SEND_MESSAGE_PATH,
            post(send_message_handler).fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
