pub mod health;
pub mod metrics;
mod recommend;

use axum::{Router, routing::post};

/// Build the recommendation routes
pub fn api_routes() -> Router {
    Router::new().route("/recommend", post(recommend::recommend))
}
