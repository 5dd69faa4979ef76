//! Aggregation configuration inspection routes.
//!
//! Provides read-only endpoints for inspecting the aggregation configuration
//! the stage was started with. The configuration is validated at startup and
//! immutable afterwards, so there is no update endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use shared::config::AggregationConfig;

use crate::state::AppState;

/// Response body for aggregation configuration requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct AggregationResponse {
    /// Success indicator.
    pub success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The effective aggregation configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<AggregationConfig>,
}

impl AggregationResponse {
    fn success(config: AggregationConfig) -> Self {
        Self {
            success: true,
            message: None,
            config: Some(config),
        }
    }
}

/// Creates aggregation configuration routes.
///
/// # Routes
///
/// - `GET /api/v1/config/aggregation` - Get the effective aggregation configuration
pub fn config_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/config/aggregation", get(get_aggregation_config))
        .with_state(state)
}

/// Handler for GET /api/v1/config/aggregation.
///
/// Returns the aggregation configuration the stage was started with.
async fn get_aggregation_config(State(state): State<AppState>) -> Response {
    let config = state.aggregation_config().clone();
    Json(AggregationResponse::success(config)).into_response()
}
