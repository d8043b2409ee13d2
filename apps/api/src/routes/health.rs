use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
///
/// Also reports which form assets loaded, since a missing Thai font still
/// starts the service but prints Thai text as `?`.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let assets = &state.assets;
    let fonts = match (&assets.regular, &assets.bold) {
        (Some(_), Some(_)) => "embedded",
        (Some(_), None) => "embedded-regular-only",
        (None, _) => "standard",
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "form": {
            "fonts": fonts,
            "logo": assets.logo.is_some(),
        }
    }))
}
