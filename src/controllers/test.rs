use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::booking::format_booking_id;
use crate::services::boarding::{
    compute_boarding_sequence, estimate_total_time, parse_bookings, SAMPLE_INPUT,
};

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new().route("/test", get(test_handler))
}

// Прогоняем канонический пример через весь конвейер
async fn test_handler(State(state): State<Arc<crate::AppState>>) -> Json<serde_json::Value> {
    let rows = compute_boarding_sequence(&parse_bookings(SAMPLE_INPUT));
    let estimated_seconds = estimate_total_time(&rows);
    Json(serde_json::json!({
        "message": "Генератор последовательности работает!",
        "environment": state.config.app.environment,
        "sample": {
            "count": rows.len(),
            "first_booking": rows.first().map(|r| format_booking_id(r.booking_id)),
            "estimated_seconds": estimated_seconds,
        }
    }))
}
