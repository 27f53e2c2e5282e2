use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::config::Config;
use crate::services::{boarding, export, layout};
use crate::AppState;

pub fn routes(config: &Config) -> Router<Arc<AppState>> {
    let mut router = Router::new()
        .route("/boarding/sample", get(get_sample))
        .route("/boarding/sequence", post(generate_sequence));
    if config.features.enable_export {
        router = router.route("/boarding/export", post(export_csv));
    }
    if config.features.enable_layout {
        router = router.route("/boarding/layout", post(get_layout));
    }
    router
}

/* ---------- helpers ---------- */

// Тело всех POST-запросов: сырой текст с бронированиями
#[derive(Debug, Deserialize, Validate)]
struct GenerateRequest {
    #[validate(length(min = 1))]
    data: String,
}

fn check_payload(state: &AppState, req: &GenerateRequest) -> Result<(), (StatusCode, String)> {
    // пустой ввод - в UI кнопка неактивна, для API это 400
    if req.validate().is_err() || req.data.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Данные бронирований не должны быть пустыми".to_string(),
        ));
    }
    if req.data.len() > state.config.limits.max_input_bytes {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            "Объём данных превышает допустимый".to_string(),
        ));
    }
    Ok(())
}

/* ---------- BOARDING ---------- */

// GET /api/boarding/sample - пример данных для кнопки "вставить пример"
async fn get_sample() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        boarding::SAMPLE_INPUT,
    )
}

// POST /api/boarding/sequence
async fn generate_sequence(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    check_payload(&state, &req)?;

    let report = boarding::parse_with_report(&req.data);
    let rows = boarding::compute_boarding_sequence(&report.bookings);
    let estimated_seconds = boarding::estimate_total_time(&rows);

    if !report.skipped.is_empty() {
        tracing::warn!(
            "generate_sequence: пропущено {} строк при разборе",
            report.skipped.len()
        );
    }
    tracing::info!(
        "Сформирована последовательность: {} броней, оценка {} с",
        rows.len(),
        estimated_seconds
    );

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "rows": rows,
            "count": rows.len(),
            "estimated_seconds": estimated_seconds,
            "skipped_lines": report.skipped,
            "generated_at": chrono::Utc::now(),
        })),
    ))
}

// POST /api/boarding/export - CSV для скачивания
async fn export_csv(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, (StatusCode, String)> {
    check_payload(&state, &req)?;

    let rows = boarding::compute_boarding_sequence(&boarding::parse_bookings(&req.data));
    let csv = export::sequence_to_csv(&rows);

    Response::builder()
        .header("Content-Type", "text/csv; charset=utf-8")
        .header(
            "Content-Disposition",
            "attachment; filename=\"boarding-sequence.csv\"",
        )
        .body(Body::from(csv))
        .map_err(|e| {
            tracing::error!("export_csv: ошибка сборки ответа: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Не удалось сформировать файл".to_string(),
            )
        })
}

// POST /api/boarding/layout - сетка салона для отрисовки
async fn get_layout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    check_payload(&state, &req)?;

    let rows = boarding::compute_boarding_sequence(&boarding::parse_bookings(&req.data));
    let grid = layout::build_layout(&rows, state.config.bus.rows);

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "front": "Row 1",
            "rear": format!("Row {}", state.config.bus.rows),
            "rows": grid,
        })),
    ))
}
