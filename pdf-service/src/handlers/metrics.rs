use crate::services::get_metrics;
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        get_metrics(),
    )
}
