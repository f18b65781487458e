use crate::dtos::{ConversionRequest, ConversionResponse};
use crate::services::conversion;
use crate::startup::AppState;
use ::metrics::counter;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;

/// Convert base64 encoded HTML into a base64 encoded PDF
#[utoipa::path(
    post,
    path = "/api/Pdf/ConvertHtmlToPdf",
    request_body = ConversionRequest,
    responses(
        (status = 200, description = "PDF rendered", body = ConversionResponse),
        (status = 400, description = "Payload is empty or not base64 encoded UTF-8", body = ConversionResponse),
        (status = 500, description = "Rendering engine failed", body = ConversionResponse)
    ),
    tag = "Pdf"
)]
pub async fn convert_html_to_pdf(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    tracing::info!(
        correlation_id = %request.correlation_id,
        payload_size = request.base64_html_content.len(),
        pdf_converter = request.pdf_converter,
        custom_properties = request.custom_property_count(),
        user_account_ref = request.custom_property("UserAccountRef"),
        "Pdf convert request received"
    );

    let started = Instant::now();
    let result = conversion::convert(state.renderer.as_ref(), &request).await;

    match result {
        Ok(pdf) => {
            counter!("pdf_conversions_total", "outcome" => "success").increment(1);
            tracing::info!(
                correlation_id = %request.correlation_id,
                pdf_size = pdf.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Pdf conversion completed"
            );
            (
                StatusCode::OK,
                Json(ConversionResponse::success(request.correlation_id, &pdf)),
            )
                .into_response()
        }
        Err(err) => {
            counter!("pdf_conversions_total", "outcome" => "failure").increment(1);
            tracing::error!(
                correlation_id = %request.correlation_id,
                error = %err,
                "Html to pdf conversion failed"
            );
            (
                err.status_code(),
                Json(ConversionResponse::failure(
                    request.correlation_id,
                    err.to_string(),
                )),
            )
                .into_response()
        }
    }
}
