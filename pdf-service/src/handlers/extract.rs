use crate::dtos::{ErrorResponse, ExtractionResponse, ExtractionUpload};
use crate::services::{extract_lines, ExtractionError};
use crate::startup::AppState;
use ::metrics::counter;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;

impl IntoResponse for ExtractionError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Extract the text of every page of an uploaded PDF, one entry per line
#[utoipa::path(
    post,
    path = "/extract-pdf-lines/",
    request_body(content = ExtractionUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Lines in page order", body = ExtractionResponse),
        (status = 400, description = "No file in the upload", body = ErrorResponse),
        (status = 500, description = "PDF could not be parsed", body = ErrorResponse)
    ),
    tag = "Pdf"
)]
pub async fn extract_pdf_lines(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResponse>, Response> {
    let (file_name, data) = read_upload(&mut multipart)
        .await
        .map_err(IntoResponse::into_response)?;

    tracing::info!(
        file_name = %file_name,
        size = data.len(),
        "Pdf line extraction started"
    );

    let extractor = state.extractor.clone();
    let result = tokio::task::spawn_blocking(move || extract_lines(extractor.as_ref(), &data))
        .await
        .unwrap_or_else(|e| Err(ExtractionError::Worker(e.to_string())));

    match result {
        Ok(lines) => {
            counter!("pdf_extractions_total", "outcome" => "success").increment(1);
            tracing::info!(
                file_name = %file_name,
                line_count = lines.len(),
                "Pdf line extraction completed"
            );
            Ok(Json(ExtractionResponse { lines }))
        }
        Err(err) => {
            counter!("pdf_extractions_total", "outcome" => "failure").increment(1);
            tracing::error!(
                file_name = %file_name,
                error = %err,
                "Pdf line extraction failed"
            );
            Err(err.into_response())
        }
    }
}

/// First multipart field named `file`, or the first one carrying a file name.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") && field.file_name().is_none() {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.pdf").to_string();
        let data = field.bytes().await.map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
        })?;

        return Ok((file_name, data));
    }

    Err(AppError::BadRequest(anyhow::anyhow!("No file uploaded")))
}
