use crate::dtos::ConversionRequest;
use crate::services::layout::{Margin, Margins, PageOrientation, PageSize, RenderOptions};
use crate::services::renderer::{PdfRenderer, RenderError};
use ::metrics::histogram;
use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Base64HtmlContent can not be null or empty.")]
    EmptyContent,

    #[error("Base64HtmlContent is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Base64HtmlContent is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Html to pdf conversion failed: {0}")]
    Render(#[from] RenderError),
}

impl ConversionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConversionError::EmptyContent
            | ConversionError::InvalidBase64(_)
            | ConversionError::InvalidUtf8(_) => StatusCode::BAD_REQUEST,
            ConversionError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Decode a base64 HTML payload into text. Whitespace inside the payload is
/// ignored so line-wrapped base64 is accepted.
pub fn decode_html(payload: &str) -> Result<String, ConversionError> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if compact.is_empty() {
        return Err(ConversionError::EmptyContent);
    }

    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

impl From<&ConversionRequest> for RenderOptions {
    fn from(request: &ConversionRequest) -> Self {
        let page_size = request.page_size.parse().unwrap_or_else(|e: String| {
            tracing::warn!(
                correlation_id = %request.correlation_id,
                error = %e,
                "Falling back to default page size"
            );
            PageSize::default()
        });

        let orientation = request
            .page_orientation
            .parse()
            .unwrap_or_else(|e: String| {
                tracing::warn!(
                    correlation_id = %request.correlation_id,
                    error = %e,
                    "Falling back to default page orientation"
                );
                PageOrientation::default()
            });

        let margins = match u32::try_from(request.margins) {
            Ok(mm) if mm > 0 => Margins::uniform(Margin::Millimetres(mm)),
            _ => Margins::default(),
        };

        let document_title = Some(request.document_title.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        // Untitled documents are named after the correlation id; the footer stays blank
        let title = document_title.clone().or_else(|| {
            Some(request.correlation_id.trim())
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        });

        let zoom = request
            .zoom
            .filter(|z| *z > 0)
            .map(|z| z as f32 / 100.0);

        RenderOptions {
            page_size,
            orientation,
            margins,
            title,
            zoom,
            footer_center: document_title,
            ..RenderOptions::default()
        }
    }
}

/// Decode the request payload and render it.
pub async fn convert(
    renderer: &dyn PdfRenderer,
    request: &ConversionRequest,
) -> Result<Vec<u8>, ConversionError> {
    let html = decode_html(&request.base64_html_content)?;
    let options = RenderOptions::from(request);

    tracing::info!(
        correlation_id = %request.correlation_id,
        html_size = html.len(),
        page_size = options.page_size.as_str(),
        orientation = options.orientation.as_str(),
        "Rendering html to pdf"
    );

    let started = Instant::now();
    let rendered = renderer.render(&html, &options).await;
    histogram!("pdf_render_duration_seconds").record(started.elapsed().as_secs_f64());

    Ok(rendered?)
}
