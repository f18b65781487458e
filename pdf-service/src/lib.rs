pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "WkhtmltoPdf Converter"),
    paths(
        handlers::convert::convert_html_to_pdf,
        handlers::extract::extract_pdf_lines,
        handlers::diagnose::diagnose,
        handlers::diagnose::version,
        handlers::health::health_check,
    ),
    components(
        schemas(
            dtos::ConversionRequest,
            dtos::ConversionResponse,
            dtos::CustomPropertyItem,
            dtos::ExtractionResponse,
            dtos::ExtractionUpload,
            dtos::ErrorResponse,
            dtos::DiagnoseResponse,
            dtos::VersionResponse,
        )
    ),
    tags(
        (name = "Pdf", description = "HTML to PDF conversion and PDF text extraction"),
        (name = "Diagnose", description = "Converter status and version"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;
