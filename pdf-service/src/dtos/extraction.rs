use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractionResponse {
    #[schema(example = json!(["Hello", "World"]))]
    pub lines: Vec<String>,
}

/// Multipart form accepted by `POST /extract-pdf-lines/`.
#[derive(Debug, ToSchema)]
pub struct ExtractionUpload {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
