pub mod conversion;
pub mod diagnose;
pub mod extraction;

pub use conversion::{ConversionRequest, ConversionResponse, CustomPropertyItem};
pub use diagnose::{DiagnoseResponse, VersionResponse};
pub use extraction::{ExtractionResponse, ExtractionUpload};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "failed to parse PDF: invalid file header")]
    pub error: String,
}
