use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DiagnoseResponse {
    #[schema(example = "SUCCESS")]
    pub status: String,
    #[schema(example = "Convert to Pdf OK")]
    pub status_message: String,
}

impl DiagnoseResponse {
    pub fn ok() -> Self {
        Self {
            status: "SUCCESS".to_string(),
            status_message: "Convert to Pdf OK".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VersionResponse {
    #[schema(example = "PdfServiceApi")]
    pub application_name: String,
    #[schema(example = "v2")]
    pub api_version: String,
    #[schema(example = "0.1.0")]
    pub release_version: String,
}
