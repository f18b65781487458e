use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CustomPropertyItem {
    #[schema(example = "UserAccountRef")]
    pub key: String,
    #[schema(example = "42")]
    pub value: String,
}

/// Body of `POST /api/Pdf/ConvertHtmlToPdf`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConversionRequest {
    #[schema(example = "5f0c2a8e-7d0b-4c55-9d1a-1f0d7f3b9a01")]
    pub correlation_id: String,

    #[schema(example = "A4")]
    pub page_size: String,

    #[schema(example = "Portrait")]
    pub page_orientation: String,

    /// Margin on every side in millimetres; zero keeps the 0.75in default.
    #[schema(example = 0)]
    pub margins: i32,

    /// Engine selector. A single engine serves every value.
    #[schema(example = 0)]
    pub pdf_converter: i32,

    #[serde(default)]
    #[schema(example = "Invoice")]
    pub document_title: String,

    /// Zoom percentage applied to the page content.
    #[serde(default)]
    #[schema(example = 100)]
    pub zoom: Option<i32>,

    /// UTF-8 HTML, base64 encoded.
    #[schema(example = "PGh0bWw+PGJvZHk+SGVsbG88L2JvZHk+PC9odG1sPg==")]
    pub base64_html_content: String,

    #[serde(default)]
    pub custom_property_items: Option<Vec<CustomPropertyItem>>,
}

impl ConversionRequest {
    /// Value of the custom property named `key`, if the caller sent one.
    pub fn custom_property(&self, key: &str) -> Option<&str> {
        self.custom_property_items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    pub fn custom_property_count(&self) -> usize {
        self.custom_property_items.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConversionResponse {
    pub success: bool,
    #[schema(example = "Success")]
    pub message: Option<String>,
    #[schema(example = "5f0c2a8e-7d0b-4c55-9d1a-1f0d7f3b9a01")]
    pub id: String,
    /// Base64 encoded PDF; empty on failure.
    #[serde(default)]
    pub content: String,
}

impl ConversionResponse {
    pub fn success(id: impl Into<String>, pdf: &[u8]) -> Self {
        Self {
            success: true,
            message: Some("Success".to_string()),
            id: id.into(),
            content: STANDARD.encode(pdf),
        }
    }

    pub fn failure(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            id: id.into(),
            content: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_pascal_case_and_defaults() {
        let request: ConversionRequest = serde_json::from_value(json!({
            "CorrelationId": "abc",
            "PageSize": "A4",
            "PageOrientation": "Portrait",
            "Margins": 0,
            "PdfConverter": 0,
            "Base64HtmlContent": "PGh0bWw+PC9odG1sPg=="
        }))
        .unwrap();

        assert_eq!(request.correlation_id, "abc");
        assert_eq!(request.document_title, "");
        assert_eq!(request.zoom, None);
        assert_eq!(request.custom_property_count(), 0);
        assert_eq!(request.custom_property("UserAccountRef"), None);
    }

    #[test]
    fn request_accepts_null_custom_properties() {
        let request: ConversionRequest = serde_json::from_value(json!({
            "CorrelationId": "abc",
            "PageSize": "A4",
            "PageOrientation": "Portrait",
            "Margins": 0,
            "PdfConverter": 0,
            "Base64HtmlContent": "",
            "CustomPropertyItems": null
        }))
        .unwrap();

        assert!(request.custom_property_items.is_none());
    }

    #[test]
    fn custom_property_lookup() {
        let request: ConversionRequest = serde_json::from_value(json!({
            "CorrelationId": "abc",
            "PageSize": "A4",
            "PageOrientation": "Portrait",
            "Margins": 0,
            "PdfConverter": 0,
            "Base64HtmlContent": "",
            "CustomPropertyItems": [
                { "Key": "Tenant", "Value": "acme" },
                { "Key": "UserAccountRef", "Value": "42" }
            ]
        }))
        .unwrap();

        assert_eq!(request.custom_property_count(), 2);
        assert_eq!(request.custom_property("UserAccountRef"), Some("42"));
    }

    #[test]
    fn response_serializes_wire_names() {
        let value = serde_json::to_value(ConversionResponse::failure("abc", "bad input")).unwrap();
        assert_eq!(
            value,
            json!({ "Success": false, "Message": "bad input", "Id": "abc", "Content": "" })
        );
    }

    #[test]
    fn success_encodes_pdf_bytes() {
        let response = ConversionResponse::success("abc", b"%PDF-1.4");
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Success"));
        assert_eq!(response.content, "JVBERi0xLjQ=");
    }
}
