#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use flate2::{write::GzEncoder, Compression};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdf_service::config::PdfServiceConfig;
use pdf_service::services::{LopdfExtractor, PdfRenderer, RenderError, RenderOptions};
use pdf_service::startup::{build_router, AppState};
use std::io::Write;
use std::sync::{Arc, Mutex};

pub const STUB_PDF: &[u8] = b"%PDF-1.4\n%stub\n%%EOF\n";

/// Records every render call and answers with a fixed document.
#[derive(Default)]
pub struct StubRenderer {
    pub calls: Mutex<Vec<(String, RenderOptions)>>,
}

impl StubRenderer {
    pub fn calls(&self) -> Vec<(String, RenderOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfRenderer for StubRenderer {
    async fn render(&self, html: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        self.calls
            .lock()
            .unwrap()
            .push((html.to_string(), options.clone()));
        Ok(STUB_PDF.to_vec())
    }
}

pub struct FailingRenderer;

#[async_trait]
impl PdfRenderer for FailingRenderer {
    async fn render(&self, _html: &str, _options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::EmptyOutput)
    }
}

pub fn test_config() -> PdfServiceConfig {
    let mut config = PdfServiceConfig::load().expect("Failed to load configuration");
    config.common.port = 0;
    config
}

pub fn app_with_renderer(renderer: Arc<dyn PdfRenderer>) -> Router {
    app_with_config(test_config(), renderer)
}

pub fn app_with_config(config: PdfServiceConfig, renderer: Arc<dyn PdfRenderer>) -> Router {
    build_router(AppState {
        config,
        renderer,
        extractor: Arc::new(LopdfExtractor::new()),
    })
}

pub fn app() -> Router {
    app_with_renderer(Arc::new(StubRenderer::default()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// JSON body compressed with gzip and labelled with `Content-Encoding`.
pub fn post_gzip_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(body.to_string().as_bytes())
        .expect("Failed to compress body");
    let compressed = encoder.finish().expect("Failed to finish gzip stream");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_ENCODING, "gzip")
        .body(Body::from(compressed))
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const BOUNDARY: &str = "pdf-service-test-boundary";

/// A single-part multipart upload.
pub fn post_multipart(
    uri: &str,
    field_name: &str,
    file_name: Option<&str>,
    data: &[u8],
) -> Request<Body> {
    let disposition = match file_name {
        Some(name) => format!("form-data; name=\"{}\"; filename=\"{}\"", field_name, name),
        None => format!("form-data; name=\"{}\"", field_name),
    };

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: {}\r\nContent-Type: application/pdf\r\n\r\n",
            BOUNDARY, disposition
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

pub async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
}

/// Build a PDF where every line is its own text object, one page per slice.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    save(pdf_document(pages))
}

/// A document guarded by a user password, so the empty password is refused.
pub fn password_protected_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = pdf_document(pages);

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "P" => -4,
        "O" => Object::string_literal(vec![0x4fu8; 32]),
        "U" => Object::string_literal(vec![0u8; 32]),
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x11u8; 16]),
            Object::string_literal(vec![0x11u8; 16]),
        ],
    );

    save(doc)
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("Failed to write PDF");
    buffer
}

fn pdf_document(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 750 - (i as i64) * 20;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("Failed to encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}
