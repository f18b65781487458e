use crate::services::executor::{CommandExecutor, ExecutorError};
use crate::services::layout::RenderOptions;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rendering engine failed: {0}")]
    Engine(#[from] ExecutorError),

    #[error("rendering engine produced no output")]
    EmptyOutput,
}

/// Converts an HTML document into PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError>;
}

/// Renders through the `wkhtmltopdf` binary: HTML on stdin, PDF on stdout.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfRenderer {
    binary: String,
    executor: CommandExecutor,
}

impl WkhtmltopdfRenderer {
    pub fn new(binary: impl Into<String>, executor: CommandExecutor) -> Self {
        Self {
            binary: binary.into(),
            executor,
        }
    }

    pub fn args(options: &RenderOptions) -> Vec<String> {
        let mut args = vec![
            "--quiet".to_string(),
            "--encoding".to_string(),
            options.encoding.to_string(),
            "--page-size".to_string(),
            options.page_size.as_str().to_string(),
            "--orientation".to_string(),
            options.orientation.as_str().to_string(),
            "--margin-top".to_string(),
            options.margins.top.to_string(),
            "--margin-right".to_string(),
            options.margins.right.to_string(),
            "--margin-bottom".to_string(),
            options.margins.bottom.to_string(),
            "--margin-left".to_string(),
            options.margins.left.to_string(),
        ];

        if let Some(header) = &options.header_right {
            args.push("--header-right".to_string());
            args.push(header.clone());
            args.push("--header-font-size".to_string());
            args.push(options.decoration_font_size.to_string());
        }

        if let Some(footer) = &options.footer_center {
            args.push("--footer-center".to_string());
            args.push(footer.clone());
            args.push("--footer-font-size".to_string());
            args.push(options.decoration_font_size.to_string());
        }

        if let Some(title) = &options.title {
            args.push("--title".to_string());
            args.push(title.clone());
        }

        if let Some(zoom) = options.zoom {
            args.push("--zoom".to_string());
            args.push(zoom.to_string());
        }

        // Read the page from stdin, write the document to stdout
        args.push("-".to_string());
        args.push("-".to_string());
        args
    }
}

#[async_trait]
impl PdfRenderer for WkhtmltopdfRenderer {
    async fn render(&self, html: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let args = Self::args(options);
        let output = self
            .executor
            .execute(&self.binary, &args, Some(html.as_bytes()))
            .await?;

        if output.stdout.is_empty() {
            return Err(RenderError::EmptyOutput);
        }

        Ok(output.stdout)
    }
}
