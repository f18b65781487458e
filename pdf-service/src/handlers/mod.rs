pub mod convert;
pub mod diagnose;
pub mod docs;
pub mod extract;
pub mod health;
pub mod metrics;

pub use convert::convert_html_to_pdf;
pub use diagnose::{diagnose, version};
pub use docs::docs_redirect;
pub use extract::extract_pdf_lines;
pub use health::health_check;
pub use self::metrics::metrics;
