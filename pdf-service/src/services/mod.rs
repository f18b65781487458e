pub mod conversion;
pub mod executor;
pub mod extractor;
pub mod layout;
pub mod metrics;
pub mod renderer;

pub use conversion::{convert, decode_html, ConversionError};
pub use executor::{CommandExecutor, ExecutorError};
pub use extractor::{extract_lines, ExtractionError, LopdfExtractor, PdfTextExtractor};
pub use layout::{Margin, Margins, PageOrientation, PageSize, RenderOptions};
pub use self::metrics::{get_metrics, init_metrics};
pub use renderer::{PdfRenderer, RenderError, WkhtmltopdfRenderer};
