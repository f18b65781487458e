//! Page layout handed to the rendering engine.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::A3 => "A3",
            PageSize::A4 => "A4",
            PageSize::A5 => "A5",
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A3" => Ok(PageSize::A3),
            "A4" => Ok(PageSize::A4),
            "A5" => Ok(PageSize::A5),
            "LETTER" => Ok(PageSize::Letter),
            "LEGAL" => Ok(PageSize::Legal),
            _ => Err(format!("Invalid page size: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageOrientation::Portrait => "Portrait",
            PageOrientation::Landscape => "Landscape",
        }
    }
}

impl FromStr for PageOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portrait" => Ok(PageOrientation::Portrait),
            "landscape" => Ok(PageOrientation::Landscape),
            _ => Err(format!("Invalid page orientation: {}", s)),
        }
    }
}

/// A margin length in the units wkhtmltopdf understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Margin {
    Inches(f32),
    Millimetres(u32),
}

impl Margin {
    pub const DEFAULT: Margin = Margin::Inches(0.75);
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Margin::Inches(value) => write!(f, "{}in", value),
            Margin::Millimetres(value) => write!(f, "{}mm", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Margin,
    pub right: Margin,
    pub bottom: Margin,
    pub left: Margin,
}

impl Margins {
    pub fn uniform(margin: Margin) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(Margin::DEFAULT)
    }
}

/// Right-aligned running header, expanded by wkhtmltopdf on every page.
pub const PAGE_NUMBER_HEADER: &str = "Page [page] of [toPage]";

/// Point size shared by the running header and footer.
pub const DECORATION_FONT_SIZE: u32 = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub page_size: PageSize,
    pub orientation: PageOrientation,
    pub margins: Margins,
    pub encoding: &'static str,
    pub title: Option<String>,
    /// Scale factor, 1.0 being 100%.
    pub zoom: Option<f32>,
    pub header_right: Option<String>,
    pub footer_center: Option<String>,
    pub decoration_font_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            orientation: PageOrientation::default(),
            margins: Margins::default(),
            encoding: "UTF-8",
            title: None,
            zoom: None,
            header_right: Some(PAGE_NUMBER_HEADER.to_string()),
            footer_center: None,
            decoration_font_size: DECORATION_FONT_SIZE,
        }
    }
}
