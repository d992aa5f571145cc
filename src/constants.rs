pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_INPUT_DIR: &str = "img";
pub const DEFAULT_OUTPUT_DIR: &str = "compressed";

/// Input formats the batch run will pick up. Everything is re-encoded as
/// JPEG on the way out regardless of which of these it came in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "jpg",
            SourceFormat::Png => "png",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "image/jpeg",
            SourceFormat::Png => "image/png",
        }
    }
}
