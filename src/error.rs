use pixel_stylize::StylizeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Stylize error: {0}")]
    Stylize(#[from] StylizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<png::DecodingError> for RenderError {
    fn from(e: png::DecodingError) -> Self {
        RenderError::PngDecode(e.to_string())
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(e: png::EncodingError) -> Self {
        RenderError::PngEncode(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}
