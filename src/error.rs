use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZenError {
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("not a PNG data URL")]
    NotPngDataUrl,

    #[error("download failed: {0}")]
    Download(String),
}

pub type Result<T> = std::result::Result<T, ZenError>;
