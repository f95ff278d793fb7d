use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Index {index} out of range for gallery of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Gallery parse error: {message}")]
    Parse { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
