pub mod editor;

pub use crate::domain::model::{ImageEntry, ImageGallery};
pub use crate::domain::ports::{ConfigProvider, ImageFetcher, Storage, ThumbnailSink};
pub use crate::utils::error::Result;
