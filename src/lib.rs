pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{LocalFetcher, LocalStorage};
pub use core::editor::GalleryEditor;
pub use domain::model::{ImageEntry, ImageGallery};
pub use domain::ports::{ConfigProvider, ImageFetcher, Storage, ThumbnailSink};
pub use utils::error::{GalleryError, Result};
