use crate::core::{ImageFetcher, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Fetcher for locators that resolve to the local filesystem: `file://`
/// URLs and bare paths. Remote schemes are refused here; wiring a network
/// fetcher is a host concern.
#[derive(Debug, Clone, Default)]
pub struct LocalFetcher;

impl LocalFetcher {
    pub fn new() -> Self {
        Self
    }

    fn resolve(locator: &str) -> Result<PathBuf> {
        match Url::parse(locator) {
            Ok(url) if url.scheme() == "file" => url.to_file_path().map_err(|_| {
                std::io::Error::other(format!("Locator {} has no local path", locator)).into()
            }),
            Ok(url) => Err(std::io::Error::other(format!(
                "Cannot fetch {} locator {} without a network fetcher",
                url.scheme(),
                locator
            ))
            .into()),
            // Not an absolute URL; treat it as a filesystem path.
            Err(_) => Ok(PathBuf::from(locator)),
        }
    }
}

#[async_trait]
impl ImageFetcher for LocalFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>> {
        let path = Self::resolve(locator)?;
        let data = fs::read(path)?;
        Ok(data)
    }
}
