use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable storage for serialized gallery documents. The host shell owns
/// the save cadence; this port only moves bytes.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Retrieves image bytes for a locator, typically to measure a display
/// ratio before inserting an entry. The gallery model itself never fetches.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>>;
}

/// Host-side hook for attaching a representative thumbnail to the persisted
/// document's metadata. Unrelated to model correctness.
pub trait ThumbnailSink: Send + Sync {
    fn attach_thumbnail(&mut self, bytes: &[u8]);
}

pub trait ConfigProvider: Send + Sync {
    fn document_path(&self) -> &str;
    fn verbose(&self) -> bool;
}
