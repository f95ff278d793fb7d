use crate::domain::model::{ImageEntry, ImageGallery};
use crate::domain::ports::{Storage, ThumbnailSink};
use crate::utils::error::{GalleryError, Result};

type ChangeListener = Box<dyn Fn(&ImageGallery) + Send + Sync>;

/// Host-facing mutation surface for one gallery document.
///
/// The editor applies structural changes to the in-memory gallery, notifies
/// the registered change listener after each one, and persists the JSON
/// encoding through the `Storage` port when the host calls [`save`]. It
/// never saves on its own: the host decides the cadence, the editor only
/// tracks what is unsaved.
///
/// [`save`]: GalleryEditor::save
pub struct GalleryEditor<S: Storage> {
    storage: S,
    path: String,
    gallery: ImageGallery,
    change_count: u64,
    dirty: bool,
    listener: Option<ChangeListener>,
    thumbnail: Option<Vec<u8>>,
    thumbnail_sink: Option<Box<dyn ThumbnailSink>>,
}

impl<S: Storage> std::fmt::Debug for GalleryEditor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryEditor")
            .field("path", &self.path)
            .field("gallery", &self.gallery)
            .field("change_count", &self.change_count)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl<S: Storage> GalleryEditor<S> {
    /// Opens the document at `path`. A missing or zero-length file is a
    /// fresh document and yields an empty gallery; malformed contents
    /// propagate as a `Parse` failure so the host can decide between
    /// showing an empty gallery and surfacing the load error.
    pub async fn open(storage: S, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let gallery = match storage.read_file(&path).await {
            Ok(bytes) if bytes.is_empty() => ImageGallery::new(),
            Ok(bytes) => ImageGallery::from_json(&bytes)?,
            Err(GalleryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path, "No document found, starting with an empty gallery");
                ImageGallery::new()
            }
            Err(e) => return Err(e),
        };
        tracing::debug!(path = %path, entries = gallery.len(), "Opened gallery document");
        Ok(Self {
            storage,
            path,
            gallery,
            change_count: 0,
            dirty: false,
            listener: None,
            thumbnail: None,
            thumbnail_sink: None,
        })
    }

    pub fn gallery(&self) -> &ImageGallery {
        &self.gallery
    }

    /// Unsaved structural changes exist.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Structural changes applied since the document was opened.
    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    /// Registers the `onChange` callback fired after every successful
    /// structural change, with the gallery in its new state.
    pub fn on_change(&mut self, listener: impl Fn(&ImageGallery) + Send + Sync + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Supplies representative image bytes to forward to the thumbnail sink
    /// on the next save.
    pub fn set_thumbnail(&mut self, bytes: Vec<u8>) {
        self.thumbnail = Some(bytes);
    }

    pub fn set_thumbnail_sink(&mut self, sink: Box<dyn ThumbnailSink>) {
        self.thumbnail_sink = Some(sink);
    }

    pub fn insert(&mut self, entry: ImageEntry, index: usize) {
        let before = self.gallery.len();
        self.gallery.insert(entry, index);
        // The model drops empty-locator entries; only a real insertion
        // counts as a change.
        if self.gallery.len() != before {
            self.mark_changed();
        }
    }

    pub fn insert_signed(&mut self, entry: ImageEntry, index: isize) {
        let before = self.gallery.len();
        self.gallery.insert_signed(entry, index);
        if self.gallery.len() != before {
            self.mark_changed();
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<ImageEntry> {
        let removed = self.gallery.remove(index)?;
        self.mark_changed();
        Ok(removed)
    }

    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        self.gallery.move_entry(from, to)?;
        self.mark_changed();
        Ok(())
    }

    /// Replaces the whole gallery, as a host does after receiving fresh
    /// document contents.
    pub fn replace(&mut self, gallery: ImageGallery) {
        self.gallery = gallery;
        self.mark_changed();
    }

    /// Serializes the gallery and writes it through the storage port. Also
    /// forwards the representative thumbnail to the sink, if the host
    /// supplied both.
    pub async fn save(&mut self) -> Result<()> {
        let bytes = self.gallery.to_json()?;
        self.storage.write_file(&self.path, &bytes).await?;
        self.dirty = false;
        if let (Some(sink), Some(thumb)) = (self.thumbnail_sink.as_mut(), self.thumbnail.as_ref()) {
            sink.attach_thumbnail(thumb);
        }
        tracing::debug!(
            path = %self.path,
            entries = self.gallery.len(),
            "Saved gallery document"
        );
        Ok(())
    }

    fn mark_changed(&mut self) {
        self.change_count += 1;
        self.dirty = true;
        if let Some(listener) = &self.listener {
            listener(&self.gallery);
        }
    }
}
