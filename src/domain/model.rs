use serde::{Deserialize, Serialize};

use crate::utils::error::{GalleryError, Result};

/// One gallery image: where its bytes live and how tall its display cell is
/// relative to its width. The locator is opaque to the model, which never
/// dereferences it, and the ratio is whatever the caller measured at
/// insertion time; the model never re-derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub url: String,
    pub ratio: f32,
}

impl ImageEntry {
    pub fn new(url: impl Into<String>, ratio: f32) -> Self {
        Self {
            url: url.into(),
            ratio,
        }
    }
}

/// Ordered list of gallery entries. Order is display order and survives
/// every mutation and every JSON round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageGallery {
    images: Vec<ImageEntry>,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gallery from a sequence of entries, silently dropping any
    /// entry with an empty locator. Callers assembling a gallery from
    /// best-effort drag payloads get a clean list without having to
    /// pre-filter.
    pub fn from_entries(entries: impl IntoIterator<Item = ImageEntry>) -> Self {
        let images = entries
            .into_iter()
            .filter(|entry| {
                if entry.url.is_empty() {
                    tracing::warn!("Dropping gallery entry with empty locator");
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.images.get(index)
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.images
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.images.iter()
    }

    /// Inserts at `index`, clamped to `[0, len]`. Drop targets past the end
    /// of the grid land on the end instead of failing. Entries with an
    /// empty locator are discarded, keeping the no-empty-locator invariant
    /// across mutations.
    pub fn insert(&mut self, entry: ImageEntry, index: usize) {
        if entry.url.is_empty() {
            tracing::warn!("Ignoring insert of entry with empty locator");
            return;
        }
        let index = index.min(self.images.len());
        self.images.insert(index, entry);
    }

    /// Signed-index variant of [`insert`](Self::insert) for hosts whose
    /// drop coordinates can go negative; anything below zero clamps to the
    /// front of the list.
    pub fn insert_signed(&mut self, entry: ImageEntry, index: isize) {
        let index = if index < 0 { 0 } else { index as usize };
        self.insert(entry, index);
    }

    /// Removes and returns the entry at `index`. Unlike `insert` this does
    /// not clamp: an out-of-bounds index is an error and the list is left
    /// untouched.
    pub fn remove(&mut self, index: usize) -> Result<ImageEntry> {
        if index >= self.images.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        Ok(self.images.remove(index))
    }

    /// Reorders by removing `from` and reinserting at the raw `to` index of
    /// the now-shorter list. No shift adjustment is applied, so
    /// `[A, B, C].move_entry(0, 2)` yields `[B, C, A]`: the destination
    /// index is interpreted after the removal, which is how drag-reorder
    /// drops report it. `to` past the end clamps like any insert.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        let entry = self.remove(from)?;
        self.insert(entry, to);
        Ok(())
    }

    /// Canonical JSON encoding: `{"images":[{"url":..,"ratio":..},..]}`.
    /// Field order and array order are fixed, so equal galleries always
    /// encode to equal bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Strict inverse of [`to_json`](Self::to_json). Returns `Parse` if the
    /// bytes are not JSON, the top-level shape is wrong, or any entry lacks
    /// its `url` or `ratio` field, and never yields a partially populated
    /// gallery.
    /// Nothing beyond shape is checked: locators are not resolved and
    /// ratios are not required to be positive.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| GalleryError::Parse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, ratio: f32) -> ImageEntry {
        ImageEntry::new(url, ratio)
    }

    #[test]
    fn test_insert_clamps_past_end() {
        let mut gallery = ImageGallery::new();
        gallery.insert(entry("a", 1.0), 0);
        gallery.insert(entry("b", 1.0), 99);
        assert_eq!(gallery.get(1).unwrap().url, "b");
    }

    #[test]
    fn test_insert_signed_clamps_negative_to_front() {
        let mut gallery = ImageGallery::from_entries(vec![entry("a", 1.0)]);
        gallery.insert_signed(entry("b", 1.0), -5);
        assert_eq!(gallery.get(0).unwrap().url, "b");
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn test_remove_out_of_bounds_leaves_gallery_unchanged() {
        let mut gallery = ImageGallery::from_entries(vec![entry("a", 1.0)]);
        let err = gallery.remove(1).unwrap_err();
        assert!(matches!(
            err,
            GalleryError::IndexOutOfRange { index: 1, len: 1 }
        ));
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn test_move_uses_raw_destination_index() {
        let mut gallery = ImageGallery::from_entries(vec![
            entry("a", 1.0),
            entry("b", 1.0),
            entry("c", 1.0),
        ]);
        gallery.move_entry(0, 2).unwrap();
        let order: Vec<&str> = gallery.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_from_entries_drops_empty_locators() {
        let gallery = ImageGallery::from_entries(vec![entry("", 1.0), entry("a", 0.5)]);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.get(0).unwrap().url, "a");
    }

    #[test]
    fn test_from_json_rejects_missing_ratio() {
        let err = ImageGallery::from_json(br#"{"images": [{"url": "x"}]}"#).unwrap_err();
        assert!(matches!(err, GalleryError::Parse { .. }));
    }
}
