//! Before/after photo gallery.

use std::fmt;

use dioxus::prelude::*;

/// Gallery settings; `size` is the number of photos in each variant group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryConfig {
    pub size: usize,
}

/// Which side of the before/after pair a photo shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoVariant {
    Before,
    After,
}

impl fmt::Display for PhotoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// One gallery slot, derived from the config rather than stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoEntry {
    pub index: usize,
    pub variant: PhotoVariant,
}

impl PhotoEntry {
    /// Asset path for this slot. Files on disk are numbered from 1.
    pub fn path(&self) -> String {
        format!("images/{}/{}.jpg", self.variant, self.index + 1)
    }
}

/// Derive the full entry sequence for a gallery of `size` photo pairs:
/// all before entries first, then the matching after entries, so the two
/// groups read as blocks. Entries `i` and `i + size` show the same job.
pub fn photo_entries(size: usize) -> Vec<PhotoEntry> {
    let befores = (0..size).map(|index| PhotoEntry {
        index,
        variant: PhotoVariant::Before,
    });
    let afters = (0..size).map(|index| PhotoEntry {
        index,
        variant: PhotoVariant::After,
    });
    befores.chain(afters).collect()
}

/// Photo gallery component.
#[component]
pub fn Gallery(config: GalleryConfig) -> Element {
    rsx! {
        div {
            class: "photo-wrap",
            for entry in photo_entries(config.size) {
                p {
                    key: "{entry.variant}-{entry.index}",
                    class: "photo",
                    img { src: entry.path() }
                    "{entry.variant}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn befores_precede_afters() {
        let entries = photo_entries(3);
        assert_eq!(entries.len(), 6);
        for (i, entry) in entries.iter().take(3).enumerate() {
            assert_eq!(entry.variant, PhotoVariant::Before);
            assert_eq!(entry.index, i);
        }
        for (i, entry) in entries.iter().skip(3).enumerate() {
            assert_eq!(entry.variant, PhotoVariant::After);
            assert_eq!(entry.index, i);
        }
    }

    #[test]
    fn paths_are_one_based() {
        let entries = photo_entries(2);
        assert_eq!(entries[0].path(), "images/before/1.jpg");
        assert_eq!(entries[1].path(), "images/before/2.jpg");
        assert_eq!(entries[2].path(), "images/after/1.jpg");
        assert_eq!(entries[3].path(), "images/after/2.jpg");
    }

    #[test]
    fn empty_gallery_has_no_entries() {
        assert!(photo_entries(0).is_empty());
    }
}
