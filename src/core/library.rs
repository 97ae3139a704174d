//! The loaded document library.
//!
//! Wraps the manifest behind one lookup surface so components never have to
//! distinguish "manifest failed to load" from "manifest loaded" except where
//! the UI genuinely renders them differently (the "no data" vs "no
//! documents" placeholders).

use crate::models::{Folder, Manifest};

/// The document library backing the browser.
#[derive(Clone, Debug, Default)]
pub enum Library {
    /// No manifest available: not loaded yet, or the load failed and the
    /// fallback was substituted. Behaves as an empty manifest.
    #[default]
    Unavailable,
    /// Manifest loaded and parsed.
    Loaded(Manifest),
}

impl Library {
    /// All folders in manifest order. Empty when unavailable.
    pub fn folders(&self) -> &[Folder] {
        match self {
            Self::Unavailable => &[],
            Self::Loaded(manifest) => &manifest.folders,
        }
    }

    /// Look up a folder by its name.
    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders().iter().find(|folder| folder.name == name)
    }

    /// Advisory total file count from the manifest.
    pub fn total_files(&self) -> u32 {
        match self {
            Self::Unavailable => 0,
            Self::Loaded(manifest) => manifest.total_files,
        }
    }

    /// Whether a manifest was actually loaded. Distinguishes the "no data"
    /// placeholder (unavailable) from "no documents found" (loaded, empty).
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileEntry, FileKind};

    fn sample_library() -> Library {
        Library::Loaded(Manifest {
            folders: vec![
                Folder {
                    name: "Annual reports".to_string(),
                    path: "Annual reports".to_string(),
                    files: vec![FileEntry {
                        name: "plan.pdf".to_string(),
                        path: "Annual reports/plan.pdf".to_string(),
                        kind: FileKind::Pdf,
                        size: 2048,
                    }],
                },
                Folder {
                    name: "Staff records".to_string(),
                    path: "Staff records".to_string(),
                    files: Vec::new(),
                },
            ],
            total_folders: 2,
            total_files: 1,
        })
    }

    #[test]
    fn test_unavailable_is_empty() {
        let library = Library::Unavailable;
        assert!(library.folders().is_empty());
        assert!(library.folder("anything").is_none());
        assert_eq!(library.total_files(), 0);
        assert!(!library.is_available());
    }

    #[test]
    fn test_loaded_empty_manifest_is_available() {
        // An empty-but-present manifest is the "no documents found" case,
        // not the "no data" case.
        let library = Library::Loaded(Manifest::default());
        assert!(library.folders().is_empty());
        assert!(library.is_available());
    }

    #[test]
    fn test_folder_lookup_preserves_order() {
        let library = sample_library();
        let names: Vec<_> = library.folders().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Annual reports", "Staff records"]);

        let folder = library.folder("Staff records").unwrap();
        assert!(folder.files.is_empty());
        assert!(library.folder("Missing").is_none());
    }
}
