//! Manifest types describing the document tree.
//!
//! The manifest is generated ahead of time and served as a static JSON file.
//! Nothing in it is ever mutated at runtime; navigation state lives in the
//! application context, not in these types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure from the documents JSON file.
///
/// `total_folders` and `total_files` are advisory counters written by the
/// generator; they are displayed but never validated against `folders`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Folders in display order. Order is significant and preserved verbatim.
    #[serde(default)]
    pub folders: Vec<Folder>,
    /// Folder count as reported by the generator.
    #[serde(default)]
    pub total_folders: u32,
    /// File count as reported by the generator.
    #[serde(default)]
    pub total_files: u32,
}

/// A single folder of documents.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Folder {
    /// Human-readable folder name, unique across the manifest. Doubles as
    /// the lookup key for navigation.
    pub name: String,
    /// Folder path relative to the site root (informational).
    #[serde(default)]
    pub path: String,
    /// Files in display order.
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// A single document within a folder.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct FileEntry {
    /// Display name of the file.
    pub name: String,
    /// URL of the underlying resource, relative to the site root. May carry
    /// a stray site-root prefix that needs normalization before use.
    pub path: String,
    /// Declared file type.
    #[serde(rename = "type", default)]
    pub kind: FileKind,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// Declared file type from the manifest.
///
/// The generator writes `"unknown"` for extensions it has no mapping for;
/// that string, and any other unrecognized value, deserializes to [`Other`]
/// rather than failing.
///
/// [`Other`]: FileKind::Other
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
    Document,
    Text,
    Archive,
    #[default]
    #[serde(other)]
    Other,
}

impl FileKind {
    /// Localized type label shown on file cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF document",
            Self::Image => "Picture",
            Self::Document => "Document",
            Self::Text => "Text file",
            Self::Archive => "Archive",
            Self::Other => "File",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_deserialization() {
        let json = r#"{
            "folders": [
                {
                    "name": "Annual reports",
                    "path": "Annual reports",
                    "files": [
                        {"name": "plan.pdf", "path": "docs/reports/plan.pdf", "type": "pdf", "size": 1024}
                    ]
                }
            ],
            "total_folders": 1,
            "total_files": 1
        }"#;

        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.folders.len(), 1);
        assert_eq!(manifest.total_folders, 1);
        let file = &manifest.folders[0].files[0];
        assert_eq!(file.kind, FileKind::Pdf);
        assert_eq!(file.size, 1024);
    }

    #[test]
    fn test_unrecognized_kind_is_other() {
        // The generator emits "unknown" for unmapped extensions; future
        // values must degrade the same way instead of failing the parse.
        for kind in ["unknown", "spreadsheet", ""] {
            let json = format!(
                r#"{{"name": "f", "path": "f", "type": "{}", "size": 0}}"#,
                kind
            );
            let file: FileEntry = serde_json::from_str(&json).unwrap();
            assert_eq!(file.kind, FileKind::Other);
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let manifest: Manifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.folders.is_empty());
        assert_eq!(manifest.total_files, 0);

        let folder: Folder = serde_json::from_str(r#"{"name": "Empty"}"#).unwrap();
        assert!(folder.files.is_empty());
        assert!(folder.path.is_empty());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(FileKind::Pdf.label(), "PDF document");
        assert_eq!(FileKind::Image.label(), "Picture");
        assert_eq!(FileKind::Document.label(), "Document");
        assert_eq!(FileKind::Text.label(), "Text file");
        assert_eq!(FileKind::Archive.label(), "Archive");
        assert_eq!(FileKind::Other.label(), "File");
    }
}
