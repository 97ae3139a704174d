//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name displayed in the navigation header.
pub const APP_NAME: &str = "docshelf";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Manifest Configuration
// =============================================================================

/// Relative URL of the pre-generated document manifest.
pub const MANIFEST_URL: &str = "data/documents.json";

/// Path prefix that duplicates the site root.
///
/// The manifest generator occasionally stores paths relative to the
/// repository root instead of the served site root. Stored paths carrying
/// this prefix are normalized to root-relative before use.
pub const SITE_ROOT_PREFIX: &str = "docs/";

// =============================================================================
// Page Anchors
// =============================================================================

/// Element id of the documents section (scroll target when a folder opens).
pub const DOCUMENTS_SECTION_ID: &str = "documents";

// =============================================================================
// Error Banner Configuration
// =============================================================================

/// How long the error banner stays fully visible, in milliseconds.
pub const ERROR_BANNER_VISIBLE_MS: u32 = 5000;

/// Duration of the banner fade-out transition, in milliseconds.
pub const ERROR_BANNER_FADE_MS: u32 = 300;

/// Generic message shown when initialization fails. The underlying cause is
/// logged to the console, never shown to the user.
pub const LOAD_ERROR_MESSAGE: &str =
    "Something went wrong while loading the documents. Please refresh the page.";

// =============================================================================
// Folder Category Rules
// =============================================================================

use crate::models::FolderCategory;

/// Ordered substring rules for classifying folder names.
///
/// Rules are checked top to bottom and the first match wins, so a folder
/// name containing several rule substrings always classifies as the earliest
/// rule. Names matching no rule fall back to the generic folder icon with a
/// file-count description.
pub const FOLDER_CATEGORY_RULES: &[(&str, FolderCategory)] = &[
    ("physical", FolderCategory::Sports),
    ("language", FolderCategory::Language),
    ("long-term", FolderCategory::Planning),
    ("music", FolderCategory::Music),
    ("records", FolderCategory::Records),
    ("2024-2025", FolderCategory::SchoolYear),
    ("2025-2026", FolderCategory::SchoolYear),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
