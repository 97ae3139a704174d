//! Folder name classification.
//!
//! Folder cards carry an icon and a short description derived from the
//! folder name. The mapping is an ordered substring rule table in
//! `config.rs`; the first matching rule wins.

use crate::config::FOLDER_CATEGORY_RULES;

/// Category assigned to a folder by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FolderCategory {
    /// Physical education documents.
    Sports,
    /// Language course documents.
    Language,
    /// Long-term planning documents.
    Planning,
    /// Music class documents.
    Music,
    /// Administrative records.
    Records,
    /// Documents scoped to a school year.
    SchoolYear,
}

impl FolderCategory {
    /// Classify a folder name against the ordered rule table.
    ///
    /// Returns `None` when no rule substring occurs in the name; the caller
    /// falls back to the generic folder icon and a file-count description.
    pub fn classify(name: &str) -> Option<Self> {
        FOLDER_CATEGORY_RULES
            .iter()
            .find(|(pattern, _)| name.contains(pattern))
            .map(|(_, category)| *category)
    }

    /// Card description for this category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sports => "Physical education documents",
            Self::Language => "Language course documents",
            Self::Planning => "Long-term planning",
            Self::Music => "Music class documents",
            Self::Records => "Administrative records",
            Self::SchoolYear => "School year documents",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_basic() {
        assert_eq!(
            FolderCategory::classify("physical education"),
            Some(FolderCategory::Sports)
        );
        assert_eq!(
            FolderCategory::classify("music class 3"),
            Some(FolderCategory::Music)
        );
        assert_eq!(
            FolderCategory::classify("archive 2025-2026"),
            Some(FolderCategory::SchoolYear)
        );
        assert_eq!(FolderCategory::classify("miscellaneous"), None);
    }

    #[test]
    fn test_classify_is_first_match() {
        // A name matching several rules classifies as the earliest rule in
        // the table, deterministically.
        assert_eq!(
            FolderCategory::classify("physical education language group"),
            Some(FolderCategory::Sports)
        );
        assert_eq!(
            FolderCategory::classify("music records 2024-2025"),
            Some(FolderCategory::Music)
        );
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // Rules are literal substrings; "Music" does not match the "music"
        // rule. Matches manifest folder names as generated.
        assert_eq!(FolderCategory::classify("Music"), None);
    }
}
