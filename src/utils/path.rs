//! Stored-path normalization.

use crate::config::SITE_ROOT_PREFIX;

/// Strip a duplicated site-root prefix from a stored document path.
///
/// Manifest paths are meant to be relative to the served site root, but the
/// generator occasionally includes the root directory itself. Stripping the
/// prefix makes the resulting URL root-relative and independent of the
/// current page's folder depth. Paths without the prefix, and interior
/// occurrences of it, are left untouched.
pub fn strip_site_root(path: &str) -> &str {
    path.strip_prefix(SITE_ROOT_PREFIX).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_root_prefix() {
        assert_eq!(strip_site_root("docs/reports/plan.pdf"), "reports/plan.pdf");
    }

    #[test]
    fn test_leaves_clean_paths_alone() {
        assert_eq!(strip_site_root("reports/plan.pdf"), "reports/plan.pdf");
        assert_eq!(strip_site_root(""), "");
    }

    #[test]
    fn test_only_the_leading_occurrence_is_stripped() {
        assert_eq!(strip_site_root("docs/docs/plan.pdf"), "docs/plan.pdf");
        assert_eq!(strip_site_root("reports/docs/plan.pdf"), "reports/docs/plan.pdf");
    }
}
