//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`] - Manifest retrieval over the Fetch API
//! - [`format_file_size`] - Human-readable byte counts
//! - [`strip_site_root`] - Root-prefix normalization for stored paths
//! - [`dom`] - Scroll lock, smooth scrolling, window/document access

pub mod dom;
mod fetch;
mod format;
mod path;

pub use fetch::fetch_json;
pub use format::format_file_size;
pub use path::strip_site_root;
