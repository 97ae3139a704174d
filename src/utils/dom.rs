//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. All accessors degrade to no-ops outside a browser context.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

// =============================================================================
// Smooth Scrolling
// =============================================================================

/// Smooth-scroll the viewport to the element with the given id.
///
/// Returns `true` if the fragment was non-empty and resolved to an element.
/// An empty or unresolvable fragment is a no-op (the caller has already
/// suppressed the default jump-to-anchor navigation).
pub fn scroll_to_fragment(fragment: &str) -> bool {
    if fragment.is_empty() {
        return false;
    }
    let Some(document) = document() else {
        return false;
    };
    let Some(element) = document.get_element_by_id(fragment) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

// =============================================================================
// Body Scroll Lock
// =============================================================================

/// Disable background scrolling while the viewer modal is open.
pub fn lock_body_scroll() {
    set_body_overflow("hidden");
}

/// Restore background scrolling when the viewer modal closes.
pub fn unlock_body_scroll() {
    set_body_overflow("auto");
}

fn set_body_overflow(value: &str) {
    if let Some(document) = document()
        && let Some(body) = document.body()
    {
        let _ = body.style().set_property("overflow", value);
    }
}
