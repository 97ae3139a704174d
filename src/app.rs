//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! initialization routine following Leptos conventions. Every user gesture
//! (folder click, file click, back, close) dispatches through an AppContext
//! method, so the navigation and viewer state machines stay in one place.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Shell;
use crate::config;
use crate::core::Library;
use crate::models::{FileEntry, Manifest, ModalState, View, ViewerKind};
use crate::utils::{dom, fetch_json, strip_site_root};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The loaded document library (fallback-empty until the fetch lands).
    pub library: RwSignal<Library>,
    /// True while the manifest fetch is in flight.
    pub loading: RwSignal<bool>,
    /// Generic initialization error shown in the transient banner.
    pub load_error: RwSignal<Option<String>>,
    /// Navigation state: folder grid, or one open folder.
    pub view: RwSignal<View>,
    /// Viewer modal state, independent of navigation.
    pub modal: RwSignal<ModalState>,
}

impl AppContext {
    /// Creates a new application context with default state: no library,
    /// loading, folder grid on screen, modal closed.
    pub fn new() -> Self {
        Self {
            library: RwSignal::new(Library::Unavailable),
            loading: RwSignal::new(true),
            load_error: RwSignal::new(None),
            view: RwSignal::new(View::FolderList),
            modal: RwSignal::new(ModalState::Closed),
        }
    }

    /// Open a folder by name and scroll the viewport to the documents
    /// section. Opening while another folder is open replaces it.
    pub fn open_folder(&self, name: &str) {
        self.view.update(|view| view.open_folder(name));
        dom::scroll_to_fragment(config::DOCUMENTS_SECTION_ID);
    }

    /// Return to the folder grid, clearing the open-folder reference.
    pub fn back_to_folders(&self) {
        self.view.update(|view| view.back());
    }

    /// Open the viewer modal for a file.
    ///
    /// The stored path is normalized (duplicated site-root prefix stripped)
    /// and percent-encoded before it reaches the viewer elements and the
    /// download link. Background scrolling is disabled while the modal is
    /// open.
    pub fn open_document(&self, file: &FileEntry) {
        let url = String::from(js_sys::encode_uri(strip_site_root(&file.path)));
        self.modal.set(ModalState::Open {
            title: file.name.clone(),
            kind: ViewerKind::for_kind(file.kind),
            url,
        });
        dom::lock_body_scroll();
    }

    /// Close the viewer modal and restore background scrolling.
    ///
    /// The close button, the scrim click, and the Escape key all dispatch
    /// here, so the close sequence is a single code path.
    pub fn close_document(&self) {
        self.modal.update(|modal| modal.close());
        dom::unlock_body_scroll();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Load the document manifest into the context.
///
/// The one suspension point in the application. Any failure (network error,
/// non-2xx status, malformed JSON) substitutes the fallback manifest and
/// raises the generic error banner; the page never crashes over a missing
/// manifest.
fn load_library(ctx: AppContext) {
    spawn_local(async move {
        match fetch_json::<Manifest>(config::MANIFEST_URL).await {
            Ok(manifest) => {
                web_sys::console::log_1(
                    &format!(
                        "Document manifest loaded: {} folders, {} files",
                        manifest.folders.len(),
                        manifest.total_files
                    )
                    .into(),
                );
                ctx.library.set(Library::Loaded(manifest));
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("Failed to load document manifest: {}", err).into(),
                );
                ctx.library.set(Library::Unavailable);
                ctx.load_error
                    .set(Some(config::LOAD_ERROR_MESSAGE.to_string()));
            }
        }
        ctx.loading.set(false);
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the one-shot manifest load
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    load_library(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f7f5f0;
                    color: #333;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #666; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #fff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #888;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #c0392b;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
