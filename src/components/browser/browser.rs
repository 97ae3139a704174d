//! The documents section.
//!
//! Switches between the folder grid and the open folder's file view
//! according to the navigation state. Opening a different folder while one
//! is open replaces it; there is no stack and no breadcrumb beyond the
//! single back control.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::{FileGrid, FolderGrid};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open_folder = Signal::derive(move || {
        ctx.view
            .with(|view| view.open_folder_name().map(String::from))
    });

    // Advisory totals from the manifest, displayed but never validated.
    let summary = Signal::derive(move || {
        ctx.library.with(|library| {
            library.is_available().then(|| {
                format!(
                    "{} folders • {} files",
                    library.folders().len(),
                    library.total_files()
                )
            })
        })
    });

    view! {
        <section id=config::DOCUMENTS_SECTION_ID class=css::documents>
            <h2 class=css::title>"Documents"</h2>
            {move || summary.get().map(|text| view! { <p class=css::summary>{text}</p> })}
            {move || match open_folder.get() {
                None => view! { <FolderGrid /> }.into_any(),
                Some(name) => view! { <FilesView name=name /> }.into_any(),
            }}
        </section>
    }
}

/// The open folder: header with back control, then the file grid.
#[component]
fn FilesView(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let folder_name = name.clone();
    let files = Signal::derive(move || {
        ctx.library.with(|library| {
            library
                .folder(&folder_name)
                .map(|folder| folder.files.clone())
                .unwrap_or_default()
        })
    });

    let handle_back = move |_: ev::MouseEvent| ctx.back_to_folders();

    view! {
        <div class=css::filesView>
            <div class=css::filesHeader>
                <button class=css::backButton on:click=handle_back>
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Back to folders"
                </button>
                <h3 class=css::folderName>{name}</h3>
            </div>
            <FileGrid files=files />
        </div>
    }
}
