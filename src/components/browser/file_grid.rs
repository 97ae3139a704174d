//! File grid for the open folder.
//!
//! One card per file, in manifest order, showing the kind-specific icon and
//! label, the display name, and the human-formatted size.

use icondata::Icon as IconData;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{FileEntry, FileKind};
use crate::utils::format_file_size;

stylance::import_crate_style!(css, "src/components/browser/file_grid.module.css");

/// Icon for a declared file type.
fn kind_icon(kind: FileKind) -> IconData {
    match kind {
        FileKind::Pdf => ic::FILE_PDF,
        FileKind::Image => ic::FILE_IMAGE,
        FileKind::Document => ic::FILE_WORD,
        FileKind::Text => ic::FILE_TEXT,
        FileKind::Archive => ic::FILE_ARCHIVE,
        FileKind::Other => ic::FILE,
    }
}

#[component]
pub fn FileGrid(files: Signal<Vec<FileEntry>>) -> impl IntoView {
    view! {
        <div class=css::grid role="list" aria-label="Folder files">
            <Show
                when=move || files.with(|files| !files.is_empty())
                fallback=|| view! { <p class=css::placeholder>"This folder is empty."</p> }
            >
                <For
                    each=move || files.get()
                    key=|file| file.path.clone()
                    children=move |file| {
                        view! { <FileCard file=file /> }
                    }
                />
            </Show>
        </div>
    }
}

#[component]
fn FileCard(file: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = kind_icon(file.kind);
    let meta = format!("{} • {}", file.kind.label(), format_file_size(file.size));
    let aria_label = format!("File: {}", file.name);

    let entry = file.clone();
    let handle_click = move |_: ev::MouseEvent| ctx.open_document(&entry);

    view! {
        <div
            class=css::card
            on:click=handle_click
            role="listitem"
            tabindex="0"
            aria-label=aria_label
        >
            <span class=css::cardIcon aria-hidden="true">
                <Icon icon=icon />
            </span>
            <div class=css::cardInfo>
                <h4 class=css::cardName>{file.name.clone()}</h4>
                <p class=css::cardMeta>{meta}</p>
            </div>
        </div>
    }
}
