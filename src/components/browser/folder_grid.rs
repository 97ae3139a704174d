//! Folder grid for the documents section.
//!
//! One card per manifest folder, in manifest order (no sorting). The icon
//! and description come from the ordered category rules; unmatched names
//! fall back to the generic folder icon with a file-count description.

use icondata::Icon as IconData;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Folder, FolderCategory};

stylance::import_crate_style!(css, "src/components/browser/folder_grid.module.css");

/// Icon for a classified folder.
fn category_icon(category: FolderCategory) -> IconData {
    match category {
        FolderCategory::Sports => ic::CATEGORY_SPORTS,
        FolderCategory::Language => ic::CATEGORY_LANGUAGE,
        FolderCategory::Planning => ic::CATEGORY_PLANNING,
        FolderCategory::Music => ic::CATEGORY_MUSIC,
        FolderCategory::Records => ic::CATEGORY_RECORDS,
        FolderCategory::SchoolYear => ic::CATEGORY_CALENDAR,
    }
}

#[component]
pub fn FolderGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::grid role="list" aria-label="Document folders">
            {move || {
                if ctx.loading.get() {
                    return view! { <p class=css::placeholder>"Loading documents..."</p> }
                        .into_any();
                }
                if !ctx.library.with(|library| library.is_available()) {
                    return view! { <p class=css::placeholder>"No data available."</p> }
                        .into_any();
                }

                let folders = ctx.library.with(|library| library.folders().to_vec());
                if folders.is_empty() {
                    return view! { <p class=css::placeholder>"No documents found."</p> }
                        .into_any();
                }

                view! {
                    <For
                        each=move || folders.clone()
                        key=|folder| folder.name.clone()
                        children=move |folder| {
                            view! { <FolderCard folder=folder /> }
                        }
                    />
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn FolderCard(folder: Folder) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let file_count = folder.files.len();
    let category = FolderCategory::classify(&folder.name);
    let icon = category.map(category_icon).unwrap_or(ic::FOLDER);
    let description = category
        .map(|c| c.description().to_string())
        .unwrap_or_else(|| format!("{} files", file_count));

    let name = folder.name.clone();
    let handle_click = move |_: ev::MouseEvent| ctx.open_folder(&name);

    let aria_label = format!("Folder: {}", folder.name);

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
                <h3 class=css::cardName>{folder.name.clone()}</h3>
                <p class=css::cardMeta>{format!("{} • {} files", description, file_count)}</p>
            </div>
        </div>
    }
}
