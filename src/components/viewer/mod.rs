//! Document viewer modal.
//!
//! Overlays the navigation state with its own two-state machine: closed, or
//! open on exactly one of three viewer surfaces (PDF frame, image,
//! unsupported-with-download). The modal body renders only the active
//! surface per open and unmounts entirely on close, so viewer sources are
//! reset on both open and close.
//!
//! Three equivalent close triggers: the close button, a click on the
//! background scrim (not the content panel), and the Escape key. All of
//! them dispatch `AppContext::close_document`.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{ModalState, ViewerKind};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

#[component]
pub fn DocumentModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <Show when=move || ctx.modal.with(|modal| modal.is_open())>
            {move || match ctx.modal.get() {
                ModalState::Closed => None,
                ModalState::Open { title, kind, url } => {
                    Some(view! { <ModalContent title=title kind=kind url=url /> })
                }
            }}
        </Show>
    }
}

#[component]
fn ModalContent(title: String, kind: ViewerKind, url: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Focus the dialog on mount so Escape closes it immediately.
    let container_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = container_ref.get() {
            let _ = el.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ctx.close_document();
        }
    };
    let handle_scrim_click = move |_: ev::MouseEvent| ctx.close_document();
    let handle_close = move |_: ev::MouseEvent| ctx.close_document();
    let keep_open = move |ev: ev::MouseEvent| ev.stop_propagation();

    let viewer = match kind {
        ViewerKind::Pdf => view! {
            <iframe class=css::pdfViewer src=url.clone() title=title.clone() />
        }
        .into_any(),
        ViewerKind::Image => view! {
            <img class=css::imageViewer src=url.clone() alt=title.clone() />
        }
        .into_any(),
        ViewerKind::Unsupported => view! {
            <div class=css::unsupported>
                <span class=css::unsupportedIcon aria-hidden="true">
                    <Icon icon=ic::FILE />
                </span>
                <p>"Preview is not available for this file type."</p>
                <p class=css::hint>"Use the download link below."</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div
            node_ref=container_ref
            tabindex="-1"
            class=css::overlay
            role="dialog"
            aria-modal="true"
            on:click=handle_scrim_click
            on:keydown=handle_keydown
        >
            <div class=css::panel on:click=keep_open>
                <header class=css::header>
                    <h3 class=css::title>{title.clone()}</h3>
                    <button class=css::closeButton on:click=handle_close title="Close (Esc)">
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::body>{viewer}</div>

                <footer class=css::footer>
                    <a class=css::downloadLink href=url.clone() download=title.clone()>
                        <Icon icon=ic::DOWNLOAD />
                        "Download"
                    </a>
                </footer>
            </div>
        </div>
    }
}
