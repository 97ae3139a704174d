//! Site header with smooth-scroll navigation.
//!
//! In-page links targeting same-document fragments suppress the default
//! jump-to-anchor and smooth-scroll instead. Unresolvable fragments are a
//! no-op with navigation still suppressed.

use leptos::{ev, prelude::*};

use crate::config;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/nav.module.css");

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <header class=css::nav>
            <span class=css::brand>{config::APP_NAME}</span>
            <nav class=css::links aria-label="Site navigation">
                <AnchorLink href="#about" label="About" />
                <AnchorLink href="#documents" label="Documents" />
                <AnchorLink href="#contact" label="Contact" />
            </nav>
        </header>
    }
}

/// A same-document anchor link routed through the smooth scroller.
#[component]
fn AnchorLink(href: &'static str, label: &'static str) -> impl IntoView {
    let handle_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        let fragment = href.trim_start_matches('#');
        dom::scroll_to_fragment(fragment);
    };

    view! {
        <a class=css::link href=href on:click=handle_click>
            {label}
        </a>
    }
}
