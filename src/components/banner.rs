//! Transient initialization-error banner.
//!
//! Shown at the top of the main content region when initialization fails.
//! Auto-fades after a fixed delay, then leaves the tree once the opacity
//! transition finishes. Clicking dismisses it immediately. Purely cosmetic,
//! no retry logic attached.

use gloo_timers::future::TimeoutFuture;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;

stylance::import_crate_style!(css, "src/components/banner.module.css");

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (fading, set_fading) = signal(false);

    spawn_local(async move {
        TimeoutFuture::new(config::ERROR_BANNER_VISIBLE_MS).await;
        set_fading.set(true);
        TimeoutFuture::new(config::ERROR_BANNER_FADE_MS).await;
        ctx.load_error.set(None);
    });

    let dismiss = move |_: ev::MouseEvent| ctx.load_error.set(None);

    let banner_class = move || {
        if fading.get() {
            format!("{} {}", css::banner, css::fading)
        } else {
            css::banner.to_string()
        }
    };

    view! {
        <div class=banner_class role="alert" on:click=dismiss>
            <span class=css::icon aria-hidden="true">
                <Icon icon=ic::WARNING />
            </span>
            <p class=css::message>{message}</p>
        </div>
    }
}
