//! Main page shell.
//!
//! Lays out the site header, the anchor-target sections, the document
//! browser, and hosts the viewer modal and the error banner.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::banner::ErrorBanner;
use crate::components::browser::Browser;
use crate::components::nav::SiteNav;
use crate::components::viewer::DocumentModal;
use crate::config;

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::shell>
            <SiteNav />

            <main class=css::main>
                {move || {
                    ctx.load_error
                        .get()
                        .map(|message| view! { <ErrorBanner message=message /> })
                }}

                <section id="about" class=css::section>
                    <h2 class=css::sectionTitle>"About"</h2>
                    <p class=css::sectionText>
                        "Public documents of the organization, grouped by folder: \
                         curricula, long-term plans, and administrative records."
                    </p>
                </section>

                <Browser />

                <section id="contact" class=css::section>
                    <h2 class=css::sectionTitle>"Contact"</h2>
                    <p class=css::sectionText>
                        "Questions about a document? Reach the office through the \
                         contact details on the main site."
                    </p>
                </section>
            </main>

            <footer class=css::footer>
                {format!("{} v{}", config::APP_NAME, config::APP_VERSION)}
            </footer>

            <DocumentModal />
        </div>
    }
}
