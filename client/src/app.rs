//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{Section, home::HomePage, products::ProductsPage, storage_objects::StorageObjectsPage};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Three static routes under a persistent header. Each collection page owns
/// its own fetch; nothing is shared between them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="bootstrap" href=BOOTSTRAP_CSS/>
        <Title text="Storefront"/>

        <Router>
            <div class="app-shell">
                <NavBar/>
                <main class="container">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path={StaticSegment(Section::Home.segment())} view=HomePage/>
                        <Route path={StaticSegment(Section::Products.segment())} view=ProductsPage/>
                        <Route path={StaticSegment(Section::StorageObjects.segment())} view=StorageObjectsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
