//! Persistent navigation header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `App` above the route outlet, so it stays visible and usable
//! while a view is loading or showing an error.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::pages::Section;

/// `(href, label)` pairs for the section links, in header order.
#[must_use]
pub fn nav_links() -> Vec<(&'static str, &'static str)> {
    Section::NAV.iter().map(|s| (s.path(), s.label())).collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let links = nav_links()
        .into_iter()
        .map(|(href, label)| view! { <a href={href} class="nav-link">{label}</a> })
        .collect::<Vec<_>>();
    let brand = Section::Home;

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark mb-4">
            <a href={brand.path()} class="navbar-brand">{brand.label()}</a>
            <div class="navbar-nav">{links}</div>
        </nav>
    }
}
