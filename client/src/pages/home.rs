//! Welcome page at `/`. Static content only; never fetches.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="jumbotron">
            <h1 class="display-4">"Welcome to Storefront"</h1>
            <p class="lead">"Explore the products or view objects in your S3 bucket."</p>
            <hr class="my-4"/>
            <p>"Use the navigation bar to access different sections."</p>
        </div>
    }
}
