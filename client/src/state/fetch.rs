//! Mount-scoped fetch activation for collection views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `use_view_fetch` once from their component body. SSR renders
//! the `Loading` state; after hydration the browser fires the request exactly
//! once and settles the state unless the page has unmounted in the meantime.

use std::future::Future;

use leptos::prelude::*;

use super::mount::MountToken;
use super::view::ViewState;

/// Start one fetch activation bound to the current view's mount lifetime.
pub fn use_view_fetch<T, F, Fut>(fetch: F) -> RwSignal<ViewState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let state = RwSignal::new(ViewState::Loading);
    let token = MountToken::new();

    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = fetch().await;
        let delivered = token.deliver(outcome, |outcome| {
            let _ = state.try_update(|s| s.settle(outcome));
        });
        if !delivered {
            log::debug!("view unmounted before fetch settled; result dropped");
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fetch;
    }

    state
}
