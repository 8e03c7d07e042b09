//! One-line status alert shown in place of a view's content.
//!
//! SYSTEM CONTEXT
//! ==============
//! While a view is loading or after its fetch failed, the content area is
//! replaced by a single alert line. The navigation header stays usable.

#[cfg(test)]
#[path = "status_line_test.rs"]
mod status_line_test;

use leptos::prelude::*;

use crate::state::view::ViewState;

/// Alert flavor, mapped onto Bootstrap alert classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Danger,
}

impl StatusKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Danger => "alert alert-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Status line for a view, or `None` once data is ready to render.
#[must_use]
pub fn status_line<T>(state: &ViewState<T>) -> Option<StatusLine> {
    match state {
        ViewState::Loading => Some(StatusLine { kind: StatusKind::Info, text: "Loading...".to_owned() }),
        ViewState::Failed(message) => Some(StatusLine { kind: StatusKind::Danger, text: format!("Error: {message}") }),
        ViewState::Ready(_) => None,
    }
}

#[component]
pub fn StatusAlert(line: StatusLine) -> impl IntoView {
    view! { <div class={line.kind.class()}>{line.text}</div> }
}
