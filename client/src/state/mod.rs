//! Client-side view state.
//!
//! DESIGN
//! ======
//! `view` is the pure lifecycle model, `mount` the cancellation flag, and
//! `fetch` wires both into Leptos for a page.

pub mod fetch;
pub mod mount;
pub mod view;
