//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure presentation over already-resolved data; pages own the
//! fetch lifecycle and pick which component to show.

pub mod nav_bar;
pub mod object_list;
pub mod product_table;
pub mod status_line;
