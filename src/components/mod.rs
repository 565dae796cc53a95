//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal chrome around page content, reading the
//! session and auth state from Leptos context providers.

pub mod header;
pub mod news_list;
pub mod protected_route;
pub mod side_panel;
