//! # educacenter
//!
//! Leptos + WASM frontend for the EducaCenter school-management portal:
//! role-scoped views over a remote REST backend for users, groups,
//! absences, reports, announcements, and internal messaging.
//!
//! The session/authorization core lives in [`session`] (record, store,
//! expiry, guard) and [`nav`] (role-gated menu policy); [`app`] owns the
//! two-state router over them. Pages and components are presentation.

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the application.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
