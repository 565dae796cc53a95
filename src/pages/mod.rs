//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and orchestration and delegates
//! chrome to `components`. Every page except login renders inside the
//! side-panel layout.

pub mod absences;
pub mod admin_groups;
pub mod admin_users;
pub mod home;
pub mod login;
pub mod messages;
pub mod news_admin;
pub mod reports;
pub mod user;
