//! Role-gated navigation policy for the side menu.
//!
//! DESIGN
//! ======
//! One closed policy table decides which destinations each role may see.
//! The menu renders exactly this list; the route guard enforces the
//! admin-only entries independently, so menu visibility is presentation,
//! not the security boundary.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::session::role::Role;

/// A navigable destination in the side menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Own profile view.
    Profile,
    /// Internal messaging inbox.
    Messages,
    /// Absence records.
    Absences,
    /// Academic reports.
    Reports,
    /// Announcement management (admin and teacher).
    NewsManagement,
    /// Read-only announcements on the home view (student and parent).
    NewsHome,
    /// User administration (admin only).
    UserAdmin,
    /// Group administration (admin only).
    GroupAdmin,
}

impl Destination {
    /// Route path the menu entry navigates to.
    pub fn path(self) -> &'static str {
        match self {
            Self::Profile => "/usuario",
            Self::Messages => "/mensajes",
            Self::Absences => "/faltas",
            Self::Reports => "/informes",
            Self::NewsManagement => "/noticias",
            Self::NewsHome => "/",
            Self::UserAdmin => "/admin/usuarios",
            Self::GroupAdmin => "/admin/grupos",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Usuario",
            Self::Messages => "Mensajes",
            Self::Absences => "Faltas de asistencia",
            Self::Reports => "Informe de alumnado",
            Self::NewsManagement | Self::NewsHome => "Noticias",
            Self::UserAdmin => "Usuarios",
            Self::GroupAdmin => "Grupos",
        }
    }

    /// Whether the entry belongs to the collapsible admin sub-section.
    pub fn is_admin_section(self) -> bool {
        matches!(self, Self::UserAdmin | Self::GroupAdmin)
    }
}

/// Ordered destinations visible to `role`. A missing or unrecognized
/// role sees no menu entries at all.
pub fn destinations_for(role: Option<Role>) -> Vec<Destination> {
    let common = [
        Destination::Profile,
        Destination::Messages,
        Destination::Absences,
        Destination::Reports,
    ];
    match role {
        Some(Role::Admin) => common
            .into_iter()
            .chain([
                Destination::NewsManagement,
                Destination::UserAdmin,
                Destination::GroupAdmin,
            ])
            .collect(),
        Some(Role::Teacher) => common
            .into_iter()
            .chain([Destination::NewsManagement])
            .collect(),
        Some(Role::Student | Role::Parent) => {
            common.into_iter().chain([Destination::NewsHome]).collect()
        }
        None => Vec::new(),
    }
}
