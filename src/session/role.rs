//! Closed role enumeration for the portal's four actor kinds.
//!
//! DESIGN
//! ======
//! Roles travel over the wire and through localStorage as lowercase
//! strings; everything past the parse boundary matches on this enum so
//! adding or removing a role is a compile-checked change.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Actor role attached to an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    /// Parse the wire/storage form. Unknown strings yield `None`; callers
    /// decide whether that means "no menu entries" or a fallback label.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            "parent" => Some(Self::Parent),
            _ => None,
        }
    }

    /// Wire/storage form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }

    /// Human-readable label shown in the profile view.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Teacher => "Profesor",
            Self::Student => "Alumno",
            Self::Parent => "Padre/Madre",
        }
    }
}

/// Label for an optional role; unrecognized or absent roles display as
/// "Desconocido" instead of failing.
pub fn label_or_unknown(role: Option<Role>) -> &'static str {
    role.map_or("Desconocido", Role::label)
}
