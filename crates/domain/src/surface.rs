use serde::{Deserialize, Serialize};

use crate::Permission;

/// Product surfaces whose visibility is derived from role permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Project list and detail screens.
    Projects,
    /// Todo list and detail screens.
    Todos,
    /// Organization members listing.
    Members,
    /// Role definitions listing.
    Roles,
    /// Pending invitations listing.
    Invitations,
    /// Organization settings panel.
    Settings,
}

impl Surface {
    /// Returns a stable storage value for this surface.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Todos => "todos",
            Self::Members => "members",
            Self::Roles => "roles",
            Self::Invitations => "invitations",
            Self::Settings => "settings",
        }
    }

    /// Returns all known surfaces in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Surface] = &[
            Surface::Projects,
            Surface::Todos,
            Surface::Members,
            Surface::Roles,
            Surface::Invitations,
            Surface::Settings,
        ];

        ALL
    }

    /// Returns the permissions gating this surface.
    ///
    /// A surface is accessible when the role holds at least one of the
    /// returned permissions (logical OR).
    #[must_use]
    pub fn required_permissions(&self) -> &'static [Permission] {
        match self {
            Self::Projects => &[Permission::ProjectView],
            Self::Todos => &[Permission::TodoView],
            Self::Members => &[Permission::MemberView],
            Self::Roles => &[Permission::RolesView],
            Self::Invitations => &[Permission::InvitationView],
            Self::Settings => &[Permission::SettingsManage, Permission::OrgUpdate],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Surface;

    #[test]
    fn every_surface_requires_at_least_one_permission() {
        for surface in Surface::all() {
            assert!(!surface.required_permissions().is_empty());
        }
    }

    #[test]
    fn surface_storage_values_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for surface in Surface::all() {
            assert!(seen.insert(surface.as_str()));
        }
    }
}
