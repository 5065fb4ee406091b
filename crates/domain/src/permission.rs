use std::str::FromStr;

use opsboard_core::AppError;
use serde::{Deserialize, Serialize};

/// Permissions enforced by application policy checks.
///
/// The catalog is closed: the set of valid permissions is fixed at build
/// time, and the transport value follows the `<resource>:<action>`
/// convention stored on memberships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows permanently deleting the entire organization.
    OrgDelete,
    /// Allows modifying organization settings and details.
    OrgUpdate,
    /// Allows viewing organization information.
    OrgView,
    /// Allows sending invitations to new team members.
    MemberInvite,
    /// Allows removing members from the organization.
    MemberRemove,
    /// Allows changing member roles.
    MemberUpdateRole,
    /// Allows viewing the organization members list.
    MemberView,
    /// Allows creating new projects.
    ProjectCreate,
    /// Allows modifying existing projects.
    ProjectUpdate,
    /// Allows removing projects permanently.
    ProjectDelete,
    /// Allows viewing project information.
    ProjectView,
    /// Allows creating new todo items.
    TodoCreate,
    /// Allows modifying existing todos.
    TodoUpdate,
    /// Allows removing todos permanently.
    TodoDelete,
    /// Allows viewing todo items.
    TodoView,
    /// Allows accessing and modifying organization settings.
    SettingsManage,
    /// Allows viewing role definitions and their grants.
    RolesView,
    /// Allows viewing pending invitations.
    InvitationView,
    /// Allows creating, cancelling, and resending invitations.
    InvitationManage,
}

/// Display categories grouping the permission catalog on admin screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    /// Organization lifecycle and details.
    Organization,
    /// Team membership management.
    Members,
    /// Project records.
    Projects,
    /// Todo records.
    Todos,
    /// Organization settings panel.
    Settings,
    /// Role definitions.
    Roles,
    /// Member invitations.
    Invitations,
}

/// Display metadata attached to a permission.
///
/// Never consulted by authorization logic; used to render "what can this
/// role do" screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionMetadata {
    /// Short human-readable label.
    pub label: &'static str,
    /// One-line description of the granted capability.
    pub description: &'static str,
    /// Category the permission is grouped under.
    pub category: PermissionCategory,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrgDelete => "org:delete",
            Self::OrgUpdate => "org:update",
            Self::OrgView => "org:view",
            Self::MemberInvite => "member:invite",
            Self::MemberRemove => "member:remove",
            Self::MemberUpdateRole => "member:update_role",
            Self::MemberView => "member:view",
            Self::ProjectCreate => "project:create",
            Self::ProjectUpdate => "project:update",
            Self::ProjectDelete => "project:delete",
            Self::ProjectView => "project:view",
            Self::TodoCreate => "todo:create",
            Self::TodoUpdate => "todo:update",
            Self::TodoDelete => "todo:delete",
            Self::TodoView => "todo:view",
            Self::SettingsManage => "settings:manage",
            Self::RolesView => "roles:view",
            Self::InvitationView => "invitation:view",
            Self::InvitationManage => "invitation:manage",
        }
    }

    /// Returns all known permissions in catalog declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::OrgDelete,
            Permission::OrgUpdate,
            Permission::OrgView,
            Permission::MemberInvite,
            Permission::MemberRemove,
            Permission::MemberUpdateRole,
            Permission::MemberView,
            Permission::ProjectCreate,
            Permission::ProjectUpdate,
            Permission::ProjectDelete,
            Permission::ProjectView,
            Permission::TodoCreate,
            Permission::TodoUpdate,
            Permission::TodoDelete,
            Permission::TodoView,
            Permission::SettingsManage,
            Permission::RolesView,
            Permission::InvitationView,
            Permission::InvitationManage,
        ];

        ALL
    }

    /// Returns the display metadata declared for this permission.
    #[must_use]
    pub fn metadata(&self) -> PermissionMetadata {
        match self {
            Self::OrgDelete => PermissionMetadata {
                label: "Delete Organization",
                description: "Permanently delete the entire organization",
                category: PermissionCategory::Organization,
            },
            Self::OrgUpdate => PermissionMetadata {
                label: "Update Organization",
                description: "Modify organization settings and details",
                category: PermissionCategory::Organization,
            },
            Self::OrgView => PermissionMetadata {
                label: "View Organization",
                description: "View organization information",
                category: PermissionCategory::Organization,
            },
            Self::MemberInvite => PermissionMetadata {
                label: "Invite Members",
                description: "Send invitations to new team members",
                category: PermissionCategory::Members,
            },
            Self::MemberRemove => PermissionMetadata {
                label: "Remove Members",
                description: "Remove members from the organization",
                category: PermissionCategory::Members,
            },
            Self::MemberUpdateRole => PermissionMetadata {
                label: "Update Member Roles",
                description: "Change member roles and permissions",
                category: PermissionCategory::Members,
            },
            Self::MemberView => PermissionMetadata {
                label: "View Members",
                description: "View organization members list",
                category: PermissionCategory::Members,
            },
            Self::ProjectCreate => PermissionMetadata {
                label: "Create Projects",
                description: "Create new projects",
                category: PermissionCategory::Projects,
            },
            Self::ProjectUpdate => PermissionMetadata {
                label: "Update Projects",
                description: "Modify existing projects",
                category: PermissionCategory::Projects,
            },
            Self::ProjectDelete => PermissionMetadata {
                label: "Delete Projects",
                description: "Remove projects permanently",
                category: PermissionCategory::Projects,
            },
            Self::ProjectView => PermissionMetadata {
                label: "View Projects",
                description: "View project information",
                category: PermissionCategory::Projects,
            },
            Self::TodoCreate => PermissionMetadata {
                label: "Create Todos",
                description: "Create new todo items",
                category: PermissionCategory::Todos,
            },
            Self::TodoUpdate => PermissionMetadata {
                label: "Update Todos",
                description: "Modify existing todos",
                category: PermissionCategory::Todos,
            },
            Self::TodoDelete => PermissionMetadata {
                label: "Delete Todos",
                description: "Remove todos permanently",
                category: PermissionCategory::Todos,
            },
            Self::TodoView => PermissionMetadata {
                label: "View Todos",
                description: "View todo items",
                category: PermissionCategory::Todos,
            },
            Self::SettingsManage => PermissionMetadata {
                label: "Manage Settings",
                description: "Access and modify organization settings",
                category: PermissionCategory::Settings,
            },
            Self::RolesView => PermissionMetadata {
                label: "View Roles",
                description: "View role definitions and permissions",
                category: PermissionCategory::Roles,
            },
            Self::InvitationView => PermissionMetadata {
                label: "View Invitations",
                description: "View pending invitations",
                category: PermissionCategory::Invitations,
            },
            Self::InvitationManage => PermissionMetadata {
                label: "Manage Invitations",
                description: "Create, cancel, and resend invitations",
                category: PermissionCategory::Invitations,
            },
        }
    }

    /// Returns the display category this permission is grouped under.
    #[must_use]
    pub fn category(&self) -> PermissionCategory {
        self.metadata().category
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "org:delete" => Ok(Self::OrgDelete),
            "org:update" => Ok(Self::OrgUpdate),
            "org:view" => Ok(Self::OrgView),
            "member:invite" => Ok(Self::MemberInvite),
            "member:remove" => Ok(Self::MemberRemove),
            "member:update_role" => Ok(Self::MemberUpdateRole),
            "member:view" => Ok(Self::MemberView),
            "project:create" => Ok(Self::ProjectCreate),
            "project:update" => Ok(Self::ProjectUpdate),
            "project:delete" => Ok(Self::ProjectDelete),
            "project:view" => Ok(Self::ProjectView),
            "todo:create" => Ok(Self::TodoCreate),
            "todo:update" => Ok(Self::TodoUpdate),
            "todo:delete" => Ok(Self::TodoDelete),
            "todo:view" => Ok(Self::TodoView),
            "settings:manage" => Ok(Self::SettingsManage),
            "roles:view" => Ok(Self::RolesView),
            "invitation:view" => Ok(Self::InvitationView),
            "invitation:manage" => Ok(Self::InvitationManage),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

impl PermissionCategory {
    /// Returns the display name shown as the category heading.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Members => "Members",
            Self::Projects => "Projects",
            Self::Todos => "Todos",
            Self::Settings => "Settings",
            Self::Roles => "Roles",
            Self::Invitations => "Invitations",
        }
    }

    /// Returns all categories in catalog declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[PermissionCategory] = &[
            PermissionCategory::Organization,
            PermissionCategory::Members,
            PermissionCategory::Projects,
            PermissionCategory::Todos,
            PermissionCategory::Settings,
            PermissionCategory::Roles,
            PermissionCategory::Invitations,
        ];

        ALL
    }
}

/// Groups the permission catalog by display category.
///
/// Categories and the permissions within each follow catalog declaration
/// order, so repeated calls yield identical output.
#[must_use]
pub fn permissions_by_category() -> Vec<(PermissionCategory, Vec<Permission>)> {
    PermissionCategory::all()
        .iter()
        .map(|category| {
            let members = Permission::all()
                .iter()
                .copied()
                .filter(|permission| permission.category() == *category)
                .collect();
            (*category, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::{Permission, PermissionCategory, permissions_by_category};

    #[test]
    fn permission_roundtrip_storage_value() {
        for permission in Permission::all() {
            let restored = Permission::from_str(permission.as_str());
            assert_eq!(restored.ok(), Some(*permission));
        }
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let parsed = Permission::from_str("org:destroy");
        assert!(parsed.is_err());
    }

    #[test]
    fn metadata_is_declared_for_every_permission() {
        for permission in Permission::all() {
            let metadata = permission.metadata();
            assert!(!metadata.label.is_empty());
            assert!(!metadata.description.is_empty());
        }
    }

    #[test]
    fn category_grouping_covers_catalog_exactly() {
        let grouped: Vec<Permission> = permissions_by_category()
            .into_iter()
            .flat_map(|(_, members)| members)
            .collect();

        assert_eq!(grouped.len(), Permission::all().len());

        let grouped_set: HashSet<Permission> = grouped.into_iter().collect();
        let catalog_set: HashSet<Permission> = Permission::all().iter().copied().collect();
        assert_eq!(grouped_set, catalog_set);
    }

    #[test]
    fn organization_category_lists_exact_permissions() {
        let groups = permissions_by_category();
        assert_eq!(
            groups.first(),
            Some(&(
                PermissionCategory::Organization,
                vec![
                    Permission::OrgDelete,
                    Permission::OrgUpdate,
                    Permission::OrgView,
                ],
            ))
        );
    }

    #[test]
    fn category_grouping_is_stable_across_calls() {
        assert_eq!(permissions_by_category(), permissions_by_category());
    }

    #[test]
    fn permission_serializes_to_snake_case() {
        let encoded = serde_json::to_string(&Permission::OrgDelete).ok();
        assert_eq!(encoded.as_deref(), Some("\"org_delete\""));
    }

    proptest! {
        #[test]
        fn undeclared_transport_values_are_rejected(value in "[a-z:_]{0,24}") {
            prop_assume!(Permission::all().iter().all(|known| known.as_str() != value));
            prop_assert!(Permission::from_str(value.as_str()).is_err());
        }
    }
}
