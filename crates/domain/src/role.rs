use std::collections::HashSet;

use opsboard_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::Permission;

/// A named bundle of permissions assignable to an organization member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Stable role identifier stored on membership records.
    pub role_id: String,
    /// Display name.
    pub name: String,
    /// Short description shown in role listings.
    pub description: String,
    /// Display color as a hex value.
    pub color: String,
    /// Indicates a system-managed role.
    pub is_system: bool,
    /// Permissions granted by the role.
    pub permissions: HashSet<Permission>,
}

impl RoleDefinition {
    /// Returns whether the role grants the permission.
    #[must_use]
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns the granted permissions in catalog declaration order.
    #[must_use]
    pub fn ordered_permissions(&self) -> Vec<Permission> {
        Permission::all()
            .iter()
            .copied()
            .filter(|permission| self.permissions.contains(permission))
            .collect()
    }

    /// Built-in owner role with full control, including organization deletion.
    #[must_use]
    pub fn owner() -> Self {
        Self {
            role_id: "owner".to_owned(),
            name: "Owner".to_owned(),
            description: "Full control over the organization including deletion".to_owned(),
            color: "#DC2626".to_owned(),
            is_system: true,
            permissions: HashSet::from([
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
            ]),
        }
    }

    /// Built-in admin role with comprehensive access except organization deletion.
    #[must_use]
    pub fn admin() -> Self {
        Self {
            role_id: "admin".to_owned(),
            name: "Admin".to_owned(),
            description: "Comprehensive access except organization deletion".to_owned(),
            color: "#3B82F6".to_owned(),
            is_system: true,
            permissions: HashSet::from([
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
            ]),
        }
    }

    /// Built-in member role with limited permissions for standard team members.
    #[must_use]
    pub fn member() -> Self {
        Self {
            role_id: "member".to_owned(),
            name: "Member".to_owned(),
            description: "Limited permissions for standard team members".to_owned(),
            color: "#6B7280".to_owned(),
            is_system: true,
            permissions: HashSet::from([
                Permission::OrgView,
                Permission::MemberView,
                Permission::ProjectCreate,
                Permission::ProjectUpdate,
                Permission::ProjectView,
                Permission::TodoCreate,
                Permission::TodoUpdate,
                Permission::TodoDelete,
                Permission::TodoView,
                Permission::RolesView,
                Permission::InvitationView,
            ]),
        }
    }
}

/// Immutable, ordered collection of every role known to the process.
///
/// Constructed once at startup and shared read-only afterwards; there is no
/// runtime mutation path. Any future support for custom roles must re-check
/// the construction invariants on every write.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
}

impl RoleCatalog {
    /// Builds a catalog after checking construction invariants.
    ///
    /// Fails with a diagnostic naming the offending role when a role id is
    /// blank or duplicated. Role-to-permission references cannot dangle:
    /// `Permission` is a closed enum, so membership in the permission
    /// catalog holds for every representable grant.
    pub fn new(roles: Vec<RoleDefinition>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for role in &roles {
            if role.role_id.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "role '{}' has a blank role id",
                    role.name
                )));
            }
            if !seen.insert(role.role_id.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate role id '{}'",
                    role.role_id
                )));
            }
        }

        Ok(Self { roles })
    }

    /// Builds the catalog of built-in system roles in seniority order.
    pub fn builtin() -> AppResult<Self> {
        Self::new(vec![
            RoleDefinition::owner(),
            RoleDefinition::admin(),
            RoleDefinition::member(),
        ])
    }

    /// Returns every role in declaration order.
    #[must_use]
    pub fn all(&self) -> &[RoleDefinition] {
        self.roles.as_slice()
    }

    /// Looks up a role by its stored identifier.
    ///
    /// Role ids originate from persisted membership rows and may be stale;
    /// an unrecognized id resolves to `None`, never an error.
    #[must_use]
    pub fn role_by_id(&self, role_id: &str) -> Option<&RoleDefinition> {
        self.roles.iter().find(|role| role.role_id == role_id)
    }

    /// Returns the number of roles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns whether the catalog holds no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::Permission;

    use super::{RoleCatalog, RoleDefinition};

    fn builtin_catalog() -> RoleCatalog {
        RoleCatalog::builtin()
            .unwrap_or_else(|error| panic!("builtin catalog must construct: {error}"))
    }

    #[test]
    fn builtin_catalog_lists_roles_in_seniority_order() {
        let catalog = builtin_catalog();
        let ids: Vec<&str> = catalog
            .all()
            .iter()
            .map(|role| role.role_id.as_str())
            .collect();
        assert_eq!(ids, vec!["owner", "admin", "member"]);
        assert!(catalog.all().iter().all(|role| role.is_system));
    }

    #[test]
    fn owner_grants_every_catalog_permission() {
        let owner = RoleDefinition::owner();
        assert_eq!(owner.permissions.len(), 19);
        for permission in Permission::all() {
            assert!(owner.grants(*permission));
        }
    }

    #[test]
    fn admin_lacks_only_organization_deletion() {
        let admin = RoleDefinition::admin();
        assert_eq!(admin.permissions.len(), 18);
        assert!(!admin.grants(Permission::OrgDelete));
        assert!(admin.grants(Permission::MemberInvite));
    }

    #[test]
    fn role_permissions_form_superset_chain() {
        let owner = RoleDefinition::owner();
        let admin = RoleDefinition::admin();
        let member = RoleDefinition::member();

        assert!(member.permissions.is_subset(&admin.permissions));
        assert!(admin.permissions.is_subset(&owner.permissions));
    }

    #[test]
    fn every_role_references_only_catalog_permissions() {
        let catalog = builtin_catalog();
        let declared: HashSet<Permission> = Permission::all().iter().copied().collect();
        for role in catalog.all() {
            assert!(role.permissions.is_subset(&declared));
        }
    }

    #[test]
    fn unknown_role_id_resolves_to_none() {
        let catalog = builtin_catalog();
        assert!(catalog.role_by_id("superuser").is_none());
    }

    #[test]
    fn duplicate_role_ids_are_rejected() {
        let result = RoleCatalog::new(vec![RoleDefinition::member(), RoleDefinition::member()]);
        assert!(result.is_err());
    }

    #[test]
    fn blank_role_id_is_rejected() {
        let mut role = RoleDefinition::member();
        role.role_id = "   ".to_owned();
        let result = RoleCatalog::new(vec![role]);
        assert!(result.is_err());
    }

    #[test]
    fn ordered_permissions_follow_catalog_order() {
        let member = RoleDefinition::member();
        assert_eq!(
            member.ordered_permissions(),
            vec![
                Permission::OrgView,
                Permission::MemberView,
                Permission::ProjectCreate,
                Permission::ProjectUpdate,
                Permission::ProjectView,
                Permission::TodoCreate,
                Permission::TodoUpdate,
                Permission::TodoDelete,
                Permission::TodoView,
                Permission::RolesView,
                Permission::InvitationView,
            ]
        );
    }
}
