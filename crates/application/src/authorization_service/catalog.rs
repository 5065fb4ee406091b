use opsboard_domain::{Permission, PermissionCategory, RoleDefinition, permissions_by_category};

use super::AuthorizationService;

impl AuthorizationService {
    /// Returns every role in seniority order for display.
    ///
    /// A read path with no authorization side effects; listing roles is
    /// itself gated by the caller, not by the catalog.
    #[must_use]
    pub fn list_roles(&self) -> &[RoleDefinition] {
        self.catalog.all()
    }

    /// Looks up a role by its stored identifier.
    #[must_use]
    pub fn role_by_id(&self, role_id: &str) -> Option<&RoleDefinition> {
        self.catalog.role_by_id(role_id)
    }

    /// Returns the permission catalog grouped by display category.
    #[must_use]
    pub fn permissions_by_category(&self) -> Vec<(PermissionCategory, Vec<Permission>)> {
        permissions_by_category()
    }
}
