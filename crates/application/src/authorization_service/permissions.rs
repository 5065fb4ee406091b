use opsboard_core::{AppError, AppResult};
use opsboard_domain::{Permission, RoleDefinition};

use super::AuthorizationService;

impl AuthorizationService {
    /// Returns whether the role currently has the permission.
    ///
    /// Unrecognized role ids resolve to `false`: a stale or corrupted
    /// membership value must never widen access.
    #[must_use]
    pub fn has_permission(&self, role_id: &str, permission: Permission) -> bool {
        self.catalog
            .role_by_id(role_id)
            .is_some_and(|role| role.grants(permission))
    }

    /// Ensures the role holds the required permission.
    pub fn require_permission(&self, role_id: &str, permission: Permission) -> AppResult<()> {
        if self.has_permission(role_id, permission) {
            return Ok(());
        }

        tracing::debug!(
            role_id,
            permission = permission.as_str(),
            "permission check denied"
        );

        Err(AppError::Forbidden(format!(
            "role '{role_id}' is missing permission '{}'",
            permission.as_str()
        )))
    }

    /// Returns the role's granted permissions in catalog order.
    ///
    /// Unrecognized role ids yield an empty set.
    #[must_use]
    pub fn effective_permissions(&self, role_id: &str) -> Vec<Permission> {
        self.catalog
            .role_by_id(role_id)
            .map(RoleDefinition::ordered_permissions)
            .unwrap_or_default()
    }
}
