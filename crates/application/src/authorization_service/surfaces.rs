use opsboard_domain::Surface;

use super::AuthorizationService;

impl AuthorizationService {
    /// Returns the product surfaces the role may access.
    ///
    /// A surface is accessible when the role holds at least one of the
    /// permissions required by that surface (logical OR). Unrecognized role
    /// ids see no surfaces.
    #[must_use]
    pub fn accessible_surfaces(&self, role_id: &str) -> Vec<Surface> {
        let Some(role) = self.catalog.role_by_id(role_id) else {
            return Vec::new();
        };

        Surface::all()
            .iter()
            .copied()
            .filter(|surface| {
                surface
                    .required_permissions()
                    .iter()
                    .any(|required| role.grants(*required))
            })
            .collect()
    }
}
