use std::sync::Arc;

use opsboard_core::AppResult;
use opsboard_domain::RoleCatalog;

mod catalog;
mod permissions;
mod surfaces;


/// Application service answering permission checks against the role catalog.
///
/// The single decision point for every access-controlled operation. All
/// checks are pure, synchronous reads over the immutable catalog, so the
/// service is safe to share across request handlers without locking.
#[derive(Clone)]
pub struct AuthorizationService {
    catalog: Arc<RoleCatalog>,
}

impl AuthorizationService {
    /// Creates an authorization service over an already-validated catalog.
    #[must_use]
    pub fn new(catalog: Arc<RoleCatalog>) -> Self {
        Self { catalog }
    }

    /// Creates an authorization service over the built-in system roles.
    ///
    /// Propagates catalog construction failures so startup aborts instead
    /// of running with a broken authorization model.
    pub fn with_builtin_roles() -> AppResult<Self> {
        Ok(Self::new(Arc::new(RoleCatalog::builtin()?)))
    }
}
