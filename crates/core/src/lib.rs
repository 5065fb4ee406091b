//! Shared primitives for all Rust crates in Opsboard.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Opsboard crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
///
/// The HTTP layer maps these onto transport status codes; crates in this
/// workspace only ever pick the category.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// User is not authenticated or not allowed to access a resource.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but blocked by authorization policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn forbidden_formats_with_category_prefix() {
        let error = AppError::Forbidden("role 'member' is missing 'org:delete'".to_owned());
        assert_eq!(
            error.to_string(),
            "forbidden: role 'member' is missing 'org:delete'"
        );
    }

    #[test]
    fn validation_formats_with_category_prefix() {
        let error = AppError::Validation("duplicate role id 'owner'".to_owned());
        assert_eq!(error.to_string(), "validation error: duplicate role id 'owner'");
    }
}
