//! Application services for authorization decisions.

#![forbid(unsafe_code)]

mod authorization_service;

pub use authorization_service::AuthorizationService;
