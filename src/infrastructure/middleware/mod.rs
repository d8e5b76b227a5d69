// Middleware - admin bearer-token check
pub mod admin_auth;

pub use admin_auth::*;
