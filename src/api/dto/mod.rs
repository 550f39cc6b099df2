//! Request/response types for the HTTP layer.

pub mod health;
pub mod links;
