//! Application constants module.
//!
//! Centralizes the constant strings used throughout the application:
//! collection names, error messages, success messages, and pagination bounds.

pub mod collections;
pub mod errors;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
