//! Typed request payloads per endpoint.

pub mod auth;
pub mod category;
pub mod product;
pub mod user;

pub use auth::*;
pub use category::*;
pub use product::*;
pub use user::*;
