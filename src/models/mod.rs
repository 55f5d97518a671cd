//! Data models organized by type.

pub mod category;
pub mod claims;
pub mod product;
pub mod requests;
pub mod responses;
pub mod user;

pub use category::*;
pub use claims::*;
pub use product::*;
pub use requests::*;
pub use responses::*;
pub use user::*;
