//! HTTP request handlers organized by resource.

pub mod auth_handler;
pub mod category_handler;
pub mod product_handler;
pub mod upload_handler;
pub mod user_handler;

pub use auth_handler::*;
pub use category_handler::*;
pub use product_handler::*;
pub use upload_handler::*;
pub use user_handler::*;
