//! Services organized by domain concern.

pub mod auth_service;
pub mod category_service;
pub mod file_service;
pub mod product_service;
pub mod token_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use category_service::CategoryService;
pub use file_service::FileService;
pub use product_service::ProductService;
pub use user_service::UserService;
