//! Repository layer for database operations.
//!
//! Repositories encapsulate all MongoDB access, keeping the service layer
//! free of query details. Each repository also implements
//! [`crate::pagination::PageSource`] so list endpoints can be paginated.

pub mod category_repository;
pub mod product_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;
