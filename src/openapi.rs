use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    AuthResponse, CategoryResponse, CreateCategoryRequest, CreateProductRequest, ErrorResponse,
    HealthResponse, LoginRequest, ProductCategoryResponse, ProductResponse, RegisterRequest,
    UpdateCategoryRequest, UpdateProductRequest, UploadResponse, UserResponse,
};
use crate::pagination::{Page, PageLinks};

/// OpenAPI documentation for the Product Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "A REST API for managing a product catalog with categories, user accounts, and image uploads.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
        (url = "http://0.0.0.0:8080", description = "Docker development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authentication", description = "User authentication endpoints"),
        (name = "Users", description = "User registration, confirmation, and lookup"),
        (name = "Categories", description = "Category management endpoints"),
        (name = "Products", description = "Product management endpoints"),
        (name = "Uploads", description = "Image and avatar upload endpoints")
    ),
    paths(
        crate::handlers::login,
        crate::handlers::register,
        crate::handlers::confirm_account,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::get_categories,
        crate::handlers::create_category,
        crate::handlers::get_category,
        crate::handlers::update_category,
        crate::handlers::delete_category,
        crate::handlers::get_products,
        crate::handlers::create_product,
        crate::handlers::get_product,
        crate::handlers::update_product,
        crate::handlers::delete_product,
        crate::handlers::upload_image,
        crate::handlers::get_image,
        crate::handlers::upload_avatar,
        crate::handlers::get_avatar,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CategoryResponse,
            ProductResponse,
            ProductCategoryResponse,
            UserResponse,
            AuthResponse,
            UploadResponse,
            Page<CategoryResponse>,
            Page<ProductResponse>,
            Page<UserResponse>,
            PageLinks,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT token obtained from the /api/auth/login endpoint",
                        ))
                        .build(),
                ),
            );
        }
    }
}
