use actix_web::web;

use crate::handlers;
use crate::middleware::AuthMiddleware;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // Auth routes (public)
            .service(web::scope("/auth").route("/login", web::post().to(handlers::login)))
            // Public user routes; registered before the protected /users
            // scope so registration and confirmation skip the middleware
            .route("/users", web::post().to(handlers::register))
            .route(
                "/users/confirm/{token}",
                web::get().to(handlers::confirm_account),
            )
            // Public blob routes
            .route("/image/{filename}", web::get().to(handlers::get_image))
            .route("/avatar/{user_id}", web::get().to(handlers::get_avatar))
            // User routes (protected)
            .service(
                web::scope("/users")
                    .wrap(AuthMiddleware)
                    .route("", web::get().to(handlers::get_users))
                    .route("/{id}", web::get().to(handlers::get_user)),
            )
            // Category routes (protected)
            .service(
                web::scope("/categories")
                    .wrap(AuthMiddleware)
                    .route("", web::get().to(handlers::get_categories))
                    .route("", web::post().to(handlers::create_category))
                    .route("/{id}", web::get().to(handlers::get_category))
                    .route("/{id}", web::patch().to(handlers::update_category))
                    .route("/{id}", web::delete().to(handlers::delete_category)),
            )
            // Product routes (protected)
            .service(
                web::scope("/products")
                    .wrap(AuthMiddleware)
                    .route("", web::get().to(handlers::get_products))
                    .route("", web::post().to(handlers::create_product))
                    .route("/{id}", web::get().to(handlers::get_product))
                    .route("/{id}", web::patch().to(handlers::update_product))
                    .route("/{id}", web::delete().to(handlers::delete_product)),
            )
            // Upload routes (protected)
            .service(
                web::scope("/upload")
                    .wrap(AuthMiddleware)
                    .route("/image", web::post().to(handlers::upload_image))
                    .route("/avatar", web::post().to(handlers::upload_avatar)),
            ),
    );
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = crate::models::HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
