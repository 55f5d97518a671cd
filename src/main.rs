mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod pagination;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::repositories::{CategoryRepository, ProductRepository};
use crate::services::{AuthService, CategoryService, FileService, ProductService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Initialize repositories, shared across services
    let category_repo = Arc::new(CategoryRepository::new(&db));
    let product_repo = Arc::new(ProductRepository::new(&db));

    let user_service = UserService::new(&db);
    let user_repo = user_service.repository();

    // Ensure unique indexes exist before serving traffic
    category_repo
        .create_indexes()
        .await
        .expect("Failed to create category indexes");
    product_repo
        .create_indexes()
        .await
        .expect("Failed to create product indexes");
    user_repo
        .create_indexes()
        .await
        .expect("Failed to create user indexes");

    // Initialize services
    let user_service = web::Data::new(user_service);
    let auth_service = web::Data::new(AuthService::new(user_repo));
    let category_service = web::Data::new(CategoryService::new(
        Arc::clone(&category_repo),
        Arc::clone(&product_repo),
    ));
    let product_service = web::Data::new(ProductService::new(product_repo, category_repo));
    let file_service = web::Data::new(FileService::new());

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .app_data(auth_service.clone())
            .app_data(category_service.clone())
            .app_data(product_service.clone())
            .app_data(file_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(Files::new("/uploads", &CONFIG.upload_dir))
    })
    .bind(&server_addr)?
    .run()
    .await
}
