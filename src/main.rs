//! LabTrack Server - Lab & Classroom Inventory Management
//!
//! A Rust REST API server tracking rooms, computers, smart boards and
//! lab utilities, with a dashboard aggregation layer.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labtrack_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{storage::StorageService, Services},
    AppState,
};

// Multipart bodies carry up to a 5 MiB image plus text fields and framing
const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("labtrack_server={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting LabTrack Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Prepare the image upload directory
    let storage = StorageService::new(&config.storage.upload_dir)
        .expect("Failed to prepare upload directory");

    tracing::info!("Upload directory ready at {}", config.storage.upload_dir);

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, storage);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Rooms
        .route("/room/all", get(api::rooms::list_rooms))
        .route("/room/create", post(api::rooms::create_room))
        .route("/room/edit/:id", put(api::rooms::update_room))
        .route("/room/delete/:id", delete(api::rooms::delete_room))
        .route("/room/details/:id", get(api::rooms::room_details))
        .route("/room/upload-image/:id", post(api::rooms::upload_room_image))
        .route("/room/image/:filename", get(api::rooms::room_image))
        .route("/room/:id", get(api::rooms::get_room))
        // Categories
        .route("/category/all", get(api::categories::list_categories))
        .route("/category/create", post(api::categories::create_category))
        .route("/category/edit/:id", put(api::categories::update_category))
        .route("/category/delete/:id", delete(api::categories::delete_category))
        .route("/category/:id/computers", get(api::categories::category_computers))
        .route("/category/:id", get(api::categories::get_category))
        // Computers
        .route("/computer/all", get(api::computers::list_computers))
        .route("/computer/create", post(api::computers::create_computer))
        .route("/computer/edit/:id", put(api::computers::update_computer))
        .route("/computer/delete/:id", delete(api::computers::delete_computer))
        .route("/computer/:id", get(api::computers::get_computer))
        // Smart boards
        .route("/smart-board/all", get(api::smart_boards::list_smart_boards))
        .route("/smart-board/create", post(api::smart_boards::create_smart_board))
        .route("/smart-board/edit/:id", put(api::smart_boards::update_smart_board))
        .route("/smart-board/delete/:id", delete(api::smart_boards::delete_smart_board))
        .route(
            "/smart-board/upload-image/:id",
            post(api::smart_boards::upload_smart_board_image),
        )
        .route(
            "/smart-board/image/:filename",
            get(api::smart_boards::smart_board_image),
        )
        .route("/smart-board/:id", get(api::smart_boards::get_smart_board))
        // Lab utilities
        .route("/lab-utility/all", get(api::lab_utilities::list_lab_utilities))
        .route("/lab-utility/create", post(api::lab_utilities::create_lab_utility))
        .route("/lab-utility/edit/:id", put(api::lab_utilities::update_lab_utility))
        .route("/lab-utility/delete/:id", delete(api::lab_utilities::delete_lab_utility))
        .route("/lab-utility/:id", get(api::lab_utilities::get_lab_utility))
        // Dashboard
        .route("/dashboard/summary", get(api::dashboard::summary))
        .route("/dashboard/recent", get(api::dashboard::recent))
        // Users
        .route("/user/login-validate", post(api::users::login_validate))
        .route("/user/register", post(api::users::register))
        .route("/user/info", get(api::users::user_info))
        .route("/user/edit", put(api::users::update_user))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(openapi)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
