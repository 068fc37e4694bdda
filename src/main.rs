//! Local Library - server-rendered catalog application

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use local_library::{
    config::AppConfig, repository::Repository, services::Services, web, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("local_library={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Local Library v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
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

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        // Home
        .route("/catalog", get(web::home::index))
        // Books
        .route("/catalog/books", get(web::books::list))
        .route(
            "/catalog/book/create",
            get(web::books::create_get).post(web::books::create_post),
        )
        .route("/catalog/book/:id", get(web::books::detail))
        .route(
            "/catalog/book/:id/delete",
            get(web::books::delete_get).post(web::books::delete_post),
        )
        .route(
            "/catalog/book/:id/update",
            get(web::books::update_get).post(web::books::update_post),
        )
        // Authors
        .route("/catalog/authors", get(web::authors::list))
        .route(
            "/catalog/author/create",
            get(web::authors::create_get).post(web::authors::create_post),
        )
        .route("/catalog/author/:id", get(web::authors::detail))
        .route(
            "/catalog/author/:id/delete",
            get(web::authors::delete_get).post(web::authors::delete_post),
        )
        .route(
            "/catalog/author/:id/update",
            get(web::authors::update_get).post(web::authors::update_post),
        )
        // Genres
        .route("/catalog/genres", get(web::genres::list))
        .route(
            "/catalog/genre/create",
            get(web::genres::create_get).post(web::genres::create_post),
        )
        .route("/catalog/genre/:id", get(web::genres::detail))
        .route(
            "/catalog/genre/:id/delete",
            get(web::genres::delete_get).post(web::genres::delete_post),
        )
        .route(
            "/catalog/genre/:id/update",
            get(web::genres::update_get).post(web::genres::update_post),
        )
        // Book instances (copies)
        .route("/catalog/bookinstances", get(web::book_instances::list))
        .route(
            "/catalog/bookinstance/create",
            get(web::book_instances::create_get).post(web::book_instances::create_post),
        )
        .route("/catalog/bookinstance/:id", get(web::book_instances::detail))
        .route(
            "/catalog/bookinstance/:id/delete",
            get(web::book_instances::delete_get).post(web::book_instances::delete_post),
        )
        .route(
            "/catalog/bookinstance/:id/update",
            get(web::book_instances::update_get).post(web::book_instances::update_post),
        )
        .with_state(state);

    Router::new()
        .route("/", get(web::home::root))
        .merge(catalog)
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
}
