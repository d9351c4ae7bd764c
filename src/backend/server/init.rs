/**
 * Server Initialization
 *
 * Turns a `ServerConfig` into a ready-to-serve router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database
 * 2. Run the embedded migrations
 * 3. Build the image store
 * 4. Create and configure the router
 *
 * Unlike optional collaborators, the database is required: a failure to
 * connect or migrate aborts startup.
 */

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::media::{CloudinaryClient, ImageStore, MemoryImageStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ImageStoreConfig, ServerConfig};
use crate::backend::server::state::AppState;

/// Errors that abort server startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing social-net backend server");

    let pool = connect_database(&config.database_url).await?;
    let images = build_image_store(&config.images);
    tracing::info!("Image store: {}", images.kind());

    let app_state = AppState::new(pool, images, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}

/// Connect to the database and bring the schema up to date
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");
    let pool = SqlitePool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Run the embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Instantiate the configured image backend
pub fn build_image_store(config: &ImageStoreConfig) -> ImageStore {
    match config {
        ImageStoreConfig::Cloudinary(cloudinary) => {
            ImageStore::Cloudinary(CloudinaryClient::new(cloudinary.clone()))
        }
        ImageStoreConfig::Memory { base_url } => {
            ImageStore::Memory(MemoryImageStore::new(base_url.clone()))
        }
        ImageStoreConfig::Disabled => ImageStore::Disabled,
    }
}
