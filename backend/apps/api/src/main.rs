//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use places::{GoogleGeocoder, PgPlaceRepository, PlacesConfig, places_router};
use platform::token::TokenService;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{PgUserRepository, UsersConfig, users_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,users=info,places=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token signing key
    let tokens = Arc::new(if cfg!(debug_assertions) {
        match load_token_service() {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!(error = %e, "JWT_KEY not usable, using a random secret");
                TokenService::with_random_secret()
            }
        }
    } else {
        // In production the key is mandatory: a random one would invalidate
        // every session on restart and differ across instances
        load_token_service().expect("JWT_KEY must be set to 32 base64-encoded bytes")
    });

    // Uploads directory, served statically below
    let upload_dir = env::var("UPLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("uploads/images"));

    let users_config = UsersConfig {
        upload_dir: upload_dir.clone(),
        password_pepper: env::var("PASSWORD_PEPPER").ok().map(String::into_bytes),
    };

    let places_config = PlacesConfig {
        upload_dir: upload_dir.clone(),
    };

    // Geocoder
    let google_api_key =
        env::var("GOOGLE_API_KEY").expect("GOOGLE_API_KEY must be set in environment");
    let geocoder = GoogleGeocoder::new(google_api_key);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .nest(
            "/api/users",
            users_router(PgUserRepository::new(pool.clone()), tokens.clone(), users_config),
        )
        .nest(
            "/api/places",
            places_router(
                PgPlaceRepository::new(pool.clone()),
                geocoder,
                tokens.clone(),
                places_config,
            ),
        )
        .nest_service("/uploads/images", ServeDir::new(&upload_dir))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build the token service from the JWT_KEY environment variable
fn load_token_service() -> anyhow::Result<TokenService> {
    let key_b64 = env::var("JWT_KEY")?;
    let key_bytes = Engine::decode(&general_purpose::STANDARD, &key_b64)?;

    let secret: [u8; 32] = key_bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow::anyhow!("JWT_KEY must decode to exactly 32 bytes"))?;

    Ok(TokenService::new(secret))
}

/// Fallback for unknown routes
async fn route_not_found() -> AppError {
    AppError::not_found("Could not find this route.")
}
