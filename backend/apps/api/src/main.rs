//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::application::SeedDefaultCredentialUseCase;
use auth::middleware::{BearerAuthState, require_bearer_token};
use auth::{AuthConfig, PgCredentialRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use catalog::{PgCatalogRepository, catalog_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer, ExposeHeaders};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Token configuration from the environment
///
/// `JWT_KEY` is required outside debug builds; development falls back
/// to a random secret with anonymous tokens enabled.
fn auth_config() -> anyhow::Result<AuthConfig> {
    match env::var("JWT_KEY") {
        Ok(key) => {
            let token_lifetime_days = env::var("JWT_EXPIRE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1);
            let anonymous_tokens = env::var("AUTH_ANONYMOUS_TOKENS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false);
            Ok(AuthConfig {
                token_secret: key.into_bytes(),
                token_lifetime_days,
                anonymous_tokens,
            })
        }
        Err(_) if cfg!(debug_assertions) => Ok(AuthConfig::development()),
        Err(_) => anyhow::bail!("JWT_KEY must be set in production"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
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

    // Startup seeding: make sure a sign-in credential exists
    // Errors here should not prevent server startup
    let credential_store = PgCredentialRepository::new(pool.clone());
    match SeedDefaultCredentialUseCase::new(Arc::new(credential_store.clone()))
        .execute()
        .await
    {
        Ok(created) => {
            tracing::info!(created, "Credential seeding completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Credential seeding failed, continuing anyway"
            );
        }
    }

    let config = Arc::new(auth_config()?);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:4200,http://127.0.0.1:4200".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .expose_headers(ExposeHeaders::list([http::HeaderName::from_static(
            "pagination",
        )]))
        .allow_credentials(true);

    let catalog_store = PgCatalogRepository::new(pool.clone());

    // Catalog routes require a valid bearer token; auth routes are open
    let protected = catalog_router(catalog_store).route_layer(middleware::from_fn_with_state(
        BearerAuthState {
            config: config.clone(),
        },
        require_bearer_token,
    ));

    let app = Router::new()
        .nest("/api/auth", auth_router(credential_store, config))
        .nest("/api", protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
