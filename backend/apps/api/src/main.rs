//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level failures never leave
//! the `contact` crate (they become response text).
//!
//! ## Commands
//! - (none) - run the HTTP server
//! - `send-test-mail` - send one fixed email to the owner address and exit

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use contact::application::SendTestMailUseCase;
use contact::{
    ContactConfig, HttpMailTransport, PgSubmissionRepository, RecaptchaVerifier, contact_router,
};
use platform::http_client::build_http_client;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                //.unwrap_or_else(|_| "api=debug,contact=debug,tower_http=debug".into()),
                .unwrap_or_else(|_| "api=info,contact=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Contact configuration; debug builds start from local defaults
    let base = if cfg!(debug_assertions) {
        ContactConfig::development()
    } else {
        ContactConfig::default()
    };
    let config = ContactConfig::from_env(base)?;

    tracing::info!(config = ?config, "Configuration loaded");

    let http_client = build_http_client(&config.http_client_config())?;

    let mailer = HttpMailTransport::new(
        http_client.clone(),
        &config.mail_api_url,
        &config.mail_api_key,
        &config.mail_from,
    );

    match env::args().nth(1).as_deref() {
        None | Some("serve") => {}
        Some("send-test-mail") => {
            SendTestMailUseCase::new(Arc::new(mailer), Arc::new(config))
                .execute()
                .await?;
            return Ok(());
        }
        Some(other) => anyhow::bail!("Unknown command: {other} (expected `serve` or `send-test-mail`)"),
    }

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

    let repo = PgSubmissionRepository::new(pool, config.store_name.clone());
    let verifier = RecaptchaVerifier::new(
        http_client,
        &config.recaptcha_verify_url,
        &config.recaptcha_secret,
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = Router::new()
        .nest("/api", contact_router(repo, verifier, mailer, config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:31113".to_string());
    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("LISTEN_ADDR is not a socket address: {listen_addr}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
