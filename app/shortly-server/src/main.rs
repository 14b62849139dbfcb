use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use shortly_api::handlers::{auth, health, links, redirect};
use shortly_api::state::AppState;
use shortly_core::services::{AuthService, LinkService};
use shortly_infrastructure::database::connection;
use shortly_infrastructure::{PgLinkRepository, PgSessionRepository, PgUserRepository};
use shortly_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    shortly_shared::telemetry::init_telemetry();

    info!("Shortly server starting...");

    // Load configuration. A missing database URL fails here, before the
    // process can serve any traffic.
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Database connection established.");

    // Wire repositories and services
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let sessions = Arc::new(PgSessionRepository::new(pool.clone()));
    let link_repo = Arc::new(PgLinkRepository::new(pool));

    let state = AppState {
        auth: Arc::new(AuthService::new(users, sessions, config.session.ttl_days)),
        links: Arc::new(LinkService::new(link_repo)),
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/me", get(auth::me))
        // Link routes
        .route("/api/v1/links", post(links::create_link).get(links::list_links))
        // Public redirect
        .route("/{slug}", get(redirect::resolve_slug))
        // Add State
        .with_state(state)
        // Add CORS
        .layer(
            CorsLayer::new()
                .allow_origin(config.app.frontend_origin.parse::<axum::http::HeaderValue>()?)
                .allow_credentials(true)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
