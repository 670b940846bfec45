//! Pensio API Server
//!
//! Main entry point for the Pensio backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pensio_api::{AppState, create_router};
use pensio_core::access::AccessService;
use pensio_core::render::HtmlStatementRenderer;
use pensio_core::statement::StatementService;
use pensio_core::store::{ContributionStore, IdentityStore};
use pensio_db::{ContributionRepository, MemberRepository, connect};
use pensio_shared::{AppConfig, JwtService, jwt::JwtConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pensio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Create JWT service
    let jwt_config = JwtConfig {
        secret: config.jwt.secret.clone(),
        #[allow(clippy::cast_possible_wrap)]
        token_expires_minutes: (config.jwt.token_expiry_secs / 60) as i64,
    };
    let jwt_service = JwtService::new(jwt_config);

    // Wire the repositories into the core services
    let contributions =
        Arc::new(ContributionRepository::new(db.clone())) as Arc<dyn ContributionStore>;
    let identities = Arc::new(MemberRepository::new(db)) as Arc<dyn IdentityStore>;

    let state = AppState {
        statements: Arc::new(StatementService::new(
            contributions,
            Arc::clone(&identities),
        )),
        access: Arc::new(AccessService::new(identities)),
        renderer: Arc::new(HtmlStatementRenderer),
        jwt_service: Arc::new(jwt_service),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
