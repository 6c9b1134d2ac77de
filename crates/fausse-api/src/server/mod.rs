//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use fausse_common::{AppConfig, AppError, JwtService};
use fausse_core::value_objects::{Clock, FixedClock, SystemClock};
use fausse_db::{
    create_pool, run_migrations, PgCategoryRepository, PgCustomerRepository,
    PgEmployeeRepository, PgMenuItemRepository, PgNewsletterRepository, PgPool,
    PgReservationRepository,
};
use fausse_service::{EmployeeService, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes bypass the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit);
    let router = health_routes().merge(api);
    let router = apply_middleware(
        router,
        &config.cors,
        Duration::from_secs(config.api.request_timeout_secs),
    );
    router.with_state(state)
}

/// Assemble the service context over an existing pool
///
/// # Errors
/// Returns `AppError::Config` when a dependency is missing.
pub fn build_service_context(pool: &PgPool, config: &AppConfig) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let clock: Arc<dyn Clock> = match config.fixed_now() {
        Some(now) => {
            warn!(%now, "Using a fixed clock for reservation date checks");
            Arc::new(FixedClock::new(now))
        }
        None => {
            if config.reservations.fixed_now.is_some() {
                warn!("RESERVATION_FIXED_NOW is ignored in production");
            }
            Arc::new(SystemClock)
        }
    };

    ServiceContextBuilder::new()
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .menu_item_repo(Arc::new(PgMenuItemRepository::new(pool.clone())))
        .customer_repo(Arc::new(PgCustomerRepository::new(pool.clone())))
        .reservation_repo(Arc::new(PgReservationRepository::new(pool.clone())))
        .newsletter_repo(Arc::new(PgNewsletterRepository::new(pool.clone())))
        .employee_repo(Arc::new(PgEmployeeRepository::new(pool.clone())))
        .jwt_service(jwt_service)
        .clock(clock)
        .booking_policy(config.reservations.booking_policy())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&fausse_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    }

    let service_context = build_service_context(&pool, &config)?;

    if let Some(admin) = &config.bootstrap_admin {
        let created = EmployeeService::new(&service_context)
            .bootstrap_admin(admin)
            .await
            .map_err(AppError::from)?;
        if let Some(employee) = created {
            info!(employee_id = employee.id, username = %employee.username, "Bootstrap admin created");
        }
    }

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    serve(listener, app).await
}

/// Serve on an already bound listener
///
/// The peer address is attached to each request for the rate limiter.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}
