//! Coffee Focus - A state-managed HTTP server for focus session countdowns
//!
//! This is the main entry point for the coffee-focus application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use coffee_focus::{
    config::Config,
    state::AppState,
    api::create_router,
    services::check_player_available,
    tasks::countdown_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("coffee_focus={},tower_http=info", config.log_level()))
        .init();

    info!("Starting coffee-focus server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, minutes={}",
          config.host, config.port, config.minutes);

    // Create application state; this performs the initial reset so the
    // clock and the cup start in their ready positions
    let state = Arc::new(AppState::new(&config));

    // The completion sound is best effort; a missing player only means a
    // silent finish
    if let Err(e) = check_player_available(&state.alarm).await {
        tracing::warn!("{}", e);
    }

    // Start the countdown background task
    let timer_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(timer_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start      - Start, pause or resume the session");
    info!("  POST /reset      - Reset the session from the minutes field");
    info!("  PUT  /minutes    - Update the minutes field");
    info!("  PUT  /focus-goal - Update the focus goal");
    info!("  GET  /status     - Clock, status line and coffee level");
    info!("  GET  /health     - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
