//! # Restaurant API
//!
//! Serves the dishes menu and customer orders over HTTP/JSON.
//!
//! ## Components
//!
//! - **[actor_framework]**: generic [`ResourceActor`](actor_framework::ResourceActor) and the
//!   [`ActorEntity`](actor_framework::ActorEntity) trait.
//! - **[model](restaurant::model)**: `Dish` and `Order` records and their raw drafts.
//! - **[clients](restaurant::clients)**: typed wrappers (`DishClient`, `OrderClient`) around the actor channels.
//! - **[lifecycle](restaurant::lifecycle)**: starts and stops the actors.
//! - **[http](restaurant::http)**: axum routes and handlers.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info RESTAURANT_ADDR=0.0.0.0:5000 cargo run -p restaurant
//! ```
//!
//! Stop with Ctrl-C; in-flight requests finish before the actors are shut down.

use actor_framework::tracing::setup_tracing;
use restaurant::config::Config;
use restaurant::http::{router, AppState};
use restaurant::lifecycle::RestaurantSystem;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env()?;
    let system = RestaurantSystem::new(&config);
    let app = router(AppState::new(&system));

    let listener = TcpListener::bind(config.addr).await?;
    info!(address = %config.addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, draining requests"),
        Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C, shutting down"),
    }
}
