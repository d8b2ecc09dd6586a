use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::InMemoryUserStore;
use tracing::info;
use users_api::{config::Config, state::AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState {
        config,
        users: InMemoryUserStore::new(),
    };

    let app = users_api::app(&state)?;

    info!(
        read_timeout = ?state.config.server.read_timeout,
        write_timeout = ?state.config.server.write_timeout,
        "Starting {} v{}",
        state.config.app.name,
        state.config.app.version
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("all systems offline");
    Ok(())
}
