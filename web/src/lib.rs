use log::info;
use service::config::Config;
use service::AppState;
use tokio::net::TcpListener;

pub mod controller;
pub mod middleware;
pub mod router;

/// Bind the configured interface/port and serve the router until the process
/// is terminated. Both bind and serve failures surface to the caller; the
/// binary treats them as fatal.
pub async fn init_server(config: Config) -> std::io::Result<()> {
    let server_url = format!("{}:{}", config.interface, config.port);
    let listener = TcpListener::bind(&server_url).await?;

    info!("Server starting... listening on http://{server_url}");

    let app_state = AppState::new(config);
    axum::serve(listener, router::define_routes(app_state)).await
}
