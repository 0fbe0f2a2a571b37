use log::error;
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    // Bind or serve failures mean the process cannot do its job at all.
    if let Err(e) = web::init_server(config).await {
        error!("Server failed: {e}");
        std::process::exit(1);
    }
}
