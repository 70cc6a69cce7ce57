use aerial_damage_api::config::Config;
use aerial_damage_api::routes::API_TITLE;
use aerial_damage_api::server::Server;
use aerial_damage_api::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    telemetry::init(config.log_format)?;

    tracing::info!(title = API_TITLE, "Starting...");
    tracing::info!(
        host = %config.api_host,
        port = config.api_port,
        log_format = ?config.log_format,
        "Configuration loaded"
    );

    let server = Server::bind(config).await?;
    server.serve().await?;

    Ok(())
}
