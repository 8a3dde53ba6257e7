use clap::Parser;
use shipping_core::{signal::shutdown_signal, telemetry::init_telemetry};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use vessel_service::server::{
    config::{CliArgs, ServerConfig},
    repository::VesselRepository,
    serve::serve_with_incoming,
    service::handler::VesselHandler,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    let providers = init_telemetry("vessel-service")?;

    let listener = TcpListener::bind(&config.server_addr).await?;
    log_startup_info(&config);

    let handler = VesselHandler::new(VesselRepository::new(config.fleet));
    let res =
        serve_with_incoming(handler, TcpListenerStream::new(listener), shutdown_signal()).await;

    providers.shutdown();
    res
}

fn log_startup_info(config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Starting vessel service on {} with fleet: {:#?}",
            config.server_addr,
            config.fleet
        );
    } else {
        tracing::info!(
            "Starting vessel service on {} with {} vessels",
            config.server_addr,
            config.fleet.len()
        );
    }
}
