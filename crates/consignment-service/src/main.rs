use clap::Parser;
use consignment_service::server::{
    config::{CliArgs, ServerConfig},
    repository::ConsignmentRepository,
    serve::serve_with_incoming,
    service::handler::ShippingHandler,
    vessel::VesselClient,
};
use shipping_core::{signal::shutdown_signal, telemetry::init_telemetry};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    let providers = init_telemetry("consignment-service")?;

    let vessels = VesselClient::connect_lazy(&config.vessel_service_addr, config.connect_timeout)?;
    let handler = ShippingHandler::new(ConsignmentRepository::new(), vessels);

    let listener = TcpListener::bind(&config.server_addr).await?;
    log_startup_info(&config);

    let res =
        serve_with_incoming(handler, TcpListenerStream::new(listener), shutdown_signal()).await;

    providers.shutdown();
    res
}

fn log_startup_info(config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Starting consignment service on {} with full config: {:#?}",
            config.server_addr,
            config
        );
    } else {
        tracing::info!(
            "Starting consignment service on {} using vessel service at {}",
            config.server_addr,
            config.vessel_service_addr
        );
    }
}
