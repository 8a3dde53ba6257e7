use anyhow::bail;
use clap::Parser;
use core::time::Duration;

/// Runtime configuration for the `consignment-service` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file is honored).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "consignment-service",
    version,
    about = "A gRPC shipping service that assigns vessels to consignments"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:50051"))]
    pub server_addr: String,

    /// URI of the vessel service.
    ///
    /// `https://` URIs require the `tls` feature.
    ///
    /// The connection is established on the first lookup, so the vessel
    /// service does not need to be up when this service starts.
    ///
    /// Environment variable: `VESSEL_SERVICE_ADDR`
    #[arg(long, env = "VESSEL_SERVICE_ADDR", default_value_t = String::from("http://127.0.0.1:50052"))]
    pub vessel_service_addr: String,

    /// Timeout for establishing the connection to the vessel service, in
    /// milliseconds. Individual lookups carry no deadline.
    ///
    /// Environment variable: `CONNECT_TIMEOUT_MS`
    #[arg(long, env = "CONNECT_TIMEOUT_MS", default_value_t = 5000)]
    pub connect_timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub vessel_service_addr: String,
    pub connect_timeout: Duration,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.connect_timeout_ms == 0 {
            bail!("CONNECT_TIMEOUT_MS must be greater than 0");
        }

        if !(args.vessel_service_addr.starts_with("http://")
            || args.vessel_service_addr.starts_with("https://"))
        {
            bail!(
                "VESSEL_SERVICE_ADDR ({}) must be an http:// or https:// URI",
                args.vessel_service_addr
            );
        }

        if args.vessel_service_addr.starts_with("https://") && !cfg!(feature = "tls") {
            bail!(
                "VESSEL_SERVICE_ADDR ({}) uses https:// but the `tls` feature is not enabled",
                args.vessel_service_addr
            );
        }

        Ok(Self {
            server_addr: args.server_addr,
            vessel_service_addr: args.vessel_service_addr,
            connect_timeout: Duration::from_millis(args.connect_timeout_ms),
        })
    }
}
