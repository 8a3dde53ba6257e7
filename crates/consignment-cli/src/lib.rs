#![doc = include_str!("../README.md")]

use clap::Parser;
use shipping_core::{
    Result,
    proto::consignment::{
        Consignment, GetRequest, shipping_service_client::ShippingServiceClient,
    },
    types::read_json_file,
};
use std::path::{Path, PathBuf};
use tonic::{codec::CompressionEncoding, transport::Endpoint};

/// File read when no path is given.
pub const DEFAULT_FILENAME: &str = "consignment.json";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "consignment-cli",
    version,
    about = "Submit a consignment to the shipping service and list stored consignments"
)]
pub struct CliArgs {
    /// JSON document describing the consignment to create.
    #[arg(default_value = DEFAULT_FILENAME)]
    pub file: PathBuf,

    /// URI of the consignment service.
    ///
    /// Environment variable: `CONSIGNMENT_SERVICE_ADDR`
    #[arg(long, env = "CONSIGNMENT_SERVICE_ADDR", default_value_t = String::from("http://127.0.0.1:50051"))]
    pub server_addr: String,
}

/// What the service reported back.
#[derive(Debug, Clone)]
pub struct Report {
    pub created: bool,
    pub consignment: Option<Consignment>,
    pub consignments: Vec<Consignment>,
}

/// Loads a single consignment from a JSON document.
///
/// # Errors
///
/// - [`shipping_core::Error::Io`] if the file cannot be read.
/// - [`shipping_core::Error::Decode`] if it is not a valid consignment.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Consignment> {
    read_json_file(path)
}

/// Creates the consignment described by `args.file`, then lists every stored
/// consignment. Stops at the first failure.
#[tracing::instrument(skip_all, fields(file = %args.file.display(), addr = %args.server_addr))]
pub async fn run(args: &CliArgs) -> Result<Report> {
    let consignment = parse_file(&args.file)?;

    let channel = Endpoint::from_shared(args.server_addr.clone())?
        .connect()
        .await?;
    let mut client = ShippingServiceClient::new(channel)
        .send_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Zstd);

    let created = client.create_consignment(consignment).await?.into_inner();
    tracing::info!("Created: {}", created.created);

    let listed = client.get_consignments(GetRequest {}).await?.into_inner();
    for consignment in &listed.consignments {
        tracing::info!("{consignment:?}");
    }

    Ok(Report {
        created: created.created,
        consignment: created.consignment,
        consignments: listed.consignments,
    })
}
