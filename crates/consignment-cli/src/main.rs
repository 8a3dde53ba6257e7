use anyhow::Context;
use clap::Parser;
use consignment_cli::{CliArgs, run};
use shipping_core::telemetry::init_console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_console()?;

    if let Err(e) = run(&args).await.with_context(|| {
        format!(
            "Failed to submit {} to {}",
            args.file.display(),
            args.server_addr
        )
    }) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
    Ok(())
}
