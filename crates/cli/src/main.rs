use anyhow::Result;
use clap::Parser;
use o2ox_cli::Cli;
use tracing::warn;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        // Aborts are notifications for the user, not failures of the tool
        let reason = err
            .downcast_ref::<o2ox_core::Error>()
            .and_then(|e| e.abort_reason());
        if let Some(reason) = reason {
            warn!(?reason, "generation aborted");
            eprintln!("⚠️  O2OX: {reason}");
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}
