// bases/now_playing_recorder/src/main.rs
use clap::Parser;
use clock::SystemTimeSource;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use now_playing_source::{NowPlayingCli, NowPlayingSource};
use recorder::Recorder;

mod config;
mod error;
mod recorder;
mod signal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "now_playing_recorder=info".into()),
        )
        .init();

    let args = config::CliArgs::parse();
    let config = config::Config::from_args(args);

    let source = NowPlayingCli::new(config.program.clone());
    let recorder = Recorder::open(
        &config.database,
        source.clone(),
        SystemTimeSource,
        config.poll_interval,
    )
    .wrap_err_with(|| format!("Error opening database {}", config.database.display()))?;
    tracing::info!("Recording to {}", config.database.display());

    // Not fatal, each tick reports the failure again
    match source.check_available().await {
        Ok(()) => tracing::info!("Sampling {}", source.program()),
        Err(err) => tracing::warn!("{}", err),
    }

    recorder.run(signal::shutdown_signal()).await?;

    Ok(())
}
