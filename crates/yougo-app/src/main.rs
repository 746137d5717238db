use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use yougo_config::Config;
use yougo_glossary::{EmbeddedSource, FileSource, GlossarySource, HttpSource};

mod controller;
mod events;
mod state;
#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "yougo", version, about = "Terminal glossary browser")]
struct Args {
    /// Glossary JSON file to load
    #[arg(long)]
    data: Option<PathBuf>,

    /// URL serving the glossary JSON
    #[arg(long)]
    url: Option<String>,

    /// JSON config file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Logs go to stderr so stdout stays clean for the frontend
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let source = pick_source(&args, &config);
    let state = Arc::new(AppState::new(config));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(source);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => match result {
            Some(Ok(Ok(()))) => tracing::debug!("task finished"),
            Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
            Some(Err(e)) => tracing::error!("task panicked: {e}"),
            None => {}
        },
    }

    tasks.shutdown().await;
    Ok(())
}

/// Flags win over config; a file source wins over a URL; with neither the
/// embedded dataset is used.
fn pick_source(args: &Args, config: &Config) -> Arc<dyn GlossarySource> {
    if let Some(path) = &args.data {
        return Arc::new(FileSource::new(path.clone()));
    }
    if let Some(url) = &args.url {
        return Arc::new(HttpSource::new(url.clone()));
    }
    if let Some(path) = &config.data.path {
        return Arc::new(FileSource::new(path.clone()));
    }
    if let Some(url) = &config.data.url {
        return Arc::new(HttpSource::new(url.clone()));
    }
    Arc::new(EmbeddedSource)
}
