//! mistake log server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the HTML interface.
//!
//! Settings are layered: built-in defaults, then the config file, then
//! `MISTAKES_*` environment variables, then command-line flags.
//!
//! ```text
//! cargo run -p mistakes-web -- --port 8080 --db ~/mistakes.db
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use mistakes_store_sqlite::SqliteStore;
use mistakes_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Personal mistake log")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Address to bind.
  #[arg(long)]
  host: Option<String>,

  /// Port to listen on.
  #[arg(short, long)]
  port: Option<u16>,

  /// SQLite database file.
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,

  /// Directory served under `/static/`.
  #[arg(long, value_name = "DIR")]
  static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080_i64)?
    .set_default("store_path", "mistakes.db")?
    .set_default("static_dir", "static")?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("MISTAKES"))
    .set_override_option("host", cli.host)?
    .set_override_option("port", cli.port.map(i64::from))?
    .set_override_option("store_path", cli.db.as_deref().map(path_str))?
    .set_override_option("static_dir", cli.static_dir.as_deref().map(path_str))?
    .build()
    .context("failed to read configuration")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in paths.
  server_cfg.store_path = expand_tilde(&server_cfg.store_path);
  server_cfg.static_dir = expand_tilde(&server_cfg.static_dir);

  // Open SQLite store; the schema must exist before any request is served.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.store_path))?;
  tracing::info!(path = ?server_cfg.store_path, "store ready");

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  // Build application state.
  let state = AppState {
    store:  Arc::new(store),
    config: Arc::new(server_cfg),
  };

  let app = mistakes_web::router(state);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

fn path_str(path: &Path) -> String { path.to_string_lossy().into_owned() }

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
