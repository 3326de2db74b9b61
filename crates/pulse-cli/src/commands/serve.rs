use anyhow::{Context, Result};
use clap::Args;
use pulse_scanner::{CacheLifetime, MentionService};
use pulse_web::AppState;
use std::time::Duration;
use tracing::info;

use super::{ScanOverrides, build_pipeline};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ServeArgs {
  #[command(flatten)]
  pub overrides: ScanOverrides,

  /// Listen address (default: PULSE_BIND_ADDR or 127.0.0.1:8080)
  #[arg(short, long)]
  pub bind: Option<String>,

  /// Seconds a computed result set is reused
  #[arg(long)]
  pub cache_window: Option<u64>,

  /// Forget validated symbols between scans
  #[arg(long)]
  pub per_run_cache: bool,
}

pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
  let mut settings = args.overrides.apply(&config.scan);
  if args.per_run_cache {
    settings.cache_lifetime = CacheLifetime::PerRun;
  }
  let window = Duration::from_secs(args.cache_window.unwrap_or(settings.cache_window_secs));
  let bind = args.bind.unwrap_or_else(|| settings.bind_addr.clone());

  let pipeline = build_pipeline(&config, &settings)?;
  let service = MentionService::new(pipeline, window);

  info!(
    subreddit = %settings.subreddit,
    window_secs = window.as_secs(),
    cache = ?settings.cache_lifetime,
    "Starting mention API"
  );

  pulse_web::serve(AppState::new(service), &bind).await.with_context(|| format!("HTTP server on {} failed", bind))
}
