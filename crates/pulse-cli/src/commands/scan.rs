/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pulse_core::{MentionRecord, SortKey};
use pulse_scanner::{CsvWriter, sort_records};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::{ScanOverrides, build_pipeline};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ScanArgs {
  #[command(flatten)]
  pub overrides: ScanOverrides,

  /// CSV output path (default: mentions_<subreddit>_<timestamp>.csv)
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Write only symbol and count columns
  #[arg(long)]
  pub no_sentiment: bool,

  /// Rows to print to the terminal
  #[arg(long, default_value = "10")]
  pub top: usize,
}

pub async fn execute(args: ScanArgs, config: Config) -> Result<()> {
  let settings = args.overrides.apply(&config.scan);
  let pipeline = build_pipeline(&config, &settings)?;

  let spinner = ProgressBar::new_spinner();
  spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}")?);
  spinner.set_message(format!("Scanning r/{} ({}, {} posts)", settings.subreddit, settings.listing, settings.post_limit));
  spinner.enable_steady_tick(Duration::from_millis(120));

  let result = pipeline.run().await;
  spinner.finish_and_clear();
  let records = result.with_context(|| format!("Scan of r/{} failed", settings.subreddit))?;

  let records = sort_records(records, SortKey::Mentions, false);
  let path = args.output.unwrap_or_else(|| default_output_path(&settings.subreddit, Utc::now()));

  CsvWriter::new(!args.no_sentiment)
    .write_to_path(&path, &records)
    .with_context(|| format!("Failed to write {}", path.display()))?;

  info!("Scan complete: {} symbols written to {}", records.len(), path.display());
  print_summary(&records, args.top);

  Ok(())
}

/// `mentions_<subreddit>_<YYYYMMDDTHHMMSSZ>.csv` in the working directory
pub fn default_output_path(subreddit: &str, now: DateTime<Utc>) -> PathBuf {
  PathBuf::from(format!("mentions_{}_{}.csv", subreddit, now.format("%Y%m%dT%H%M%SZ")))
}

fn print_summary(records: &[MentionRecord], top: usize) {
  if records.is_empty() {
    println!("No ticker mentions found");
    return;
  }

  println!("\n{:<8} {:>8} {:>10}", "Symbol", "Mentions", "Sentiment");
  for record in records.iter().take(top) {
    println!("{:<8} {:>8} {:>10.4}", record.symbol, record.mentions, record.sentiment);
  }
  if records.len() > top {
    println!("... and {} more", records.len() - top);
  }
}
