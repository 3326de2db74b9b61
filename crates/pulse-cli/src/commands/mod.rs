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

pub mod scan;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use pulse_client::{AlphaVantageClient, RedditClient};
use pulse_core::Listing;
use pulse_scanner::{
  AlphaVantageLookup, IgnoreList, LookupMode, Pipeline, PipelineConfig, ProcessorConfig, SentimentScorer,
  SymbolCache, SymbolValidator,
};
use std::sync::Arc;

use crate::config::{Config, ScanSettings};

/// Flags shared by `scan` and `serve`; unset flags fall back to `PULSE_*` settings
#[derive(Args, Debug, Default, Clone)]
pub struct ScanOverrides {
  /// Subreddit to scan
  #[arg(short, long)]
  pub subreddit: Option<String>,

  /// Listing: hot, new, top or top:<hour|day|week|month|year|all>
  #[arg(long)]
  pub listing: Option<Listing>,

  /// Number of posts to fetch
  #[arg(short, long)]
  pub limit: Option<u32>,

  /// Posts processed concurrently
  #[arg(short, long)]
  pub workers: Option<usize>,

  /// Symbol validation: quote or search
  #[arg(long)]
  pub lookup_mode: Option<LookupMode>,
}

impl ScanOverrides {
  pub fn apply(&self, settings: &ScanSettings) -> ScanSettings {
    let mut settings = settings.clone();
    if let Some(subreddit) = &self.subreddit {
      settings.subreddit = subreddit.clone();
    }
    if let Some(listing) = self.listing {
      settings.listing = listing;
    }
    if let Some(limit) = self.limit {
      settings.post_limit = limit;
    }
    if let Some(workers) = self.workers {
      settings.workers = workers;
    }
    if let Some(mode) = self.lookup_mode {
      settings.lookup_mode = mode;
    }
    settings
  }
}

/// Wire the Reddit source, AlphaVantage lookup and VADER scorer into a pipeline
pub fn build_pipeline(config: &Config, settings: &ScanSettings) -> Result<Pipeline> {
  let market = AlphaVantageClient::new(config.api_config.clone())
    .context("Failed to create AlphaVantage client")?;
  let lookup = Arc::new(AlphaVantageLookup::new(Arc::new(market)).with_mode(settings.lookup_mode));

  let source = Arc::new(RedditClient::new(config.reddit.clone()).context("Failed to create Reddit client")?);

  let ignore = IgnoreList::default().with_extra(&settings.extra_ignored);
  let validator = Arc::new(SymbolValidator::new(lookup, Arc::new(SymbolCache::new())).with_ignore_list(ignore));

  let pipeline_config = PipelineConfig {
    query: settings.query(),
    processor: ProcessorConfig { max_workers: settings.workers },
    cache_lifetime: settings.cache_lifetime,
  };

  Ok(Pipeline::new(source, validator, SentimentScorer::vader(), pipeline_config))
}
