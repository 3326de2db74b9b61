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

use anyhow::{Context, Result, anyhow};
use pulse_core::{Config as CoreConfig, Listing, PostQuery, RedditConfig};
use pulse_scanner::{CacheLifetime, LookupMode};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Everything the CLI needs: market client, forum client and scan settings
#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  pub reddit: RedditConfig,
  pub scan: ScanSettings,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let api_config = CoreConfig::from_env().context("Failed to load AlphaVantage configuration")?;
    let reddit = RedditConfig::from_env().context("Failed to load Reddit configuration")?;
    let scan = ScanSettings::from_env()?;

    Ok(Self { api_config, reddit, scan })
  }
}

/// Scan and server settings from `PULSE_*` variables
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
  pub subreddit: String,
  pub listing: Listing,
  pub post_limit: u32,
  pub workers: usize,
  pub cache_window_secs: u64,
  pub cache_lifetime: CacheLifetime,
  pub bind_addr: String,
  pub extra_ignored: Vec<String>,
  pub lookup_mode: LookupMode,
}

impl Default for ScanSettings {
  fn default() -> Self {
    let query = PostQuery::default();
    Self {
      subreddit: query.subreddit,
      listing: query.listing,
      post_limit: query.limit,
      workers: 5,
      cache_window_secs: 300,
      cache_lifetime: CacheLifetime::Process,
      bind_addr: pulse_web::DEFAULT_BIND_ADDR.to_string(),
      extra_ignored: Vec::new(),
      lookup_mode: LookupMode::Quote,
    }
  }
}

impl ScanSettings {
  pub fn from_env() -> Result<Self> {
    let defaults = Self::default();

    let cache_lifetime = match env::var("PULSE_CACHE_LIFETIME") {
      Ok(raw) => parse_cache_lifetime(&raw)?,
      Err(_) => defaults.cache_lifetime,
    };

    let extra_ignored = env::var("PULSE_EXTRA_IGNORED")
      .map(|raw| raw.split(',').map(|w| w.trim().to_string()).filter(|w| !w.is_empty()).collect())
      .unwrap_or_default();

    Ok(Self {
      subreddit: env::var("PULSE_SUBREDDIT").unwrap_or(defaults.subreddit),
      listing: env_or("PULSE_LISTING", defaults.listing)?,
      post_limit: env_or("PULSE_POST_LIMIT", defaults.post_limit)?,
      workers: env_or("PULSE_WORKERS", defaults.workers)?,
      cache_window_secs: env_or("PULSE_CACHE_WINDOW_SECS", defaults.cache_window_secs)?,
      cache_lifetime,
      bind_addr: env::var("PULSE_BIND_ADDR").unwrap_or(defaults.bind_addr),
      extra_ignored,
      lookup_mode: env_or("PULSE_LOOKUP_MODE", defaults.lookup_mode)?,
    })
  }

  pub fn query(&self) -> PostQuery {
    PostQuery::new(self.subreddit.clone(), self.listing, self.post_limit)
  }
}

/// `process` or `per-run`
pub fn parse_cache_lifetime(raw: &str) -> Result<CacheLifetime> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "process" => Ok(CacheLifetime::Process),
    "per-run" | "per_run" | "run" => Ok(CacheLifetime::PerRun),
    other => Err(anyhow!("Invalid PULSE_CACHE_LIFETIME '{}': expected 'process' or 'per-run'", other)),
  }
}

fn env_or<T>(name: &str, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(raw) => raw.trim().parse().map_err(|e| anyhow!("Invalid {} '{}': {}", name, raw, e)),
    Err(_) => Ok(default),
  }
}
