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

//! One scan run end to end, and the cached service the web layer reads from.

use pulse_core::{MentionRecord, PostQuery, SortKey};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

use crate::aggregator::finalize;
use crate::error::ScanResult;
use crate::processor::{PostProcessor, ProcessorConfig};
use crate::sentiment::SentimentScorer;
use crate::sorter::sort_records;
use crate::traits::PostSource;
use crate::validator::SymbolValidator;
use crate::windowed::WindowedCache;

/// Default lifetime of a computed result set
pub const DEFAULT_RESULT_WINDOW: Duration = Duration::from_secs(300);

/// How long validation outcomes survive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheLifetime {
  /// Shared by every run in the process
  #[default]
  Process,
  /// Cleared at the start of each run
  PerRun,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
  pub query: PostQuery,
  pub processor: ProcessorConfig,
  pub cache_lifetime: CacheLifetime,
}

/// Fetch, process and format one batch of posts
pub struct Pipeline {
  source: Arc<dyn PostSource>,
  validator: Arc<SymbolValidator>,
  processor: PostProcessor,
  config: PipelineConfig,
}

impl Pipeline {
  pub fn new(
    source: Arc<dyn PostSource>,
    validator: Arc<SymbolValidator>,
    scorer: SentimentScorer,
    config: PipelineConfig,
  ) -> Self {
    let processor = PostProcessor::new(validator.clone(), scorer, config.processor.clone());
    Self { source, validator, processor, config }
  }

  pub fn config(&self) -> &PipelineConfig {
    &self.config
  }

  pub fn validator(&self) -> &Arc<SymbolValidator> {
    &self.validator
  }

  /// Run a full scan. Only a failing post source aborts the run.
  #[instrument(skip(self), fields(subreddit = %self.config.query.subreddit, listing = %self.config.query.listing))]
  pub async fn run(&self) -> ScanResult<Vec<MentionRecord>> {
    let started = Instant::now();

    if self.config.cache_lifetime == CacheLifetime::PerRun {
      self.validator.cache().clear().await;
    }

    let posts = self.source.fetch_posts(&self.config.query).await?;
    let post_count = posts.len();
    let aggregates = self.processor.process_batch(posts).await;
    let records = finalize(aggregates);

    let stats = self.validator.cache().stats().await;
    info!(
      posts = post_count,
      symbols = records.len(),
      cache_hits = stats.hits,
      cache_misses = stats.misses,
      lookups = stats.lookups,
      elapsed_ms = started.elapsed().as_millis() as u64,
      "Scan of r/{} complete via {}",
      self.config.query.subreddit,
      self.source.source_name()
    );

    Ok(records)
  }
}

impl std::fmt::Debug for Pipeline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("source", &self.source.source_name())
      .field("validator", &self.validator)
      .field("config", &self.config)
      .finish()
  }
}

/// Serves sorted mention records, rerunning the pipeline at most once per window
#[derive(Debug)]
pub struct MentionService {
  pipeline: Pipeline,
  results: WindowedCache<Vec<MentionRecord>>,
}

impl MentionService {
  pub fn new(pipeline: Pipeline, window: Duration) -> Self {
    Self { pipeline, results: WindowedCache::new(window) }
  }

  pub fn pipeline(&self) -> &Pipeline {
    &self.pipeline
  }

  /// Current records ordered by `key`
  pub async fn mentions(&self, key: SortKey, ascending: bool) -> ScanResult<Vec<MentionRecord>> {
    let records = self.results.get_or_refresh(|| self.pipeline.run()).await?;
    Ok(sort_records(records, key, ascending))
  }

  /// Force the next read to rerun the pipeline
  pub async fn invalidate(&self) {
    self.results.invalidate().await;
  }
}
