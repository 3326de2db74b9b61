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

//! Concurrent per-post processing with a bounded number of posts in flight.

use futures::stream::{self, StreamExt};
use pulse_core::Post;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, info};

use crate::aggregator::{Aggregator, PostResult, SymbolAggregate};
use crate::extractor::SymbolExtractor;
use crate::sentiment::SentimentScorer;
use crate::validator::SymbolValidator;

#[derive(Debug, Clone)]
pub struct ProcessorConfig {
  /// Posts processed concurrently
  pub max_workers: usize,
}

impl Default for ProcessorConfig {
  fn default() -> Self {
    Self { max_workers: 5 }
  }
}

/// Extracts, validates and scores posts, then folds the results.
///
/// Workers only produce [`PostResult`]s; merging happens on the calling task
/// as results arrive, so the aggregate never needs a lock.
#[derive(Debug)]
pub struct PostProcessor {
  extractor: SymbolExtractor,
  validator: Arc<SymbolValidator>,
  scorer: SentimentScorer,
  config: ProcessorConfig,
}

impl PostProcessor {
  pub fn new(validator: Arc<SymbolValidator>, scorer: SentimentScorer, config: ProcessorConfig) -> Self {
    Self { extractor: SymbolExtractor::default(), validator, scorer, config }
  }

  pub fn with_extractor(mut self, extractor: SymbolExtractor) -> Self {
    self.extractor = extractor;
    self
  }

  pub fn config(&self) -> &ProcessorConfig {
    &self.config
  }

  /// Validated symbols of one post and its sentiment score
  pub async fn process_post(&self, post: &Post) -> PostResult {
    let mut candidates: Vec<String> = self.extractor.extract(&post.full_text()).into_iter().collect();
    candidates.sort();

    let mut symbols = BTreeSet::new();
    for candidate in candidates {
      if self.validator.is_valid(&candidate).await {
        symbols.insert(candidate);
      }
    }

    let sentiment = self.scorer.score(&post.title, &post.body);
    PostResult { symbols, sentiment }
  }

  /// Process every post with at most `max_workers` in flight and merge the
  /// results into per-symbol aggregates. A post's failures never abort the batch.
  pub async fn process_batch(&self, posts: Vec<Post>) -> HashMap<String, SymbolAggregate> {
    let total = posts.len();
    let concurrency = self.config.max_workers.max(1);
    info!("Processing {} posts with {} workers", total, concurrency);

    let mut results = stream::iter(posts)
      .map(|post| async move { self.process_post(&post).await })
      .buffer_unordered(concurrency);

    let mut aggregator = Aggregator::new();
    while let Some(result) = results.next().await {
      if !result.symbols.is_empty() {
        debug!(symbols = ?result.symbols, sentiment = result.sentiment, "Post processed");
      }
      aggregator.record(result);
    }

    let aggregates = aggregator.into_inner();
    info!("Processed {} posts, {} symbols mentioned", total, aggregates.len());
    aggregates
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{FixedModel, StaticLookup};
  use crate::validator::SymbolCache;
  use pulse_core::test_utils::assert_sentiment_eq;

  fn processor(lookup: Arc<StaticLookup>, scores: &[(&str, f64)], workers: usize) -> PostProcessor {
    let validator = Arc::new(SymbolValidator::new(lookup, Arc::new(SymbolCache::new())));
    let scorer = SentimentScorer::new(Arc::new(FixedModel::new(scores.iter().copied())));
    PostProcessor::new(validator, scorer, ProcessorConfig { max_workers: workers })
  }

  #[test]
  fn test_default_workers() {
    assert_eq!(ProcessorConfig::default().max_workers, 5);
  }

  #[tokio::test]
  async fn test_process_post_dedupes_and_validates() {
    let lookup = Arc::new(StaticLookup::new(["GME", "AMC"]));
    let processor = processor(lookup.clone(), &[("GME GME $GME AMC FAKE", 0.5)], 5);

    let result = processor.process_post(&Post::new("GME GME $GME AMC FAKE", "")).await;

    assert_eq!(result.symbols.into_iter().collect::<Vec<_>>(), vec!["AMC", "GME"]);
    assert_sentiment_eq(result.sentiment, 0.3);
    assert_eq!(lookup.calls_for("GME"), 1);
  }

  #[tokio::test]
  async fn test_process_post_uses_body_for_symbols() {
    let lookup = Arc::new(StaticLookup::new(["NVDA"]));
    let processor = processor(lookup, &[], 5);

    let result = processor.process_post(&Post::new("chips", "long NVDA")).await;
    assert!(result.symbols.contains("NVDA"));
    assert_eq!(result.sentiment, 0.0);
  }

  #[tokio::test]
  async fn test_process_batch() {
    let lookup = Arc::new(StaticLookup::new(["GME", "TSLA"]));
    let processor = processor(lookup.clone(), &[("GME up", 1.0), ("GME and TSLA", -0.5)], 2);

    let posts = vec![
      Post::new("GME up", ""),
      Post::new("GME and TSLA", ""),
      Post::new("nothing here", ""),
      Post::new("USA USA", ""),
    ];
    let aggregates = processor.process_batch(posts).await;

    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates["GME"].mentions, 2);
    assert_sentiment_eq(aggregates["GME"].average_sentiment(), (0.6 + -0.3) / 2.0);
    assert_eq!(aggregates["TSLA"].mentions, 1);
    assert_sentiment_eq(aggregates["TSLA"].average_sentiment(), -0.3);
    assert_eq!(lookup.calls_for("USA"), 0);
  }

  #[tokio::test]
  async fn test_process_batch_empty() {
    let processor = processor(Arc::new(StaticLookup::accept_all()), &[], 5);
    assert!(processor.process_batch(Vec::new()).await.is_empty());
  }

  #[tokio::test]
  async fn test_results_do_not_depend_on_worker_count() {
    let posts: Vec<Post> = (0..40)
      .map(|i| match i % 4 {
        0 => Post::new("GME", "AMC"),
        1 => Post::new("$TSLA calls", ""),
        2 => Post::new("AMC", "FAKE"),
        _ => Post::new("nothing", "at all"),
      })
      .collect();

    let mut outcomes = Vec::new();
    for workers in [1, 3, 16] {
      let lookup = Arc::new(StaticLookup::new(["GME", "AMC", "TSLA"]));
      let processor = processor(lookup, &[("GME", 0.5), ("$TSLA calls", -0.25)], workers);
      let mut counts: Vec<(String, u32)> = processor
        .process_batch(posts.clone())
        .await
        .into_iter()
        .map(|(symbol, agg)| (symbol, agg.mentions))
        .collect();
      counts.sort();
      outcomes.push(counts);
    }

    assert_eq!(outcomes[0], vec![("AMC".to_string(), 20), ("GME".to_string(), 10), ("TSLA".to_string(), 10)]);
    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[1], outcomes[2]);
  }

  #[tokio::test]
  async fn test_lookup_failure_does_not_abort_batch() {
    let lookup = Arc::new(StaticLookup::new(["GME", "AMC"]).failing_on(["AMC"]));
    let processor = processor(lookup, &[], 4);

    let aggregates = processor.process_batch(vec![Post::new("GME AMC", ""), Post::new("GME", "")]).await;
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates["GME"].mentions, 2);
  }

  #[tokio::test]
  async fn test_zero_workers_still_progresses() {
    let processor = processor(Arc::new(StaticLookup::new(["GME"])), &[], 0);
    let aggregates = processor.process_batch(vec![Post::new("GME", "")]).await;
    assert_eq!(aggregates["GME"].mentions, 1);
  }
}
