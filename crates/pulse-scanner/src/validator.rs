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

//! Symbol validation against a market data source, memoized in a shared cache.

use pulse_core::DEFAULT_IGNORED_SYMBOLS;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::traits::MarketLookup;

/// Counters for a [`SymbolCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
  pub hits: u64,
  pub misses: u64,
  /// Market source calls made to fill misses
  pub lookups: u64,
  pub entries: usize,
}

impl CacheStats {
  pub fn hit_rate(&self) -> f64 {
    let total = self.hits + self.misses;
    if total == 0 { 0.0 } else { self.hits as f64 / total as f64 }
  }
}

/// Symbol -> validity map shared by every worker of a run (and across runs
/// when the pipeline keeps it for the process lifetime).
///
/// Entries never expire. The first recorded outcome for a symbol wins, so
/// concurrent lookups of the same symbol still agree on one answer.
#[derive(Debug, Default)]
pub struct SymbolCache {
  entries: RwLock<HashMap<String, bool>>,
  hits: AtomicU64,
  misses: AtomicU64,
  lookups: AtomicU64,
}

impl SymbolCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Cached outcome for `symbol`, if any
  pub async fn get(&self, symbol: &str) -> Option<bool> {
    let found = self.entries.read().await.get(symbol).copied();
    match found {
      Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
      None => self.misses.fetch_add(1, Ordering::Relaxed),
    };
    found
  }

  /// Whether `symbol` has an entry. Does not touch the hit/miss counters.
  pub async fn contains(&self, symbol: &str) -> bool {
    self.entries.read().await.contains_key(symbol)
  }

  /// Record an outcome and return the one that is now stored
  pub async fn insert(&self, symbol: &str, valid: bool) -> bool {
    let mut entries = self.entries.write().await;
    *entries.entry(symbol.to_string()).or_insert(valid)
  }

  fn record_lookup(&self) {
    self.lookups.fetch_add(1, Ordering::Relaxed);
  }

  pub async fn len(&self) -> usize {
    self.entries.read().await.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.entries.read().await.is_empty()
  }

  /// Drop all entries. Counters are kept.
  pub async fn clear(&self) {
    self.entries.write().await.clear();
  }

  pub async fn stats(&self) -> CacheStats {
    CacheStats {
      hits: self.hits.load(Ordering::Relaxed),
      misses: self.misses.load(Ordering::Relaxed),
      lookups: self.lookups.load(Ordering::Relaxed),
      entries: self.len().await,
    }
  }
}

/// Common words that look like tickers and are never looked up
#[derive(Debug, Clone)]
pub struct IgnoreList {
  words: HashSet<String>,
}

impl Default for IgnoreList {
  fn default() -> Self {
    Self { words: DEFAULT_IGNORED_SYMBOLS.iter().map(|w| w.to_string()).collect() }
  }
}

impl IgnoreList {
  /// Empty list, nothing is ignored
  pub fn empty() -> Self {
    Self { words: HashSet::new() }
  }

  /// Extend with extra words; input is trimmed and uppercased
  pub fn with_extra<I, S>(mut self, words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self.words.extend(
      words.into_iter().map(|w| w.as_ref().trim().to_ascii_uppercase()).filter(|w| !w.is_empty()),
    );
    self
  }

  pub fn contains(&self, symbol: &str) -> bool {
    self.words.contains(symbol)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

/// Decides whether a candidate symbol is a real tradable instrument
pub struct SymbolValidator {
  lookup: Arc<dyn MarketLookup>,
  cache: Arc<SymbolCache>,
  ignore: IgnoreList,
}

impl SymbolValidator {
  pub fn new(lookup: Arc<dyn MarketLookup>, cache: Arc<SymbolCache>) -> Self {
    Self { lookup, cache, ignore: IgnoreList::default() }
  }

  pub fn with_ignore_list(mut self, ignore: IgnoreList) -> Self {
    self.ignore = ignore;
    self
  }

  pub fn cache(&self) -> &Arc<SymbolCache> {
    &self.cache
  }

  pub fn ignore_list(&self) -> &IgnoreList {
    &self.ignore
  }

  /// Check `symbol`, consulting the ignore list, then the cache, then the
  /// market source. Ignored words and lookup errors are cached as invalid.
  pub async fn is_valid(&self, symbol: &str) -> bool {
    if self.ignore.contains(symbol) {
      if !self.cache.contains(symbol).await {
        self.cache.insert(symbol, false).await;
      }
      return false;
    }

    if let Some(valid) = self.cache.get(symbol).await {
      return valid;
    }

    self.cache.record_lookup();
    let valid = match self.lookup.lookup(symbol).await {
      Ok(Some(info)) => {
        debug!(symbol, price = ?info.price, "Symbol validated");
        true
      }
      Ok(None) => {
        debug!(symbol, "Symbol not found");
        false
      }
      Err(e) => {
        warn!(symbol, source = self.lookup.source_name(), error = %e, "Symbol lookup failed");
        false
      }
    };

    self.cache.insert(symbol, valid).await
  }
}

impl std::fmt::Debug for SymbolValidator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SymbolValidator")
      .field("lookup", &self.lookup.source_name())
      .field("ignored", &self.ignore.len())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::StaticLookup;

  fn validator(lookup: Arc<StaticLookup>) -> SymbolValidator {
    SymbolValidator::new(lookup, Arc::new(SymbolCache::new()))
  }

  #[tokio::test]
  async fn test_known_symbol_is_valid() {
    let lookup = Arc::new(StaticLookup::new(["GME"]));
    let validator = validator(lookup.clone());

    assert!(validator.is_valid("GME").await);
    assert!(!validator.is_valid("ZZZZ").await);
    assert_eq!(lookup.calls(), 2);
  }

  #[tokio::test]
  async fn test_second_check_is_served_from_cache() {
    let lookup = Arc::new(StaticLookup::new(["GME"]));
    let validator = validator(lookup.clone());

    assert!(validator.is_valid("GME").await);
    assert!(validator.is_valid("GME").await);
    assert!(!validator.is_valid("NOPE").await);
    assert!(!validator.is_valid("NOPE").await);

    assert_eq!(lookup.calls_for("GME"), 1);
    assert_eq!(lookup.calls_for("NOPE"), 1);

    let stats = validator.cache().stats().await;
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.lookups, 2);
    assert_eq!(stats.entries, 2);
  }

  #[tokio::test]
  async fn test_ignored_symbols_never_reach_the_source() {
    let lookup = Arc::new(StaticLookup::accept_all());
    let validator = validator(lookup.clone());

    for word in DEFAULT_IGNORED_SYMBOLS {
      assert!(!validator.is_valid(word).await, "{} should be ignored", word);
    }
    assert_eq!(lookup.calls(), 0);
    assert_eq!(validator.cache().get("USA").await, Some(false));
  }

  #[tokio::test]
  async fn test_repeated_ignored_checks_leave_counters_alone() {
    let lookup = Arc::new(StaticLookup::accept_all());
    let validator = validator(lookup.clone());

    assert!(!validator.is_valid("YOLO").await);
    assert!(!validator.is_valid("YOLO").await);
    assert!(!validator.is_valid("YOLO").await);

    let cache = validator.cache();
    assert!(cache.contains("YOLO").await);
    let stats = cache.stats().await;
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.lookups, 0);
    assert_eq!(lookup.calls(), 0);
  }

  #[tokio::test]
  async fn test_ignore_list_wins_over_cached_outcome() {
    let cache = Arc::new(SymbolCache::new());
    cache.insert("YOLO", true).await;
    let validator = SymbolValidator::new(Arc::new(StaticLookup::accept_all()), cache);

    assert!(!validator.is_valid("YOLO").await);
  }

  #[tokio::test]
  async fn test_lookup_error_counts_as_invalid_and_is_cached() {
    let lookup = Arc::new(StaticLookup::new(["AAPL"]).failing_on(["AAPL"]));
    let validator = validator(lookup.clone());

    assert!(!validator.is_valid("AAPL").await);
    assert!(!validator.is_valid("AAPL").await);
    assert_eq!(lookup.calls_for("AAPL"), 1);
  }

  #[tokio::test]
  async fn test_cache_is_shared_between_validators() {
    let cache = Arc::new(SymbolCache::new());
    let lookup = Arc::new(StaticLookup::new(["TSLA"]));
    let first = SymbolValidator::new(lookup.clone(), cache.clone());
    let second = SymbolValidator::new(lookup.clone(), cache.clone());

    assert!(first.is_valid("TSLA").await);
    assert!(second.is_valid("TSLA").await);
    assert_eq!(lookup.calls(), 1);
  }

  #[tokio::test]
  async fn test_custom_ignore_list() {
    let lookup = Arc::new(StaticLookup::accept_all());
    let validator = validator(lookup.clone())
      .with_ignore_list(IgnoreList::empty().with_extra([" moass ", "", "APE"]));

    assert!(!validator.is_valid("MOASS").await);
    assert!(!validator.is_valid("APE").await);
    assert!(validator.is_valid("USA").await);
    assert_eq!(validator.ignore_list().len(), 2);
  }

  #[tokio::test]
  async fn test_first_outcome_wins() {
    let cache = SymbolCache::new();
    assert!(cache.insert("GME", true).await);
    assert!(cache.insert("GME", false).await);
    assert_eq!(cache.get("GME").await, Some(true));
  }

  #[tokio::test]
  async fn test_clear_keeps_counters() {
    let cache = SymbolCache::new();
    cache.insert("GME", true).await;
    cache.get("GME").await;
    cache.clear().await;

    assert!(cache.get("GME").await.is_none());
    let stats = cache.stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 0);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
  }

  #[test]
  fn test_empty_stats_hit_rate() {
    assert_eq!(CacheStats::default().hit_rate(), 0.0);
  }
}
