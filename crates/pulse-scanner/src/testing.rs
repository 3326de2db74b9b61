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

//! In-memory fakes for the lookup, source and sentiment seams, with call counters.

use async_trait::async_trait;
use pulse_core::{InstrumentInfo, Post, PostQuery};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{ScanError, ScanResult};
use crate::sentiment::SentimentModel;
use crate::traits::{MarketLookup, PostSource};

/// Market lookup that knows a fixed set of symbols
#[derive(Debug, Default)]
pub struct StaticLookup {
  known: HashSet<String>,
  accept_all: bool,
  failing: HashSet<String>,
  calls: Mutex<HashMap<String, usize>>,
}

impl StaticLookup {
  pub fn new<I, S>(known: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { known: known.into_iter().map(Into::into).collect(), ..Default::default() }
  }

  /// Every symbol is valid
  pub fn accept_all() -> Self {
    Self { accept_all: true, ..Default::default() }
  }

  /// Lookups for these symbols return an error
  pub fn failing_on<I, S>(mut self, symbols: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.failing.extend(symbols.into_iter().map(Into::into));
    self
  }

  /// Total lookups made
  pub fn calls(&self) -> usize {
    self.calls.lock().map(|calls| calls.values().sum()).unwrap_or(0)
  }

  pub fn calls_for(&self, symbol: &str) -> usize {
    self.calls.lock().map(|calls| calls.get(symbol).copied().unwrap_or(0)).unwrap_or(0)
  }
}

#[async_trait]
impl MarketLookup for StaticLookup {
  async fn lookup(&self, symbol: &str) -> ScanResult<Option<InstrumentInfo>> {
    if let Ok(mut calls) = self.calls.lock() {
      *calls.entry(symbol.to_string()).or_default() += 1;
    }

    if self.failing.contains(symbol) {
      return Err(ScanError::Api(format!("lookup failed for {}", symbol)));
    }
    if self.accept_all || self.known.contains(symbol) {
      Ok(Some(InstrumentInfo::new(symbol)))
    } else {
      Ok(None)
    }
  }

  fn source_name(&self) -> &'static str {
    "static"
  }
}

/// Post source returning a fixed batch, or always failing
#[derive(Debug, Default)]
pub struct StaticSource {
  posts: Vec<Post>,
  failure: Option<String>,
  fetches: AtomicUsize,
}

impl StaticSource {
  pub fn new(posts: Vec<Post>) -> Self {
    Self { posts, ..Default::default() }
  }

  pub fn failing(message: impl Into<String>) -> Self {
    Self { failure: Some(message.into()), ..Default::default() }
  }

  pub fn fetches(&self) -> usize {
    self.fetches.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl PostSource for StaticSource {
  async fn fetch_posts(&self, query: &PostQuery) -> ScanResult<Vec<Post>> {
    self.fetches.fetch_add(1, Ordering::SeqCst);
    match &self.failure {
      Some(message) => Err(ScanError::Source(message.clone())),
      None => Ok(self.posts.iter().take(query.limit as usize).cloned().collect()),
    }
  }

  fn source_name(&self) -> &'static str {
    "static"
  }
}

/// Sentiment model with canned scores per exact text; anything else is 0.0
#[derive(Debug, Default)]
pub struct FixedModel {
  scores: HashMap<String, f64>,
}

impl FixedModel {
  pub fn new<'a, I>(scores: I) -> Self
  where
    I: IntoIterator<Item = (&'a str, f64)>,
  {
    Self { scores: scores.into_iter().map(|(text, score)| (text.to_string(), score)).collect() }
  }
}

impl SentimentModel for FixedModel {
  fn polarity(&self, text: &str) -> f64 {
    self.scores.get(text).copied().unwrap_or(0.0)
  }
}
