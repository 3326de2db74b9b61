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

//! Per-symbol mention counts and sentiment averages.

use pulse_core::MentionRecord;
use std::collections::{BTreeSet, HashMap};

/// What one post contributes to the aggregate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostResult {
  /// Validated symbols, each at most once
  pub symbols: BTreeSet<String>,
  pub sentiment: f64,
}

/// Running totals for one symbol
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolAggregate {
  pub mentions: u32,
  pub sentiments: Vec<f64>,
}

impl SymbolAggregate {
  /// Arithmetic mean of the recorded scores, 0.0 when there are none
  pub fn average_sentiment(&self) -> f64 {
    if self.sentiments.is_empty() {
      return 0.0;
    }
    self.sentiments.iter().sum::<f64>() / self.sentiments.len() as f64
  }
}

/// Merges post results into per-symbol aggregates. Single owner, no locking.
#[derive(Debug, Default)]
pub struct Aggregator {
  symbols: HashMap<String, SymbolAggregate>,
  posts: usize,
}

impl Aggregator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, result: PostResult) {
    self.posts += 1;
    for symbol in result.symbols {
      let entry = self.symbols.entry(symbol).or_default();
      entry.mentions += 1;
      entry.sentiments.push(result.sentiment);
    }
  }

  /// Number of post results recorded, including ones without symbols
  pub fn posts_recorded(&self) -> usize {
    self.posts
  }

  pub fn into_inner(self) -> HashMap<String, SymbolAggregate> {
    self.symbols
  }
}

/// Turn aggregates into output records. Order is unspecified.
pub fn finalize(aggregates: HashMap<String, SymbolAggregate>) -> Vec<MentionRecord> {
  aggregates
    .into_iter()
    .map(|(symbol, agg)| {
      let sentiment = agg.average_sentiment();
      MentionRecord::new(symbol, agg.mentions, sentiment)
    })
    .collect()
}
