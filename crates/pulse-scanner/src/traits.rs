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

//! Seams to the outside world: where posts come from and how symbols are checked.

use async_trait::async_trait;
use pulse_core::{InstrumentInfo, Post, PostQuery};

use crate::error::ScanResult;

/// Supplies a finite batch of posts for one run.
///
/// Failures are not recoverable by the scanner and abort the run.
#[async_trait]
pub trait PostSource: Send + Sync {
  /// Fetch the posts selected by `query`.
  async fn fetch_posts(&self, query: &PostQuery) -> ScanResult<Vec<Post>>;

  /// Get the name of this data source.
  fn source_name(&self) -> &'static str;
}

/// Answers whether a symbol is a tradable instrument.
///
/// `Ok(Some(_))` means valid, `Ok(None)` means the source does not know the
/// symbol. Errors are swallowed by the validator and treated as invalid.
#[async_trait]
pub trait MarketLookup: Send + Sync {
  /// Look up one symbol.
  async fn lookup(&self, symbol: &str) -> ScanResult<Option<InstrumentInfo>>;

  /// Get the name of this market data source.
  fn source_name(&self) -> &'static str;
}
