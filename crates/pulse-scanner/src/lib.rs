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

//! Ticker mention scanning for forum posts.
//!
//! Posts come from a [`PostSource`], candidate symbols are pulled out by the
//! [`SymbolExtractor`], checked by the [`SymbolValidator`] against a
//! [`MarketLookup`], scored by the [`SentimentScorer`] and folded into
//! per-symbol [`MentionRecord`](pulse_core::MentionRecord)s.

pub mod adapters;
pub mod aggregator;
pub mod csv_writer;
pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod processor;
pub mod sentiment;
pub mod sorter;
pub mod traits;
pub mod validator;
pub mod windowed;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use adapters::{AlphaVantageLookup, LookupMode};
pub use aggregator::{Aggregator, PostResult, SymbolAggregate, finalize};
pub use csv_writer::CsvWriter;
pub use error::{ScanError, ScanResult};
pub use extractor::SymbolExtractor;
pub use pipeline::{CacheLifetime, DEFAULT_RESULT_WINDOW, MentionService, Pipeline, PipelineConfig};
pub use processor::{PostProcessor, ProcessorConfig};
pub use sentiment::{SentimentModel, SentimentScorer, VaderModel};
pub use sorter::sort_records;
pub use traits::{MarketLookup, PostSource};
pub use validator::{CacheStats, IgnoreList, SymbolCache, SymbolValidator};
pub use windowed::WindowedCache;

pub mod prelude {
  pub use crate::error::{ScanError, ScanResult};
  pub use crate::pipeline::{MentionService, Pipeline, PipelineConfig};
  pub use crate::traits::{MarketLookup, PostSource};
  pub use pulse_core::{MentionRecord, Post, PostQuery, SortKey};
}
