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

//! # pulse-core
//!
//! Shared building blocks for the ticker-pulse workspace: environment based
//! configuration, the common error type and the domain types that flow through
//! the scanning pipeline (posts in, per-symbol mention records out).

pub mod config;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, RedditConfig};
pub use error::{Error, Result};
pub use types::{InstrumentInfo, Listing, MentionRecord, Post, PostQuery, SortKey, TimeWindow};

/// The AlphaVantage API functions used for symbol validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncType {
  /// Latest price and volume for one symbol
  GlobalQuote,
  /// Best matching symbols for a keyword
  SymbolSearch,
}

impl std::fmt::Display for FuncType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FuncType::GlobalQuote => write!(f, "GLOBAL_QUOTE"),
      FuncType::SymbolSearch => write!(f, "SYMBOL_SEARCH"),
    }
  }
}

/// Base URL for AlphaVantage API (the `/query` path is appended by the transport)
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co";

/// Free-tier API rate limit
pub const DEFAULT_RATE_LIMIT: u32 = 75; // requests per minute

/// Reddit OAuth token endpoint host
pub const REDDIT_AUTH_URL: &str = "https://www.reddit.com";

/// Reddit authenticated API host
pub const REDDIT_API_URL: &str = "https://oauth.reddit.com";

/// Words that look like tickers but show up in posts as plain English,
/// slang or finance jargon. Candidates in this list are never looked up.
pub const DEFAULT_IGNORED_SYMBOLS: &[&str] = &[
  "A", "I", "AI", "AM", "PM", "DD", "EV", "IT", "OP", "TA", "FD", "RH", "UK", "EU", "US", "USA",
  "USD", "CEO", "CFO", "CTO", "SEC", "FED", "IRS", "GDP", "CPI", "IPO", "ETF", "EPS", "ATH", "ATM",
  "ITM", "OTM", "EOD", "EOW", "IMO", "LOL", "FYI", "WSB", "YOLO", "FOMO", "HODL", "TLDR", "EDIT",
  "LMAO", "MOON", "CASH", "BUY", "SELL", "HOLD", "PUT", "PUTS", "CALL", "THE", "AND", "FOR",
  "ARE", "YOU", "ALL", "NEW", "NOW", "OUT", "WHY", "NOT", "BIG", "API",
];
