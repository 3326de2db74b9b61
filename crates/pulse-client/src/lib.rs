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

//! # pulse-client
//!
//! HTTP clients for the two remote services behind the ticker-pulse pipeline.
//!
//! ## Features
//!
//! - **AlphaVantage**: rate-limited `GLOBAL_QUOTE` and `SYMBOL_SEARCH` calls used
//!   to decide whether a candidate token is a traded symbol
//! - **Reddit**: script-app OAuth (password grant) with token reuse, and paged
//!   subreddit listings
//! - **Retries**: transient transport failures are retried with exponential backoff
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pulse_client::{AlphaVantageClient, RedditClient};
//! use pulse_core::{Config, Listing, RedditConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let market = AlphaVantageClient::new(Config::from_env()?)?;
//!     let quote = market.quotes().global_quote("GME").await?;
//!     println!("GME traded: {}", quote.is_present());
//!
//!     let reddit = RedditClient::new(RedditConfig::from_env()?)?;
//!     let posts = reddit.listing("wallstreetbets", Listing::Hot, 25).await?;
//!     println!("fetched {} posts", posts.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, pulse_core::Error>`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod reddit;
pub mod transport;

pub use client::AlphaVantageClient;
pub use endpoints::quote::QuoteEndpoints;
pub use pulse_core::{Config, Error, RedditConfig, Result};
pub use reddit::RedditClient;

/// Rate limiter shared by every AlphaVantage endpoint group
pub type DirectRateLimiter = governor::RateLimiter<
  governor::state::NotKeyed,
  governor::state::InMemoryState,
  governor::clock::DefaultClock,
  governor::middleware::NoOpMiddleware,
>;
