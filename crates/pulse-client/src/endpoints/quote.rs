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

//! Quote and symbol search endpoints

use super::EndpointBase;
use crate::transport::Transport;
use crate::DirectRateLimiter;
use pulse_core::{FuncType, Result};
use pulse_models::quote::{GlobalQuote, SymbolSearch};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Quote and search endpoints used to validate ticker candidates
pub struct QuoteEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl QuoteEndpoints {
  /// Create a new quote endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Get the latest quote for a symbol
  ///
  /// Unknown symbols are not an error: AlphaVantage answers with an empty
  /// quote object, see [`GlobalQuote::is_present`].
  ///
  /// # Arguments
  ///
  /// * `symbol` - The stock symbol (e.g., "GME", "TSLA")
  #[instrument(skip(self))]
  pub async fn global_quote(&self, symbol: &str) -> Result<GlobalQuote> {
    self.wait_for_rate_limit().await?;

    let mut params = HashMap::new();
    params.insert("symbol".to_string(), symbol.to_string());

    self.transport.get(FuncType::GlobalQuote, params).await
  }

  /// Search for symbols matching a keyword
  ///
  /// # Arguments
  ///
  /// * `keywords` - Free text or partial symbol
  #[instrument(skip(self))]
  pub async fn symbol_search(&self, keywords: &str) -> Result<SymbolSearch> {
    self.wait_for_rate_limit().await?;

    let mut params = HashMap::new();
    params.insert("keywords".to_string(), keywords.to_string());

    self.transport.get(FuncType::SymbolSearch, params).await
  }
}

impl EndpointBase for QuoteEndpoints {
  async fn wait_for_rate_limit(&self) -> Result<()> {
    self.rate_limiter.until_ready().await;
    Ok(())
  }

  fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}
