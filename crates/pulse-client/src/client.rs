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

//! AlphaVantage client entry point

use crate::endpoints::quote::QuoteEndpoints;
use crate::transport::Transport;
use crate::DirectRateLimiter;
use governor::{Quota, RateLimiter};
use pulse_core::{Config, Result};
use std::num::NonZeroU32;
use std::sync::Arc;

/// AlphaVantage API client used for symbol validation
///
/// Owns the HTTP transport and a rate limiter shared by every endpoint group,
/// so concurrent lookups from the scanner's worker pool stay within quota.
///
/// # Examples
///
/// ```rust,no_run
/// use pulse_client::AlphaVantageClient;
/// use pulse_core::Config;
///
/// # async fn run() -> pulse_core::Result<()> {
/// let client = AlphaVantageClient::new(Config::from_env()?)?;
/// let quote = client.quotes().global_quote("AMC").await?;
/// println!("AMC price: {}", quote.global_quote.price);
/// # Ok(())
/// # }
/// ```
pub struct AlphaVantageClient {
  rate_limiter: Arc<DirectRateLimiter>,
  transport: Arc<Transport>,
}

impl AlphaVantageClient {
  /// Create a new AlphaVantage API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(config.rate_limit)
      .or_else(|| NonZeroU32::new(pulse_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_minute(rate_limit_value)));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter })
  }

  /// Get access to quote and symbol search endpoints
  pub fn quotes(&self) -> QuoteEndpoints {
    QuoteEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }
}

impl std::fmt::Debug for AlphaVantageClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AlphaVantageClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::EndpointBase;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    let client = AlphaVantageClient::new(config).expect("Failed to create client");
    assert_eq!(client.quotes().transport().base_url(), pulse_core::ALPHA_VANTAGE_BASE_URL);
  }

  #[test]
  fn test_zero_rate_limit_falls_back_to_default() {
    let mut config = Config::default_with_key("test_key".to_string());
    config.rate_limit = 0;
    assert!(AlphaVantageClient::new(config).is_ok());
  }

  #[test]
  fn test_debug_hides_rate_limiter_internals() {
    let client = AlphaVantageClient::new(Config::default_with_key("k".to_string())).unwrap();
    let debug_str = format!("{:?}", client);
    assert!(debug_str.contains("AlphaVantageClient"));
    assert!(debug_str.contains("RateLimiter"));
  }
}
