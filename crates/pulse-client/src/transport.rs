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

//! HTTP transport layer for AlphaVantage API requests

use pulse_core::{Config, Error, FuncType, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// HTTP transport layer for making requests to the AlphaVantage API
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
  max_retries: u32,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("pulse-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
      max_retries: config.max_retries,
    })
  }

  /// Make a GET request to the AlphaVantage API
  ///
  /// Transport failures and non-success statuses are retried with exponential
  /// backoff; API-level errors embedded in a 200 body are returned immediately.
  #[instrument(skip_all, fields(function = %function))]
  pub async fn get<T>(&self, function: FuncType, params: HashMap<String, String>) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(function, params)?;

    let mut attempt = 0;
    let mut last_error = None;

    while attempt <= self.max_retries {
      if attempt > 0 {
        let delay = Duration::from_millis(2_u64.pow(attempt) * 1000); // Exponential backoff
        warn!("Retrying request in {}ms (attempt {})", delay.as_millis(), attempt + 1);
        tokio::time::sleep(delay).await;
      }

      match self.make_request(&url).await {
        Ok(response) => {
          let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

          debug!("Response body length: {} bytes", text.len());

          self.check_api_error(&text)?;

          return serde_json::from_str::<T>(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            Error::Parse(format!(
              "Failed to parse response: {}. Response: {}",
              e,
              truncate(&text, 200)
            ))
          });
        }
        Err(e) => {
          warn!("Request failed (attempt {}): {}", attempt + 1, e);
          last_error = Some(e);
          attempt += 1;
        }
      }
    }

    Err(last_error.unwrap_or_else(|| Error::Http("Max retries exceeded".to_string())))
  }

  /// Build the full URL for an API request
  fn build_url(&self, function: FuncType, params: HashMap<String, String>) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/query", self.base_url))
      .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

    {
      let mut query_pairs = url.query_pairs_mut();
      query_pairs.append_pair("function", &function.to_string());
      for (key, value) in &params {
        query_pairs.append_pair(key, value);
      }
      query_pairs.append_pair("apikey", &self.api_key);
    }

    Ok(url)
  }

  /// Make the actual HTTP request
  async fn make_request(&self, url: &Url) -> Result<Response> {
    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();

    if status.is_success() {
      debug!("Request successful with status: {}", status);
      Ok(response)
    } else {
      error!("Request failed with status: {}", status);
      Err(Error::Http(format!("HTTP error: {}", status)))
    }
  }

  /// Check for AlphaVantage API error messages in the response
  fn check_api_error(&self, response_text: &str) -> Result<()> {
    if response_text.contains("Error Message") {
      if let Ok(error_response) = serde_json::from_str::<HashMap<String, String>>(response_text) {
        if let Some(error_msg) = error_response.get("Error Message") {
          return Err(Error::Api(error_msg.clone()));
        }
      }
    }

    if response_text.contains("API call frequency")
      || response_text.contains("higher API call frequency")
      || response_text.contains("rate limit")
    {
      return Err(Error::RateLimit("API call frequency limit exceeded".to_string()));
    }

    if response_text.contains("Invalid API key") {
      return Err(Error::ApiKey("Invalid API key or unauthorized request".to_string()));
    }

    Ok(())
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

fn truncate(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mock_transport() -> Transport {
    let mut config = Config::default_with_key("test_key".to_string());
    config.base_url = "https://mock.alphavantage.co/".to_string();
    Transport::new(&config).unwrap()
  }

  #[test]
  fn test_build_url() {
    let transport = mock_transport();
    let mut params = HashMap::new();
    params.insert("symbol".to_string(), "GME".to_string());

    let url = transport.build_url(FuncType::GlobalQuote, params).unwrap().to_string();

    assert!(url.contains("function=GLOBAL_QUOTE"));
    assert!(url.contains("symbol=GME"));
    assert!(url.contains("apikey=test_key"));
    assert!(url.starts_with("https://mock.alphavantage.co/query"));
  }

  #[test]
  fn test_check_api_error_rate_limit() {
    let transport = mock_transport();
    let response = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute and 500 calls per day."}"#;

    assert!(matches!(transport.check_api_error(response), Err(Error::RateLimit(_))));
  }

  #[test]
  fn test_check_api_error_message() {
    let transport = mock_transport();
    let response = r#"{"Error Message": "Invalid API call. Please retry or visit the documentation"}"#;

    assert!(matches!(transport.check_api_error(response), Err(Error::Api(_))));
  }

  #[test]
  fn test_check_api_error_success() {
    let transport = mock_transport();
    let response = r#"{"Global Quote": {}}"#;

    assert!(transport.check_api_error(response).is_ok());
  }

  #[test]
  fn test_truncate_respects_char_boundaries() {
    assert_eq!(truncate("héllo", 2), "hé");
    assert_eq!(truncate("abc", 10), "abc");
  }
}
