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

//! Client-backed implementations of [`MarketLookup`] and [`PostSource`].

use async_trait::async_trait;
use pulse_client::{AlphaVantageClient, RedditClient};
use pulse_core::{InstrumentInfo, Post, PostQuery};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use crate::error::{ScanError, ScanResult};
use crate::traits::{MarketLookup, PostSource};

/// How a symbol is checked against AlphaVantage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
  /// `GLOBAL_QUOTE`: valid when a price is reported
  #[default]
  Quote,
  /// `SYMBOL_SEARCH`: valid when a match has exactly this symbol
  Search,
}

impl fmt::Display for LookupMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LookupMode::Quote => write!(f, "quote"),
      LookupMode::Search => write!(f, "search"),
    }
  }
}

impl FromStr for LookupMode {
  type Err = ScanError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "quote" => Ok(LookupMode::Quote),
      "search" => Ok(LookupMode::Search),
      other => Err(ScanError::Configuration(format!("Unknown lookup mode: {}", other))),
    }
  }
}

/// Market lookup backed by the AlphaVantage client
#[derive(Debug, Clone)]
pub struct AlphaVantageLookup {
  client: Arc<AlphaVantageClient>,
  mode: LookupMode,
}

impl AlphaVantageLookup {
  pub fn new(client: Arc<AlphaVantageClient>) -> Self {
    Self { client, mode: LookupMode::default() }
  }

  pub fn with_mode(mut self, mode: LookupMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn mode(&self) -> LookupMode {
    self.mode
  }

  async fn lookup_quote(&self, symbol: &str) -> ScanResult<Option<InstrumentInfo>> {
    let quote = self.client.quotes().global_quote(symbol).await?;
    if !quote.is_present() {
      return Ok(None);
    }

    let data = quote.global_quote;
    let mut info = InstrumentInfo::new(data.symbol.clone());
    match data.price_as_f64() {
      Ok(price) => info = info.with_price(price),
      Err(e) => debug!(symbol, "Unparseable price '{}': {}", data.price, e),
    }
    if !data.latest_trading_day.is_empty() {
      info.latest_trading_day = Some(data.latest_trading_day);
    }
    Ok(Some(info))
  }

  async fn lookup_search(&self, symbol: &str) -> ScanResult<Option<InstrumentInfo>> {
    let results = self.client.quotes().symbol_search(symbol).await?;
    Ok(results.exact_match(symbol).map(|m| InstrumentInfo::new(m.symbol.clone())))
  }
}

#[async_trait]
impl MarketLookup for AlphaVantageLookup {
  async fn lookup(&self, symbol: &str) -> ScanResult<Option<InstrumentInfo>> {
    match self.mode {
      LookupMode::Quote => self.lookup_quote(symbol).await,
      LookupMode::Search => self.lookup_search(symbol).await,
    }
  }

  fn source_name(&self) -> &'static str {
    "AlphaVantage"
  }
}

#[async_trait]
impl PostSource for RedditClient {
  async fn fetch_posts(&self, query: &PostQuery) -> ScanResult<Vec<Post>> {
    let submissions = self
      .listing(&query.subreddit, query.listing, query.limit)
      .await
      .map_err(|e| ScanError::Source(e.to_string()))?;

    Ok(submissions.into_iter().map(|s| Post::new(s.title, s.selftext)).collect())
  }

  fn source_name(&self) -> &'static str {
    "Reddit"
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pulse_core::{Config, Listing, RedditConfig};
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn lookup_for(server: &MockServer, mode: LookupMode) -> AlphaVantageLookup {
    let config = Config {
      api_key: "test_key".to_string(),
      rate_limit: 600,
      timeout_secs: 5,
      max_retries: 0,
      base_url: server.uri(),
    };
    AlphaVantageLookup::new(Arc::new(AlphaVantageClient::new(config).unwrap())).with_mode(mode)
  }

  #[test]
  fn test_lookup_mode_parsing() {
    assert_eq!("quote".parse::<LookupMode>().unwrap(), LookupMode::Quote);
    assert_eq!("SEARCH".parse::<LookupMode>().unwrap(), LookupMode::Search);
    assert!(matches!("isin".parse::<LookupMode>(), Err(ScanError::Configuration(_))));
    assert_eq!(LookupMode::default().to_string(), "quote");
  }

  #[tokio::test]
  async fn test_quote_lookup_known_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/query"))
      .and(query_param("function", "GLOBAL_QUOTE"))
      .and(query_param("symbol", "GME"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "Global Quote": {"01. symbol": "GME", "05. price": "24.55", "07. latest trading day": "2024-05-17"}
      })))
      .mount(&server)
      .await;

    let info = lookup_for(&server, LookupMode::Quote).lookup("GME").await.unwrap().unwrap();
    assert_eq!(info.symbol, "GME");
    assert_eq!(info.price, Some(24.55));
    assert_eq!(info.latest_trading_day.as_deref(), Some("2024-05-17"));
  }

  #[tokio::test]
  async fn test_quote_lookup_unknown_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/query"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Global Quote": {}})))
      .mount(&server)
      .await;

    assert!(lookup_for(&server, LookupMode::Quote).lookup("YOLO").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_quote_lookup_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/query"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "Error Message": "Invalid API call."
      })))
      .mount(&server)
      .await;

    let result = lookup_for(&server, LookupMode::Quote).lookup("GME").await;
    assert!(matches!(result, Err(ScanError::Api(_))));
  }

  #[tokio::test]
  async fn test_search_lookup_requires_exact_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/query"))
      .and(query_param("function", "SYMBOL_SEARCH"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "bestMatches": [
          {"1. symbol": "GMED", "2. name": "Globus Medical", "3. type": "Equity", "4. region": "United States",
           "5. marketOpen": "09:30", "6. marketClose": "16:00", "7. timezone": "UTC-04", "8. currency": "USD",
           "9. matchScore": "0.8571"}
        ]
      })))
      .mount(&server)
      .await;

    let lookup = lookup_for(&server, LookupMode::Search);
    assert!(lookup.lookup("GME").await.unwrap().is_none());
    assert_eq!(lookup.lookup("GMED").await.unwrap().unwrap().symbol, "GMED");
  }

  #[tokio::test]
  async fn test_reddit_source_maps_submissions_to_posts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/v1/access_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "access_token": "tok", "token_type": "bearer", "expires_in": 3600, "scope": "*"
      })))
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/r/stocks/new"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "kind": "Listing",
        "data": {
          "after": null,
          "children": [
            {"kind": "t3", "data": {"title": "GME earnings", "selftext": "holding $GME", "id": "a1"}},
            {"kind": "t3", "data": {"title": "link post", "id": "a2"}}
          ]
        }
      })))
      .mount(&server)
      .await;

    let client = RedditClient::new(RedditConfig {
      client_id: "id".to_string(),
      client_secret: "secret".to_string(),
      username: "user".to_string(),
      password: "pass".to_string(),
      user_agent: "pulse-test".to_string(),
      auth_url: server.uri(),
      api_url: server.uri(),
      timeout_secs: 5,
    })
    .unwrap();

    let posts = client.fetch_posts(&PostQuery::new("stocks", Listing::New, 10)).await.unwrap();
    assert_eq!(posts, vec![Post::new("GME earnings", "holding $GME"), Post::new("link post", "")]);
  }

  #[tokio::test]
  async fn test_reddit_source_failure_is_source_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/v1/access_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "invalid_grant"})))
      .mount(&server)
      .await;

    let client = RedditClient::new(RedditConfig {
      client_id: "id".to_string(),
      client_secret: "secret".to_string(),
      username: "user".to_string(),
      password: "wrong".to_string(),
      user_agent: "pulse-test".to_string(),
      auth_url: server.uri(),
      api_url: server.uri(),
      timeout_secs: 5,
    })
    .unwrap();

    let result = client.fetch_posts(&PostQuery::default()).await;
    assert!(matches!(result, Err(ScanError::Source(_))));
  }
}
