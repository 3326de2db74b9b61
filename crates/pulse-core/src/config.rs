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

//! Configuration management for the market-data and forum clients

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Configuration for the AlphaVantage market lookup client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// AlphaVantage API key
  pub api_key: String,

  /// API rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed requests
  pub max_retries: u32,

  /// Base URL for AlphaVantage API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("ALPHA_VANTAGE_API_KEY")
      .map_err(|_| Error::ApiKey("ALPHA_VANTAGE_API_KEY not set".to_string()))?;

    let rate_limit = env::var("AV_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AV_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("AV_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AV_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("AV_MAX_RETRIES")
      .unwrap_or_else(|_| "3".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AV_MAX_RETRIES".to_string()))?;

    let base_url =
      env::var("AV_BASE_URL").unwrap_or_else(|_| crate::ALPHA_VANTAGE_BASE_URL.to_string());
    validate_url("AV_BASE_URL", &base_url)?;

    Ok(Config { api_key, rate_limit, timeout_secs, max_retries, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      max_retries: 3,
      base_url: crate::ALPHA_VANTAGE_BASE_URL.to_string(),
    }
  }
}

/// Credentials and endpoints for the Reddit script-app OAuth flow
#[derive(Clone, Deserialize, Serialize)]
pub struct RedditConfig {
  pub client_id: String,
  pub client_secret: String,
  pub username: String,
  pub password: String,
  pub user_agent: String,

  /// Host serving `/api/v1/access_token`
  pub auth_url: String,

  /// Host serving authenticated listings
  pub api_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl RedditConfig {
  /// Load Reddit credentials from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let required = |name: &str| {
      env::var(name).map_err(|_| Error::Config(format!("{} environment variable not set", name)))
    };

    let auth_url =
      env::var("REDDIT_AUTH_URL").unwrap_or_else(|_| crate::REDDIT_AUTH_URL.to_string());
    validate_url("REDDIT_AUTH_URL", &auth_url)?;

    let api_url = env::var("REDDIT_API_URL").unwrap_or_else(|_| crate::REDDIT_API_URL.to_string());
    validate_url("REDDIT_API_URL", &api_url)?;

    let timeout_secs = env::var("REDDIT_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid REDDIT_TIMEOUT_SECS".to_string()))?;

    Ok(RedditConfig {
      client_id: required("REDDIT_CLIENT_ID")?,
      client_secret: required("REDDIT_CLIENT_SECRET")?,
      username: required("REDDIT_USERNAME")?,
      password: required("REDDIT_PASSWORD")?,
      user_agent: env::var("REDDIT_USER_AGENT")
        .unwrap_or_else(|_| format!("ticker-pulse/{}", env!("CARGO_PKG_VERSION"))),
      auth_url,
      api_url,
      timeout_secs,
    })
  }
}

// Keeps secrets out of logs
impl std::fmt::Debug for RedditConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RedditConfig")
      .field("client_id", &self.client_id)
      .field("client_secret", &"***")
      .field("username", &self.username)
      .field("password", &"***")
      .field("user_agent", &self.user_agent)
      .field("auth_url", &self.auth_url)
      .field("api_url", &self.api_url)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

fn validate_url(name: &str, value: &str) -> Result<()> {
  Url::parse(value).map_err(|e| Error::Config(format!("Invalid {}: {}", name, e)))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn set_reddit_env() {
    env::set_var("REDDIT_CLIENT_ID", "id");
    env::set_var("REDDIT_CLIENT_SECRET", "secret");
    env::set_var("REDDIT_USERNAME", "user");
    env::set_var("REDDIT_PASSWORD", "hunter2");
  }

  #[test]
  #[serial]
  fn test_config_from_env() {
    env::set_var("ALPHA_VANTAGE_API_KEY", "test_key");
    env::remove_var("AV_RATE_LIMIT");
    env::remove_var("AV_BASE_URL");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.rate_limit, 75);
    assert_eq!(config.base_url, crate::ALPHA_VANTAGE_BASE_URL);
  }

  #[test]
  #[serial]
  fn test_config_rejects_bad_rate_limit() {
    env::set_var("ALPHA_VANTAGE_API_KEY", "test_key");
    env::set_var("AV_RATE_LIMIT", "lots");
    let result = Config::from_env();
    env::remove_var("AV_RATE_LIMIT");
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  #[serial]
  fn test_config_rejects_bad_base_url() {
    env::set_var("ALPHA_VANTAGE_API_KEY", "test_key");
    env::set_var("AV_BASE_URL", "not a url");
    let result = Config::from_env();
    env::remove_var("AV_BASE_URL");
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  #[serial]
  fn test_reddit_config_from_env() {
    set_reddit_env();
    env::remove_var("REDDIT_USER_AGENT");
    let config = RedditConfig::from_env().unwrap();
    assert_eq!(config.client_id, "id");
    assert_eq!(config.api_url, crate::REDDIT_API_URL);
    assert!(config.user_agent.starts_with("ticker-pulse/"));
  }

  #[test]
  #[serial]
  fn test_reddit_config_missing_credentials() {
    set_reddit_env();
    env::remove_var("REDDIT_PASSWORD");
    let result = RedditConfig::from_env();
    assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("REDDIT_PASSWORD")));
  }

  #[test]
  fn test_reddit_config_debug_hides_secrets() {
    let config = RedditConfig {
      client_id: "id".to_string(),
      client_secret: "topsecret".to_string(),
      username: "user".to_string(),
      password: "hunter2".to_string(),
      user_agent: "ua".to_string(),
      auth_url: crate::REDDIT_AUTH_URL.to_string(),
      api_url: crate::REDDIT_API_URL.to_string(),
      timeout_secs: 30,
    };
    let debug_str = format!("{:?}", config);
    assert!(!debug_str.contains("topsecret"));
    assert!(!debug_str.contains("hunter2"));
  }
}
