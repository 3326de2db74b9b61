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

//! Reddit OAuth client for reading subreddit listings

use pulse_core::{Error, Listing, RedditConfig, Result};
use pulse_models::reddit::{AccessToken, ListingResponse, OAuthError, Submission};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Largest page Reddit serves for a listing request
const MAX_PAGE_SIZE: u32 = 100;

/// Tokens are refreshed this long before Reddit would expire them
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

struct CachedToken {
  value: String,
  expires_at: Instant,
}

/// Script-app Reddit client using the password grant
///
/// The bearer token is fetched lazily and reused until shortly before it
/// expires; a 401 from the listing API drops it so the next call re-authenticates.
pub struct RedditClient {
  http: Client,
  config: RedditConfig,
  token: Mutex<Option<CachedToken>>,
}

impl RedditClient {
  /// Create a new client; no network traffic happens until the first listing
  pub fn new(config: RedditConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(config.user_agent.clone())
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { http, config, token: Mutex::new(None) })
  }

  /// Fetch up to `limit` submissions from a subreddit listing, paging as needed
  #[instrument(skip(self))]
  pub async fn listing(
    &self,
    subreddit: &str,
    listing: Listing,
    limit: u32,
  ) -> Result<Vec<Submission>> {
    let mut submissions = Vec::with_capacity(limit as usize);
    let mut after: Option<String> = None;

    while (submissions.len() as u32) < limit {
      let page_size = (limit - submissions.len() as u32).min(MAX_PAGE_SIZE);
      let page = self.fetch_page(subreddit, listing, page_size, after.as_deref()).await?;

      let next = page.data.after.clone();
      let before = submissions.len();
      submissions.extend(page.submissions());

      if submissions.len() == before || next.is_none() {
        break;
      }
      after = next;
    }

    submissions.truncate(limit as usize);
    info!("Fetched {} posts from r/{} ({})", submissions.len(), subreddit, listing);
    Ok(submissions)
  }

  async fn fetch_page(
    &self,
    subreddit: &str,
    listing: Listing,
    page_size: u32,
    after: Option<&str>,
  ) -> Result<ListingResponse> {
    let url = self.listing_url(subreddit, listing, page_size, after)?;
    let token = self.access_token().await?;

    debug!("Fetching listing page: {}", url);
    let response = self
      .http
      .get(url)
      .bearer_auth(token)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Listing request failed: {}", e)))?;

    match response.status() {
      status if status.is_success() => response
        .json::<ListingResponse>()
        .await
        .map_err(|e| Error::Parse(format!("Failed to parse listing: {}", e))),
      StatusCode::UNAUTHORIZED => {
        warn!("Reddit rejected the bearer token, dropping it");
        *self.token.lock().await = None;
        Err(Error::Auth("Listing request unauthorized".to_string()))
      }
      StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimit("Reddit rate limit hit".to_string())),
      StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
        Err(Error::Api(format!("Subreddit r/{} is not readable", subreddit)))
      }
      status => Err(Error::Http(format!("HTTP error: {}", status))),
    }
  }

  fn listing_url(
    &self,
    subreddit: &str,
    listing: Listing,
    page_size: u32,
    after: Option<&str>,
  ) -> Result<Url> {
    let base = self.config.api_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{}/r/{}/{}", base, subreddit, listing.path()))
      .map_err(|e| Error::Config(format!("Invalid listing URL: {}", e)))?;

    {
      let mut query = url.query_pairs_mut();
      query.append_pair("limit", &page_size.to_string());
      query.append_pair("raw_json", "1");
      if let Some(window) = listing.time_param() {
        query.append_pair("t", window);
      }
      if let Some(after) = after {
        query.append_pair("after", after);
      }
    }

    Ok(url)
  }

  /// Return the cached bearer token, requesting a new one when missing or stale
  async fn access_token(&self) -> Result<String> {
    let mut guard = self.token.lock().await;

    if let Some(token) = guard.as_ref() {
      if Instant::now() < token.expires_at {
        return Ok(token.value.clone());
      }
      debug!("Reddit token expired, refreshing");
    }

    let token = self.request_token().await?;
    let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
    let value = token.access_token;
    *guard = Some(CachedToken { value: value.clone(), expires_at: Instant::now() + lifetime });

    Ok(value)
  }

  async fn request_token(&self) -> Result<AccessToken> {
    let url = format!("{}/api/v1/access_token", self.config.auth_url.trim_end_matches('/'));
    let form = [
      ("grant_type", "password"),
      ("username", self.config.username.as_str()),
      ("password", self.config.password.as_str()),
    ];

    let response = self
      .http
      .post(&url)
      .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
      .form(&form)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Token request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::Auth(format!("Token request returned {}", status)));
    }

    let text =
      response.text().await.map_err(|e| Error::Http(format!("Failed to read token: {}", e)))?;

    match serde_json::from_str::<AccessToken>(&text) {
      Ok(token) => {
        info!("Obtained Reddit access token (expires in {}s)", token.expires_in);
        Ok(token)
      }
      Err(parse_err) => match serde_json::from_str::<OAuthError>(&text) {
        Ok(oauth) => Err(Error::Auth(oauth.error)),
        Err(_) => Err(Error::Parse(format!("Unexpected token response: {}", parse_err))),
      },
    }
  }
}

impl std::fmt::Debug for RedditClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RedditClient").field("config", &self.config).finish()
  }
}
