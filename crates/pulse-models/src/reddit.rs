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

//! Reddit OAuth and listing models

use serde::{Deserialize, Serialize};

/// Response of `POST /api/v1/access_token`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
  pub access_token: String,
  pub token_type: String,

  /// Lifetime in seconds
  pub expires_in: u64,

  #[serde(default)]
  pub scope: String,
}

/// OAuth error body, returned with a 200 status for bad credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthError {
  pub error: String,
}

/// Envelope of `GET /r/{subreddit}/{listing}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
  pub kind: String,
  pub data: ListingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingData {
  pub children: Vec<Thing>,

  /// Fullname of the last item, used for paging
  #[serde(default)]
  pub after: Option<String>,
}

/// A listing child; `t3` kinds are link submissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thing {
  pub kind: String,
  pub data: Submission,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
  #[serde(default)]
  pub title: String,

  /// Self-post body; empty for link posts
  #[serde(default)]
  pub selftext: String,

  #[serde(default)]
  pub id: String,

  #[serde(default)]
  pub stickied: bool,

  #[serde(default)]
  pub created_utc: f64,
}

impl ListingResponse {
  /// The submissions of the listing, skipping non-link children
  pub fn submissions(self) -> impl Iterator<Item = Submission> {
    self.data.children.into_iter().filter(|thing| thing.kind == "t3").map(|thing| thing.data)
  }
}
