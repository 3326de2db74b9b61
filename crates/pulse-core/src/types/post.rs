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

//! Forum posts and the selection policy used to fetch them

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single forum post as handed to the scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  pub title: String,
  pub body: String,
}

impl Post {
  pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self { title: title.into(), body: body.into() }
  }

  /// Title and body joined for symbol extraction
  pub fn full_text(&self) -> String {
    format!("{}\n{}", self.title, self.body)
  }
}

/// Time range for `top` listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
  Hour,
  Day,
  Week,
  Month,
  Year,
  All,
}

impl TimeWindow {
  pub fn as_str(&self) -> &'static str {
    match self {
      TimeWindow::Hour => "hour",
      TimeWindow::Day => "day",
      TimeWindow::Week => "week",
      TimeWindow::Month => "month",
      TimeWindow::Year => "year",
      TimeWindow::All => "all",
    }
  }
}

impl FromStr for TimeWindow {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "hour" => Ok(TimeWindow::Hour),
      "day" => Ok(TimeWindow::Day),
      "week" => Ok(TimeWindow::Week),
      "month" => Ok(TimeWindow::Month),
      "year" => Ok(TimeWindow::Year),
      "all" => Ok(TimeWindow::All),
      other => Err(Error::Config(format!("Unknown time window: {}", other))),
    }
  }
}

/// Which listing of a subreddit to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Listing {
  #[default]
  Hot,
  New,
  Top(TimeWindow),
}

impl Listing {
  /// Path segment of the listing endpoint
  pub fn path(&self) -> &'static str {
    match self {
      Listing::Hot => "hot",
      Listing::New => "new",
      Listing::Top(_) => "top",
    }
  }

  /// Value of the `t` query parameter, only meaningful for `top`
  pub fn time_param(&self) -> Option<&'static str> {
    match self {
      Listing::Top(window) => Some(window.as_str()),
      _ => None,
    }
  }
}

impl fmt::Display for Listing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Listing::Top(window) => write!(f, "top:{}", window.as_str()),
      other => write!(f, "{}", other.path()),
    }
  }
}

/// Accepts `hot`, `new`, `top` (last hour) and `top:<window>`
impl FromStr for Listing {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let lower = s.trim().to_ascii_lowercase();
    match lower.split_once(':') {
      Some(("top", window)) => Ok(Listing::Top(window.parse()?)),
      Some(_) => Err(Error::Config(format!("Unknown listing: {}", s))),
      None => match lower.as_str() {
        "hot" => Ok(Listing::Hot),
        "new" => Ok(Listing::New),
        "top" => Ok(Listing::Top(TimeWindow::Hour)),
        _ => Err(Error::Config(format!("Unknown listing: {}", s))),
      },
    }
  }
}

/// A bounded request for posts from one community
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostQuery {
  pub subreddit: String,
  pub listing: Listing,
  pub limit: u32,
}

impl PostQuery {
  pub fn new(subreddit: impl Into<String>, listing: Listing, limit: u32) -> Self {
    Self { subreddit: subreddit.into(), listing, limit }
  }
}

impl Default for PostQuery {
  fn default() -> Self {
    Self { subreddit: "wallstreetbets".to_string(), listing: Listing::Hot, limit: 25 }
  }
}
