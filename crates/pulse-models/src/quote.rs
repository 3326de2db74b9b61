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

//! AlphaVantage quote and symbol search models

use serde::{Deserialize, Serialize};

/// Quote endpoint response (real-time price)
///
/// Unknown symbols come back as `{"Global Quote": {}}`, so every field
/// defaults to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalQuote {
  /// Global quote data
  #[serde(rename = "Global Quote", default)]
  pub global_quote: QuoteData,
}

impl GlobalQuote {
  /// True when the response actually describes a traded instrument
  pub fn is_present(&self) -> bool {
    !self.global_quote.symbol.is_empty() && !self.global_quote.price.is_empty()
  }
}

/// Quote data structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteData {
  #[serde(rename = "01. symbol")]
  pub symbol: String,

  #[serde(rename = "02. open")]
  pub open: String,

  #[serde(rename = "03. high")]
  pub high: String,

  #[serde(rename = "04. low")]
  pub low: String,

  /// Current price
  #[serde(rename = "05. price")]
  pub price: String,

  #[serde(rename = "06. volume")]
  pub volume: String,

  #[serde(rename = "07. latest trading day")]
  pub latest_trading_day: String,

  #[serde(rename = "08. previous close")]
  pub previous_close: String,

  #[serde(rename = "09. change")]
  pub change: String,

  #[serde(rename = "10. change percent")]
  pub change_percent: String,
}

impl QuoteData {
  /// Parse current price as f64
  pub fn price_as_f64(&self) -> Result<f64, std::num::ParseFloatError> {
    self.price.parse()
  }
}

/// Symbol search response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SymbolSearch {
  #[serde(rename = "bestMatches", default)]
  pub best_matches: Vec<SymbolMatch>,
}

impl SymbolSearch {
  /// The match whose symbol equals `symbol` exactly, ignoring case
  pub fn exact_match(&self, symbol: &str) -> Option<&SymbolMatch> {
    self.best_matches.iter().find(|m| m.symbol.eq_ignore_ascii_case(symbol))
  }
}

/// Symbol search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
  #[serde(rename = "1. symbol")]
  pub symbol: String,

  /// Company name
  #[serde(rename = "2. name")]
  pub name: String,

  /// Stock type (e.g., "Equity")
  #[serde(rename = "3. type")]
  pub stock_type: String,

  #[serde(rename = "4. region")]
  pub region: String,

  #[serde(rename = "8. currency")]
  pub currency: String,

  #[serde(rename = "9. matchScore")]
  pub match_score: String,
}
