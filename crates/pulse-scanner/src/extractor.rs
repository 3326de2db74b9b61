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

//! Candidate ticker extraction from free text.
//!
//! Two rules run over the text and their matches are unioned:
//!
//! - cashtags: `$` followed by 1–5 uppercase letters (`$F`, `$GME`), the `$`
//!   must not be glued to a preceding word
//! - bare tokens: 2–5 uppercase letters standing alone as a word (`GME`)
//!
//! Nothing here checks that a token is a real symbol.

use regex::Regex;
use std::collections::HashSet;

use crate::error::{ScanError, ScanResult};

/// Cashtag rule; `\B` keeps `abc$GME` from matching as a cashtag
pub const CASHTAG_PATTERN: &str = r"\B\$(?P<sym>[A-Z]{1,5})\b";

/// Bare uppercase word rule
pub const BARE_TOKEN_PATTERN: &str = r"\b(?P<sym>[A-Z]{2,5})\b";

const SYMBOL_GROUP: &str = "sym";

/// Pattern-based symbol extractor
#[derive(Debug, Clone)]
pub struct SymbolExtractor {
  rules: Vec<Regex>,
}

impl Default for SymbolExtractor {
  fn default() -> Self {
    let rules = [CASHTAG_PATTERN, BARE_TOKEN_PATTERN]
      .iter()
      .map(|pattern| Regex::new(pattern).expect("built-in ticker patterns must compile"))
      .collect();
    Self { rules }
  }
}

impl SymbolExtractor {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a custom rule. The pattern must capture the symbol in a group named `sym`.
  pub fn with_rule(mut self, pattern: &str) -> ScanResult<Self> {
    let regex = Regex::new(pattern)?;
    if !regex.capture_names().any(|name| name == Some(SYMBOL_GROUP)) {
      return Err(ScanError::Configuration(format!(
        "Extraction rule '{}' has no (?P<{}>...) group",
        pattern, SYMBOL_GROUP
      )));
    }
    self.rules.push(regex);
    Ok(self)
  }

  /// Extract the set of candidate symbols appearing in `text`
  pub fn extract(&self, text: &str) -> HashSet<String> {
    let mut symbols = HashSet::new();

    for rule in &self.rules {
      for captures in rule.captures_iter(text) {
        if let Some(symbol) = captures.name(SYMBOL_GROUP) {
          let symbol = symbol.as_str().trim_start_matches('$');
          // Custom rules may be looser than the symbol alphabet
          if is_symbol_shaped(symbol) {
            symbols.insert(symbol.to_string());
          }
        }
      }
    }

    symbols
  }
}

fn is_symbol_shaped(token: &str) -> bool {
  (1..=5).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn extract(text: &str) -> Vec<String> {
    let mut symbols: Vec<String> = SymbolExtractor::new().extract(text).into_iter().collect();
    symbols.sort();
    symbols
  }

  #[test]
  fn test_bare_tokens() {
    assert_eq!(extract("GME and AMC are up, TSLA down"), vec!["AMC", "GME", "TSLA"]);
  }

  #[test]
  fn test_cashtags_are_stripped() {
    assert_eq!(extract("loading up on $PLTR and $F"), vec!["F", "PLTR"]);
  }

  #[test]
  fn test_token_matched_by_both_rules_counts_once() {
    assert_eq!(extract("$GME GME GME!!!"), vec!["GME"]);
  }

  #[test]
  fn test_single_bare_letter_is_ignored() {
    assert!(extract("I think A is fine").is_empty());
  }

  #[test]
  fn test_lowercase_and_mixed_case_never_match() {
    assert!(extract("gme Gme gME $gme $Gme").is_empty());
  }

  #[test]
  fn test_embedded_tokens_do_not_match() {
    assert!(extract("GAMESTOPPED xGME GMEx GME1 ABCDEF").is_empty());
  }

  #[test]
  fn test_cashtag_glued_to_word_is_not_a_cashtag() {
    assert!(extract("price$F").is_empty());
  }

  #[test]
  fn test_punctuation_boundaries() {
    assert_eq!(extract("(NVDA), 'AMD'; MSFT."), vec!["AMD", "MSFT", "NVDA"]);
  }

  #[test]
  fn test_empty_text() {
    assert!(extract("").is_empty());
  }

  #[test]
  fn test_never_returns_tokens_outside_alphabet() {
    let texts = [
      "$GME to the MOON 🚀🚀 $A $ABCDEF ÜBER GMEÄ",
      "BRK.B and BF-B, $SPY420 QQQ_ ___ $$$ $",
      "ÉTF ÅAPL NVDA\u{00A0}AMD",
    ];
    let extractor = SymbolExtractor::new();
    for text in texts {
      for symbol in extractor.extract(text) {
        assert!(is_symbol_shaped(&symbol), "{:?} extracted from {:?}", symbol, text);
      }
    }
  }

  #[test]
  fn test_custom_rule() {
    let extractor = SymbolExtractor::new().with_rule(r"#(?P<sym>[A-Z]{1,5})\b").unwrap();
    let symbols = extractor.extract("watching #X closely");
    assert!(symbols.contains("X"));
  }

  #[test]
  fn test_custom_rule_requires_symbol_group() {
    let result = SymbolExtractor::new().with_rule(r"#[A-Z]+");
    assert!(matches!(result, Err(ScanError::Configuration(_))));
  }

  #[test]
  fn test_custom_rule_cannot_leak_lowercase() {
    let extractor = SymbolExtractor::new().with_rule(r"@(?P<sym>\w+)").unwrap();
    assert!(extractor.extract("@gme @GME").iter().all(|s| is_symbol_shaped(s)));
  }
}
