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

//! Post sentiment: a weighted blend of title and body polarity.

use std::sync::Arc;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Weight of the title polarity in a post score
pub const TITLE_WEIGHT: f64 = 0.6;
/// Weight of the body polarity in a post score
pub const BODY_WEIGHT: f64 = 0.4;

/// A text polarity model producing scores in [-1, 1]
pub trait SentimentModel: Send + Sync {
  fn polarity(&self, text: &str) -> f64;
}

/// Lexicon-based model using the VADER compound score
pub struct VaderModel {
  analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderModel {
  pub fn new() -> Self {
    Self { analyzer: SentimentIntensityAnalyzer::new() }
  }
}

impl Default for VaderModel {
  fn default() -> Self {
    Self::new()
  }
}

impl SentimentModel for VaderModel {
  fn polarity(&self, text: &str) -> f64 {
    let scores = self.analyzer.polarity_scores(text);
    scores.get("compound").copied().unwrap_or(0.0)
  }
}

/// Scores posts with a pluggable [`SentimentModel`]
#[derive(Clone)]
pub struct SentimentScorer {
  model: Arc<dyn SentimentModel>,
}

impl Default for SentimentScorer {
  fn default() -> Self {
    Self::vader()
  }
}

impl SentimentScorer {
  pub fn new(model: Arc<dyn SentimentModel>) -> Self {
    Self { model }
  }

  pub fn vader() -> Self {
    Self::new(Arc::new(VaderModel::new()))
  }

  /// Polarity of a single text; blank text is neutral
  pub fn polarity(&self, text: &str) -> f64 {
    if text.trim().is_empty() {
      return 0.0;
    }
    let score = self.model.polarity(text);
    if score.is_finite() { score.clamp(-1.0, 1.0) } else { 0.0 }
  }

  /// `0.6 * polarity(title) + 0.4 * polarity(body)`
  pub fn score(&self, title: &str, body: &str) -> f64 {
    TITLE_WEIGHT * self.polarity(title) + BODY_WEIGHT * self.polarity(body)
  }
}

impl std::fmt::Debug for SentimentScorer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SentimentScorer").finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::FixedModel;
  use pulse_core::test_utils::assert_sentiment_eq;

  fn fixed(pairs: &[(&str, f64)]) -> SentimentScorer {
    SentimentScorer::new(Arc::new(FixedModel::new(pairs.iter().copied())))
  }

  #[test]
  fn test_weights_sum_to_one() {
    assert_sentiment_eq(TITLE_WEIGHT + BODY_WEIGHT, 1.0);
  }

  #[test]
  fn test_title_only() {
    let scorer = fixed(&[("great buy", 0.6)]);
    assert_sentiment_eq(scorer.score("great buy", ""), 0.36);
  }

  #[test]
  fn test_title_and_body_blend() {
    let scorer = fixed(&[("up", 0.5), ("down", -1.0)]);
    assert_sentiment_eq(scorer.score("up", "down"), 0.6 * 0.5 + 0.4 * -1.0);
  }

  #[test]
  fn test_blank_text_is_neutral_without_consulting_model() {
    let scorer = fixed(&[("   ", 1.0), ("", 1.0)]);
    assert_sentiment_eq(scorer.score("", "   "), 0.0);
  }

  #[test]
  fn test_out_of_range_model_output_is_clamped() {
    let scorer = fixed(&[("hype", 3.0), ("doom", -7.5), ("nan", f64::NAN)]);
    assert_sentiment_eq(scorer.polarity("hype"), 1.0);
    assert_sentiment_eq(scorer.polarity("doom"), -1.0);
    assert_sentiment_eq(scorer.polarity("nan"), 0.0);
    assert_sentiment_eq(scorer.score("hype", "doom"), 0.2);
  }

  #[test]
  fn test_score_is_bounded() {
    let scorer = fixed(&[("max", 1.0), ("min", -1.0)]);
    for (title, body) in [("max", "max"), ("min", "min"), ("max", "min"), ("min", "")] {
      let score = scorer.score(title, body);
      assert!((-1.0..=1.0).contains(&score), "{} out of range", score);
    }
  }

  #[test]
  fn test_vader_direction() {
    let scorer = SentimentScorer::vader();
    assert!(scorer.polarity("This is a great, wonderful investment. I love it!") > 0.0);
    assert!(scorer.polarity("Terrible, awful loss. I hate this horrible stock.") < 0.0);
    assert_eq!(scorer.polarity(""), 0.0);
  }

  #[test]
  fn test_vader_score_in_range() {
    let scorer = SentimentScorer::vader();
    let score = scorer.score("GME to the moon!!! Best day ever", "Lost everything, worst trade of my life");
    assert!((-1.0..=1.0).contains(&score));
  }
}
