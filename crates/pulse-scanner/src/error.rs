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

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ScanError {
  #[error("Data source error: {0}")]
  Source(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("CSV error: {0}")]
  Csv(String),

  #[error("IO error: {0}")]
  Io(String),

  #[error("Serialization error: {0}")]
  Serialization(String),

  #[error("Configuration error: {0}")]
  Configuration(String),
}

impl From<csv::Error> for ScanError {
  fn from(err: csv::Error) -> Self {
    ScanError::Csv(err.to_string())
  }
}

impl From<std::io::Error> for ScanError {
  fn from(err: std::io::Error) -> Self {
    ScanError::Io(err.to_string())
  }
}

impl From<serde_json::Error> for ScanError {
  fn from(err: serde_json::Error) -> Self {
    ScanError::Serialization(err.to_string())
  }
}

impl From<pulse_core::Error> for ScanError {
  fn from(err: pulse_core::Error) -> Self {
    ScanError::Api(err.to_string())
  }
}

impl From<regex::Error> for ScanError {
  fn from(err: regex::Error) -> Self {
    ScanError::Configuration(err.to_string())
  }
}

pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_scan_error_display_source() {
    let err = ScanError::Source("reddit unavailable".to_string());
    assert_eq!(err.to_string(), "Data source error: reddit unavailable");
  }

  #[test]
  fn test_scan_error_display_csv() {
    let err = ScanError::Csv("bad row".to_string());
    assert_eq!(err.to_string(), "CSV error: bad row");
  }

  #[test]
  fn test_scan_error_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err = ScanError::from(io_err);
    assert!(matches!(err, ScanError::Io(_)));
    assert!(err.to_string().contains("read-only"));
  }

  #[test]
  fn test_scan_error_from_core_error() {
    let core_err = pulse_core::Error::RateLimit("slow down".to_string());
    let err = ScanError::from(core_err);
    assert!(matches!(err, ScanError::Api(_)));
    assert!(err.to_string().contains("Rate limit exceeded"));
  }

  #[test]
  fn test_scan_error_from_regex_error() {
    let regex_err = regex::Regex::new("(").unwrap_err();
    assert!(matches!(ScanError::from(regex_err), ScanError::Configuration(_)));
  }

  #[test]
  fn test_scan_error_clone() {
    let err = ScanError::Api("test".to_string());
    assert_eq!(err.to_string(), err.clone().to_string());
  }
}
