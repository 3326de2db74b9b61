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

use csv::WriterBuilder;
use pulse_core::MentionRecord;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::error::ScanResult;

const COUNT_HEADERS: [&str; 2] = ["Symbol", "Count"];
const SENTIMENT_HEADERS: [&str; 3] = ["Symbol", "Count", "Average Sentiment"];

/// Writes mention records as CSV, one row per symbol
#[derive(Debug, Clone)]
pub struct CsvWriter {
  include_sentiment: bool,
}

impl Default for CsvWriter {
  fn default() -> Self {
    Self { include_sentiment: true }
  }
}

impl CsvWriter {
  pub fn new(include_sentiment: bool) -> Self {
    Self { include_sentiment }
  }

  /// Write `records` in the given order. The header is written even when
  /// there are no records.
  pub fn write<W: Write>(&self, writer: W, records: &[MentionRecord]) -> ScanResult<()> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);

    if self.include_sentiment {
      csv.write_record(SENTIMENT_HEADERS)?;
      for record in records {
        csv.serialize(SentimentRow {
          symbol: &record.symbol,
          count: record.mentions,
          average_sentiment: record.sentiment,
        })?;
      }
    } else {
      csv.write_record(COUNT_HEADERS)?;
      for record in records {
        csv.serialize(CountRow { symbol: &record.symbol, count: record.mentions })?;
      }
    }

    csv.flush()?;
    Ok(())
  }

  /// Create (or truncate) `path` and write `records` to it
  pub fn write_to_path<P: AsRef<Path>>(&self, path: P, records: &[MentionRecord]) -> ScanResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    self.write(file, records)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
  }
}

#[derive(Debug, Serialize)]
struct CountRow<'a> {
  #[serde(rename = "Symbol")]
  symbol: &'a str,

  #[serde(rename = "Count")]
  count: u32,
}

#[derive(Debug, Serialize)]
struct SentimentRow<'a> {
  #[serde(rename = "Symbol")]
  symbol: &'a str,

  #[serde(rename = "Count")]
  count: u32,

  #[serde(rename = "Average Sentiment")]
  average_sentiment: f64,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ScanError;
  use pretty_assertions::assert_eq;

  fn records() -> Vec<MentionRecord> {
    vec![MentionRecord::new("GME", 2, 0.25), MentionRecord::new("TSLA", 1, -0.5)]
  }

  fn render(writer: &CsvWriter, records: &[MentionRecord]) -> String {
    let mut buf = Vec::new();
    writer.write(&mut buf, records).unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn test_write_with_sentiment() {
    let out = render(&CsvWriter::default(), &records());
    assert_eq!(out, "Symbol,Count,Average Sentiment\nGME,2,0.25\nTSLA,1,-0.5\n");
  }

  #[test]
  fn test_write_counts_only() {
    let out = render(&CsvWriter::new(false), &records());
    assert_eq!(out, "Symbol,Count\nGME,2\nTSLA,1\n");
  }

  #[test]
  fn test_empty_records_still_have_header() {
    assert_eq!(render(&CsvWriter::new(false), &[]), "Symbol,Count\n");
    assert_eq!(render(&CsvWriter::new(true), &[]), "Symbol,Count,Average Sentiment\n");
  }

  #[test]
  fn test_write_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mentions.csv");

    CsvWriter::default().write_to_path(&path, &records()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["Symbol", "Count", "Average Sentiment"]);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "GME");
    assert_eq!(rows[1][2].parse::<f64>().unwrap(), -0.5);
  }

  #[test]
  fn test_write_to_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("mentions.csv");

    let result = CsvWriter::default().write_to_path(&path, &records());
    assert!(matches!(result, Err(ScanError::Io(_))));
  }
}
