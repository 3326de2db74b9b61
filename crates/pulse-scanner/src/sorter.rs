use pulse_core::{MentionRecord, SortKey};
use std::cmp::Ordering;

/// Order records by `key`. The sort is stable, so ties keep their input order.
pub fn sort_records(mut records: Vec<MentionRecord>, key: SortKey, ascending: bool) -> Vec<MentionRecord> {
  let compare = |a: &MentionRecord, b: &MentionRecord| -> Ordering {
    match key {
      SortKey::Mentions => a.mentions.cmp(&b.mentions),
      SortKey::Sentiment => a.sentiment.total_cmp(&b.sentiment),
    }
  };

  if ascending {
    records.sort_by(compare);
  } else {
    records.sort_by(|a, b| compare(b, a));
  }
  records
}
