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

//! Single-slot result cache that recomputes once its window has elapsed.

use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

struct Snapshot<T> {
  value: T,
  computed_at: Instant,
}

/// Holds the last computed value for `window`.
///
/// The slot lock is held across the refresh, so concurrent callers that find
/// the value stale wait for one recomputation instead of starting their own.
/// Failed refreshes are not stored.
pub struct WindowedCache<T> {
  window: Duration,
  slot: Mutex<Option<Snapshot<T>>>,
}

impl<T: Clone> WindowedCache<T> {
  pub fn new(window: Duration) -> Self {
    Self { window, slot: Mutex::new(None) }
  }

  pub fn window(&self) -> Duration {
    self.window
  }

  /// Return the cached value if younger than the window, otherwise run
  /// `refresh` and cache its success.
  pub async fn get_or_refresh<F, Fut, E>(&self, refresh: F) -> Result<T, E>
  where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
  {
    let mut slot = self.slot.lock().await;

    if let Some(snapshot) = slot.as_ref() {
      let age = snapshot.computed_at.elapsed();
      if age < self.window {
        debug!(age_ms = age.as_millis() as u64, "Serving cached result");
        return Ok(snapshot.value.clone());
      }
    }

    let value = refresh().await?;
    *slot = Some(Snapshot { value: value.clone(), computed_at: Instant::now() });
    Ok(value)
  }

  /// Age of the cached value, `None` when nothing is cached
  pub async fn age(&self) -> Option<Duration> {
    self.slot.lock().await.as_ref().map(|s| s.computed_at.elapsed())
  }

  pub async fn invalidate(&self) {
    *self.slot.lock().await = None;
  }
}

impl<T> std::fmt::Debug for WindowedCache<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WindowedCache").field("window", &self.window).finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;
  use std::sync::atomic::{AtomicU32, Ordering};

  async fn counting(cache: &WindowedCache<u32>, counter: &AtomicU32) -> Result<u32, String> {
    cache.get_or_refresh(|| async { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }).await
  }

  #[tokio::test(start_paused = true)]
  async fn test_value_reused_inside_window() {
    let cache = WindowedCache::new(Duration::from_secs(300));
    let counter = AtomicU32::new(0);

    assert_eq!(counting(&cache, &counter).await, Ok(1));
    tokio::time::advance(Duration::from_secs(60)).await;
    assert_eq!(counting(&cache, &counter).await, Ok(1));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
  }

  #[tokio::test(start_paused = true)]
  async fn test_value_recomputed_after_window() {
    let cache = WindowedCache::new(Duration::from_secs(300));
    let counter = AtomicU32::new(0);

    assert_eq!(counting(&cache, &counter).await, Ok(1));
    tokio::time::advance(Duration::from_secs(301)).await;
    assert_eq!(counting(&cache, &counter).await, Ok(2));
    assert!(cache.age().await.is_some_and(|age| age < Duration::from_secs(1)));
  }

  #[tokio::test(start_paused = true)]
  async fn test_zero_window_always_recomputes() {
    let cache = WindowedCache::new(Duration::ZERO);
    let counter = AtomicU32::new(0);

    assert_eq!(counting(&cache, &counter).await, Ok(1));
    assert_eq!(counting(&cache, &counter).await, Ok(2));
  }

  #[tokio::test]
  async fn test_errors_are_not_cached() {
    let cache: WindowedCache<u32> = WindowedCache::new(Duration::from_secs(300));

    let failed: Result<u32, String> = cache.get_or_refresh(|| async { Err("boom".to_string()) }).await;
    assert_eq!(failed, Err("boom".to_string()));
    assert!(cache.age().await.is_none());

    let ok: Result<u32, String> = cache.get_or_refresh(|| async { Ok(7) }).await;
    assert_eq!(ok, Ok(7));
  }

  #[tokio::test]
  async fn test_invalidate() {
    let cache = WindowedCache::new(Duration::from_secs(300));
    let counter = AtomicU32::new(0);

    counting(&cache, &counter).await.unwrap();
    cache.invalidate().await;
    assert!(cache.age().await.is_none());
    assert_eq!(counting(&cache, &counter).await, Ok(2));
  }

  #[tokio::test]
  async fn test_concurrent_callers_share_one_refresh() {
    let cache = Arc::new(WindowedCache::new(Duration::from_secs(300)));
    let counter = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for _ in 0..8 {
      let cache = cache.clone();
      let counter = counter.clone();
      handles.push(tokio::spawn(async move {
        cache
          .get_or_refresh(|| async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<_, String>(counter.fetch_add(1, Ordering::SeqCst) + 1)
          })
          .await
      }));
    }

    for handle in handles {
      assert_eq!(handle.await.unwrap(), Ok(1));
    }
    assert_eq!(counter.load(Ordering::SeqCst), 1);
  }
}
