//! Periodic synchronization of the live feed.
//!
//! The synchronizer runs one fetch pass immediately and one per interval tick
//! afterwards. Ticks are fire-and-forget: each pass fetches on its own task,
//! so a slow response never delays the schedule, and completions land in
//! whatever order the requests resolve.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_channel::mpsc::UnboundedSender;

use crate::core::{platform, timing};

use super::{FeedClient, Post};

/// Fixed poll cadence: 21 seconds.
pub const POLL_INTERVAL_MS: u64 = 21_000;

/// Outcome of one fetch pass, delivered to whoever owns the feed container.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    Loaded(Vec<Post>),
    Failed(String),
}

/// What the feed container shows. Every successful pass appends the entire
/// returned list to what is already there: the endpoint offers no cursor, so
/// there is nothing to dedup against, and clearing would drop posts the
/// server no longer returns. Growth is unbounded by design of the endpoint
/// contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub completed_passes: u64,
    pub failed_passes: u64,
}

impl FeedState {
    /// Append a full fetch result to the feed, in input order.
    pub fn absorb(&mut self, batch: Vec<Post>) {
        self.posts.extend(batch);
        self.completed_passes += 1;
    }

    /// A failed pass leaves the feed exactly as it was.
    pub fn note_failure(&mut self) {
        self.failed_passes += 1;
    }
}

/// Drives fetch passes against a [`FeedClient`] for the lifetime of the page.
///
/// `start` spawns the schedule; `stop` bumps a generation counter that the
/// loop checks at each tick, so cancellation takes effect at the next wakeup.
/// Nothing stops the loop otherwise; page teardown is the usual end of life.
pub struct FeedSynchronizer {
    client: FeedClient,
    interval_ms: u64,
    generation: Arc<AtomicU64>,
}

impl FeedSynchronizer {
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            interval_ms: POLL_INTERVAL_MS,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Begin polling: one immediate pass, then one per tick. Events land in
    /// `events`; a closed receiver ends the schedule as well.
    pub fn start(&self, events: UnboundedSender<FeedEvent>) {
        let token = self.generation.load(Ordering::SeqCst);
        let generation = Arc::clone(&self.generation);
        let client = self.client.clone();
        let interval_ms = self.interval_ms;

        platform::spawn_future(async move {
            loop {
                if generation.load(Ordering::SeqCst) != token || events.is_closed() {
                    break;
                }
                spawn_pass(client.clone(), events.clone());
                timing::sleep_ms(interval_ms).await;
            }
        });
    }

    /// Cancel the schedule. Takes effect at the loop's next wakeup; a pass
    /// already in flight still delivers.
    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

fn spawn_pass(client: FeedClient, events: UnboundedSender<FeedEvent>) {
    platform::spawn_future(async move {
        let event = match client.latest_toots().await {
            Ok(posts) => FeedEvent::Loaded(posts),
            Err(err) => FeedEvent::Failed(err.to_string()),
        };
        let _ = events.unbounded_send(event);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<Post> {
        serde_json::from_value(serde_json::json!([
            {
                "url": "https://mastodon.social/@a/1",
                "created_at": "2024-03-01T08:00:00Z",
                "content": "<p>one</p>",
                "account": { "username": "a" }
            },
            {
                "url": "https://mastodon.social/@b/2",
                "created_at": "2024-03-01T08:01:00Z",
                "content": "<p>two</p>",
                "account": { "username": "b" }
            }
        ]))
        .unwrap()
    }

    #[test]
    fn repeated_identical_passes_double_the_feed() {
        let mut state = FeedState::default();
        let batch = sample_posts();

        state.absorb(batch.clone());
        assert_eq!(state.posts.len(), 2);

        // Same endpoint response again: the full list is appended again, not
        // deduplicated against what is already shown.
        state.absorb(batch);
        assert_eq!(state.posts.len(), 4);
        assert_eq!(state.posts[0], state.posts[2]);
        assert_eq!(state.completed_passes, 2);
    }

    #[test]
    fn a_failed_pass_leaves_posts_untouched() {
        let mut state = FeedState::default();
        state.absorb(sample_posts());
        let before = state.posts.clone();

        state.note_failure();
        assert_eq!(state.posts, before);
        assert_eq!(state.failed_passes, 1);
        assert_eq!(state.completed_passes, 1);
    }

    #[test]
    fn absorb_preserves_input_order() {
        let mut state = FeedState::default();
        state.absorb(sample_posts());
        assert_eq!(state.posts[0].account.username, "a");
        assert_eq!(state.posts[1].account.username, "b");
    }
}
