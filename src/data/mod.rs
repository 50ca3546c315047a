//! Thread data seam.
//!
//! The HTTP client lives outside this crate. The core reads threads through
//! the [`ThreadSource`] trait; [`ThreadCache`] is the single-threaded
//! in-memory implementation the shell and tests use. Fetch completions
//! arrive as explicit events, which is where the stale-result discard
//! happens: a completion for a post id that is no longer the pending target
//! must never be surfaced.

use crate::model::{CourseId, PostId, Thread};
use std::collections::HashMap;
use thiserror::Error;

/// Thread fetch failures, reported on fetch completion.
///
/// Recoverable: the comments view renders a terminal not-found state and
/// does not retry automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend has no thread with this id.
    #[error("No thread found for post '{post_id}'")]
    NotFound {
        /// The requested post id.
        post_id: PostId,
    },

    /// The backend failed to answer.
    #[error("Thread fetch failed: {reason}")]
    Backend {
        /// Backend-supplied failure description.
        reason: String,
    },
}

/// Read access to cached threads plus fetch lifecycle signals.
///
/// `fetch_thread` only *requests* a thread; availability is observed later
/// through `post`. Starting a fetch is idempotent - callers may request the
/// same post while a fetch is already in flight.
pub trait ThreadSource {
    /// The cached thread for `post_id`, if any.
    fn post(&self, post_id: &PostId) -> Option<&Thread>;

    /// Collaborator-supplied comment count for `post_id` (0 when unknown).
    fn comments_count(&self, post_id: &PostId) -> usize;

    /// Request a fetch of `post_id` within `course_id`. `mark_read` asks
    /// the backend to mark the thread read as a side effect.
    fn fetch_thread(&mut self, post_id: &PostId, course_id: &CourseId, mark_read: bool);

    /// Whether a fetch for `post_id` is currently in flight.
    fn fetch_pending(&self, post_id: &PostId) -> bool;
}

/// Single-threaded thread cache with one in-flight fetch slot.
///
/// Retargeting to a new post id supersedes the previous pending fetch:
/// its completion, whenever it arrives, is discarded instead of being
/// consumed, so a stale fetch can never race the cache into showing the
/// wrong thread.
#[derive(Debug, Default)]
pub struct ThreadCache {
    threads: HashMap<PostId, Thread>,
    comment_counts: HashMap<PostId, usize>,
    pending: Option<PostId>,
}

impl ThreadCache {
    /// Empty cache with no fetch in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a thread directly, bypassing the fetch lifecycle.
    ///
    /// Shell/test convenience for pre-populated data.
    pub fn insert(&mut self, thread: Thread) {
        self.threads.insert(thread.id.clone(), thread);
    }

    /// Record the comment count for a post.
    pub fn set_comments_count(&mut self, post_id: PostId, count: usize) {
        self.comment_counts.insert(post_id, count);
    }

    /// Deliver the result of an in-flight fetch.
    ///
    /// Completions for any id other than the current pending target are
    /// stale and dropped. A failed fetch clears the pending slot without
    /// touching the cache, leaving the view in its not-found state.
    pub fn complete_fetch(&mut self, post_id: &PostId, result: Result<Thread, FetchError>) {
        if self.pending.as_ref() != Some(post_id) {
            tracing::debug!(%post_id, "discarding stale fetch completion");
            return;
        }
        self.pending = None;
        match result {
            Ok(thread) => {
                self.threads.insert(thread.id.clone(), thread);
            }
            Err(err) => {
                tracing::warn!(%post_id, error = %err, "thread fetch failed");
            }
        }
    }
}

impl ThreadSource for ThreadCache {
    fn post(&self, post_id: &PostId) -> Option<&Thread> {
        self.threads.get(post_id)
    }

    fn comments_count(&self, post_id: &PostId) -> usize {
        self.comment_counts.get(post_id).copied().unwrap_or(0)
    }

    fn fetch_thread(&mut self, post_id: &PostId, course_id: &CourseId, mark_read: bool) {
        if self.threads.contains_key(post_id) {
            return;
        }
        if self.pending.as_ref() == Some(post_id) {
            // Already in flight; starting again is a no-op.
            return;
        }
        tracing::debug!(%post_id, %course_id, mark_read, "starting thread fetch");
        self.pending = Some(post_id.clone());
    }

    fn fetch_pending(&self, post_id: &PostId) -> bool {
        self.pending.as_ref() == Some(post_id)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
