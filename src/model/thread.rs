//! Thread domain types.
//!
//! A thread is owned by the data-fetch collaborator; this core only reads
//! it. The shape mirrors the JSON the discussions backend returns.

use super::identifiers::{PostId, Username};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Semantics of a thread, chosen by its author at creation time.
///
/// Drives comment composition: a discussion renders a single undifferentiated
/// comment list, a question renders endorsed and unendorsed sublists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadType {
    /// Open-ended conversation; replies are not endorsable.
    Discussion,
    /// A question whose responses can be endorsed as answers.
    Question,
}

/// Filter applied to a comment sublist.
///
/// Under a question thread, comments partition into endorsed and unendorsed
/// sublists. Under a discussion thread, there is a single list and the
/// endorsement axis does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndorsementStatus {
    /// The single list under a discussion thread.
    Discussion,
    /// Endorsed responses under a question thread.
    Endorsed,
    /// Not-yet-endorsed responses under a question thread.
    Unendorsed,
}

/// A discussion thread as cached by the data layer.
///
/// Identified by its `PostId`. Fetched once per distinct post id and cached
/// until the id changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thread {
    /// Thread identifier (the route layer's `postId`).
    pub id: PostId,
    /// Display title.
    pub title: String,
    /// Authoring learner.
    pub author: Username,
    /// Closed threads accept no new responses.
    pub closed: bool,
    /// Discussion vs question semantics.
    #[serde(rename = "type")]
    pub thread_type: ThreadType,
    /// Creation timestamp from the backend.
    pub created_at: DateTime<Utc>,
}
