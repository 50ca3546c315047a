//! Domain types shared across the routing and state layers.

pub mod error;
pub mod identifiers;
pub mod thread;

pub use error::AppError;
pub use identifiers::{CourseId, EmptyId, PostId, TopicId, Username};
pub use thread::{EndorsementStatus, Thread, ThreadType};

use serde::Deserialize;

/// Which discussion backend serves this course.
///
/// The legacy provider needs a breadcrumb overlay on topics-family routes;
/// the modern provider does not. Selected per course by platform
/// configuration, not per navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionProvider {
    /// The legacy forum backend.
    Legacy,
    /// The modern forum backend.
    Modern,
}
