//! The fixed, ordered route table and first-match resolution.
//!
//! Order encodes precedence among overlapping templates: more specific
//! templates (post edit views) come before the generic ones they overlap
//! with, and the comments-page catch-all comes last. Resolution is a single
//! linear first-match scan - do NOT reorder into a map, overlapping entries
//! rely on declaration order.

use super::template::{Bindings, RouteTemplate};
use super::RouteError;

/// Identity of a route in the application's routing surface.
///
/// Each key owns exactly one template in [`ALL_ROUTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKey {
    /// Editing a post reached through a category.
    CategoryPostEdit,
    /// A post reached through a category.
    CategoryPost,
    /// A category listing.
    Category,
    /// Editing a post reached through a topic.
    TopicPostEdit,
    /// A post reached through a topic.
    TopicPost,
    /// A topic listing.
    Topic,
    /// The topics overview.
    Topics,
    /// The current user's own posts.
    MyPosts,
    /// A post reached through the all-posts listing.
    Post,
    /// The all-posts listing.
    AllPosts,
    /// A specific learner's posts.
    LearnerPosts,
    /// The learners listing.
    Learners,
    /// Paginated comments catch-all (binds the logical page segment).
    CommentsPage,
    /// The discussions home for a course.
    Home,
}

/// Route family used to pick an empty-state variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFamily {
    /// Topics overview, categories, topics, and their post views.
    Topics,
    /// The current user's own posts.
    MyPosts,
    /// All-posts, generic post views, and learner post listings.
    AllPosts,
    /// The learners listing.
    Learners,
}

impl RouteKey {
    /// The template this key matches.
    pub const fn template(self) -> RouteTemplate {
        RouteTemplate::new(match self {
            RouteKey::CategoryPostEdit => "/course/:courseId/category/:category/posts/:postId/edit",
            RouteKey::CategoryPost => "/course/:courseId/category/:category/posts/:postId",
            RouteKey::Category => "/course/:courseId/category/:category",
            RouteKey::TopicPostEdit => "/course/:courseId/topics/:topicId/posts/:postId/edit",
            RouteKey::TopicPost => "/course/:courseId/topics/:topicId/posts/:postId",
            RouteKey::Topic => "/course/:courseId/topics/:topicId",
            RouteKey::Topics => "/course/:courseId/topics",
            RouteKey::MyPosts => "/course/:courseId/my-posts",
            RouteKey::Post => "/course/:courseId/posts/:postId",
            RouteKey::AllPosts => "/course/:courseId/posts",
            RouteKey::LearnerPosts => "/course/:courseId/learners/:learnerUsername/posts",
            RouteKey::Learners => "/course/:courseId/learners",
            RouteKey::CommentsPage => "/course/:courseId/:page/*",
            RouteKey::Home => "/course/:courseId",
        })
    }

    /// Family grouping for empty-state selection.
    ///
    /// Unlisted keys fall into the all-posts family; empty-state selection
    /// must stay total.
    pub const fn family(self) -> RouteFamily {
        match self {
            RouteKey::CategoryPostEdit
            | RouteKey::CategoryPost
            | RouteKey::Category
            | RouteKey::TopicPostEdit
            | RouteKey::TopicPost
            | RouteKey::Topic
            | RouteKey::Topics => RouteFamily::Topics,
            RouteKey::MyPosts => RouteFamily::MyPosts,
            RouteKey::Learners => RouteFamily::Learners,
            RouteKey::Post
            | RouteKey::AllPosts
            | RouteKey::LearnerPosts
            | RouteKey::CommentsPage
            | RouteKey::Home => RouteFamily::AllPosts,
        }
    }

    /// Whether this route belongs to the six-template topics family that
    /// carries the legacy breadcrumb overlay.
    ///
    /// The topics overview itself is excluded: breadcrumbs only appear once
    /// a category or topic is selected.
    pub const fn has_legacy_breadcrumbs(self) -> bool {
        matches!(
            self,
            RouteKey::Category
                | RouteKey::CategoryPost
                | RouteKey::CategoryPostEdit
                | RouteKey::Topic
                | RouteKey::TopicPost
                | RouteKey::TopicPostEdit
        )
    }
}

/// The complete routing surface, in precedence order.
pub const ALL_ROUTES: [RouteKey; 14] = [
    RouteKey::CategoryPostEdit,
    RouteKey::CategoryPost,
    RouteKey::Category,
    RouteKey::TopicPostEdit,
    RouteKey::TopicPost,
    RouteKey::Topic,
    RouteKey::Topics,
    RouteKey::MyPosts,
    RouteKey::Post,
    RouteKey::AllPosts,
    RouteKey::LearnerPosts,
    RouteKey::Learners,
    RouteKey::CommentsPage,
    RouteKey::Home,
];

/// A successful resolution: which template matched, and what it bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The first table entry whose template matched.
    pub key: RouteKey,
    /// Parameters bound by that template.
    pub bindings: Bindings,
}

/// Resolve `path` against [`ALL_ROUTES`], first match wins.
///
/// A miss is defect-class: the table is exhaustive for the application's
/// routing surface, so `NoMatch` means a navigation produced a path outside
/// it. Callers propagate it; nothing retries.
pub fn resolve(path: &str) -> Result<ResolvedRoute, RouteError> {
    for key in ALL_ROUTES {
        if let Some(bindings) = key.template().matches(path) {
            tracing::debug!(path, route = ?key, "resolved route");
            return Ok(ResolvedRoute { key, bindings });
        }
    }
    Err(RouteError::NoMatch {
        path: path.to_string(),
    })
}

/// Logical page a comments view was reached from.
///
/// Bound from the second path segment by the comments-page template and used
/// to key the redirect-path builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    /// Came from the topics overview or a topic listing.
    Topics,
    /// Came from a category listing.
    Category,
    /// Came from the all-posts listing.
    Posts,
    /// Came from the my-posts listing.
    MyPosts,
    /// Came from the learners pages.
    Learners,
}

impl PageKey {
    /// Parse a path segment into a page key. Unknown segments yield `None`.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "topics" => Some(PageKey::Topics),
            "category" => Some(PageKey::Category),
            "posts" => Some(PageKey::Posts),
            "my-posts" => Some(PageKey::MyPosts),
            "learners" => Some(PageKey::Learners),
            _ => None,
        }
    }
}

/// Extract the logical page segment from `path`.
///
/// Evaluated independently of [`resolve`] against the stricter
/// comments-page template. `None` is an expected outcome (the path has no
/// page segment, or the segment names no known page), not an error.
pub fn page_param(path: &str) -> Option<PageKey> {
    RouteKey::CommentsPage
        .template()
        .matches(path)
        .and_then(|bindings| bindings.get("page").and_then(PageKey::from_segment))
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
