//! The resolved parameter bag for one navigation event.
//!
//! `RouteContext` is rebuilt from scratch whenever the location changes and
//! is threaded explicitly through the view tree - no ambient global. Child
//! views read it instead of re-deriving parameters.

use super::table::{page_param, resolve, PageKey, RouteKey};
use super::RouteError;
use crate::model::{CourseId, PostId, TopicId, Username};

/// Parameters bound from matching the current location against the route
/// table, plus the embed flag from the query string.
///
/// Immutable per navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    /// The table entry that matched.
    pub route: RouteKey,
    /// Course scoping every template in the table.
    pub course_id: CourseId,
    /// Open post, when the route targets one.
    pub post_id: Option<PostId>,
    /// Topic, on topic-family routes.
    pub topic_id: Option<TopicId>,
    /// Category slug, on category-family routes.
    pub category: Option<String>,
    /// Learner, on learner-specific routes.
    pub learner_username: Option<Username>,
    /// Logical page for the comments view, from the independent
    /// comments-page match.
    pub page: Option<PageKey>,
    /// Embed mode: the in-context sidebar suppresses shared chrome.
    pub enable_in_context_sidebar: bool,
}

/// Query flag that switches the interface into embed mode.
const IN_CONTEXT_SIDEBAR_FLAG: &str = "inContextSidebar";

/// Presence-based query flag check.
///
/// Any appearance of the key counts, `?inContextSidebar`,
/// `?inContextSidebar=`, and `?inContextSidebar=false` included; only
/// absence means the flag is off.
fn query_flag_present(query: &str, flag: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair.split('=').next() == Some(flag))
}

impl RouteContext {
    /// Build the context for a navigation event from its path and query
    /// string.
    ///
    /// Fails only on the defect-class cases: a path outside the route table,
    /// or a bound parameter the identifier types reject.
    pub fn from_location(path: &str, query: &str) -> Result<Self, RouteError> {
        let resolved = resolve(path)?;
        let bindings = &resolved.bindings;

        let required = |name: &'static str| -> Result<&str, RouteError> {
            bindings.get(name).ok_or(RouteError::MissingParam {
                name,
                template: resolved.key.template().pattern(),
            })
        };
        let invalid = |name: &'static str| move |source| RouteError::InvalidParam { name, source };

        let course_id = CourseId::new(required("courseId")?).map_err(invalid("courseId"))?;
        let post_id = bindings
            .get("postId")
            .map(|raw| PostId::new(raw).map_err(invalid("postId")))
            .transpose()?;
        let topic_id = bindings
            .get("topicId")
            .map(|raw| TopicId::new(raw).map_err(invalid("topicId")))
            .transpose()?;
        let learner_username = bindings
            .get("learnerUsername")
            .map(|raw| Username::new(raw).map_err(invalid("learnerUsername")))
            .transpose()?;
        let category = bindings.get("category").map(str::to_string);

        Ok(Self {
            route: resolved.key,
            course_id,
            post_id,
            topic_id,
            category,
            learner_username,
            page: page_param(path),
            enable_in_context_sidebar: query_flag_present(query, IN_CONTEXT_SIDEBAR_FLAG),
        })
    }
}
