//! Layout and visibility derivation.
//!
//! `derive_layout` is a pure, total function from the current navigation
//! inputs to the set of visible panels. It is recomputed on every event
//! from explicit inputs and never stored; there is no error path, every
//! input combination has a defined output.

use crate::model::DiscussionProvider;
use crate::routing::{RouteContext, RouteFamily, RouteKey};
use serde::Serialize;

/// Responsive viewport class from the breakpoint collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    /// Wide enough for the dual-pane layout.
    Desktop,
    /// Below the breakpoint; one pane at a time.
    Narrow,
}

impl ViewportClass {
    /// Classify a pixel width against the configured desktop breakpoint.
    pub fn from_width(width: u16, desktop_breakpoint: u16) -> Self {
        if width >= desktop_breakpoint {
            ViewportClass::Desktop
        } else {
            ViewportClass::Narrow
        }
    }
}

/// Placeholder view shown in place of the content pane, selected by route
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyStateVariant {
    /// Generic topics empty view.
    Topics,
    /// In-context topics empty view, for embedded or in-context courses.
    InContextTopics,
    /// "No posts yet" for the my-posts listing.
    MyPosts,
    /// "No posts yet" for all-posts and learner-posts listings.
    AllPosts,
    /// Learners listing empty view.
    Learners,
}

/// Everything the deriver needs for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInputs {
    /// The matched route.
    pub route: RouteKey,
    /// A post is open, being composed, or targeted via a learner+post pair.
    pub content_presence: bool,
    /// Current viewport class.
    pub viewport: ViewportClass,
    /// Embed mode (the in-context sidebar).
    pub embedded: bool,
    /// Which discussion backend serves this course.
    pub provider: DiscussionProvider,
    /// The course has in-context discussions enabled.
    pub discussion_enabled_in_context: bool,
    /// Explicit sidebar toggle, owned by the caller. Governs the sidebar
    /// only while no content pane is shown.
    pub sidebar_toggle: bool,
}

/// Derived visibility state for one render. Never stored, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutState {
    /// Header, course-tab navigation, product tour, and footer.
    pub show_chrome: bool,
    /// Posts/topics navigation sidebar.
    pub show_sidebar: bool,
    /// The open/edited post and its comments.
    pub show_content_pane: bool,
    /// Placeholder variant when the content pane is hidden.
    pub empty_state: Option<EmptyStateVariant>,
    /// Additive breadcrumb overlay for the legacy provider on the topics
    /// family. Not mutually exclusive with the other panels.
    pub legacy_breadcrumbs: bool,
}

/// Whether the current navigation targets content.
///
/// True when a post is open, the post editor is visible, or a
/// learner-specific post is targeted.
pub fn content_presence(ctx: &RouteContext, post_editor_visible: bool) -> bool {
    ctx.post_id.is_some()
        || post_editor_visible
        || (ctx.learner_username.is_some() && ctx.post_id.is_some())
}

/// Empty-state dispatch by route family.
///
/// The topics family further branches on in-context mode; every other
/// family has a single variant, and anything unmatched lands on the
/// all-posts case so the dispatch stays total.
fn empty_state_variant(route: RouteKey, in_context: bool) -> EmptyStateVariant {
    match route.family() {
        RouteFamily::Topics => {
            if in_context {
                EmptyStateVariant::InContextTopics
            } else {
                EmptyStateVariant::Topics
            }
        }
        RouteFamily::MyPosts => EmptyStateVariant::MyPosts,
        RouteFamily::Learners => EmptyStateVariant::Learners,
        RouteFamily::AllPosts => EmptyStateVariant::AllPosts,
    }
}

/// Derive the visible panels for one render.
///
/// Rules, in priority order:
/// 1. Embed mode suppresses all shared chrome, regardless of anything else.
/// 2. The content pane shows exactly when content is present.
/// 3. With content shown, the sidebar collapses to desktop-only so narrow
///    screens never show both panes; without content, the caller's explicit
///    sidebar toggle passes through unmodified.
/// 4. Without content, an empty-state variant is picked by route family.
/// 5. The legacy breadcrumb overlay depends only on provider and route
///    family; it is additive and independent of embed mode.
pub fn derive_layout(inputs: &LayoutInputs) -> LayoutState {
    let show_content_pane = inputs.content_presence;
    let show_sidebar = if show_content_pane {
        inputs.viewport == ViewportClass::Desktop
    } else {
        inputs.sidebar_toggle
    };
    let empty_state = (!show_content_pane).then(|| {
        empty_state_variant(
            inputs.route,
            inputs.discussion_enabled_in_context || inputs.embedded,
        )
    });

    LayoutState {
        show_chrome: !inputs.embedded,
        show_sidebar,
        show_content_pane,
        empty_state,
        legacy_breadcrumbs: inputs.provider == DiscussionProvider::Legacy
            && inputs.route.has_legacy_breadcrumbs(),
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
