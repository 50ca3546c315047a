//! Derived view state.
//!
//! Pure functions from navigation inputs to visibility/layout decisions,
//! plus the small amount of retained state the comments pane owns.

pub mod layout;
pub mod post_comments;

pub use layout::{
    content_presence, derive_layout, EmptyStateVariant, LayoutInputs, LayoutState, ViewportClass,
};
pub use post_comments::{
    comment_sections, CommentSection, PostCommentsState, ReadyView, ThreadViewModel,
};
