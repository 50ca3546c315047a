//! Thread comments composition.
//!
//! Drives the content pane for an open post: fetch lifecycle, the local
//! response-editor flag, and the comment sublist layout that differs
//! between discussion and question threads.

use crate::data::ThreadSource;
use crate::model::{CourseId, EndorsementStatus, PostId, Thread, ThreadType};

/// One comment sublist and its filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CommentSection {
    /// Endorsement filter applied to this sublist.
    pub filter: EndorsementStatus,
}

/// Comment sublists for a thread type.
///
/// A discussion has a single undifferentiated list. A question always has
/// the endorsed and unendorsed sections, in that order, both present even
/// when a backing collection is empty - the two-section layout is stable.
pub fn comment_sections(thread_type: ThreadType) -> &'static [CommentSection] {
    const DISCUSSION: &[CommentSection] = &[CommentSection {
        filter: EndorsementStatus::Discussion,
    }];
    const QUESTION: &[CommentSection] = &[
        CommentSection {
            filter: EndorsementStatus::Endorsed,
        },
        CommentSection {
            filter: EndorsementStatus::Unendorsed,
        },
    ];
    match thread_type {
        ThreadType::Discussion => DISCUSSION,
        ThreadType::Question => QUESTION,
    }
}

/// What the comments pane renders for the current target.
#[derive(Debug, PartialEq)]
pub enum ThreadViewModel<'a> {
    /// No cached thread yet, fetch in flight.
    Loading,
    /// No cached thread and no fetch in flight. Terminal; not retried
    /// automatically.
    NotFound,
    /// Thread available.
    Ready(ReadyView<'a>),
}

/// The resolved comments view for an available thread.
#[derive(Debug, PartialEq)]
pub struct ReadyView<'a> {
    /// The cached thread.
    pub thread: &'a Thread,
    /// An open thread offers the add-response affordance.
    pub can_respond: bool,
    /// The response editor is open.
    pub editor_open: bool,
    /// Comment sublists in render order.
    pub sections: &'static [CommentSection],
    /// Sort-order control, shown only when there are comments to sort.
    pub show_sort_control: bool,
}

/// Per-target state of the comments pane.
///
/// Owns the `adding_response` flag. The flag is local: it opens by explicit
/// action and closes explicitly or implicitly when the target post changes.
/// Identity change is the cleanup trigger, not re-render.
#[derive(Debug)]
pub struct PostCommentsState {
    post_id: PostId,
    adding_response: bool,
}

impl PostCommentsState {
    /// Target a post, requesting its thread when not already cached.
    pub fn new<S: ThreadSource>(
        post_id: PostId,
        course_id: &CourseId,
        mark_read: bool,
        source: &mut S,
    ) -> Self {
        if source.post(&post_id).is_none() {
            source.fetch_thread(&post_id, course_id, mark_read);
        }
        Self {
            post_id,
            adding_response: false,
        }
    }

    /// The currently targeted post.
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// An in-progress response is being composed.
    pub fn adding_response(&self) -> bool {
        self.adding_response
    }

    /// Retarget to another post.
    ///
    /// A changed id discards the in-progress response state before the new
    /// thread's view is shown and requests the new thread if it is not
    /// cached. Retargeting to the same id is a no-op.
    pub fn retarget<S: ThreadSource>(
        &mut self,
        post_id: PostId,
        course_id: &CourseId,
        mark_read: bool,
        source: &mut S,
    ) {
        if post_id == self.post_id {
            return;
        }
        self.adding_response = false;
        if source.post(&post_id).is_none() {
            source.fetch_thread(&post_id, course_id, mark_read);
        }
        self.post_id = post_id;
    }

    /// Open the response editor. Ignored while the thread is closed or not
    /// yet available.
    pub fn open_editor<S: ThreadSource>(&mut self, source: &S) {
        match source.post(&self.post_id) {
            Some(thread) if !thread.closed => self.adding_response = true,
            _ => {}
        }
    }

    /// Close the response editor.
    pub fn close_editor(&mut self) {
        self.adding_response = false;
    }

    /// Compose the view model from the current cache state.
    ///
    /// Pure read; fetches are only requested on target changes.
    pub fn view<'a, S: ThreadSource>(&self, source: &'a S) -> ThreadViewModel<'a> {
        let Some(thread) = source.post(&self.post_id) else {
            return if source.fetch_pending(&self.post_id) {
                ThreadViewModel::Loading
            } else {
                ThreadViewModel::NotFound
            };
        };
        ThreadViewModel::Ready(ReadyView {
            thread,
            can_respond: !thread.closed,
            editor_open: self.adding_response && !thread.closed,
            sections: comment_sections(thread.thread_type),
            show_sort_control: source.comments_count(&self.post_id) > 0,
        })
    }
}

#[cfg(test)]
#[path = "post_comments_tests.rs"]
mod tests;
