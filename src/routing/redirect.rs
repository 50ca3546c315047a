//! Redirect-path builder for back navigation.
//!
//! Maps the logical page a comments view was reached from back to the
//! listing route the user should land on, filling that route's template
//! from the current `RouteContext`. Pure: context in, navigable path out.

use super::context::RouteContext;
use super::table::{PageKey, RouteKey};
use super::RouteError;

/// Listing route for a page key. This is the `PostsPages` dispatch: each
/// logical page maps to the route its back navigation returns to.
const fn posts_page_route(page: PageKey) -> RouteKey {
    match page {
        PageKey::Topics => RouteKey::Topic,
        PageKey::Category => RouteKey::Category,
        PageKey::Posts => RouteKey::AllPosts,
        PageKey::MyPosts => RouteKey::MyPosts,
        PageKey::Learners => RouteKey::LearnerPosts,
    }
}

/// Build the back-navigation target for a comments view.
///
/// Keyed by the context's `page`; a missing page context falls back to the
/// all-posts listing. The embed flag survives the redirect so an embedded
/// surface stays embedded.
///
/// Fails only when the chosen template needs a parameter the context cannot
/// supply (e.g. a topics-page redirect without a topic id) - defect-class,
/// since the page context and its parameters come from the same location.
pub fn discussions_path(ctx: &RouteContext) -> Result<String, RouteError> {
    let route = ctx.page.map_or(RouteKey::AllPosts, posts_page_route);
    let mut path = route.template().reverse(|name| match name {
        "courseId" => Some(ctx.course_id.as_str()),
        "topicId" => ctx.topic_id.as_ref().map(|id| id.as_str()),
        "category" => ctx.category.as_deref(),
        "learnerUsername" => ctx.learner_username.as_ref().map(|u| u.as_str()),
        _ => None,
    })?;
    if ctx.enable_in_context_sidebar {
        path.push_str("?inContextSidebar");
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(path: &str, query: &str) -> RouteContext {
        RouteContext::from_location(path, query).expect("path in table")
    }

    #[test]
    fn topic_post_redirects_to_its_topic() {
        let target = discussions_path(&ctx("/course/c1/topics/t1/posts/p1", "")).expect("params present");
        assert_eq!(target, "/course/c1/topics/t1");
    }

    #[test]
    fn category_post_redirects_to_its_category() {
        let target =
            discussions_path(&ctx("/course/c1/category/homework/posts/p1", "")).expect("params present");
        assert_eq!(target, "/course/c1/category/homework");
    }

    #[test]
    fn generic_post_redirects_to_all_posts() {
        let target = discussions_path(&ctx("/course/c1/posts/p1", "")).expect("params present");
        assert_eq!(target, "/course/c1/posts");
    }

    #[test]
    fn my_posts_page_redirects_to_my_posts() {
        let target = discussions_path(&ctx("/course/c1/my-posts", "")).expect("params present");
        assert_eq!(target, "/course/c1/my-posts");
    }

    #[test]
    fn learner_posts_redirects_to_learner_listing() {
        let target =
            discussions_path(&ctx("/course/c1/learners/sam/posts", "")).expect("params present");
        assert_eq!(target, "/course/c1/learners/sam/posts");
    }

    #[test]
    fn missing_page_context_falls_back_to_all_posts() {
        let target = discussions_path(&ctx("/course/c1", "")).expect("fallback needs only courseId");
        assert_eq!(target, "/course/c1/posts");
    }

    #[test]
    fn embed_flag_survives_redirect() {
        let target = discussions_path(&ctx("/course/c1/topics/t1/posts/p1", "?inContextSidebar"))
            .expect("params present");
        assert_eq!(target, "/course/c1/topics/t1?inContextSidebar");
    }
}
