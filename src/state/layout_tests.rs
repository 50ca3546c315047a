use super::*;
use crate::routing::RouteContext;

fn inputs(route: RouteKey) -> LayoutInputs {
    LayoutInputs {
        route,
        content_presence: false,
        viewport: ViewportClass::Desktop,
        embedded: false,
        provider: DiscussionProvider::Modern,
        discussion_enabled_in_context: false,
        sidebar_toggle: true,
    }
}

// ===== Chrome =====

#[test]
fn embedded_suppresses_chrome() {
    let state = derive_layout(&LayoutInputs {
        embedded: true,
        ..inputs(RouteKey::TopicPost)
    });
    assert!(!state.show_chrome);
}

#[test]
fn not_embedded_shows_chrome() {
    let state = derive_layout(&inputs(RouteKey::TopicPost));
    assert!(state.show_chrome);
}

#[test]
fn embed_overrides_every_other_flag_for_chrome() {
    for content_presence in [false, true] {
        for viewport in [ViewportClass::Desktop, ViewportClass::Narrow] {
            for provider in [DiscussionProvider::Legacy, DiscussionProvider::Modern] {
                let state = derive_layout(&LayoutInputs {
                    embedded: true,
                    content_presence,
                    viewport,
                    provider,
                    ..inputs(RouteKey::Category)
                });
                assert!(!state.show_chrome);
            }
        }
    }
}

// ===== Content pane and sidebar =====

#[test]
fn content_presence_shows_content_pane() {
    let state = derive_layout(&LayoutInputs {
        content_presence: true,
        ..inputs(RouteKey::TopicPost)
    });
    assert!(state.show_content_pane);
    assert_eq!(state.empty_state, None);
}

#[test]
fn content_on_desktop_keeps_sidebar() {
    let state = derive_layout(&LayoutInputs {
        content_presence: true,
        viewport: ViewportClass::Desktop,
        ..inputs(RouteKey::TopicPost)
    });
    assert!(state.show_sidebar);
}

#[test]
fn content_on_narrow_hides_sidebar() {
    let state = derive_layout(&LayoutInputs {
        content_presence: true,
        viewport: ViewportClass::Narrow,
        sidebar_toggle: true,
        ..inputs(RouteKey::TopicPost)
    });
    assert!(!state.show_sidebar, "no dual-pane crowding on narrow screens");
}

#[test]
fn without_content_sidebar_follows_external_toggle() {
    for toggle in [false, true] {
        for viewport in [ViewportClass::Desktop, ViewportClass::Narrow] {
            let state = derive_layout(&LayoutInputs {
                sidebar_toggle: toggle,
                viewport,
                ..inputs(RouteKey::Topics)
            });
            assert_eq!(state.show_sidebar, toggle);
        }
    }
}

// ===== Empty states =====

#[test]
fn topics_family_without_content_shows_topics_empty_state() {
    let state = derive_layout(&inputs(RouteKey::Topics));
    assert_eq!(state.empty_state, Some(EmptyStateVariant::Topics));
}

#[test]
fn in_context_course_prefers_in_context_topics_empty_state() {
    let state = derive_layout(&LayoutInputs {
        discussion_enabled_in_context: true,
        ..inputs(RouteKey::Topic)
    });
    assert_eq!(state.empty_state, Some(EmptyStateVariant::InContextTopics));
}

#[test]
fn embedded_also_prefers_in_context_topics_empty_state() {
    let state = derive_layout(&LayoutInputs {
        embedded: true,
        ..inputs(RouteKey::Category)
    });
    assert_eq!(state.empty_state, Some(EmptyStateVariant::InContextTopics));
}

#[test]
fn my_posts_empty_state() {
    let state = derive_layout(&inputs(RouteKey::MyPosts));
    assert_eq!(state.empty_state, Some(EmptyStateVariant::MyPosts));
}

#[test]
fn learner_posts_uses_all_posts_empty_state() {
    let state = derive_layout(&inputs(RouteKey::LearnerPosts));
    assert_eq!(state.empty_state, Some(EmptyStateVariant::AllPosts));
}

#[test]
fn learners_path_uses_learners_empty_state() {
    let state = derive_layout(&inputs(RouteKey::Learners));
    assert_eq!(state.empty_state, Some(EmptyStateVariant::Learners));
}

#[test]
fn unmatched_routes_default_to_all_posts_empty_state() {
    for route in [RouteKey::Home, RouteKey::CommentsPage] {
        let state = derive_layout(&inputs(route));
        assert_eq!(state.empty_state, Some(EmptyStateVariant::AllPosts));
    }
}

// ===== Legacy breadcrumb overlay =====

#[test]
fn legacy_provider_on_topics_family_shows_breadcrumbs() {
    let state = derive_layout(&LayoutInputs {
        provider: DiscussionProvider::Legacy,
        ..inputs(RouteKey::TopicPost)
    });
    assert!(state.legacy_breadcrumbs);
}

#[test]
fn modern_provider_never_shows_breadcrumbs() {
    let state = derive_layout(&LayoutInputs {
        provider: DiscussionProvider::Modern,
        ..inputs(RouteKey::TopicPost)
    });
    assert!(!state.legacy_breadcrumbs);
}

#[test]
fn breadcrumbs_do_not_depend_on_embed_flag() {
    for embedded in [false, true] {
        let state = derive_layout(&LayoutInputs {
            provider: DiscussionProvider::Legacy,
            embedded,
            ..inputs(RouteKey::CategoryPost)
        });
        assert!(state.legacy_breadcrumbs, "embedded={embedded}");
    }
}

#[test]
fn breadcrumbs_are_additive_with_content_pane() {
    let state = derive_layout(&LayoutInputs {
        provider: DiscussionProvider::Legacy,
        content_presence: true,
        ..inputs(RouteKey::TopicPostEdit)
    });
    assert!(state.legacy_breadcrumbs);
    assert!(state.show_content_pane);
}

#[test]
fn breadcrumbs_not_shown_outside_topics_family() {
    for route in [RouteKey::Topics, RouteKey::MyPosts, RouteKey::Learners] {
        let state = derive_layout(&LayoutInputs {
            provider: DiscussionProvider::Legacy,
            ..inputs(route)
        });
        assert!(!state.legacy_breadcrumbs, "{route:?}");
    }
}

// ===== Content presence =====

#[test]
fn post_id_in_route_means_content() {
    let ctx = RouteContext::from_location("/course/c1/topics/t1/posts/p1", "").expect("in table");
    assert!(content_presence(&ctx, false));
}

#[test]
fn editor_visible_means_content_even_without_post() {
    let ctx = RouteContext::from_location("/course/c1/topics/t1", "").expect("in table");
    assert!(content_presence(&ctx, true));
}

#[test]
fn listing_without_editor_means_no_content() {
    let ctx = RouteContext::from_location("/course/c1/learners", "").expect("in table");
    assert!(!content_presence(&ctx, false));
}

// ===== Viewport =====

#[test]
fn width_at_breakpoint_is_desktop() {
    assert_eq!(ViewportClass::from_width(992, 992), ViewportClass::Desktop);
}

#[test]
fn width_below_breakpoint_is_narrow() {
    assert_eq!(ViewportClass::from_width(991, 992), ViewportClass::Narrow);
}
