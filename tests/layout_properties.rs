//! Property-based tests for the layout deriver.
//!
//! Tests validate:
//! 1. Derivation is total - every input combination produces an output
//! 2. Embed mode suppresses chrome unconditionally
//! 3. The content pane mirrors content presence exactly, and the empty
//!    state fills in exactly when the pane is hidden
//! 4. Sidebar rules: desktop-only alongside content, caller-controlled
//!    otherwise
//! 5. The breadcrumb overlay depends only on provider and route family

use dfv::model::DiscussionProvider;
use dfv::routing::{RouteKey, ALL_ROUTES};
use dfv::state::{derive_layout, EmptyStateVariant, LayoutInputs, ViewportClass};
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

fn any_route() -> impl Strategy<Value = RouteKey> {
    proptest::sample::select(ALL_ROUTES.to_vec())
}

fn any_viewport() -> impl Strategy<Value = ViewportClass> {
    prop_oneof![Just(ViewportClass::Desktop), Just(ViewportClass::Narrow)]
}

fn any_provider() -> impl Strategy<Value = DiscussionProvider> {
    prop_oneof![
        Just(DiscussionProvider::Legacy),
        Just(DiscussionProvider::Modern),
    ]
}

prop_compose! {
    fn any_inputs()(
        route in any_route(),
        content_presence in any::<bool>(),
        viewport in any_viewport(),
        embedded in any::<bool>(),
        provider in any_provider(),
        discussion_enabled_in_context in any::<bool>(),
        sidebar_toggle in any::<bool>(),
    ) -> LayoutInputs {
        LayoutInputs {
            route,
            content_presence,
            viewport,
            embedded,
            provider,
            discussion_enabled_in_context,
            sidebar_toggle,
        }
    }
}

// ===== Properties =====

proptest! {
    #[test]
    fn chrome_shows_exactly_when_not_embedded(inputs in any_inputs()) {
        let layout = derive_layout(&inputs);
        prop_assert_eq!(layout.show_chrome, !inputs.embedded);
    }

    #[test]
    fn content_pane_mirrors_content_presence(inputs in any_inputs()) {
        let layout = derive_layout(&inputs);
        prop_assert_eq!(layout.show_content_pane, inputs.content_presence);
    }

    #[test]
    fn empty_state_fills_in_exactly_when_pane_is_hidden(inputs in any_inputs()) {
        let layout = derive_layout(&inputs);
        prop_assert_eq!(layout.empty_state.is_some(), !layout.show_content_pane);
    }

    #[test]
    fn sidebar_with_content_is_desktop_only(inputs in any_inputs()) {
        let layout = derive_layout(&inputs);
        if inputs.content_presence {
            prop_assert_eq!(
                layout.show_sidebar,
                inputs.viewport == ViewportClass::Desktop
            );
        } else {
            prop_assert_eq!(layout.show_sidebar, inputs.sidebar_toggle);
        }
    }

    #[test]
    fn narrow_viewport_never_shows_both_panes(inputs in any_inputs()) {
        let layout = derive_layout(&inputs);
        if inputs.viewport == ViewportClass::Narrow {
            prop_assert!(!(layout.show_sidebar && layout.show_content_pane));
        }
    }

    #[test]
    fn breadcrumbs_require_the_legacy_provider(inputs in any_inputs()) {
        let layout = derive_layout(&inputs);
        prop_assert_eq!(
            layout.legacy_breadcrumbs,
            inputs.provider == DiscussionProvider::Legacy
                && inputs.route.has_legacy_breadcrumbs()
        );
    }

    #[test]
    fn breadcrumbs_are_independent_of_embed_mode(inputs in any_inputs()) {
        let flipped = LayoutInputs {
            embedded: !inputs.embedded,
            ..inputs
        };
        prop_assert_eq!(
            derive_layout(&inputs).legacy_breadcrumbs,
            derive_layout(&flipped).legacy_breadcrumbs
        );
    }

    #[test]
    fn in_context_topics_variant_requires_the_topics_family(inputs in any_inputs()) {
        let layout = derive_layout(&inputs);
        if layout.empty_state == Some(EmptyStateVariant::InContextTopics) {
            prop_assert!(inputs.discussion_enabled_in_context || inputs.embedded);
        }
    }
}

// ===== Exhaustive spot checks =====

#[test]
fn derivation_is_total_over_the_route_table() {
    for route in ALL_ROUTES {
        for embedded in [false, true] {
            let layout = derive_layout(&LayoutInputs {
                route,
                content_presence: false,
                viewport: ViewportClass::Desktop,
                embedded,
                provider: DiscussionProvider::Modern,
                discussion_enabled_in_context: false,
                sidebar_toggle: true,
            });
            assert!(layout.empty_state.is_some(), "{route:?}");
        }
    }
}
