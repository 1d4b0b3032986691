//! Properties of the reconciliation engine, pinned against exact action
//! sequences.

use navstack_core::{transition_actions, IdentifiedSegment, Route, RoutingAction};

#[derive(Clone, PartialEq, Debug)]
enum Screen {
    TabBar,
    Counter,
    Stats,
    Info,
}

fn segment(token: Screen) -> IdentifiedSegment<Screen> {
    IdentifiedSegment::new(token)
}

#[test]
fn identical_routes_need_no_transition() {
    let tab = segment(Screen::TabBar);
    let stats = segment(Screen::Stats);

    let old: Route<_> = vec![tab.clone(), stats.clone()].into();
    let new: Route<_> = vec![tab, stats].into();

    assert_eq!(transition_actions(&old, &new), vec![]);
}

#[test]
fn empty_routes_need_no_transition() {
    let old = Route::<Screen>::new();
    let new = Route::<Screen>::new();

    assert_eq!(transition_actions(&old, &new), vec![]);
}

#[test]
fn grows_an_empty_route_with_pushes_from_the_root_up() {
    let old = Route::new();
    let new = Route::from_tokens([Screen::TabBar, Screen::Stats]);

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Push {
                at: 0,
                segment: new[0].clone(),
            },
            RoutingAction::Push {
                at: 1,
                segment: new[1].clone(),
            },
        ]
    );
}

#[test]
fn drains_a_route_with_pops_from_the_leaf_down() {
    let old = Route::from_tokens([Screen::TabBar, Screen::Stats, Screen::Counter]);
    let new = Route::new();

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Pop {
                at: 2,
                segment: old[2].clone(),
            },
            RoutingAction::Pop {
                at: 1,
                segment: old[1].clone(),
            },
            RoutingAction::Pop {
                at: 0,
                segment: old[0].clone(),
            },
        ]
    );
}

#[test]
fn replaces_the_first_divergent_segment_with_a_change() {
    let tab = segment(Screen::TabBar);
    let old: Route<_> = vec![tab.clone(), segment(Screen::Counter)].into();
    let new: Route<_> = vec![tab, segment(Screen::Stats)].into();

    assert_eq!(
        transition_actions(&old, &new),
        vec![RoutingAction::Change {
            at: 1,
            from: old[1].clone(),
            to: new[1].clone(),
        }]
    );
}

#[test]
fn changes_the_root_when_the_root_diverges() {
    let old = Route::from_tokens([Screen::TabBar]);
    let new = Route::from_tokens([Screen::Stats]);

    assert_eq!(
        transition_actions(&old, &new),
        vec![RoutingAction::Change {
            at: 0,
            from: old[0].clone(),
            to: new[0].clone(),
        }]
    );
}

#[test]
fn token_equal_segments_from_different_presentations_diverge() {
    // The same screen pushed twice is two different segments, so the diff
    // replaces rather than keeps it.
    let old = Route::from_tokens([Screen::TabBar]);
    let new = Route::from_tokens([Screen::TabBar]);

    assert_eq!(
        transition_actions(&old, &new),
        vec![RoutingAction::Change {
            at: 0,
            from: old[0].clone(),
            to: new[0].clone(),
        }]
    );
}

#[test]
fn pushes_new_segments_beyond_a_change() {
    let tab = segment(Screen::TabBar);
    let old: Route<_> = vec![tab.clone(), segment(Screen::Counter)].into();
    let new: Route<_> = vec![tab, segment(Screen::Stats), segment(Screen::Info)].into();

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Change {
                at: 1,
                from: old[1].clone(),
                to: new[1].clone(),
            },
            RoutingAction::Push {
                at: 2,
                segment: new[2].clone(),
            },
        ]
    );
}

#[test]
fn pops_back_to_a_common_prefix_from_the_leaf_down() {
    let tab = segment(Screen::TabBar);
    let old: Route<_> = vec![
        tab.clone(),
        segment(Screen::Stats),
        segment(Screen::Counter),
    ]
    .into();
    let new: Route<_> = vec![tab].into();

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Pop {
                at: 2,
                segment: old[2].clone(),
            },
            RoutingAction::Pop {
                at: 1,
                segment: old[1].clone(),
            },
        ]
    );
}

#[test]
fn pushes_beyond_a_common_prefix_from_the_parent_up() {
    let tab = segment(Screen::TabBar);
    let old: Route<_> = vec![tab.clone()].into();
    let new: Route<_> = vec![tab, segment(Screen::Stats), segment(Screen::Counter)].into();

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Push {
                at: 1,
                segment: new[1].clone(),
            },
            RoutingAction::Push {
                at: 2,
                segment: new[2].clone(),
            },
        ]
    );
}

#[test]
fn pops_deep_segments_before_changing_the_divergent_one() {
    // Old route is both longer and divergent: the stale leaf is dismissed
    // first, then the divergence point is replaced, then the new subtree is
    // pushed.
    let tab = segment(Screen::TabBar);
    let old: Route<_> = vec![
        tab.clone(),
        segment(Screen::Counter),
        segment(Screen::Info),
    ]
    .into();
    let new: Route<_> = vec![tab, segment(Screen::Stats), segment(Screen::Counter)].into();

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Pop {
                at: 2,
                segment: old[2].clone(),
            },
            RoutingAction::Change {
                at: 1,
                from: old[1].clone(),
                to: new[1].clone(),
            },
            RoutingAction::Push {
                at: 2,
                segment: new[2].clone(),
            },
        ]
    );
}

#[test]
fn shrinking_through_a_divergence_pops_then_changes() {
    let tab = segment(Screen::TabBar);
    let old: Route<_> = vec![
        tab.clone(),
        segment(Screen::Counter),
        segment(Screen::Info),
    ]
    .into();
    let new: Route<_> = vec![tab, segment(Screen::Stats)].into();

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Pop {
                at: 2,
                segment: old[2].clone(),
            },
            RoutingAction::Change {
                at: 1,
                from: old[1].clone(),
                to: new[1].clone(),
            },
        ]
    );
}

#[test]
fn disjoint_routes_change_the_root_and_rebuild() {
    let old = Route::from_tokens([Screen::TabBar, Screen::Counter]);
    let new = Route::from_tokens([Screen::Stats, Screen::Info]);

    assert_eq!(
        transition_actions(&old, &new),
        vec![
            RoutingAction::Pop {
                at: 1,
                segment: old[1].clone(),
            },
            RoutingAction::Change {
                at: 0,
                from: old[0].clone(),
                to: new[0].clone(),
            },
            RoutingAction::Push {
                at: 1,
                segment: new[1].clone(),
            },
        ]
    );
}
