use super::*;

const CARDS: [Option<&str>; 5] = [Some("frontend"), Some("backend"), Some("backend"), Some("data"), None];

#[test]
fn from_attr_maps_all_and_missing_to_all() {
    assert_eq!(ProjectFilter::from_attr(None), ProjectFilter::All);
    assert_eq!(ProjectFilter::from_attr(Some("all")), ProjectFilter::All);
    assert_eq!(ProjectFilter::from_attr(Some(" all ")), ProjectFilter::Category(" all ".to_owned()));
    assert_eq!(
        ProjectFilter::from_attr(Some("backend")),
        ProjectFilter::Category("backend".to_owned())
    );
}

#[test]
fn filter_value_is_compared_as_written() {
    let filter = ProjectFilter::from_attr(Some(" backend"));
    assert!(!filter.matches(Some("backend")));
    assert!(filter.matches(Some(" backend")));
}

#[test]
fn as_str_round_trips_attr_value() {
    assert_eq!(ProjectFilter::All.as_str(), "all");
    assert_eq!(ProjectFilter::from_attr(Some("data")).as_str(), "data");
}

#[test]
fn backend_filter_shows_only_backend_cards() {
    let filter = ProjectFilter::from_attr(Some("backend"));
    assert_eq!(filter.visibility(CARDS), vec![false, true, true, false, false]);
}

#[test]
fn all_filter_shows_every_card() {
    assert_eq!(ProjectFilter::All.visibility(CARDS), vec![true; 5]);
}

#[test]
fn category_match_is_exact() {
    let filter = ProjectFilter::from_attr(Some("back"));
    assert!(!filter.matches(Some("backend")));
    assert!(!filter.matches(Some("Backend")));
}

#[test]
fn card_style_for_shown_and_hidden() {
    let shown = CardStyle::for_visibility(true);
    assert_eq!(shown.display, "block");
    assert_eq!(shown.animation, Some("fadeInUp 0.5s ease-out"));
    let hidden = CardStyle::for_visibility(false);
    assert_eq!(hidden.display, "none");
    assert_eq!(hidden.animation, None);
}

#[test]
fn select_replaces_previous_active_button() {
    let mut state = FilterState::new();
    assert_eq!(state.active(), &ProjectFilter::All);
    assert_eq!(state.active_button(), None);

    state.select(2, ProjectFilter::from_attr(Some("backend")));
    assert_eq!(state.active_button(), Some(2));
    state.select(0, ProjectFilter::All);
    assert_eq!(state.active_button(), Some(0));
    assert_eq!(state.active(), &ProjectFilter::All);
}
