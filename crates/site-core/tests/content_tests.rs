// Host-side tests for the static content tables, tab selection and theme
// tokens.

use site_core::{nav_links, parse_hex_color, services, stats, strengths, TabSelection, Theme};

#[test]
fn content_tables_are_populated() {
    assert!(!services().is_empty());
    assert!(!stats().is_empty());
    assert!(!strengths().is_empty());
    assert!(!nav_links().is_empty());
    for service in services() {
        assert!(!service.title.is_empty());
        assert!(!service.summary.is_empty());
        assert!(!service.features.is_empty());
    }
}

#[test]
fn strength_cards_are_complete_and_distinct() {
    for strength in strengths() {
        assert!(!strength.title.is_empty());
        assert!(!strength.description.is_empty());
    }
    let mut titles: Vec<&str> = strengths().iter().map(|s| s.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), strengths().len());
}

#[test]
fn tab_selection_starts_at_the_first_tab() {
    let tabs = TabSelection::new(services().len());
    assert_eq!(tabs.index(), 0);
}

#[test]
fn every_valid_index_is_selectable() {
    let mut tabs = TabSelection::new(4);
    for i in [3, 1, 2, 0] {
        assert!(tabs.select(i));
        assert_eq!(tabs.index(), i);
    }
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut tabs = TabSelection::new(4);
    tabs.select(2);
    assert!(!tabs.select(4));
    assert!(!tabs.select(usize::MAX));
    assert_eq!(tabs.index(), 2);
}

#[test]
fn reselecting_the_current_tab_reports_no_change() {
    let mut tabs = TabSelection::new(3);
    tabs.select(1);
    assert!(!tabs.select(1));
}

#[test]
fn hex_tokens_parse_with_or_without_the_hash() {
    assert_eq!(parse_hex_color("#2563eb"), Some(0x2563eb));
    assert_eq!(parse_hex_color("2563eb"), Some(0x2563eb));
    assert_eq!(parse_hex_color("#FFFFFF"), Some(0xffffff));
}

#[test]
fn malformed_tokens_are_rejected() {
    assert_eq!(parse_hex_color(""), None);
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#2563egg"), None);
    assert_eq!(parse_hex_color("blue"), None);
    assert_eq!(parse_hex_color("#2563eb00"), None);
}

#[test]
fn theme_round_trips_its_primary_token() {
    let theme = Theme::from_hex(0x2563eb);
    assert_eq!(theme.css_primary(), "#2563eb");
    for channel in theme.primary {
        assert!((0.0..=1.0).contains(&channel));
    }
    assert_eq!(Theme::default(), theme);
}
