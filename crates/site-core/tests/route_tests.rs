// Host-side tests for path parsing.

use site_core::{Route, RouteError};

#[test]
fn root_path_is_home() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
}

#[test]
fn project_paths_parse_numeric_ids() {
    assert_eq!(Route::parse("/project/3"), Route::Project(3));
    assert_eq!(Route::parse("/project/9999"), Route::Project(9999));
}

#[test]
fn trailing_slashes_are_tolerated() {
    assert_eq!(Route::parse("/project/3/"), Route::Project(3));
}

#[test]
fn non_numeric_ids_resolve_to_not_found() {
    assert_eq!(Route::parse("/project/junk"), Route::NotFound);
    assert_eq!(Route::parse("/project/"), Route::NotFound);
    assert_eq!(Route::parse("/project/-1"), Route::NotFound);
}

#[test]
fn unknown_paths_resolve_to_not_found() {
    assert_eq!(Route::parse("/nope"), Route::NotFound);
    assert_eq!(Route::parse("/project"), Route::NotFound);
    assert_eq!(Route::parse("/projects/1"), Route::NotFound);
}

#[test]
fn strict_parse_distinguishes_the_failure_modes() {
    assert!(matches!(
        Route::try_parse("/project/junk"),
        Err(RouteError::BadProjectId(_))
    ));
    assert!(matches!(
        Route::try_parse("/elsewhere"),
        Err(RouteError::UnknownPath(_))
    ));
}

#[test]
fn routes_round_trip_through_their_paths() {
    for route in [Route::Home, Route::Project(1), Route::Project(42)] {
        assert_eq!(Route::parse(&route.path()), route);
    }
}
