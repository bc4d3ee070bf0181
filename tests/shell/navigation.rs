use esg_dashboard::{Route, Shell};

#[test]
fn every_route_round_trips_through_its_path() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::ALL[0], Route::Home);
    assert_eq!(Route::Analysis.to_string(), "/analysis");
}

#[test]
fn paths_are_normalized() {
    assert_eq!(Route::from_path(""), Some(Route::Home));
    assert_eq!(Route::from_path("/"), Some(Route::Home));
    assert_eq!(Route::from_path("/contact/"), Some(Route::Contact));
    assert_eq!(Route::from_path(" /model "), Some(Route::Model));
    assert_eq!(Route::from_path("/Contact"), None);
    assert_eq!(Route::from_path("/analysis/extra"), None);
}

#[test]
fn navigation_closes_the_menu() {
    let mut shell = Shell::new();
    assert_eq!(shell.route(), Route::Home);
    assert!(!shell.menu_open());

    shell.toggle_menu();
    assert!(shell.menu_open());
    assert_eq!(shell.navigate("/validation"), Some(Route::Validation));
    assert_eq!(shell.route(), Route::Validation);
    assert!(!shell.menu_open());
}

#[test]
fn unknown_path_changes_nothing() {
    let mut shell = Shell::new();
    shell.go(Route::Evaluate);
    shell.toggle_menu();

    assert_eq!(shell.navigate("/pricing"), None);
    assert_eq!(shell.route(), Route::Evaluate);
    assert!(shell.menu_open());
}
