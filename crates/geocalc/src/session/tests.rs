use super::*;
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn session_with(points: &[(f64, f64)]) -> Session {
    let mut s = Session::new();
    for &(x, y) in points {
        s.add_point(p(x, y));
    }
    s
}

fn assert_parallel(s: &Session) {
    assert_eq!(s.points().len(), s.point_highlights().len());
    assert_eq!(s.lines().len(), s.line_highlights().len());
}

#[test]
fn parse_commands() {
    assert_eq!(
        Command::parse("add_point 1 2"),
        Ok(Command::AddPoint(p(1.0, 2.0)))
    );
    assert_eq!(
        "add_line 0 0 3.5 -1".parse::<Command>(),
        Ok(Command::AddLine(p(0.0, 0.0), p(3.5, -1.0)))
    );
    assert_eq!(Command::parse("  convex_hull  "), Ok(Command::ConvexHull));
    assert_eq!(Command::parse("set_grid 20"), Ok(Command::SetGrid(20)));
    assert_eq!(Command::parse("random_points 5"), Ok(Command::RandomPoints(5)));
    assert_eq!(Command::parse("help"), Ok(Command::Help));
}

#[test]
fn parse_errors_are_descriptive() {
    assert_eq!(Command::parse(""), Err(CommandError::Empty));
    assert_eq!(
        Command::parse("add_point 1"),
        Err(CommandError::Usage {
            usage: "add_point x y"
        })
    );
    assert_eq!(
        Command::parse("add_point 1 y"),
        Err(CommandError::BadNumber {
            token: "y".to_string()
        })
    );
    assert!(matches!(
        Command::parse("add_point nan 2"),
        Err(CommandError::BadNumber { .. })
    ));
    assert!(matches!(
        Command::parse("set_grid -3"),
        Err(CommandError::BadNumber { .. })
    ));
    assert!(matches!(
        Command::parse("clear_points now"),
        Err(CommandError::Usage { .. })
    ));
    assert_eq!(
        Command::parse("fly 1 2"),
        Err(CommandError::UnknownCommand("fly".to_string()))
    );
}

#[test]
fn add_remove_clear_points_keep_highlights_parallel() {
    let mut s = Session::new();
    assert_eq!(s.run_line("add_point 1 2").level, Level::Success);
    assert_eq!(s.run_line("add_point 3 4").text(), "Point(3, 4) added.");
    assert_parallel(&s);
    assert_eq!(s.run_line("remove_point 1 2").text(), "Point(1, 2) removed.");
    assert_eq!(s.points(), &[p(3.0, 4.0)]);
    assert_parallel(&s);
    let missing = s.run_line("remove_point 9 9");
    assert_eq!(missing.level, Level::Error);
    assert_eq!(s.points().len(), 1);
    s.run_line("clear_points");
    assert!(s.points().is_empty());
    assert_parallel(&s);
}

#[test]
fn malformed_input_does_not_mutate() {
    let mut s = session_with(&[(0.0, 0.0)]);
    let msg = s.run_line("add_point 1");
    assert_eq!(msg.level, Level::UserError);
    assert_eq!(msg.text(), "Invalid format. Usage: add_point x y");
    assert_eq!(s.points().len(), 1);
    assert_eq!(s.run_line("bogus").level, Level::UserError);
}

#[test]
fn degenerate_line_is_reported() {
    let mut s = Session::new();
    let msg = s.run_line("add_line 1 1 1 1");
    assert_eq!(msg.level, Level::Error);
    assert!(msg.text().starts_with("Error adding line:"));
    assert!(s.lines().is_empty());
    assert_parallel(&s);
}

#[test]
fn lines_add_and_remove_by_direction() {
    let mut s = Session::new();
    s.run_line("add_line 0 0 1 1");
    assert_eq!(
        s.run_line("remove_line 1 1 0 0").level,
        Level::Error,
        "reversed line is a different line"
    );
    assert_eq!(s.lines().len(), 1);
    assert_eq!(s.run_line("remove_line 0 0 1 1").level, Level::Success);
    assert!(s.lines().is_empty());
    assert_parallel(&s);
}

#[test]
fn closest_pair_highlights_witnesses() {
    let mut s = session_with(&[(0.0, 0.0), (10.0, 10.0), (3.0, 4.0), (20.0, 0.0)]);
    let msg = s.run_line("closest_pair_of_points");
    assert_eq!(
        msg.text(),
        "(0, 0) and (3, 4) are the closest pair of points with a distance of 5.000."
    );
    assert_eq!(s.point_highlights(), &[true, false, true, false]);
    // The next command clears highlights first.
    s.run_line("help");
    assert!(s.point_highlights().iter().all(|h| !h));
}

#[test]
fn closest_pair_needs_two_points() {
    let mut s = session_with(&[(1.0, 1.0)]);
    assert_eq!(
        s.closest_pair(),
        Err(SessionError::NotEnoughPoints { need: 2, got: 1 })
    );
    assert_eq!(s.run_line("closest_pair_of_points").level, Level::Error);
}

#[test]
fn convex_hull_appends_edges() {
    let mut s = session_with(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
    let msg = s.run_line("convex_hull");
    assert_eq!(msg.text(), "Successfully created convex hull out of 4 points.");
    assert_eq!(s.lines().len(), 4);
    assert_eq!(s.lines()[0], Line::new(p(0.0, 0.0), p(4.0, 0.0)).unwrap());
    assert_eq!(s.lines()[3], Line::new(p(0.0, 4.0), p(0.0, 0.0)).unwrap());
    assert_parallel(&s);
}

#[test]
fn convex_hull_with_too_few_points_changes_nothing() {
    let mut s = session_with(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(
        s.convex_hull(),
        Err(SessionError::Hull(HullError::NotEnoughPoints { got: 2 }))
    );
    let msg = s.run_line("convex_hull");
    assert_eq!(
        msg.text(),
        "Error finding convex hull: Not possible for Convex Hull with less than 3 points."
    );
    assert!(s.lines().is_empty());
}

#[test]
fn largest_empty_circle_is_stored_until_next_command() {
    let mut s = session_with(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
    let msg = s.run_line("largest_empty_circle");
    assert_eq!(
        msg.text(),
        "Largest empty circle has a center of (0.500, 0.500) and radius of 0.707."
    );
    assert_eq!(s.circles().len(), 1);
    s.run_line("add_point 5 5");
    assert!(s.circles().is_empty());
}

#[test]
fn largest_empty_circle_on_collinear_points_fails_cleanly() {
    let mut s = session_with(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(s.largest_empty_circle(), Err(SessionError::NoEmptyCircle));
    assert!(s.circles().is_empty());
}

#[test]
fn line_segment_highlights_intersecting_lines() {
    let mut s = Session::new();
    s.run_line("add_line 1 1 10 10");
    s.run_line("add_line 1 10 10 1");
    s.run_line("add_line 20 20 30 20");
    let msg = s.run_line("line_segment");
    assert_eq!(msg.text(), "2 lines intersect.");
    assert_eq!(s.line_highlights(), &[true, true, false]);
}

#[test]
fn line_segment_needs_two_lines() {
    let mut s = Session::new();
    s.run_line("add_line 0 0 1 0");
    assert_eq!(
        s.line_segment(),
        Err(SessionError::NotEnoughLines { need: 2, got: 1 })
    );
}

#[test]
fn set_grid_rejects_zero() {
    let mut s = Session::new();
    assert_eq!(s.grid_size(), DEFAULT_GRID_SIZE);
    assert_eq!(s.run_line("set_grid 0").level, Level::Error);
    assert_eq!(s.grid_size(), DEFAULT_GRID_SIZE);
    s.run_line("set_grid 25");
    assert_eq!(s.grid_size(), 25);
}

#[test]
fn random_points_are_seeded_per_session() {
    let mut a = Session::with_seed(9);
    let mut b = Session::with_seed(9);
    a.run_line("random_points 10");
    b.run_line("random_points 10");
    assert_eq!(a.points(), b.points());
    a.run_line("random_points 10");
    assert_eq!(a.points().len(), 20);
    assert_ne!(a.points()[..10], a.points()[10..]);
    assert_parallel(&a);
}

#[test]
fn oversized_random_points_request_is_a_user_error() {
    let mut s = Session::with_seed(1);
    let msg = s.run_line("random_points 18446744073709551615");
    assert_eq!(msg.level, Level::UserError);
    assert!(s.points().is_empty());
    assert!(matches!(
        Command::parse(&format!("random_points {}", crate::cfg::MAX_RANDOM_POINTS + 1)),
        Err(CommandError::TooLarge { .. })
    ));
    assert_eq!(
        Command::parse(&format!("random_points {}", crate::cfg::MAX_RANDOM_POINTS)),
        Ok(Command::RandomPoints(crate::cfg::MAX_RANDOM_POINTS))
    );
    assert_eq!(s.add_random_points(usize::MAX).len(), crate::cfg::MAX_RANDOM_POINTS);
    assert_parallel(&s);
}

#[test]
fn rejected_command_still_clears_annotations() {
    let mut s = session_with(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
    s.closest_pair().unwrap();
    s.largest_empty_circle().unwrap();
    assert!(s.point_highlights().iter().any(|h| *h));
    assert_eq!(s.circles().len(), 1);
    assert_eq!(s.run_line("add_point 1").level, Level::UserError);
    assert!(s.circles().is_empty());
    assert!(s.point_highlights().iter().all(|h| !h));
    s.run_line("closest_pair_of_points");
    assert_eq!(s.run_line("fly").level, Level::UserError);
    assert!(s.point_highlights().iter().all(|h| !h));
}

#[test]
fn help_lists_commands() {
    let msg = Session::new().run_line("help");
    assert_eq!(msg.level, Level::Info);
    assert_eq!(msg.lines.len(), HELP.len());
}

#[test]
fn snapshot_layout() {
    let mut s = session_with(&[(1.0, 2.0), (3.0, 4.0), (0.0, 0.0)]);
    s.add_line(Line::new(p(0.0, 0.0), p(5.0, 5.0)).unwrap());
    s.run_line("closest_pair_of_points");
    let json = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(json["points"]["x"], serde_json::json!([1.0, 3.0, 0.0]));
    assert_eq!(
        json["points"]["is_highlighted"],
        serde_json::json!([true, false, true])
    );
    assert_eq!(json["lines"]["end_y"], serde_json::json!([5.0]));
    assert_eq!(json["circles"]["radius"], serde_json::json!([]));
    assert_eq!(json["grid_size"], serde_json::json!(10));
}

fn any_command() -> impl Strategy<Value = String> {
    let coord = || -5i32..5;
    prop_oneof![
        (coord(), coord()).prop_map(|(x, y)| format!("add_point {x} {y}")),
        (coord(), coord()).prop_map(|(x, y)| format!("remove_point {x} {y}")),
        (coord(), coord(), coord(), coord())
            .prop_map(|(a, b, c, d)| format!("add_line {a} {b} {c} {d}")),
        (coord(), coord(), coord(), coord())
            .prop_map(|(a, b, c, d)| format!("remove_line {a} {b} {c} {d}")),
        Just("clear_points".to_string()),
        Just("clear_lines".to_string()),
        Just("closest_pair_of_points".to_string()),
        Just("convex_hull".to_string()),
        Just("largest_empty_circle".to_string()),
        Just("line_segment".to_string()),
        (0usize..4).prop_map(|n| format!("random_points {n}")),
        Just("add_point x".to_string()),
    ]
}

proptest! {
    #[test]
    fn highlights_stay_parallel_under_any_command_sequence(
        cmds in proptest::collection::vec(any_command(), 0..40)
    ) {
        let mut s = Session::with_seed(1);
        for c in &cmds {
            s.run_line(c);
            prop_assert_eq!(s.points().len(), s.point_highlights().len());
            prop_assert_eq!(s.lines().len(), s.line_highlights().len());
        }
    }
}
