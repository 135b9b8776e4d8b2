use std::time::Duration;

use chiefs_nation::qb_track::{
    MAX_YARDS, MarkerPhase, QbBoard, QbSelection, Season, SelectionChange, TRACK_WIDTH,
    TrackConfig, TrackMarker, football_offset, roster_for,
};

fn settle(board: &mut QbBoard) {
    for _ in 0..600 {
        if !board.tick(Duration::from_millis(16)) {
            break;
        }
    }
}

#[test]
fn offset_scales_linearly() {
    assert_eq!(football_offset(0.0, MAX_YARDS, TRACK_WIDTH), 0.0);
    assert_eq!(football_offset(250.0, MAX_YARDS, TRACK_WIDTH), 400.0);
    assert_eq!(football_offset(500.0, MAX_YARDS, TRACK_WIDTH), 800.0);
}

#[test]
fn offset_is_not_clamped_past_max() {
    assert_eq!(football_offset(750.0, MAX_YARDS, TRACK_WIDTH), 1200.0);
}

#[test]
fn zero_max_yards_is_guarded() {
    assert_eq!(football_offset(300.0, 0.0, TRACK_WIDTH), 0.0);
    assert_eq!(football_offset(f64::NAN, MAX_YARDS, TRACK_WIDTH), 0.0);
}

#[test]
fn season_filter_keeps_input_order() {
    let names: Vec<&str> = roster_for(Season::S2023).iter().map(|qb| qb.name).collect();
    assert_eq!(names, ["Patrick Mahomes", "Jared Goff", "Brock Purdy"]);
    let names: Vec<&str> = roster_for(Season::S2021).iter().map(|qb| qb.name).collect();
    assert_eq!(names, ["Patrick Mahomes", "Matthew Stafford", "Joe Burrow"]);
    assert_eq!(Season::from_year(2022), None);
    assert_eq!(Season::from_year(2021), Some(Season::S2021));
}

#[test]
fn selection_toggles_and_switches() {
    let mut selection = QbSelection::default();
    assert_eq!(
        selection.toggle("Jared Goff"),
        SelectionChange::Selected("Jared Goff".to_string())
    );
    assert_eq!(
        selection.toggle("Brock Purdy"),
        SelectionChange::Switched {
            from: "Jared Goff".to_string(),
            to: "Brock Purdy".to_string(),
        }
    );
    assert_eq!(
        selection.toggle("Brock Purdy"),
        SelectionChange::Cleared("Brock Purdy".to_string())
    );
    assert_eq!(selection.selected(), None);
}

#[test]
fn mahomes_2023_settles_at_560() {
    let mut board = QbBoard::new(Season::S2023, TrackConfig::default());
    board.toggle("Patrick Mahomes");
    let idx = board
        .roster()
        .iter()
        .position(|qb| qb.name == "Patrick Mahomes")
        .expect("Mahomes played in 2023");
    match board.markers()[idx].phase() {
        MarkerPhase::Animating { target } => assert!((target - 560.0).abs() < 1e-9),
        other => panic!("expected animation, got {other:?}"),
    }

    settle(&mut board);
    match board.markers()[idx].phase() {
        MarkerPhase::Settled { offset } => assert!((offset - 560.0).abs() < 1e-9),
        other => panic!("expected settled marker, got {other:?}"),
    }
    assert!(!board.markers()[idx].is_animating());
}

#[test]
fn switching_restarts_new_marker_from_zero() {
    let mut board = QbBoard::new(Season::S2023, TrackConfig::default());
    board.toggle("Jared Goff");
    settle(&mut board);

    board.toggle("Brock Purdy");
    let goff = &board.markers()[1];
    let purdy = &board.markers()[2];
    assert_eq!(purdy.position(), 0.0);
    assert!((purdy.target() - 774.0 / 3.0 / 500.0 * 800.0).abs() < 1e-9);
    assert_eq!(goff.target(), 0.0);

    settle(&mut board);
    assert_eq!(board.markers()[1].phase(), MarkerPhase::Resting);
    assert!(matches!(board.markers()[2].phase(), MarkerPhase::Settled { .. }));
}

#[test]
fn season_change_keeps_selection_by_name() {
    let mut board = QbBoard::new(Season::S2023, TrackConfig::default());
    board.toggle("Patrick Mahomes");
    settle(&mut board);

    assert!(board.set_season(Season::S2021));
    let entry = board.selected_entry().expect("Mahomes played in 2021");
    assert_eq!(entry.playoff_yards, 352.0);
    assert_eq!(board.markers()[0].position(), 0.0);
    assert_eq!(board.markers()[0].target(), board.offset_for(entry));

    board.toggle("Patrick Mahomes");
    board.toggle("Matthew Stafford");
    assert!(board.set_season(Season::S2020));
    assert!(board.selected_entry().is_none());
}

#[test]
fn cursor_wraps_around_roster() {
    let mut board = QbBoard::new(Season::S2020, TrackConfig::default());
    board.move_cursor(-1);
    assert_eq!(board.cursor(), 2);
    board.move_cursor(1);
    assert_eq!(board.cursor(), 0);
    assert_eq!(
        board.toggle_at_cursor(),
        Some(SelectionChange::Selected("Patrick Mahomes".to_string()))
    );
}

#[test]
fn idle_marker_does_not_move() {
    let mut marker = TrackMarker::default();
    assert!(!marker.tick(Duration::from_millis(100)));
    assert_eq!(marker.phase(), MarkerPhase::Resting);
}
