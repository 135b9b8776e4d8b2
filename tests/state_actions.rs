use std::time::{Duration, Instant};

use chiefs_nation::dataset::FACTS;
use chiefs_nation::metrics::Metric;
use chiefs_nation::qb_track::{MAX_YARDS, Season, TRACK_WIDTH, roster_for};
use chiefs_nation::scroll::Section;
use chiefs_nation::settings::{PageSettings, SCALE_LIMIT};
use chiefs_nation::state::{
    AppState, PageAction, SelectionState, apply_action, derive_metric, derive_offset, tick,
};

fn seeded() -> AppState {
    let settings = PageSettings {
        trivia_seed: Some(11),
        ..PageSettings::default()
    };
    AppState::new(settings, 40)
}

fn last_log(state: &AppState) -> &str {
    state.logs.back().map(String::as_str).unwrap_or_default()
}

#[test]
fn metric_cycle_updates_summary_and_logs() {
    let mut state = seeded();
    let now = Instant::now();
    assert_eq!(state.metric, Metric::Yardage);

    apply_action(&mut state, PageAction::CycleMetric, now);
    assert_eq!(state.metric, Metric::Penalties);
    let summary = state.metric_summary().expect("KC summary");
    assert_eq!(summary.rank, 17);
    assert_eq!(last_log(&state), "[INFO] Penalties: 96 penalties (#17 of 30)");

    apply_action(&mut state, PageAction::CycleMetric, now);
    apply_action(&mut state, PageAction::CycleMetric, now);
    assert_eq!(state.metric, Metric::Yardage);

    let logged = state.logs.len();
    apply_action(&mut state, PageAction::SelectMetric(Metric::Yardage), now);
    assert_eq!(state.logs.len(), logged);
}

#[test]
fn unknown_team_logs_warning() {
    let settings = PageSettings {
        team_of_interest: "XYZ".to_string(),
        ..PageSettings::default()
    };
    let mut state = AppState::new(settings, 40);
    apply_action(&mut state, PageAction::SelectMetric(Metric::Penalties), Instant::now());
    assert!(state.metric_summary().is_none());
    assert_eq!(last_log(&state), "[WARN] XYZ not found in league table");
}

#[test]
fn season_navigation_wraps() {
    let mut state = seeded();
    let now = Instant::now();
    assert_eq!(state.board.season(), Season::S2023);

    apply_action(&mut state, PageAction::NextSeason, now);
    assert_eq!(state.board.season(), Season::S2020);
    assert_eq!(last_log(&state), "[INFO] Season 2020");

    apply_action(&mut state, PageAction::PrevSeason, now);
    apply_action(&mut state, PageAction::PrevSeason, now);
    assert_eq!(state.board.season(), Season::S2021);
}

#[test]
fn toggling_unknown_quarterback_warns() {
    let mut state = seeded();
    apply_action(&mut state, PageAction::ToggleQb("Tom Brady".to_string()), Instant::now());
    assert!(state.board.selection().selected().is_none());
    assert_eq!(last_log(&state), "[WARN] Tom Brady has no 2023 playoff entry");
}

#[test]
fn quarterback_selection_drives_offset() {
    let mut state = seeded();
    let now = Instant::now();
    apply_action(&mut state, PageAction::ToggleQbAtCursor, now);
    assert_eq!(last_log(&state), "[INFO] Selected Patrick Mahomes");
    let offset = state.selected_offset().expect("Mahomes offset");
    assert!((offset - 560.0).abs() < 1e-9);

    apply_action(&mut state, PageAction::MoveQbCursor(1), now);
    apply_action(&mut state, PageAction::ToggleQbAtCursor, now);
    assert_eq!(last_log(&state), "[INFO] Switched Patrick Mahomes -> Jared Goff");
    let offset = state.selected_offset().expect("Goff offset");
    assert!((offset - 616.0).abs() < 1e-9);

    apply_action(&mut state, PageAction::ToggleQb("Jared Goff".to_string()), now);
    assert_eq!(last_log(&state), "[INFO] Cleared Jared Goff");
    assert_eq!(state.selected_offset(), None);
}

#[test]
fn trivia_resolves_after_ticks() {
    let mut state = seeded();
    let start = Instant::now();
    apply_action(&mut state, PageAction::RequestTrivia, start);
    assert_eq!(last_log(&state), "[INFO] Fetching a fun fact");
    assert!(state.is_animating());

    apply_action(&mut state, PageAction::RequestTrivia, start + Duration::from_millis(300));
    assert_eq!(last_log(&state), "[INFO] Fun fact request restarted");

    tick(&mut state, start + Duration::from_millis(1100), Duration::from_millis(33));
    assert!(state.trivia.is_loading());

    tick(&mut state, start + Duration::from_millis(1300), Duration::from_millis(33));
    let fact = state.trivia.fact().expect("fact loaded");
    let index = FACTS.iter().position(|f| *f == fact).expect("fact from table");
    assert_eq!(last_log(&state), format!("[INFO] Fun fact #{} loaded", index + 1));
}

#[test]
fn scroll_and_resize_refresh_progress() {
    let mut state = seeded();
    let now = Instant::now();
    assert_eq!(state.progress(Section::About), Some(0.0));
    assert_eq!(state.progress(Section::Welcome), None);

    apply_action(&mut state, PageAction::ScrollBy(30), now);
    assert_eq!(state.scroll.offset(), 30);
    assert_eq!(state.progress(Section::About), Some(1.0));
    assert_eq!(state.current_section(), Some(Section::Welcome));

    apply_action(&mut state, PageAction::ScrollToBottom, now);
    assert_eq!(state.scroll.offset(), state.layout.max_scroll());
    assert_eq!(state.current_section(), Some(Section::Quarterbacks));

    apply_action(&mut state, PageAction::Resize { viewport_height: 60 }, now);
    assert_eq!(state.layout.viewport_height, 60);
    assert!(state.scroll.offset() <= state.layout.max_scroll());
    assert_eq!(state.progress(Section::Legacy), Some(1.0));

    apply_action(&mut state, PageAction::ScrollToTop, now);
    assert_eq!(state.scroll.offset(), 0);
    assert_eq!(state.progress(Section::Legacy), Some(0.0));
}

#[test]
fn smooth_scroll_reaches_section() {
    let mut state = seeded();
    let start = Instant::now();
    apply_action(&mut state, PageAction::ScrollTo(Section::Strategy), start);
    assert!(state.scroll.is_animating());
    for step in 0..200 {
        tick(&mut state, start + Duration::from_millis(step * 33), Duration::from_millis(33));
    }
    assert!(!state.scroll.is_animating());
    assert_eq!(Some(state.scroll.offset()), state.layout.section_top(Section::Strategy));
    assert_eq!(state.current_section(), Some(Section::Strategy));
}

#[test]
fn derivations_are_pure() {
    let selection = SelectionState {
        metric: Metric::TwoPointConversions,
        season: Season::S2020,
        quarterback: Some("Josh Allen".to_string()),
    };
    let summary = derive_metric(&selection, &chiefs_nation::dataset::TEAM_STATS, "kc")
        .expect("case-insensitive match");
    assert_eq!(summary.rank, 21);

    let config = PageSettings::default().track;
    let roster = roster_for(Season::S2020);
    let offset = derive_offset(&selection, &roster, &config).expect("Allen played in 2020");
    assert!((offset - 272.0 / MAX_YARDS * TRACK_WIDTH).abs() < 1e-9);

    let other = roster_for(Season::S2023);
    assert_eq!(derive_offset(&selection, &other, &config), None);
}

#[test]
fn help_toggles() {
    let mut state = seeded();
    apply_action(&mut state, PageAction::ToggleHelp, Instant::now());
    assert!(state.help_overlay);
    apply_action(&mut state, PageAction::ToggleHelp, Instant::now());
    assert!(!state.help_overlay);
}

#[test]
fn settings_defaults_and_overrides() {
    let defaults = PageSettings::from_lookup(|_| None);
    assert_eq!(defaults, PageSettings::default());
    assert_eq!(defaults.trivia_delay, Duration::from_millis(1000));
    assert_eq!(defaults.team_of_interest, "KC");

    let custom = PageSettings::from_lookup(|key| {
        let val = match key {
            "TRIVIA_DELAY_MS" => "250",
            "TICK_MS" => "5",
            "TRIVIA_SEED" => "99",
            "QB_MAX_YARDS" => "-10",
            "QB_TRACK_WIDTH" => "400",
            "TEAM_OF_INTEREST" => " sf ",
            _ => return None,
        };
        Some(val.to_string())
    });
    assert_eq!(custom.trivia_delay, Duration::from_millis(250));
    assert_eq!(custom.tick_rate, Duration::from_millis(10));
    assert_eq!(custom.trivia_seed, Some(99));
    assert_eq!(custom.track.max_yards, MAX_YARDS);
    assert_eq!(custom.track.track_width, 400.0);
    assert_eq!(custom.team_of_interest, "SF");
}

#[test]
fn oversized_track_knobs_are_capped() {
    let settings = PageSettings::from_lookup(|key| match key {
        "QB_MAX_YARDS" => Some("1e100".to_string()),
        "QB_TRACK_WIDTH" => Some("0.25".to_string()),
        _ => None,
    });
    assert_eq!(settings.track.max_yards, SCALE_LIMIT);
    assert_eq!(settings.track.track_width, 1.0);
}
