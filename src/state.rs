use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dataset::{QuarterbackEntry, TeamStat, FACTS, TEAM_STATS};
use crate::metrics::{self, ChartSeries, Metric, MetricSummary};
use crate::qb_track::{QbBoard, Season, SelectionChange, TrackConfig};
use crate::scroll::{PageLayout, PageScroll, RevealTracker, Section};
use crate::settings::PageSettings;
use crate::trivia::TriviaPicker;

const MAX_LOGS: usize = 200;

/// Sections whose entrance is driven by scroll progress.
pub const TRACKED_SECTIONS: [Section; 5] = [
    Section::About,
    Section::Legacy,
    Section::Performance,
    Section::Strategy,
    Section::Quarterbacks,
];

/// What the user has picked. Everything shown on the page derives from this
/// plus the static tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub metric: Metric,
    pub season: Season,
    pub quarterback: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            metric: Metric::Yardage,
            season: Season::S2023,
            quarterback: None,
        }
    }
}

pub fn derive_metric(
    selection: &SelectionState,
    teams: &[TeamStat],
    team_of_interest: &str,
) -> Option<MetricSummary> {
    metrics::summarize(teams, selection.metric, team_of_interest)
}

/// Resting offset for the selected quarterback, if they played in the
/// selected season.
pub fn derive_offset(
    selection: &SelectionState,
    roster: &[&QuarterbackEntry],
    config: &TrackConfig,
) -> Option<f64> {
    let name = selection.quarterback.as_deref()?;
    roster
        .iter()
        .find(|qb| qb.name == name && qb.season == selection.season)
        .map(|qb| config.offset(qb.playoff_yards))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    ScrollBy(i32),
    ScrollToTop,
    ScrollToBottom,
    ScrollTo(Section),
    Resize { viewport_height: u16 },
    SelectMetric(Metric),
    CycleMetric,
    SelectSeason(Season),
    NextSeason,
    PrevSeason,
    MoveQbCursor(isize),
    ToggleQbAtCursor,
    ToggleQb(String),
    RequestTrivia,
    ToggleHelp,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: PageSettings,
    pub layout: PageLayout,
    pub scroll: PageScroll,
    pub trackers: Vec<RevealTracker>,
    pub metric: Metric,
    pub board: QbBoard,
    pub trivia: TriviaPicker,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    rng: StdRng,
}

impl AppState {
    pub fn new(settings: PageSettings, viewport_height: u16) -> Self {
        let rng = match settings.trivia_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let defaults = SelectionState::default();
        let layout = PageLayout::for_viewport(viewport_height);
        let mut state = Self {
            layout,
            scroll: PageScroll::default(),
            trackers: TRACKED_SECTIONS.into_iter().map(RevealTracker::new).collect(),
            metric: defaults.metric,
            board: QbBoard::new(defaults.season, settings.track),
            trivia: TriviaPicker::new(&FACTS, settings.trivia_delay),
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
            settings,
            rng,
        };
        state.refresh_progress();
        state
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn selection(&self) -> SelectionState {
        SelectionState {
            metric: self.metric,
            season: self.board.season(),
            quarterback: self.board.selection().selected().map(str::to_string),
        }
    }

    pub fn metric_summary(&self) -> Option<MetricSummary> {
        derive_metric(&self.selection(), &TEAM_STATS, &self.settings.team_of_interest)
    }

    pub fn chart_series(&self) -> ChartSeries {
        metrics::chart_series(&TEAM_STATS, self.metric, &self.settings.team_of_interest)
    }

    pub fn selected_offset(&self) -> Option<f64> {
        derive_offset(&self.selection(), self.board.roster(), &self.board.config)
    }

    /// Reveal progress of a tracked section; untracked sections report `None`.
    pub fn progress(&self, section: Section) -> Option<f32> {
        self.trackers
            .iter()
            .find(|t| t.section == section)
            .map(|t| t.progress())
    }

    pub fn current_section(&self) -> Option<Section> {
        self.layout.section_at(self.scroll.offset())
    }

    pub fn refresh_progress(&mut self) {
        let offset = self.scroll.offset();
        for tracker in &mut self.trackers {
            tracker.update(&self.layout, offset);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
            || self.trivia.is_loading()
            || self.board.markers().iter().any(|m| m.is_animating())
    }
}

pub fn apply_action(state: &mut AppState, action: PageAction, now: Instant) {
    match action {
        PageAction::ScrollBy(delta) => {
            if state.scroll.scroll_by(delta, &state.layout) {
                state.refresh_progress();
            }
        }
        PageAction::ScrollToTop => {
            if state.scroll.jump_to(0, &state.layout) {
                state.refresh_progress();
            }
        }
        PageAction::ScrollToBottom => {
            let bottom = state.layout.max_scroll();
            if state.scroll.jump_to(bottom, &state.layout) {
                state.refresh_progress();
            }
        }
        PageAction::ScrollTo(section) => {
            state.scroll.smooth_to(section, &state.layout);
        }
        PageAction::Resize { viewport_height } => {
            if viewport_height == state.layout.viewport_height {
                return;
            }
            state.layout = PageLayout::for_viewport(viewport_height);
            state.scroll.clamp_to(&state.layout);
            state.refresh_progress();
        }
        PageAction::SelectMetric(metric) => set_metric(state, metric),
        PageAction::CycleMetric => {
            let next = state.metric.next();
            set_metric(state, next);
        }
        PageAction::SelectSeason(season) => set_season(state, season),
        PageAction::NextSeason => {
            let next = state.board.season().next();
            set_season(state, next);
        }
        PageAction::PrevSeason => {
            let prev = state.board.season().prev();
            set_season(state, prev);
        }
        PageAction::MoveQbCursor(delta) => state.board.move_cursor(delta),
        PageAction::ToggleQbAtCursor => {
            if let Some(change) = state.board.toggle_at_cursor() {
                log_selection(state, &change);
            }
        }
        PageAction::ToggleQb(name) => {
            if !state.board.roster().iter().any(|qb| qb.name == name) {
                state.push_log(format!(
                    "[WARN] {name} has no {} playoff entry",
                    state.board.season().year()
                ));
                return;
            }
            let change = state.board.toggle(&name);
            log_selection(state, &change);
        }
        PageAction::RequestTrivia => {
            let superseded = state.trivia.is_loading();
            state.trivia.request(now);
            if superseded {
                state.push_log("[INFO] Fun fact request restarted");
            } else {
                state.push_log("[INFO] Fetching a fun fact");
            }
        }
        PageAction::ToggleHelp => state.help_overlay = !state.help_overlay,
    }
}

/// Advance everything time-driven: smooth scroll, quarterback markers and the
/// trivia deadline.
pub fn tick(state: &mut AppState, now: Instant, dt: Duration) {
    if state.scroll.tick() {
        state.refresh_progress();
    }
    state.board.tick(dt);
    if let Some(fact) = state.trivia.poll(now, &mut state.rng) {
        let index = state
            .trivia
            .facts()
            .iter()
            .position(|f| *f == fact)
            .unwrap_or_default();
        state.push_log(format!("[INFO] Fun fact #{} loaded", index + 1));
    }
}

fn set_metric(state: &mut AppState, metric: Metric) {
    if state.metric == metric {
        return;
    }
    state.metric = metric;
    match state.metric_summary() {
        Some(summary) => state.push_log(format!(
            "[INFO] {}: {} ({})",
            metric.title(),
            summary.value_label(),
            summary.rank_label()
        )),
        None => state.push_log(format!(
            "[WARN] {} not found in league table",
            state.settings.team_of_interest
        )),
    }
}

fn set_season(state: &mut AppState, season: Season) {
    if state.board.set_season(season) {
        state.push_log(format!("[INFO] Season {}", season.year()));
    }
}

fn log_selection(state: &mut AppState, change: &SelectionChange) {
    let msg = match change {
        SelectionChange::Selected(name) => format!("[INFO] Selected {name}"),
        SelectionChange::Switched { from, to } => format!("[INFO] Switched {from} -> {to}"),
        SelectionChange::Cleared(name) => format!("[INFO] Cleared {name}"),
    };
    state.push_log(msg);
}
