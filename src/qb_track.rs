use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::dataset::{QuarterbackEntry, QUARTERBACKS};

pub const MAX_YARDS: f64 = 500.0;
pub const TRACK_WIDTH: f64 = 800.0;

const SPRING_STIFFNESS: f64 = 100.0;
const SPRING_DAMPING: f64 = 10.0;
const SPRING_MASS: f64 = 1.0;
const SETTLE_DISTANCE: f64 = 0.5;
const SETTLE_VELOCITY: f64 = 1.0;
const MAX_STEP_SECS: f64 = 1.0 / 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    S2020,
    S2021,
    S2023,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::S2020, Season::S2021, Season::S2023];

    pub fn year(self) -> u16 {
        match self {
            Season::S2020 => 2020,
            Season::S2021 => 2021,
            Season::S2023 => 2023,
        }
    }

    pub fn from_year(year: u16) -> Option<Season> {
        Season::ALL.into_iter().find(|s| s.year() == year)
    }

    pub fn next(self) -> Season {
        match self {
            Season::S2020 => Season::S2021,
            Season::S2021 => Season::S2023,
            Season::S2023 => Season::S2020,
        }
    }

    pub fn prev(self) -> Season {
        match self {
            Season::S2020 => Season::S2023,
            Season::S2021 => Season::S2020,
            Season::S2023 => Season::S2021,
        }
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.year())
    }
}

/// Horizontal displacement for a yardage value along a fixed-width track.
///
/// Values above `max_yards` are not clamped and land past the track end.
pub fn football_offset(yards: f64, max_yards: f64, track_width: f64) -> f64 {
    if !yards.is_finite() || !max_yards.is_finite() || !track_width.is_finite() {
        return 0.0;
    }
    if max_yards <= 0.0 {
        return 0.0;
    }
    (yards / max_yards) * track_width
}

pub fn roster_for(season: Season) -> Vec<&'static QuarterbackEntry> {
    QUARTERBACKS.iter().filter(|qb| qb.season == season).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackConfig {
    pub max_yards: f64,
    pub track_width: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            max_yards: MAX_YARDS,
            track_width: TRACK_WIDTH,
        }
    }
}

impl TrackConfig {
    pub fn offset(&self, yards: f64) -> f64 {
        football_offset(yards, self.max_yards, self.track_width)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(String),
    Switched { from: String, to: String },
    Cleared(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QbSelection {
    selected: Option<String>,
}

impl QbSelection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.as_deref() == Some(name)
    }

    /// Clicking the current pick clears it; any other name replaces it.
    pub fn toggle(&mut self, name: &str) -> SelectionChange {
        match self.selected.take() {
            Some(current) if current == name => SelectionChange::Cleared(current),
            Some(current) => {
                self.selected = Some(name.to_string());
                SelectionChange::Switched {
                    from: current,
                    to: name.to_string(),
                }
            }
            None => {
                self.selected = Some(name.to_string());
                SelectionChange::Selected(name.to_string())
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerPhase {
    Resting,
    Animating { target: f64 },
    Settled { offset: f64 },
}

/// Spring-driven marker position along one card's track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMarker {
    position: f64,
    velocity: f64,
    target: f64,
    animating: bool,
}

impl Default for TrackMarker {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            animating: false,
        }
    }
}

impl TrackMarker {
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn phase(&self) -> MarkerPhase {
        if self.animating {
            MarkerPhase::Animating {
                target: self.target,
            }
        } else if self.position == 0.0 && self.target == 0.0 {
            MarkerPhase::Resting
        } else {
            MarkerPhase::Settled {
                offset: self.position,
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn aim(&mut self, target: f64) {
        self.target = target;
        self.animating = self.position != target || self.velocity != 0.0;
    }

    /// Advance the spring by `dt`. Returns true while still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.animating {
            return false;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let accel = (-SPRING_STIFFNESS * displacement - SPRING_DAMPING * self.velocity) / SPRING_MASS;
            self.velocity += accel * step;
            self.position += self.velocity * step;
            remaining -= step;
        }
        if (self.position - self.target).abs() < SETTLE_DISTANCE && self.velocity.abs() < SETTLE_VELOCITY {
            self.position = self.target;
            self.velocity = 0.0;
            self.animating = false;
        }
        self.animating
    }

    /// Jump straight to the resting point.
    pub fn settle(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.animating = false;
    }
}

/// Quarterback comparison widget: season filter, card cursor, selection and
/// one marker per visible card.
#[derive(Debug, Clone)]
pub struct QbBoard {
    pub config: TrackConfig,
    season: Season,
    roster: Vec<&'static QuarterbackEntry>,
    markers: Vec<TrackMarker>,
    cursor: usize,
    selection: QbSelection,
}

impl QbBoard {
    pub fn new(season: Season, config: TrackConfig) -> Self {
        let roster = roster_for(season);
        let markers = vec![TrackMarker::default(); roster.len()];
        Self {
            config,
            season,
            roster,
            markers,
            cursor: 0,
            selection: QbSelection::default(),
        }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn roster(&self) -> &[&'static QuarterbackEntry] {
        &self.roster
    }

    pub fn markers(&self) -> &[TrackMarker] {
        &self.markers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> &QbSelection {
        &self.selection
    }

    /// Selected quarterback's entry for the current season, if that passer
    /// played in it.
    pub fn selected_entry(&self) -> Option<&'static QuarterbackEntry> {
        let name = self.selection.selected()?;
        self.roster.iter().copied().find(|qb| qb.name == name)
    }

    pub fn offset_for(&self, entry: &QuarterbackEntry) -> f64 {
        self.config.offset(entry.playoff_yards)
    }

    /// Cards remount on a season change, so every marker starts from 0. The
    /// selection survives by name.
    pub fn set_season(&mut self, season: Season) -> bool {
        if season == self.season {
            return false;
        }
        self.season = season;
        self.roster = roster_for(season);
        self.markers = vec![TrackMarker::default(); self.roster.len()];
        self.cursor = self.cursor.min(self.roster.len().saturating_sub(1));
        self.retarget();
        true
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.roster.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = (self.cursor as isize + delta).rem_euclid(len as isize);
        self.cursor = next as usize;
    }

    pub fn toggle_at_cursor(&mut self) -> Option<SelectionChange> {
        let name = self.roster.get(self.cursor)?.name;
        Some(self.toggle(name))
    }

    pub fn toggle(&mut self, name: &str) -> SelectionChange {
        let change = self.selection.toggle(name);
        if let SelectionChange::Switched { to, .. } | SelectionChange::Selected(to) = &change
            && let Some(idx) = self.roster.iter().position(|qb| qb.name == to.as_str())
        {
            self.markers[idx].reset();
        }
        self.retarget();
        change
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut moving = false;
        for marker in &mut self.markers {
            moving |= marker.tick(dt);
        }
        moving
    }

    pub fn settle_all(&mut self) {
        for marker in &mut self.markers {
            marker.settle();
        }
    }

    fn retarget(&mut self) {
        for (idx, qb) in self.roster.iter().enumerate() {
            let target = if self.selection.is_selected(qb.name) {
                self.config.offset(qb.playoff_yards)
            } else {
                0.0
            };
            self.markers[idx].aim(target);
        }
    }
}
