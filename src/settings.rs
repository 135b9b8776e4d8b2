use std::env;
use std::time::Duration;

use crate::dataset::TEAM_OF_INTEREST;
use crate::qb_track::{TrackConfig, MAX_YARDS, TRACK_WIDTH};
use crate::trivia::DEFAULT_DELAY;

/// Upper bound for the yardage scale and track width knobs.
pub const SCALE_LIMIT: f64 = 100_000.0;

/// Runtime knobs, read from the process environment (after `.env` loading).
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub trivia_delay: Duration,
    pub tick_rate: Duration,
    pub trivia_seed: Option<u64>,
    pub track: TrackConfig,
    pub team_of_interest: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            trivia_delay: DEFAULT_DELAY,
            tick_rate: Duration::from_millis(33),
            trivia_seed: None,
            track: TrackConfig::default(),
            team_of_interest: TEAM_OF_INTEREST.to_string(),
        }
    }
}

impl PageSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let trivia_delay = lookup("TRIVIA_DELAY_MS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.trivia_delay);
        let tick_rate = Duration::from_millis(
            lookup("TICK_MS")
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(33)
                .clamp(10, 250),
        );
        let trivia_seed = lookup("TRIVIA_SEED").and_then(|val| val.trim().parse::<u64>().ok());
        let max_yards = positive_f64(lookup("QB_MAX_YARDS"))
            .unwrap_or(MAX_YARDS)
            .clamp(1.0, SCALE_LIMIT);
        let track_width = positive_f64(lookup("QB_TRACK_WIDTH"))
            .unwrap_or(TRACK_WIDTH)
            .clamp(1.0, SCALE_LIMIT);
        let team_of_interest = lookup("TEAM_OF_INTEREST")
            .map(|val| val.trim().to_uppercase())
            .filter(|val| !val.is_empty())
            .unwrap_or(defaults.team_of_interest);

        Self {
            trivia_delay,
            tick_rate,
            trivia_seed,
            track: TrackConfig {
                max_yards,
                track_width,
            },
            team_of_interest,
        }
    }
}

fn positive_f64(raw: Option<String>) -> Option<f64> {
    raw.and_then(|val| val.trim().parse::<f64>().ok())
        .filter(|val| val.is_finite() && *val > 0.0)
}
