use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use chiefs_nation::dataset::TEAM_STATS;
use chiefs_nation::metrics::{self, ChartSeries, Metric, MetricSummary};
use chiefs_nation::qb_track::{Season, roster_for};
use chiefs_nation::settings::PageSettings;

#[derive(Debug, Serialize)]
struct MetricSnapshot {
    key: &'static str,
    title: &'static str,
    summary: Option<MetricSummary>,
    value_label: Option<String>,
    rank_label: Option<String>,
    percent_label: Option<String>,
    chart: ChartSeries,
}

#[derive(Debug, Serialize)]
struct QuarterbackSnapshot {
    name: &'static str,
    playoff_yards: f64,
    offset: f64,
}

#[derive(Debug, Serialize)]
struct SeasonSnapshot {
    season: Season,
    quarterbacks: Vec<QuarterbackSnapshot>,
}

#[derive(Debug, Serialize)]
struct PageSnapshot {
    team_of_interest: String,
    max_yards: f64,
    track_width: f64,
    metrics: Vec<MetricSnapshot>,
    seasons: Vec<SeasonSnapshot>,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let settings = PageSettings::from_env();
    let team = settings.team_of_interest.as_str();

    let metrics = Metric::ALL
        .into_iter()
        .map(|metric| {
            let summary = metrics::summarize(&TEAM_STATS, metric, team);
            MetricSnapshot {
                key: metric.key(),
                title: metric.title(),
                value_label: summary.as_ref().map(|s| s.value_label()),
                rank_label: summary.as_ref().map(|s| s.rank_label()),
                percent_label: summary.as_ref().map(|s| s.percent_label()),
                summary,
                chart: metrics::chart_series(&TEAM_STATS, metric, team),
            }
        })
        .collect();

    let seasons = Season::ALL
        .into_iter()
        .map(|season| SeasonSnapshot {
            season,
            quarterbacks: roster_for(season)
                .into_iter()
                .map(|qb| QuarterbackSnapshot {
                    name: qb.name,
                    playoff_yards: qb.playoff_yards,
                    offset: settings.track.offset(qb.playoff_yards),
                })
                .collect(),
        })
        .collect();

    let snapshot = PageSnapshot {
        team_of_interest: settings.team_of_interest.clone(),
        max_yards: settings.track.max_yards,
        track_width: settings.track.track_width,
        metrics,
        seasons,
    };

    let json = serde_json::to_string_pretty(&snapshot).context("failed to serialize page snapshot")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write page snapshot")?;
    Ok(())
}
