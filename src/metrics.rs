use serde::Serialize;

use crate::dataset::{find_team, TeamStat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Yardage,
    Penalties,
    TwoPointConversions,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Yardage, Metric::Penalties, Metric::TwoPointConversions];

    pub fn value_of(self, team: &TeamStat) -> u32 {
        match self {
            Metric::Yardage => team.yardage,
            Metric::Penalties => team.penalties,
            Metric::TwoPointConversions => team.two_point_conversions,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Metric::Yardage => "yardage",
            Metric::Penalties => "penalties",
            Metric::TwoPointConversions => "twoPointConversions",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Yardage => "Total Yardage",
            Metric::Penalties => "Penalties",
            Metric::TwoPointConversions => "2-Point Conversions",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Metric::Yardage => "Lower yardage with higher wins indicates offensive efficiency",
            Metric::Penalties => "Fewer penalties show disciplined gameplay",
            Metric::TwoPointConversions => "Strategic scoring decisions",
        }
    }

    pub fn format(self, value: u32) -> String {
        match self {
            Metric::Yardage => format!("{} yards", group_thousands(value)),
            Metric::Penalties => format!("{value} penalties"),
            Metric::TwoPointConversions => format!("{value} conversions"),
        }
    }

    pub fn next(self) -> Metric {
        match self {
            Metric::Yardage => Metric::Penalties,
            Metric::Penalties => Metric::TwoPointConversions,
            Metric::TwoPointConversions => Metric::Yardage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    pub team: &'static str,
    pub value: u32,
    pub rank: usize,
    pub team_count: usize,
    pub league_average: f64,
    pub percent_diff: f64,
}

impl MetricSummary {
    pub fn value_label(&self) -> String {
        self.metric.format(self.value)
    }

    /// `#rank of N`, where N is the number of rows that were ranked rather
    /// than a fixed 32-team league. The bundled table has 30 rows, so KC's
    /// yardage reads `#30 of 30`, not `#30 of 32`.
    pub fn rank_label(&self) -> String {
        format!("#{} of {}", self.rank, self.team_count)
    }

    pub fn percent_label(&self) -> String {
        format_percent_diff(self.percent_diff)
    }

    pub fn above_average(&self) -> bool {
        self.percent_diff > 0.0
    }
}

/// Standing of `team_code` for `metric` against every team in `teams`.
///
/// Returns `None` when the team is not in the table.
pub fn summarize(teams: &[TeamStat], metric: Metric, team_code: &str) -> Option<MetricSummary> {
    let focus = find_team(teams, team_code)?;
    let value = metric.value_of(focus);
    let rank = rank_of(teams, metric, focus.team)?;
    let league_average = league_average(teams, metric);
    Some(MetricSummary {
        metric,
        team: focus.team,
        value,
        rank,
        team_count: teams.len(),
        league_average,
        percent_diff: percent_diff(value as f64, league_average),
    })
}

/// 1-based position after a stable descending sort; ties keep input order.
pub fn rank_of(teams: &[TeamStat], metric: Metric, team_code: &str) -> Option<usize> {
    let mut sorted: Vec<&TeamStat> = teams.iter().collect();
    sorted.sort_by(|a, b| metric.value_of(b).cmp(&metric.value_of(a)));
    sorted
        .iter()
        .position(|t| t.team.eq_ignore_ascii_case(team_code))
        .map(|idx| idx + 1)
}

pub fn league_average(teams: &[TeamStat], metric: Metric) -> f64 {
    if teams.is_empty() {
        return 0.0;
    }
    let total: u64 = teams.iter().map(|t| metric.value_of(t) as u64).sum();
    total as f64 / teams.len() as f64
}

pub fn percent_diff(value: f64, average: f64) -> f64 {
    if average == 0.0 || !average.is_finite() {
        return 0.0;
    }
    (value - average) / average * 100.0
}

pub fn format_percent_diff(diff: f64) -> String {
    if diff > 0.0 {
        format!("+{diff:.1}%")
    } else {
        format!("{diff:.1}%")
    }
}

/// Input for a bar chart: one bar per team, the team of interest flagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub labels: Vec<&'static str>,
    pub values: Vec<u32>,
    pub highlight: Vec<bool>,
}

impl ChartSeries {
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn chart_series(teams: &[TeamStat], metric: Metric, team_code: &str) -> ChartSeries {
    ChartSeries {
        title: metric.title(),
        labels: teams.iter().map(|t| t.team).collect(),
        values: teams.iter().map(|t| metric.value_of(t)).collect(),
        highlight: teams
            .iter()
            .map(|t| t.team.eq_ignore_ascii_case(team_code))
            .collect(),
    }
}

pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
