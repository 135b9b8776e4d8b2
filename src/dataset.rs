use serde::Serialize;

use crate::qb_track::Season;

/// Regular-season totals for one franchise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamStat {
    pub team: &'static str,
    pub yardage: u32,
    pub penalties: u32,
    pub two_point_conversions: u32,
}

/// Playoff averages for one quarterback in one season. The same passer can
/// appear once per season, so identity is (name, season).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuarterbackEntry {
    pub name: &'static str,
    pub season: Season,
    pub playoff_yards: f64,
    pub completion: &'static str,
    pub touchdowns: &'static str,
    pub interceptions: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub caption: &'static str,
}

/// Bar values for one labelled play-type series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationSeries {
    pub label: &'static str,
    pub values: [u64; 3],
}

pub const TEAM_OF_INTEREST: &str = "KC";

pub const FORMATIONS: [&str; 3] = ["Shotgun", "No Huddle", "Standard"];

pub const FORMATION_USAGE: FormationSeries = FormationSeries {
    label: "Percentage of Each Type of Play (%)",
    values: [65, 20, 15],
};

pub const FORMATION_SUCCESS: [FormationSeries; 2] = [
    FormationSeries {
        label: "Successful Plays",
        values: [42, 15, 12],
    },
    FormationSeries {
        label: "Unsuccessful Plays",
        values: [23, 5, 3],
    },
];

const fn team(
    team: &'static str,
    yardage: u32,
    penalties: u32,
    two_point_conversions: u32,
) -> TeamStat {
    TeamStat {
        team,
        yardage,
        penalties,
        two_point_conversions,
    }
}

pub static TEAM_STATS: [TeamStat; 30] = [
    team("ARI", 38995, 106, 14),
    team("ATL", 39473, 90, 5),
    team("BAL", 39515, 96, 3),
    team("BUF", 39379, 89, 4),
    team("CAR", 41349, 108, 5),
    team("KC", 38163, 96, 3),
    team("CIN", 40251, 102, 6),
    team("CLE", 39950, 110, 2),
    team("DAL", 40600, 93, 4),
    team("DEN", 38700, 94, 5),
    team("DET", 40450, 91, 7),
    team("GB", 39500, 90, 3),
    team("HOU", 39700, 88, 3),
    team("IND", 40000, 95, 4),
    team("JAC", 39200, 89, 5),
    team("LA", 38950, 104, 2),
    team("LAC", 39850, 98, 3),
    team("MIN", 40500, 107, 4),
    team("NE", 39230, 103, 2),
    team("NO", 40300, 100, 6),
    team("NYG", 38500, 92, 3),
    team("NYJ", 39000, 98, 4),
    team("LV", 40050, 95, 5),
    team("PHI", 42000, 105, 4),
    team("PIT", 39210, 101, 3),
    team("SEA", 40900, 90, 6),
    team("SF", 41500, 94, 5),
    team("TB", 38750, 100, 3),
    team("TEN", 39300, 99, 4),
    team("WAS", 39600, 102, 5),
];

pub static QUARTERBACKS: [QuarterbackEntry; 9] = [
    QuarterbackEntry {
        name: "Patrick Mahomes",
        season: Season::S2020,
        playoff_yards: 283.0,
        completion: "64.9%",
        touchdowns: "1.33",
        interceptions: "0.67",
        image: "mahomes",
    },
    QuarterbackEntry {
        name: "Tom Brady",
        season: Season::S2020,
        playoff_yards: 265.0,
        completion: "58.6%",
        touchdowns: "2.5",
        interceptions: "0.75",
        image: "brady",
    },
    QuarterbackEntry {
        name: "Josh Allen",
        season: Season::S2020,
        playoff_yards: 272.0,
        completion: "64.17%",
        touchdowns: "1.67",
        interceptions: "0.33",
        image: "allen",
    },
    QuarterbackEntry {
        name: "Patrick Mahomes",
        season: Season::S2023,
        playoff_yards: 350.0,
        completion: "69.7%",
        touchdowns: "1.5",
        interceptions: "0.25",
        image: "mahomes",
    },
    QuarterbackEntry {
        name: "Patrick Mahomes",
        season: Season::S2021,
        playoff_yards: 352.0,
        completion: "72.9%",
        touchdowns: "3.67",
        interceptions: "1",
        image: "mahomes",
    },
    QuarterbackEntry {
        name: "Matthew Stafford",
        season: Season::S2021,
        playoff_yards: 297.0,
        completion: "70%",
        touchdowns: "2.25",
        interceptions: "0.75",
        image: "stafford",
    },
    QuarterbackEntry {
        name: "Joe Burrow",
        season: Season::S2021,
        playoff_yards: 276.0,
        completion: "68.3%",
        touchdowns: "1.25",
        interceptions: "0.5",
        image: "burrow",
    },
    QuarterbackEntry {
        name: "Jared Goff",
        season: Season::S2023,
        playoff_yards: 385.0,
        completion: "69.3%",
        touchdowns: "1.33",
        interceptions: "0",
        image: "goff",
    },
    QuarterbackEntry {
        name: "Brock Purdy",
        season: Season::S2023,
        playoff_yards: 774.0 / 3.0,
        completion: "61.1%",
        touchdowns: "1",
        interceptions: "0.33",
        image: "purdy",
    },
];

pub const FACTS: [&str; 5] = [
    "The Kansas City Chiefs were founded in 1960 as the Dallas Texans.",
    "The Chiefs won their first Super Bowl in 1970, led by coach Hank Stram.",
    "Arrowhead Stadium, the Chiefs' home, is one of the loudest stadiums in the NFL.",
    "Patrick Mahomes became the youngest quarterback to win Super Bowl MVP in 2020.",
    "The Chiefs have one of the longest streaks of sell-out games in NFL history.",
];

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "3x Champions",
        caption: "Super Bowl Victories since 2020",
    },
    Highlight {
        title: "Patrick Mahomes",
        caption: "2x NFL MVP",
    },
    Highlight {
        title: "8 Straight",
        caption: "Division Championships",
    },
];

pub const ROSTER_URL: &str = "https://www.chiefs.com/team/players-roster";
pub const SCHEDULE_URL: &str = "https://www.chiefs.com/schedule/";

pub const WELCOME_COPY: &str = "Experience the excitement of Chiefs Kingdom, where tradition meets \
excellence. Led by Patrick Mahomes and coached by Andy Reid, they're writing NFL history.";

pub const ABOUT_COPY: &str = "The Kansas City Chiefs are a professional football team with a rich \
history and a strong tradition of excellence. Established in 1960, the Chiefs are a cornerstone of \
the NFL, known for their passionate fan base, electrifying gameplay, and commitment to community. \
The team boasts a legacy of championship success, including multiple Super Bowl victories, and \
features some of the league's most iconic players and coaches. Based in Kansas City, Missouri, the \
Chiefs bring energy and pride to the field every game day, uniting fans across the nation in their \
pursuit of greatness.";

pub const LEGACY_COPY: &str = "The Chiefs have claimed three Super Bowl championships since 2020, \
cementing their place as one of the NFL's most dominant teams.";

pub const LEGACY_QUESTION: &str = "What makes them so successful in recent years?";

pub const EFFICIENCY_COPY: &str = "While many teams accumulate more total yards, the Chiefs' \
efficiency in converting opportunities into points demonstrates that quality of plays matters more \
than quantity.";

pub const STRATEGY_NOTES: [Highlight; 3] = [
    Highlight {
        title: "Mahomes Magic",
        caption: "Under Patrick Mahomes' leadership, the shotgun formation becomes a lethal weapon, \
allowing for quick reads and explosive plays that keep defenses guessing.",
    },
    Highlight {
        title: "Andy Reid's Innovation",
        caption: "Coach Reid's creative play-calling and formation variations have revolutionized \
the NFL, making the Chiefs' offense one of the most unpredictable in the league.",
    },
    Highlight {
        title: "Championship DNA",
        caption: "The Chiefs' formation versatility and high success rates across different setups \
showcase why they've dominated the AFC and secured multiple Super Bowl victories.",
    },
];

pub const QB_CLOSING_COPY: &str = "The graphics above compare Patrick Mahomes to other top \
quarterbacks during the corresponding years of the playoffs. Mahomes consistently stands out as \
one of the top-performing QBs, demonstrating his unmatched reliability and excellence on the big \
stage.";

pub fn find_team<'a>(teams: &'a [TeamStat], code: &str) -> Option<&'a TeamStat> {
    teams.iter().find(|t| t.team.eq_ignore_ascii_case(code))
}
