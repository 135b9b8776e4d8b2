use std::time::{Duration, Instant};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chiefs_nation::dataset::TEAM_STATS;
use chiefs_nation::metrics::{Metric, chart_series, summarize};
use chiefs_nation::qb_track::{QbBoard, Season, TrackConfig};
use chiefs_nation::scroll::{PageLayout, RevealTracker, Section};
use chiefs_nation::settings::PageSettings;
use chiefs_nation::state::{AppState, PageAction, TRACKED_SECTIONS, apply_action, tick};

fn bench_metric_summaries(c: &mut Criterion) {
    c.bench_function("metric_summaries", |b| {
        b.iter(|| {
            for metric in Metric::ALL {
                let summary = summarize(black_box(&TEAM_STATS), metric, black_box("KC"));
                black_box(summary.map(|s| s.rank));
            }
        })
    });
}

fn bench_chart_series(c: &mut Criterion) {
    c.bench_function("chart_series", |b| {
        b.iter(|| {
            for metric in Metric::ALL {
                let series = chart_series(black_box(&TEAM_STATS), metric, "KC");
                black_box(series.max_value());
            }
        })
    });
}

fn bench_reveal_sweep(c: &mut Criterion) {
    let layout = PageLayout::for_viewport(48);
    let mut trackers: Vec<RevealTracker> =
        TRACKED_SECTIONS.into_iter().map(RevealTracker::new).collect();

    c.bench_function("reveal_sweep", |b| {
        b.iter(|| {
            for offset in 0..=layout.max_scroll() {
                for tracker in &mut trackers {
                    tracker.update(&layout, black_box(offset));
                }
            }
            black_box(trackers[0].progress());
        })
    });
}

fn bench_marker_settle(c: &mut Criterion) {
    c.bench_function("marker_settle", |b| {
        b.iter(|| {
            let mut board = QbBoard::new(Season::S2023, TrackConfig::default());
            board.toggle(black_box("Jared Goff"));
            let mut frames = 0;
            while board.tick(Duration::from_millis(16)) && frames < 1000 {
                frames += 1;
            }
            black_box(frames);
        })
    });
}

fn bench_page_frame(c: &mut Criterion) {
    let settings = PageSettings {
        trivia_seed: Some(5),
        ..PageSettings::default()
    };
    let mut state = AppState::new(settings, 48);
    let start = Instant::now();
    apply_action(&mut state, PageAction::ScrollTo(Section::Quarterbacks), start);
    apply_action(&mut state, PageAction::ToggleQbAtCursor, start);

    c.bench_function("page_frame", |b| {
        b.iter(|| {
            tick(&mut state, start, Duration::from_millis(33));
            black_box(state.metric_summary());
        })
    });
}

criterion_group!(
    perf,
    bench_metric_summaries,
    bench_chart_series,
    bench_reveal_sweep,
    bench_marker_settle,
    bench_page_frame
);
criterion_main!(perf);
