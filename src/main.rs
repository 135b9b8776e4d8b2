use std::io;
use std::panic;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseEventKind,
};
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap};

use chiefs_nation::dataset::{
    ABOUT_COPY, EFFICIENCY_COPY, FORMATION_SUCCESS, FORMATION_USAGE, FORMATIONS, HIGHLIGHTS,
    LEGACY_COPY, LEGACY_QUESTION, QB_CLOSING_COPY, QuarterbackEntry, ROSTER_URL, SCHEDULE_URL,
    STRATEGY_NOTES, TEAM_STATS, WELCOME_COPY,
};
use chiefs_nation::metrics::{self, Metric};
use chiefs_nation::qb_track::{Season, TrackMarker};
use chiefs_nation::scroll::Section;
use chiefs_nation::settings::PageSettings;
use chiefs_nation::state::{self, AppState, PageAction, apply_action};
use chiefs_nation::trivia::TriviaState;

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 1;
const SCROLL_STEP: i32 = 1;
const WHEEL_STEP: i32 = 3;

const CHIEFS_RED: Color = Color::Rgb(220, 38, 38);
const CHIEFS_GOLD: Color = Color::Rgb(255, 184, 28);
const MUTED_BAR: Color = Color::Rgb(148, 163, 184);

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(settings: PageSettings, viewport_height: u16) -> Self {
        let mut state = AppState::new(settings, viewport_height);
        state.push_log("[INFO] Welcome to Chiefs Nation");
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        let page = self.state.layout.viewport_height.max(2) as i32 - 1;
        let action = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc if self.state.help_overlay => PageAction::ToggleHelp,
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('j') | KeyCode::Down => PageAction::ScrollBy(SCROLL_STEP),
            KeyCode::Char('k') | KeyCode::Up => PageAction::ScrollBy(-SCROLL_STEP),
            KeyCode::PageDown => PageAction::ScrollBy(page),
            KeyCode::PageUp => PageAction::ScrollBy(-page),
            KeyCode::Char('g') | KeyCode::Home => PageAction::ScrollToTop,
            KeyCode::Char('G') | KeyCode::End => PageAction::ScrollToBottom,
            KeyCode::Char('e') => PageAction::ScrollTo(Section::About),
            KeyCode::Char('c') => PageAction::ScrollTo(Section::Performance),
            KeyCode::Char('m') => PageAction::CycleMetric,
            KeyCode::Char('1') => PageAction::SelectMetric(Metric::Yardage),
            KeyCode::Char('2') => PageAction::SelectMetric(Metric::Penalties),
            KeyCode::Char('3') => PageAction::SelectMetric(Metric::TwoPointConversions),
            KeyCode::Char(']') => PageAction::NextSeason,
            KeyCode::Char('[') => PageAction::PrevSeason,
            KeyCode::Tab => PageAction::MoveQbCursor(1),
            KeyCode::BackTab => PageAction::MoveQbCursor(-1),
            KeyCode::Enter | KeyCode::Char(' ') => PageAction::ToggleQbAtCursor,
            KeyCode::Char('t') => PageAction::RequestTrivia,
            KeyCode::Char('?') => PageAction::ToggleHelp,
            _ => return,
        };
        apply_action(&mut self.state, action, Instant::now());
    }

    fn on_resize(&mut self, height: u16) {
        apply_action(
            &mut self.state,
            PageAction::Resize {
                viewport_height: viewport_rows(height),
            },
            Instant::now(),
        );
    }
}

fn viewport_rows(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(HEADER_ROWS + FOOTER_ROWS)
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let settings = PageSettings::from_env();

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal(&mut io::stdout());
        default_hook(info);
    }));

    enable_raw_mode()?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(settings, viewport_rows(size.height));
    let res = run_app(&mut terminal, &mut app);

    drop(guard);
    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

/// Restores the terminal when dropped, on normal return, early `?` exits and
/// unwinding alike.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

/// Every step runs even if an earlier one fails.
fn restore_terminal<W: io::Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show);
    let _ = out.flush();
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = app.state.settings.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => apply_action(
                        &mut app.state,
                        PageAction::ScrollBy(WHEEL_STEP),
                        Instant::now(),
                    ),
                    MouseEventKind::ScrollUp => apply_action(
                        &mut app.state,
                        PageAction::ScrollBy(-WHEEL_STEP),
                        Instant::now(),
                    ),
                    _ => {}
                },
                Event::Resize(_, height) => app.on_resize(height),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_rate {
            state::tick(&mut app.state, Instant::now(), elapsed);
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(1),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text())
        .style(Style::default().fg(Color::White).bg(CHIEFS_RED))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_page(frame, chunks[1], &app.state);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            " CHIEFS NATION",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(" Roster: {ROSTER_URL}  |  Schedule: {SCHEDULE_URL}")),
    ]
}

fn footer_text(state: &AppState) -> String {
    let section = state.current_section().unwrap_or(Section::Welcome);
    let reveal = state
        .progress(section)
        .map(|p| format!(" {:>3.0}%", p * 100.0))
        .unwrap_or_default();
    let last_log = state.logs.back().map(String::as_str).unwrap_or("");
    format!(
        "{}{} | {} | j/k Scroll | e Explore | c Charts | ? Help | q Quit",
        section.label(),
        reveal,
        last_log
    )
}

/// Visible slice of one section: where it lands on screen and how many of its
/// rows are above the viewport.
#[derive(Debug, Clone, Copy)]
struct SectionView {
    area: Rect,
    hidden_top: u16,
    height: u16,
}

impl SectionView {
    /// Map section rows `[y, y + height)` onto the screen. Returns the clipped
    /// rect and the number of band rows cut off at its top.
    fn band(&self, y: u16, height: u16) -> Option<(Rect, u16)> {
        let visible_start = self.hidden_top;
        let visible_end = self.hidden_top.saturating_add(self.area.height);
        let start = y.max(visible_start);
        let end = y.saturating_add(height).min(visible_end);
        if start >= end {
            return None;
        }
        let rect = Rect {
            x: self.area.x,
            y: self.area.y + (start - visible_start),
            width: self.area.width,
            height: end - start,
        };
        Some((rect, start - y))
    }

    fn centered_pad(&self, content: u16) -> u16 {
        self.height.saturating_sub(content) / 2
    }
}

fn render_page(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let offset = state.scroll.offset() as i32;
    for slot in state.layout.slots() {
        let top_rel = slot.top as i32 - offset;
        let bottom_rel = top_rel + slot.height as i32;
        let visible_top = top_rel.max(0);
        let visible_bottom = bottom_rel.min(area.height as i32);
        if visible_top >= visible_bottom {
            continue;
        }
        let view = SectionView {
            area: Rect {
                x: area.x,
                y: area.y + visible_top as u16,
                width: area.width,
                height: (visible_bottom - visible_top) as u16,
            },
            hidden_top: (-top_rel).max(0) as u16,
            height: slot.height,
        };
        match slot.section {
            Section::Welcome => render_welcome(frame, view),
            Section::About => render_about(frame, view, state),
            Section::Legacy => render_legacy(frame, view, state),
            Section::Performance => render_performance(frame, view, state),
            Section::Strategy => render_strategy(frame, view, state),
            Section::Quarterbacks => render_quarterbacks(frame, view, state),
        }
    }
}

fn render_lines(
    frame: &mut Frame,
    area: Rect,
    skipped: u16,
    lines: Vec<Line<'static>>,
    alignment: Alignment,
) {
    let paragraph = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: true })
        .scroll((skipped, 0));
    frame.render_widget(paragraph, area);
}

fn fade_style(progress: f32) -> Style {
    if progress < 0.34 {
        Style::default().fg(Color::Black)
    } else if progress < 0.67 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_welcome(frame: &mut Frame, view: SectionView) {
    let title = Style::default().fg(CHIEFS_RED).add_modifier(Modifier::BOLD);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("Welcome to Chiefs Nation", title)),
        Line::from(""),
    ];
    for highlight in HIGHLIGHTS {
        lines.push(Line::from(vec![
            Span::styled(highlight.title, bold),
            Span::raw(format!("  {}", highlight.caption)),
        ]));
    }
    lines.extend([
        Line::from(""),
        Line::from(Span::styled("Dynasty in the Making", bold)),
        Line::from(WELCOME_COPY),
        Line::from(""),
        Line::from(Span::styled(
            "[ e ] Explore Their Journey",
            Style::default().fg(Color::White).bg(CHIEFS_RED),
        )),
    ]);

    let content = lines.len() as u16 + 2;
    let pad = view.centered_pad(content);
    if let Some((rect, skipped)) = view.band(pad, view.height - pad) {
        render_lines(frame, rect, skipped, lines, Alignment::Center);
    }
}

/// Red panel sliding in from the left while the copy fades in on the right.
fn render_about(frame: &mut Frame, view: SectionView, state: &AppState) {
    let progress = state.progress(Section::About).unwrap_or(0.0);
    let Some((rect, _)) = view.band(0, view.height) else {
        return;
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rect);

    let panel_width = (halves[0].width as f32 * progress).round() as u16;
    let panel = Rect {
        width: panel_width,
        ..halves[0]
    };
    render_slide_panel(frame, view, panel, "About the Chiefs", progress);

    let shift = ((1.0 - progress) * 6.0).round() as u16;
    let right = Rect {
        x: halves[1].x.saturating_add(shift),
        width: halves[1].width.saturating_sub(shift + 1),
        ..halves[1]
    };
    let style = fade_style(progress);
    let mut lines = vec![Line::styled(ABOUT_COPY, style), Line::from("")];
    lines.extend(trivia_lines(state));

    let pad = view.centered_pad(18);
    if let Some((band, skipped)) = view.band(pad, view.height - pad) {
        let band = Rect {
            x: right.x,
            width: right.width,
            ..band
        };
        render_lines(frame, band, skipped, lines, Alignment::Left);
    }
}

fn trivia_lines(state: &AppState) -> Vec<Line<'static>> {
    let button = Line::from(Span::styled(
        "[ t ] Press for fun fact!",
        Style::default().fg(Color::White).bg(CHIEFS_RED),
    ));
    let mut lines = vec![button, Line::from("")];
    match state.trivia.state() {
        TriviaState::Idle => {}
        TriviaState::Loading { .. } => {
            const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
            let left = state
                .trivia
                .time_left(Instant::now())
                .unwrap_or(Duration::ZERO)
                .as_millis();
            let frame_idx = (left / 120) as usize % SPINNER.len();
            lines.push(Line::styled(
                format!("{} loading...", SPINNER[frame_idx]),
                Style::default().fg(CHIEFS_RED),
            ));
        }
        TriviaState::Loaded { fact } => {
            lines.push(Line::styled(
                *fact,
                Style::default().fg(CHIEFS_GOLD).add_modifier(Modifier::ITALIC),
            ));
        }
    }
    lines
}

fn render_legacy(frame: &mut Frame, view: SectionView, state: &AppState) {
    let progress = state.progress(Section::Legacy).unwrap_or(0.0);
    let Some((rect, _)) = view.band(0, view.height) else {
        return;
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rect);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled("[SB]  [SB]  [SB]", Style::default().fg(CHIEFS_GOLD)),
        Line::from(""),
        Line::from(LEGACY_COPY),
        Line::from(""),
        Line::styled(LEGACY_QUESTION, bold),
    ];
    let pad = view.centered_pad(9);
    if let Some((band, skipped)) = view.band(pad, view.height - pad) {
        let band = Rect {
            x: halves[0].x + 1,
            width: halves[0].width.saturating_sub(2),
            ..band
        };
        render_lines(frame, band, skipped, lines, Alignment::Center);
    }

    let panel_width = (halves[1].width as f32 * progress).round() as u16;
    let panel = Rect {
        x: halves[1].x + (halves[1].width - panel_width),
        width: panel_width,
        ..halves[1]
    };
    render_slide_panel(frame, view, panel, "Championship Legacy", progress);

    if let Some((arrow, _)) = view.band(view.height.saturating_sub(2), 1) {
        let hint = Paragraph::new("v  [ c ] to the numbers  v")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(hint, arrow);
    }
}

fn render_slide_panel(
    frame: &mut Frame,
    view: SectionView,
    panel: Rect,
    title: &'static str,
    progress: f32,
) {
    if panel.width == 0 || panel.height == 0 {
        return;
    }
    frame.render_widget(Block::default().style(Style::default().bg(CHIEFS_RED)), panel);
    if let Some((row, _)) = view.band(view.height / 2, 1) {
        let row = Rect {
            x: panel.x,
            width: panel.width,
            ..row
        };
        let style = fade_style(progress)
            .bg(CHIEFS_RED)
            .add_modifier(Modifier::BOLD);
        let text = Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(text, row);
    }
}

fn render_performance(frame: &mut Frame, view: SectionView, state: &AppState) {
    let style = fade_style(state.progress(Section::Performance).unwrap_or(1.0));
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let metric = state.metric;

    let heading = vec![
        Line::styled("Chiefs Performance Analysis in 2023", bold.fg(CHIEFS_RED)),
        Line::from(""),
        metric_tabs(metric),
    ];
    if let Some((rect, skipped)) = view.band(0, 3) {
        render_lines(frame, rect, skipped, heading, Alignment::Center);
    }

    let Some(summary) = state.metric_summary() else {
        if let Some((rect, _)) = view.band(4, 1) {
            let empty = Paragraph::new(format!(
                "No league data for {}",
                state.settings.team_of_interest
            ))
            .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, rect);
        }
        return;
    };

    if let Some((rect, _)) = view.band(4, 4) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rect);
        let diff_color = if summary.above_average() {
            Color::Green
        } else {
            Color::Red
        };
        render_stat_card(
            frame,
            cards[0],
            &format!("Chiefs {}", metric.title()),
            summary.value_label(),
            style,
        );
        render_stat_card(frame, cards[1], "League Rank", summary.rank_label(), style);
        render_stat_card(
            frame,
            cards[2],
            "vs League Average",
            summary.percent_label(),
            style.fg(diff_color),
        );
    }

    if let Some((rect, skipped)) = view.band(8, 1) {
        render_lines(
            frame,
            rect,
            skipped,
            vec![Line::styled(metric.description(), Style::default().fg(Color::Gray))],
            Alignment::Center,
        );
    }

    let chart_height = view.height.saturating_sub(16).max(8);
    if let Some((rect, _)) = view.band(10, chart_height) {
        render_metric_chart(frame, rect, state);
    }

    let yardage_rank = metrics::rank_of(&TEAM_STATS, Metric::Yardage, &state.settings.team_of_interest)
        .map(|rank| format!("#{rank}"))
        .unwrap_or_else(|| "-".to_string());
    let footnote = vec![
        Line::styled("Understanding the Chiefs' Efficiency", bold),
        Line::from(format!(
            "The Kansas City Chiefs rank {yardage_rank} in total yardage, yet they're one of the NFL's most successful teams."
        )),
        Line::from(EFFICIENCY_COPY),
    ];
    let footnote_top = 11 + chart_height;
    if let Some((rect, skipped)) = view.band(footnote_top, view.height.saturating_sub(footnote_top)) {
        render_lines(frame, rect, skipped, footnote, Alignment::Left);
    }
}

fn metric_tabs(selected: Metric) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, metric) in Metric::ALL.into_iter().enumerate() {
        let style = if metric == selected {
            Style::default()
                .fg(Color::White)
                .bg(CHIEFS_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", idx + 1, metric.title()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
    let card = Paragraph::new(vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Gray)),
        Line::styled(value, style.add_modifier(Modifier::BOLD)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}

fn render_metric_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let series = state.chart_series();
    if series.is_empty() || area.height < 3 {
        return;
    }
    let inner_width = area.width.saturating_sub(2);
    let per_bar = (inner_width / series.len() as u16).max(2);
    let bar_width = (per_bar - 1).clamp(1, 4);

    let bars: Vec<Bar> = series
        .labels
        .iter()
        .zip(&series.values)
        .zip(&series.highlight)
        .map(|((label, value), highlight)| {
            let color = if *highlight { CHIEFS_RED } else { MUTED_BAR };
            Bar::default()
                .value(*value as u64)
                .label(Line::from(*label))
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("{} by team", series.title))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(series.max_value() as u64);
    frame.render_widget(chart, area);
}

fn render_strategy(frame: &mut Frame, view: SectionView, state: &AppState) {
    let style = fade_style(state.progress(Section::Strategy).unwrap_or(1.0));
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let heading = vec![
        Line::styled("Offensive Strategy Breakdown", bold.fg(CHIEFS_RED)),
        Line::styled("Understanding the Chiefs' Dominant Offensive Scheme", style),
    ];
    if let Some((rect, skipped)) = view.band(0, 2) {
        render_lines(frame, rect, skipped, heading, Alignment::Center);
    }

    let chart_height = view.height.saturating_sub(12).max(8);
    if let Some((rect, _)) = view.band(3, chart_height) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rect);
        render_usage_chart(frame, halves[0]);
        render_success_chart(frame, halves[1]);
    }

    let notes_top = 4 + chart_height;
    if let Some((rect, skipped)) = view.band(notes_top, view.height.saturating_sub(notes_top)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rect);
        for (col, note) in cols.iter().zip(STRATEGY_NOTES) {
            let lines = vec![
                Line::styled(note.title, bold.fg(CHIEFS_GOLD)),
                Line::styled(note.caption, style),
            ];
            let inner = Rect {
                x: col.x + 1,
                width: col.width.saturating_sub(2),
                ..*col
            };
            render_lines(frame, inner, skipped, lines, Alignment::Left);
        }
    }
}

fn render_usage_chart(frame: &mut Frame, area: Rect) {
    const COLORS: [Color; 3] = [CHIEFS_RED, Color::Blue, Color::Green];
    let bars: Vec<Bar> = FORMATIONS
        .iter()
        .zip(FORMATION_USAGE.values)
        .zip(COLORS)
        .map(|((label, value), color)| {
            Bar::default()
                .value(value)
                .label(Line::from(*label))
                .text_value(format!("{value}%"))
                .style(Style::default().fg(color))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("Formation Usage: {}", FORMATION_USAGE.label))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .max(100);
    frame.render_widget(chart, area);
}

fn render_success_chart(frame: &mut Frame, area: Rect) {
    let [successful, unsuccessful] = FORMATION_SUCCESS;
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(
                    "Formation Success Rates ({} green / {} red)",
                    successful.label, unsuccessful.label
                ))
                .borders(Borders::ALL),
        )
        .bar_width(4)
        .bar_gap(1)
        .group_gap(3);
    for (idx, label) in FORMATIONS.iter().enumerate() {
        let bars = [
            Bar::default()
                .value(successful.values[idx])
                .style(Style::default().fg(Color::Green)),
            Bar::default()
                .value(unsuccessful.values[idx])
                .style(Style::default().fg(Color::Red)),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(*label)).bars(&bars));
    }
    frame.render_widget(chart, area);
}

const QB_CARD_ROWS: u16 = 5;

fn render_quarterbacks(frame: &mut Frame, view: SectionView, state: &AppState) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let board = &state.board;
    let heading = vec![
        Line::styled("Playoff Quarterback Stats", bold.fg(CHIEFS_RED)),
        Line::from(
            "Select a quarterback (Tab, Enter) to see their playoff performance in the corresponding year.",
        ),
        Line::from(""),
        season_tabs(board.season()),
    ];
    if let Some((rect, skipped)) = view.band(0, 4) {
        render_lines(frame, rect, skipped, heading, Alignment::Center);
    }

    let roster = board.roster();
    if roster.is_empty() {
        if let Some((rect, _)) = view.band(5, 1) {
            frame.render_widget(
                Paragraph::new("No playoff entries for this season")
                    .style(Style::default().fg(Color::DarkGray)),
                rect,
            );
        }
        return;
    }

    for (idx, (qb, marker)) in roster.iter().zip(board.markers()).enumerate() {
        let top = 5 + idx as u16 * QB_CARD_ROWS;
        let Some((rect, skipped)) = view.band(top, QB_CARD_ROWS) else {
            continue;
        };
        let focused = idx == board.cursor();
        let selected = board.selection().is_selected(qb.name);
        let lines = qb_card_lines(qb, marker, focused, selected, rect.width, state);
        render_lines(frame, rect, skipped, lines, Alignment::Left);
    }

    let closing_top = 5 + roster.len() as u16 * QB_CARD_ROWS + 1;
    let closing = vec![
        Line::styled("Mahomes: The Model of Consistency", bold.fg(CHIEFS_GOLD)),
        Line::from(QB_CLOSING_COPY),
    ];
    if let Some((rect, skipped)) = view.band(closing_top, view.height.saturating_sub(closing_top)) {
        render_lines(frame, rect, skipped, closing, Alignment::Center);
    }
}

fn season_tabs(selected: Season) -> Line<'static> {
    let mut spans = vec![Span::raw("[ ")];
    for season in Season::ALL {
        let style = if season == selected {
            Style::default()
                .fg(Color::White)
                .bg(CHIEFS_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", season.year()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("]"));
    Line::from(spans)
}

fn qb_card_lines(
    qb: &QuarterbackEntry,
    marker: &TrackMarker,
    focused: bool,
    selected: bool,
    width: u16,
    state: &AppState,
) -> Vec<Line<'static>> {
    let name_style = if selected {
        Style::default().fg(CHIEFS_GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let cursor = if focused { "> " } else { "  " };
    let mut name_line = vec![
        Span::raw(cursor),
        Span::styled(qb.name, name_style),
        Span::styled(format!("  [{}]", qb.image), Style::default().fg(Color::DarkGray)),
    ];
    if !selected {
        name_line.push(Span::styled(
            "  select to view stats",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let track_cells = width.saturating_sub(4).max(10) as usize;
    let track_width = state.board.config.track_width;
    let mut lines = vec![
        Line::from(name_line),
        Line::from(track_line(marker.position(), track_width, track_cells)),
        Line::styled(
            scale_line(state.board.config.max_yards, track_cells),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if selected {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:.0} yards / game", qb.playoff_yards),
                Style::default().fg(CHIEFS_GOLD),
            ),
            Span::raw(format!(
                "   Completion {}   TD/g {}   INT/g {}",
                qb.completion, qb.touchdowns, qb.interceptions
            )),
        ]));
    }
    lines
}

/// Track with the ball drawn at `position`. Offsets past the track end are
/// pinned to the last cell and flagged with an overflow mark.
fn track_line(position: f64, track_width: f64, cells: usize) -> Vec<Span<'static>> {
    let ratio = if track_width > 0.0 {
        position / track_width
    } else {
        0.0
    };
    let overflow = ratio > 1.0;
    let last = cells.saturating_sub(1);
    let cell = ((ratio.max(0.0) * last as f64).round() as usize).min(last);

    let before = "-".repeat(cell);
    let after = "-".repeat(last - cell);
    let mut spans = vec![
        Span::raw("  |"),
        Span::styled(before, Style::default().fg(Color::Green)),
        Span::styled("O", Style::default().fg(CHIEFS_GOLD).add_modifier(Modifier::BOLD)),
        Span::styled(after, Style::default().fg(Color::Green)),
        Span::raw("|"),
    ];
    if overflow {
        spans.push(Span::styled(">>", Style::default().fg(Color::Red)));
    }
    spans
}

fn scale_line(max_yards: f64, cells: usize) -> String {
    let mut row = vec![' '; cells + 4];
    let last = cells.saturating_sub(1);
    for step in 0..=5u32 {
        let yards = max_yards * step as f64 / 5.0;
        let label = format!("{yards:.0}");
        if label.len() > row.len() {
            continue;
        }
        let col = 3 + (last as f64 * step as f64 / 5.0).round() as usize;
        let start = col.saturating_sub(label.len() / 2).min(row.len() - label.len());
        for (slot, ch) in row[start..].iter_mut().zip(label.chars()) {
            *slot = ch;
        }
    }
    row.into_iter().collect()
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Chiefs Nation - Help",
        "",
        "Page:",
        "  j/k or ↑/↓      Scroll",
        "  PgUp / PgDn     Scroll a page",
        "  g / G           Top / bottom",
        "  e               Explore (About)",
        "  c               Jump to charts",
        "  t               Fun fact",
        "",
        "Charts:",
        "  m               Cycle metric",
        "  1 / 2 / 3       Yardage / Penalties / 2-Pt",
        "",
        "Quarterbacks:",
        "  [ / ]           Previous / next season",
        "  Tab / S-Tab     Move card cursor",
        "  Enter / Space   Toggle selection",
        "",
        "  ?               Toggle help",
        "  q / Esc         Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
