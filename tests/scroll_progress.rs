use chiefs_nation::scroll::{
    PageLayout, PageScroll, RevealTracker, Section, SectionGeometry, reveal_progress,
};

fn geometry(rect_top: f32, section_height: f32, viewport_height: f32) -> SectionGeometry {
    SectionGeometry {
        rect_top,
        section_height,
        viewport_height,
    }
}

#[test]
fn progress_is_zero_before_section_reaches_trigger() {
    assert_eq!(reveal_progress(geometry(40.0, 40.0, 40.0)), 0.0);
    assert_eq!(reveal_progress(geometry(120.0, 40.0, 40.0)), 0.0);
}

#[test]
fn progress_is_one_after_half_section_past_lead_in() {
    // Trigger line sits a quarter viewport below the top.
    assert_eq!(reveal_progress(geometry(10.0, 40.0, 40.0)), 1.0);
    assert_eq!(reveal_progress(geometry(-200.0, 40.0, 40.0)), 1.0);
}

#[test]
fn progress_rises_linearly_between_bounds() {
    // 1 - (30 - 10) / 20 = 0
    // 1 - (20 - 10) / 20 = 0.5
    let half = reveal_progress(geometry(20.0, 40.0, 40.0));
    assert!((half - 0.5).abs() < 1e-6);
    let quarter = reveal_progress(geometry(25.0, 40.0, 40.0));
    assert!((quarter - 0.25).abs() < 1e-6);
}

#[test]
fn progress_stays_in_unit_range() {
    for top in -500..500 {
        let p = reveal_progress(geometry(top as f32, 37.0, 29.0));
        assert!((0.0..=1.0).contains(&p), "top {top} gave {p}");
    }
}

#[test]
fn degenerate_geometry_reports_zero() {
    assert_eq!(reveal_progress(geometry(-50.0, 0.0, 40.0)), 0.0);
    assert_eq!(reveal_progress(geometry(-50.0, -4.0, 40.0)), 0.0);
    assert_eq!(reveal_progress(geometry(-50.0, 40.0, 0.0)), 0.0);
    assert_eq!(reveal_progress(geometry(f32::NAN, 40.0, 40.0)), 0.0);
}

#[test]
fn repeated_calls_are_idempotent() {
    let g = geometry(17.0, 40.0, 40.0);
    assert_eq!(reveal_progress(g), reveal_progress(g));
}

#[test]
fn trackers_are_independent() {
    let layout = PageLayout::for_viewport(40);
    let mut about = RevealTracker::new(Section::About);
    let mut legacy = RevealTracker::new(Section::Legacy);

    // About starts at row 40; scrolled so its top is 10 rows from the viewport top.
    assert!(about.update(&layout, 30));
    legacy.update(&layout, 30);
    assert_eq!(about.progress(), 1.0);
    assert_eq!(legacy.progress(), 0.0);
}

#[test]
fn tracker_for_missing_section_is_zero() {
    let layout = PageLayout::from_heights(40, &[(Section::Welcome, 40)]);
    let mut tracker = RevealTracker::new(Section::Quarterbacks);
    tracker.update(&layout, 0);
    assert_eq!(tracker.progress(), 0.0);
}

#[test]
fn layout_stacks_sections_in_order() {
    let layout = PageLayout::for_viewport(20);
    let tops: Vec<u16> = Section::ALL
        .into_iter()
        .filter_map(|s| layout.section_top(s))
        .collect();
    assert_eq!(tops.len(), Section::ALL.len());
    assert!(tops.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(layout.section_at(0), Some(Section::Welcome));
    assert_eq!(layout.section_at(20), Some(Section::About));
    assert_eq!(layout.max_scroll(), layout.total_height() - 20);
}

#[test]
fn scroll_is_clamped_to_page() {
    let layout = PageLayout::for_viewport(30);
    let mut scroll = PageScroll::default();
    assert!(!scroll.scroll_by(-5, &layout));
    assert_eq!(scroll.offset(), 0);
    scroll.scroll_by(10_000, &layout);
    assert_eq!(scroll.offset(), layout.max_scroll());
}

#[test]
fn smooth_scroll_reaches_section_top() {
    let layout = PageLayout::for_viewport(30);
    let mut scroll = PageScroll::default();
    scroll.smooth_to(Section::Performance, &layout);
    assert!(scroll.is_animating());
    for _ in 0..200 {
        scroll.tick();
    }
    assert!(!scroll.is_animating());
    assert_eq!(Some(scroll.offset()), layout.section_top(Section::Performance));
}

#[test]
fn manual_scroll_cancels_smooth_scroll() {
    let layout = PageLayout::for_viewport(30);
    let mut scroll = PageScroll::default();
    scroll.smooth_to(Section::Quarterbacks, &layout);
    scroll.tick();
    scroll.scroll_by(1, &layout);
    assert!(!scroll.is_animating());
}
