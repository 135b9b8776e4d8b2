//! Scroll-driven reveal for page sections.
//!
//! Every tracked section owns a [`RevealTracker`]. After any scroll, resize or
//! animation step the page asks [`PageLayout`] where each section currently
//! sits relative to the viewport and feeds that geometry through
//! [`reveal_progress`].

/// Lead-in before the trigger line, as a fraction of the viewport height.
pub const TRIGGER_LEAD: f32 = 0.25;
/// Scroll distance needed to go from 0 to 1, as a fraction of section height.
pub const REVEAL_SPAN: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Section top relative to the viewport top; negative once scrolled past.
    pub rect_top: f32,
    pub section_height: f32,
    pub viewport_height: f32,
}

/// Normalised reveal progress in `[0, 1]`.
///
/// Degenerate geometry (zero or negative heights, NaN) reports 0.
pub fn reveal_progress(geometry: SectionGeometry) -> f32 {
    let SectionGeometry {
        rect_top,
        section_height,
        viewport_height,
    } = geometry;
    if !rect_top.is_finite() || !section_height.is_finite() || !viewport_height.is_finite() {
        return 0.0;
    }
    if section_height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let raw = 1.0 - (rect_top - viewport_height * TRIGGER_LEAD) / (section_height * REVEAL_SPAN);
    raw.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Welcome,
    About,
    Legacy,
    Performance,
    Strategy,
    Quarterbacks,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Welcome,
        Section::About,
        Section::Legacy,
        Section::Performance,
        Section::Strategy,
        Section::Quarterbacks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Welcome => "Welcome",
            Section::About => "About",
            Section::Legacy => "Legacy",
            Section::Performance => "Performance",
            Section::Strategy => "Strategy",
            Section::Quarterbacks => "Quarterbacks",
        }
    }
}

/// Per-section progress holder. Trackers never share state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    pub section: Section,
    progress: f32,
}

impl RevealTracker {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Recompute from the current layout and scroll offset. Returns true if the
    /// progress value changed.
    pub fn update(&mut self, layout: &PageLayout, scroll_offset: u16) -> bool {
        let next = match layout.geometry(self.section, scroll_offset) {
            Some(geometry) => reveal_progress(geometry),
            None => 0.0,
        };
        let changed = next != self.progress;
        self.progress = next;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlot {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

/// Vertical placement of every section, in terminal rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub viewport_height: u16,
    slots: Vec<SectionSlot>,
}

impl PageLayout {
    /// Full-height sections track the viewport; content-heavy ones get a floor
    /// so their charts stay readable on short terminals.
    pub fn for_viewport(viewport_height: u16) -> Self {
        let screen = viewport_height.max(1);
        let heights = [
            (Section::Welcome, screen),
            (Section::About, screen),
            (Section::Legacy, screen),
            (Section::Performance, screen.max(30)),
            (Section::Strategy, screen.max(26)),
            (Section::Quarterbacks, screen.max(28)),
        ];
        Self::from_heights(viewport_height, &heights)
    }

    pub fn from_heights(viewport_height: u16, heights: &[(Section, u16)]) -> Self {
        let mut slots = Vec::with_capacity(heights.len());
        let mut top: u16 = 0;
        for &(section, height) in heights {
            slots.push(SectionSlot {
                section,
                top,
                height,
            });
            top = top.saturating_add(height);
        }
        Self {
            viewport_height,
            slots,
        }
    }

    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    pub fn slot(&self, section: Section) -> Option<SectionSlot> {
        self.slots.iter().copied().find(|s| s.section == section)
    }

    pub fn section_top(&self, section: Section) -> Option<u16> {
        self.slot(section).map(|s| s.top)
    }

    pub fn total_height(&self) -> u16 {
        self.slots
            .last()
            .map(|s| s.top.saturating_add(s.height))
            .unwrap_or(0)
    }

    pub fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    pub fn geometry(&self, section: Section, scroll_offset: u16) -> Option<SectionGeometry> {
        let slot = self.slot(section)?;
        Some(SectionGeometry {
            rect_top: slot.top as f32 - scroll_offset as f32,
            section_height: slot.height as f32,
            viewport_height: self.viewport_height as f32,
        })
    }

    /// Section whose band contains the top of the viewport.
    pub fn section_at(&self, scroll_offset: u16) -> Option<Section> {
        self.slots
            .iter()
            .find(|s| scroll_offset >= s.top && scroll_offset < s.top.saturating_add(s.height))
            .map(|s| s.section)
    }
}

/// Scroll offset plus an optional smooth-scroll target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageScroll {
    offset: u16,
    target: Option<f64>,
    position: f64,
    speed: f64,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl PageScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0,
            target: None,
            position: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Immediate scroll; cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: i32, layout: &PageLayout) -> bool {
        let next = (self.offset as i32 + delta).clamp(0, layout.max_scroll() as i32) as u16;
        self.target = None;
        self.set_offset(next)
    }

    pub fn jump_to(&mut self, offset: u16, layout: &PageLayout) -> bool {
        self.target = None;
        self.set_offset(offset.min(layout.max_scroll()))
    }

    pub fn smooth_to(&mut self, section: Section, layout: &PageLayout) {
        let Some(top) = layout.section_top(section) else {
            return;
        };
        let top = top.min(layout.max_scroll());
        if top == self.offset {
            self.target = None;
            return;
        }
        self.position = self.offset as f64;
        self.target = Some(top as f64);
    }

    /// Keep the offset valid after the page was re-laid out.
    pub fn clamp_to(&mut self, layout: &PageLayout) -> bool {
        if let Some(target) = self.target {
            self.target = Some(target.min(layout.max_scroll() as f64));
        }
        let clamped = self.offset.min(layout.max_scroll());
        self.set_offset(clamped)
    }

    /// Exponential ease-out toward the target. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        self.position += (target - self.position) * self.speed;
        if (target - self.position).abs() < 0.5 {
            self.position = target;
            self.target = None;
        }
        self.set_offset(self.position.round().max(0.0) as u16)
    }

    fn set_offset(&mut self, next: u16) -> bool {
        let changed = next != self.offset;
        self.offset = next;
        if self.target.is_none() {
            self.position = next as f64;
        }
        changed
    }
}
