use std::time::{Duration, Instant};

use rand::Rng;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriviaState {
    Idle,
    Loading { request: RequestId },
    Loaded { fact: &'static str },
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    request: RequestId,
    ready_at: Instant,
}

/// Random fact with simulated fetch latency.
///
/// Only the most recent request may resolve; an older one reaching its
/// deadline after a newer `request` is discarded.
#[derive(Debug, Clone)]
pub struct TriviaPicker {
    facts: &'static [&'static str],
    delay: Duration,
    state: TriviaState,
    pending: Option<Pending>,
    next_request: u64,
}

impl TriviaPicker {
    pub fn new(facts: &'static [&'static str], delay: Duration) -> Self {
        Self {
            facts,
            delay,
            state: TriviaState::Idle,
            pending: None,
            next_request: 1,
        }
    }

    pub fn state(&self) -> &TriviaState {
        &self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn facts(&self) -> &'static [&'static str] {
        self.facts
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, TriviaState::Loading { .. })
    }

    pub fn fact(&self) -> Option<&'static str> {
        match self.state {
            TriviaState::Loaded { fact } => Some(fact),
            _ => None,
        }
    }

    /// Start (or restart) loading. Any shown fact is cleared and any pending
    /// request is superseded.
    pub fn request(&mut self, now: Instant) -> RequestId {
        let request = RequestId(self.next_request);
        self.next_request += 1;
        self.pending = Some(Pending {
            request,
            ready_at: now + self.delay,
        });
        self.state = TriviaState::Loading { request };
        request
    }

    /// Resolve the pending request once its deadline has passed.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<&'static str> {
        let pending = self.pending?;
        if now < pending.ready_at {
            return None;
        }
        if self.facts.is_empty() {
            self.pending = None;
            self.state = TriviaState::Idle;
            return None;
        }
        let index = rng.gen_range(0..self.facts.len());
        if self.complete(pending.request, index, now) {
            self.fact()
        } else {
            None
        }
    }

    /// Resolve `request` with the fact at `index`. Returns false when the
    /// request is stale, its delay has not elapsed at `now`, or the index is
    /// out of range.
    pub fn complete(&mut self, request: RequestId, index: usize, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.request != request || now < pending.ready_at {
            return false;
        }
        let Some(fact) = self.facts.get(index).copied() else {
            return false;
        };
        self.pending = None;
        self.state = TriviaState::Loaded { fact };
        true
    }

    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.ready_at.saturating_duration_since(now))
    }
}
