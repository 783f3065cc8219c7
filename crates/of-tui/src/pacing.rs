//! Scheduling of delayed UI actions.
//!
//! The event loop passes the current [`Instant`] in; nothing here reads the
//! clock, so tests drive time explicitly.

use std::time::{Duration, Instant};

/// Timing of the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Pause between a resolution and the next turn (or the end screen).
    pub turn_delay: Duration,
    /// Number of mood animation frames.
    pub animation_frames: u32,
    /// Time between animation frames.
    pub animation_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            turn_delay: Duration::from_millis(1500),
            animation_frames: 8,
            animation_delay: Duration::from_millis(100),
        }
    }
}

impl PacingConfig {
    /// Set the pause between turns.
    pub fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    /// Set the animation frame count and frame delay.
    pub fn with_animation(mut self, frames: u32, delay: Duration) -> Self {
        self.animation_frames = frames;
        self.animation_delay = delay;
        self
    }
}

/// An action to run once its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacedAction {
    /// Start the next turn, or show the end screen if the game is over.
    Advance,
    /// Step the mood animation.
    AnimationFrame,
}

/// Pending actions ordered by deadline.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<(Instant, PacedAction)>,
}

impl Scheduler {
    /// An empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` once `after` has elapsed from `now`.
    pub fn schedule(&mut self, now: Instant, after: Duration, action: PacedAction) {
        let due = now + after;
        let pos = self.pending.partition_point(|(t, _)| *t <= due);
        self.pending.insert(pos, (due, action));
    }

    /// Remove and return every action due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<PacedAction> {
        let split = self.pending.partition_point(|(t, _)| *t <= now);
        self.pending.drain(..split).map(|(_, a)| a).collect()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|(t, _)| *t)
    }

    /// Whether `action` is waiting to run.
    pub fn is_pending(&self, action: PacedAction) -> bool {
        self.pending.iter().any(|(_, a)| *a == action)
    }

    /// Drop every pending action of the given kind.
    pub fn cancel(&mut self, action: PacedAction) {
        self.pending.retain(|(_, a)| *a != action);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
