//! The ojisan's mood animation.

use of_core::narration::Mood;

/// A short wobble in a given mood that settles back to neutral.
#[derive(Debug, Clone, Default)]
pub struct MoodAnimation {
    mood: Mood,
    frame: u32,
    frames: u32,
}

impl MoodAnimation {
    /// A resting ojisan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin animating `mood` for `frames` frames.
    pub fn start(&mut self, mood: Mood, frames: u32) {
        self.mood = mood;
        self.frame = 0;
        self.frames = frames;
        if frames == 0 {
            self.settle();
        }
    }

    /// Step one frame. Returns whether more frames follow.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.frame += 1;
        if self.frame >= self.frames {
            self.settle();
            return false;
        }
        true
    }

    /// Whether an animation is in progress.
    pub fn is_running(&self) -> bool {
        self.frames > 0
    }

    /// Current mood.
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Horizontal offset in cells for the current frame.
    pub fn offset(&self) -> i16 {
        if !self.is_running() {
            return 0;
        }
        ((f64::from(self.frame) * 0.5).sin() * 2.0).floor() as i16
    }

    fn settle(&mut self) {
        self.mood = Mood::Neutral;
        self.frame = 0;
        self.frames = 0;
    }
}
