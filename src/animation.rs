//! Declarative fade/slide animations for the strength label.
//!
//! The host plays these; nothing here tracks progress or supports
//! cancellation. There is a single label, so an enter that replaces a
//! visible label carries a `delay` equal to the exit duration.

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(150);
pub const DEFAULT_SLIDE_OFFSET: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Enter,
    Exit,
}

/// Opacity and vertical offset interpolated over `duration`, starting
/// `delay` after the effect is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnimation {
    pub kind: AnimationKind,
    pub delay: Duration,
    pub duration: Duration,
    pub from_alpha: f32,
    pub to_alpha: f32,
    pub from_offset: f32,
    pub to_offset: f32,
}

impl LabelAnimation {
    /// Fades in while sliding from `slide_offset` to rest.
    pub fn enter(duration: Duration, slide_offset: f32) -> Self {
        Self {
            kind: AnimationKind::Enter,
            delay: Duration::ZERO,
            duration,
            from_alpha: 0.0,
            to_alpha: 1.0,
            from_offset: slide_offset,
            to_offset: 0.0,
        }
    }

    /// Fades out while sliding from rest to `slide_offset`.
    pub fn exit(duration: Duration, slide_offset: f32) -> Self {
        Self {
            kind: AnimationKind::Exit,
            delay: Duration::ZERO,
            duration,
            from_alpha: 1.0,
            to_alpha: 0.0,
            from_offset: 0.0,
            to_offset: slide_offset,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Alpha and offset at `progress` in `[0, 1]`, linear.
    pub fn sample(&self, progress: f32) -> (f32, f32) {
        let t = progress.clamp(0.0, 1.0);
        (
            self.from_alpha + (self.to_alpha - self.from_alpha) * t,
            self.from_offset + (self.to_offset - self.from_offset) * t,
        )
    }
}

/// Enter/exit pair built from one duration and offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnimations {
    pub duration: Duration,
    pub slide_offset: f32,
}

impl LabelAnimations {
    pub fn enter(&self) -> LabelAnimation {
        LabelAnimation::enter(self.duration, self.slide_offset)
    }

    pub fn exit(&self) -> LabelAnimation {
        LabelAnimation::exit(self.duration, self.slide_offset)
    }

    /// Enter that starts once an exit of the same pair has finished.
    pub fn enter_after_exit(&self) -> LabelAnimation {
        self.enter().after(self.duration)
    }
}

impl Default for LabelAnimations {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            slide_offset: DEFAULT_SLIDE_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_ends_visible_at_rest() {
        let anim = LabelAnimations::default().enter();
        assert_eq!(anim.kind, AnimationKind::Enter);
        assert_eq!(anim.sample(0.0), (0.0, DEFAULT_SLIDE_OFFSET));
        assert_eq!(anim.sample(1.0), (1.0, 0.0));
    }

    #[test]
    fn test_exit_mirrors_enter() {
        let anim = LabelAnimations::default().exit();
        assert_eq!(anim.sample(0.0), (1.0, 0.0));
        assert_eq!(anim.sample(1.0), (0.0, DEFAULT_SLIDE_OFFSET));
        assert_eq!(anim.sample(0.5), (0.5, 10.0));
    }

    #[test]
    fn test_enter_after_exit_waits_for_exit() {
        let animations = LabelAnimations::default();
        assert_eq!(animations.enter().delay, Duration::ZERO);
        assert_eq!(animations.exit().delay, Duration::ZERO);

        let chained = animations.enter_after_exit();
        assert_eq!(chained.delay, DEFAULT_DURATION);
        assert_eq!(chained.delay, animations.exit().duration);
        assert_eq!(chained.sample(1.0), animations.enter().sample(1.0));
    }

    #[test]
    fn test_sample_clamps_progress() {
        let anim = LabelAnimation::enter(Duration::from_millis(100), 8.0);
        assert_eq!(anim.sample(-1.0), anim.sample(0.0));
        assert_eq!(anim.sample(2.0), anim.sample(1.0));
    }
}
