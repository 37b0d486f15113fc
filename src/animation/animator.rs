//! Eased transition of a single displayed number.
//!
//! Each displayed counter owns one [`ValueAnimator`]. Handing it a new target
//! starts a [`TRANSITION_DURATION`] long cubic ease-out from whatever value is on
//! screen at that moment, so retargeting mid-flight never snaps.

use std::time::Duration;

use tracing::trace;

use super::easing::{ease_out_cubic, progress};

/// Length of every transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Shortest spacing accepted by [`ValueAnimator::frames`].
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// One sampled value; `done` is set on the frame that lands on the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueAnimator {
    previous_value: f64,
    target_value: f64,
    start: Duration,
    phase: Phase,
}

impl ValueAnimator {
    /// An idle animator already showing `initial`.
    pub fn new(initial: f64) -> Self {
        Self {
            previous_value: initial,
            target_value: initial,
            start: Duration::ZERO,
            phase: Phase::Idle,
        }
    }

    pub fn target(&self) -> f64 {
        self.target_value
    }

    /// Value the current transition started from.
    pub fn previous(&self) -> f64 {
        self.previous_value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Start easing towards `target` at time `now`.
    ///
    /// The transition starts from the value displayed at `now`, which may be
    /// partway through an earlier transition; that transition is abandoned.
    /// Returns `false` when `target` already is the current target.
    pub fn set_target(&mut self, target: f64, now: Duration) -> bool {
        if target == self.target_value {
            return false;
        }
        let displayed = self.value_at(now);
        trace!(from = displayed, to = target, "starting transition");
        self.previous_value = displayed;
        self.target_value = target;
        self.start = now;
        self.phase = Phase::Animating;
        true
    }

    /// Show `target` immediately, without intermediate frames.
    pub fn jump_to(&mut self, target: f64) {
        self.previous_value = target;
        self.target_value = target;
        self.phase = Phase::Idle;
    }

    /// Displayed value at `now`, without changing state.
    ///
    /// Times before the transition start count as zero elapsed.
    pub fn value_at(&self, now: Duration) -> f64 {
        if self.phase == Phase::Idle {
            return self.target_value;
        }
        let p = progress(now.saturating_sub(self.start), TRANSITION_DURATION);
        if p >= 1.0 {
            return self.target_value;
        }
        let (from, to) = (self.previous_value, self.target_value);
        let value = from + (to - from) * ease_out_cubic(p);
        // Keep rounding from overshooting the target before the last frame.
        if to >= from {
            value.min(to)
        } else {
            value.max(to)
        }
    }

    /// Sample the value for a rendering frame at `now`, settling once the
    /// transition has run its full duration.
    pub fn tick(&mut self, now: Duration) -> Frame {
        let value = self.value_at(now);
        if self.phase == Phase::Animating
            && progress(now.saturating_sub(self.start), TRANSITION_DURATION) >= 1.0
        {
            self.jump_to(self.target_value);
        }
        Frame {
            value,
            done: self.phase == Phase::Idle,
        }
    }

    /// Lazily sample the current transition every `interval`, starting at its
    /// start time and ending with exactly the target.
    ///
    /// An idle animator yields its target once. Intervals below one
    /// millisecond are raised to one millisecond.
    ///
    /// ```rust
    /// # use std::time::Duration;
    /// # use savings_lib::animation::ValueAnimator;
    /// let mut counter = ValueAnimator::new(0.0);
    /// counter.set_target(100.0, Duration::ZERO);
    /// let frames: Vec<f64> = counter.frames(Duration::from_millis(100)).collect();
    /// assert_eq!(frames.first(), Some(&0.0));
    /// assert_eq!(frames.last(), Some(&100.0));
    /// assert_eq!(frames.len(), 6);
    /// ```
    pub fn frames(&self, interval: Duration) -> Frames {
        Frames {
            animator: self.clone(),
            origin: self.start,
            interval: interval.max(MIN_FRAME_INTERVAL),
            index: 0,
            finished: false,
        }
    }
}

/// Iterator returned by [`ValueAnimator::frames`].
#[derive(Debug, Clone)]
pub struct Frames {
    animator: ValueAnimator,
    origin: Duration,
    interval: Duration,
    index: u32,
    finished: bool,
}

impl Iterator for Frames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.finished {
            return None;
        }
        let at = self.origin + self.interval * self.index;
        self.index += 1;
        let frame = self.animator.tick(at);
        self.finished = frame.done;
        Some(frame.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn starts_at_previous_and_ends_at_target() {
        let mut a = ValueAnimator::new(10.0);
        assert!(a.set_target(110.0, ms(1000)));
        assert_eq!(a.value_at(ms(1000)), 10.0);
        assert_eq!(a.value_at(ms(1500)), 110.0);
        assert_eq!(a.value_at(ms(9000)), 110.0);
    }

    #[test]
    fn halfway_follows_ease_out() {
        let mut a = ValueAnimator::new(0.0);
        a.set_target(1000.0, Duration::ZERO);
        assert!((a.value_at(ms(250)) - 875.0).abs() < 1e-9);
    }

    #[test]
    fn same_target_is_ignored() {
        let mut a = ValueAnimator::new(5.0);
        assert!(!a.set_target(5.0, ms(10)));
        assert_eq!(a.phase(), Phase::Idle);
    }

    #[test]
    fn retarget_continues_from_displayed_value() {
        let mut a = ValueAnimator::new(0.0);
        a.set_target(1000.0, Duration::ZERO);
        let mid = a.value_at(ms(250));
        a.set_target(0.0, ms(250));
        assert_eq!(a.previous(), mid);
        assert_eq!(a.value_at(ms(250)), mid);
        assert_eq!(a.value_at(ms(750)), 0.0);
    }

    #[test]
    fn tick_settles_exactly() {
        let mut a = ValueAnimator::new(1.0);
        a.set_target(2.0 / 3.0, Duration::ZERO);
        let frame = a.tick(ms(100));
        assert!(!frame.done);
        let last = a.tick(ms(500));
        assert!(last.done);
        assert_eq!(last.value, 2.0 / 3.0);
        assert_eq!(a.phase(), Phase::Idle);
    }

    #[test]
    fn time_before_start_counts_as_zero() {
        let mut a = ValueAnimator::new(3.0);
        a.set_target(9.0, ms(100));
        assert_eq!(a.value_at(ms(50)), 3.0);
    }

    #[test]
    fn frames_are_lazy_and_terminate() {
        let mut a = ValueAnimator::new(0.0);
        a.set_target(-50.0, ms(40));
        let values: Vec<f64> = a.frames(ms(16)).collect();
        // 0, 16, ..., 496 still animating; 512 lands
        assert_eq!(values.len(), 33);
        assert_eq!(values[0], 0.0);
        assert_eq!(*values.last().unwrap(), -50.0);
        assert!(values.windows(2).all(|w| w[1] <= w[0]));
        // The source animator is untouched.
        assert!(a.is_animating());
    }

    #[test]
    fn idle_frames_yield_target_once() {
        let a = ValueAnimator::new(42.0);
        let values: Vec<f64> = a.frames(Duration::ZERO).collect();
        assert_eq!(values, vec![42.0]);
    }
}
