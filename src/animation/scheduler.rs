//! Frame scheduling seam between animators and the host's refresh cycle.

use std::time::Duration;

use tracing::debug;

use super::animator::ValueAnimator;
use super::clock::Clock;

/// Host refresh rate assumed by the bundled schedulers.
pub const DEFAULT_REFRESH_HZ: u32 = 60;

/// Source of rendering-frame timestamps.
pub trait FrameScheduler {
    /// Block until the next frame is due and return its timestamp, or `None`
    /// when the host cannot schedule frames at all.
    fn next_frame(&mut self) -> Option<Duration>;
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn next_frame(&mut self) -> Option<Duration> {
        (**self).next_frame()
    }
}

fn frame_interval(refresh_hz: u32) -> Duration {
    Duration::from_secs(1) / refresh_hz.max(1)
}

/// Virtual frames at a fixed rate; no sleeping. Suited to headless rendering.
#[derive(Debug, Clone)]
pub struct SimulatedFrames {
    now: Duration,
    interval: Duration,
}

impl SimulatedFrames {
    /// Frames every `1 / refresh_hz` seconds after `start`.
    pub fn new(start: Duration, refresh_hz: u32) -> Self {
        Self {
            now: start,
            interval: frame_interval(refresh_hz),
        }
    }

    pub fn at_default_rate(start: Duration) -> Self {
        Self::new(start, DEFAULT_REFRESH_HZ)
    }

    pub fn now(&self) -> Duration {
        self.now
    }
}

impl FrameScheduler for SimulatedFrames {
    fn next_frame(&mut self) -> Option<Duration> {
        self.now += self.interval;
        Some(self.now)
    }
}

/// Real-time frames paced by sleeping the current thread.
///
/// The clock must advance on its own while the thread sleeps, as
/// [`MonotonicClock`](super::MonotonicClock) does. Paired with a clock that only
/// moves when told to, [`drive`] never sees the transition finish.
#[derive(Debug)]
pub struct RealtimeFrames<C: Clock> {
    clock: C,
    interval: Duration,
    next_due: Duration,
}

impl<C: Clock> RealtimeFrames<C> {
    pub fn new(clock: C, refresh_hz: u32) -> Self {
        let interval = frame_interval(refresh_hz);
        let next_due = clock.now() + interval;
        Self {
            clock,
            interval,
            next_due,
        }
    }
}

impl<C: Clock> FrameScheduler for RealtimeFrames<C> {
    fn next_frame(&mut self) -> Option<Duration> {
        let now = self.clock.now();
        if self.next_due > now {
            std::thread::sleep(self.next_due - now);
        }
        // Skip missed frames rather than bursting to catch up.
        let now = self.clock.now();
        while self.next_due <= now {
            self.next_due += self.interval;
        }
        Some(now)
    }
}

/// Host without frame callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFrames;

impl FrameScheduler for NoFrames {
    fn next_frame(&mut self) -> Option<Duration> {
        None
    }
}

/// Run the animator's current transition to completion, reporting every
/// displayed value to `on_frame`. Returns the number of values reported.
///
/// If the scheduler cannot provide frames the animator jumps straight to its
/// target and reports that single value.
pub fn drive<S, F>(animator: &mut ValueAnimator, mut scheduler: S, mut on_frame: F) -> usize
where
    S: FrameScheduler,
    F: FnMut(f64),
{
    if !animator.is_animating() {
        on_frame(animator.target());
        return 1;
    }

    let mut reported = 0;
    loop {
        match scheduler.next_frame() {
            Some(at) => {
                let frame = animator.tick(at);
                on_frame(frame.value);
                reported += 1;
                if frame.done {
                    return reported;
                }
            }
            None => {
                debug!(
                    target_value = animator.target(),
                    "frame scheduling unavailable, showing target without transition"
                );
                let target = animator.target();
                animator.jump_to(target);
                on_frame(target);
                return reported + 1;
            }
        }
    }
}
