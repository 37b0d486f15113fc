//! Value transition animator
//!
//! Purely cosmetic "counting up" of displayed figures. A [`ValueAnimator`] is a
//! small state machine (idle or animating) that maps a timestamp to the value on
//! screen; hosts drive it either by sampling [`ValueAnimator::value_at`] from
//! their own render loop, by iterating [`ValueAnimator::frames`], or through
//! [`drive`] with a [`FrameScheduler`].
//!
//! Time is passed in explicitly as a [`Duration`] since an arbitrary origin, so
//! every instance is deterministic and independent of the others.

pub mod animator;
pub mod clock;
pub mod easing;
pub mod scheduler;

pub use animator::{Frame, Frames, Phase, ValueAnimator, TRANSITION_DURATION};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use easing::{ease_out_cubic, progress};
pub use scheduler::{
    drive, FrameScheduler, NoFrames, RealtimeFrames, SimulatedFrames, DEFAULT_REFRESH_HZ,
};
