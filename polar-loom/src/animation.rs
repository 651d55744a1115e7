//! Animation driver: turns wall-clock time into render times.
//!
//! The loop is cooperative. The caller polls [`Animator::next_frame`] once
//! per iteration of its own event loop (the equivalent of requesting the
//! next animation frame) and renders whatever time it gets back. Replacing
//! parameters calls [`Animator::reset`], which bumps a generation counter so
//! a frame that was handed out before the reset is recognisably stale.

use std::time::Instant;

/// A render request: the time to render at and the loop it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub generation: u64,
}

/// Elapsed-time source for one animation loop.
///
/// The start instant is taken from the first frame, so the first animated
/// frame always renders at time 0.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    started: Option<Instant>,
    speed: f64,
}

impl AnimationClock {
    pub fn new(speed: f64) -> Self {
        Self { started: None, speed }
    }

    /// Scaled seconds since the first call.
    pub fn elapsed(&mut self, now: Instant) -> f64 {
        let start = *self.started.get_or_insert(now);
        now.saturating_duration_since(start).as_secs_f64() * self.speed
    }
}

/// Owns the running loop (if any) and its cancellation generation.
#[derive(Debug, Default)]
pub struct Animator {
    clock: Option<AnimationClock>,
    generation: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters were replaced.
    ///
    /// Cancels the current loop. When `animate` is set a fresh loop starts
    /// and `None` is returned (frames come from `next_frame`). Otherwise the
    /// single still frame at time 0 is returned.
    pub fn reset(&mut self, animate: bool, speed: f64) -> Option<Frame> {
        self.generation += 1;
        if animate {
            self.clock = Some(AnimationClock::new(speed));
            None
        } else {
            self.clock = None;
            Some(Frame { time: 0.0, generation: self.generation })
        }
    }

    /// Stop the loop. No frame is produced until the next `reset`.
    pub fn cancel(&mut self) {
        if self.clock.take().is_some() {
            self.generation += 1;
        }
    }

    /// Next frame of the running loop, `None` when not animating.
    pub fn next_frame(&mut self, now: Instant) -> Option<Frame> {
        let clock = self.clock.as_mut()?;
        Some(Frame { time: clock.elapsed(now), generation: self.generation })
    }

    /// Whether `frame` belongs to the current loop.
    pub fn is_current(&self, frame: &Frame) -> bool {
        frame.generation == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_frame_is_at_zero() {
        let mut clock = AnimationClock::new(2.0);
        let t0 = Instant::now();
        assert_eq!(clock.elapsed(t0), 0.0);
        let t = clock.elapsed(t0 + Duration::from_millis(1500));
        assert!((t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn clock_is_monotonic_and_never_negative() {
        let mut clock = AnimationClock::new(1.0);
        let t0 = Instant::now() + Duration::from_secs(1);
        clock.elapsed(t0);
        // an earlier instant saturates to zero instead of going backwards
        assert_eq!(clock.elapsed(t0 - Duration::from_millis(500)), 0.0);

        let mut last = 0.0;
        for ms in [16, 33, 50, 1000] {
            let t = clock.elapsed(t0 + Duration::from_millis(ms));
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn still_params_give_one_frame_at_zero() {
        let mut animator = Animator::new();
        let frame = animator.reset(false, 1.0).unwrap();
        assert_eq!(frame.time, 0.0);
        assert!(animator.is_current(&frame));
        assert_eq!(animator.next_frame(Instant::now()), None);
    }

    #[test]
    fn animated_params_produce_scaled_frames() {
        let mut animator = Animator::new();
        assert_eq!(animator.reset(true, 0.5), None);

        let t0 = Instant::now();
        let first = animator.next_frame(t0).unwrap();
        let later = animator.next_frame(t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(first.time, 0.0);
        assert!((later.time - 1.0).abs() < 1e-9);
        assert_eq!(first.generation, later.generation);
    }

    #[test]
    fn disabling_animate_stops_frames_and_stales_in_flight_ones() {
        let mut animator = Animator::new();
        animator.reset(true, 1.0);
        let t0 = Instant::now();
        let in_flight = animator.next_frame(t0).unwrap();

        let still = animator.reset(false, 1.0).unwrap();
        assert!(!animator.is_current(&in_flight));
        assert!(animator.is_current(&still));
        for ms in [16, 32, 48] {
            assert_eq!(animator.next_frame(t0 + Duration::from_millis(ms)), None);
        }
    }

    #[test]
    fn cancel_stops_the_loop() {
        let mut animator = Animator::new();
        animator.reset(true, 1.0);
        let frame = animator.next_frame(Instant::now()).unwrap();
        animator.cancel();
        assert!(!animator.is_running());
        assert!(!animator.is_current(&frame));
        assert_eq!(animator.next_frame(Instant::now()), None);
    }

    #[test]
    fn replacing_params_restarts_time() {
        let mut animator = Animator::new();
        animator.reset(true, 1.0);
        let t0 = Instant::now();
        animator.next_frame(t0);
        let before = animator.next_frame(t0 + Duration::from_secs(5)).unwrap();

        animator.reset(true, 1.0);
        let after = animator.next_frame(t0 + Duration::from_secs(6)).unwrap();
        assert!((before.time - 5.0).abs() < 1e-9);
        assert_eq!(after.time, 0.0);
        assert!(after.generation > before.generation);
    }
}
