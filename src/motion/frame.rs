use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Turns `requestAnimationFrame` timestamps (milliseconds) into frame deltas (seconds).
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp. The first frame after a reset is zero.
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt_ms = match self.last_ms {
            Some(prev) => (timestamp_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt_ms / 1000.0
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

type Step = Box<dyn FnMut(f64) -> bool>;

struct LoopInner {
    frame: RefCell<Option<AnimationFrame>>,
    clock: RefCell<FrameClock>,
    step: RefCell<Step>,
}

/// Runs a step closure once per animation frame for as long as it reports motion.
///
/// The loop idles when the step returns false and is restarted with [`FrameLoop::kick`].
/// Owners must call [`FrameLoop::stop`] when they go away; a pending frame holds a
/// reference to the loop.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new<F>(step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        Self {
            inner: Rc::new(LoopInner {
                frame: RefCell::new(None),
                clock: RefCell::new(FrameClock::new()),
                step: RefCell::new(Box::new(step)),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.frame.borrow().is_some()
    }

    /// Schedules the next frame unless one is already pending.
    pub fn kick(&self) {
        if self.is_running() {
            return;
        }
        Self::schedule(&self.inner);
    }

    /// Cancels any pending frame.
    pub fn stop(&self) {
        self.inner.frame.borrow_mut().take();
        self.inner.clock.borrow_mut().reset();
    }

    fn schedule(inner: &Rc<LoopInner>) {
        let next = Rc::clone(inner);
        let handle = request_animation_frame(move |timestamp| {
            next.frame.borrow_mut().take();
            let dt = next.clock.borrow_mut().delta(timestamp);
            let moving = (next.step.borrow_mut())(dt);
            if moving {
                Self::schedule(&next);
            } else {
                next.clock.borrow_mut().reset();
            }
        });
        *inner.frame.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0), 0.0);
        assert!((clock.delta(1016.0) - 0.016).abs() < 1e-12);
    }

    #[test]
    fn backwards_timestamps_yield_zero() {
        let mut clock = FrameClock::new();
        clock.delta(500.0);
        assert_eq!(clock.delta(400.0), 0.0);
        assert!((clock.delta(450.0) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn reset_forgets_previous_frame() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        clock.delta(16.0);
        clock.reset();
        assert_eq!(clock.delta(10_000.0), 0.0);
    }

    #[test]
    fn garbage_timestamp_is_ignored() {
        let mut clock = FrameClock::new();
        clock.delta(100.0);
        assert_eq!(clock.delta(f64::NAN), 0.0);
        assert!((clock.delta(132.0) - 0.032).abs() < 1e-12);
    }
}
