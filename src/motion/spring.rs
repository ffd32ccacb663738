//! Spring-damper-mass motion used by every animated widget on the page.
//!
//! Integration is semi-implicit Euler over small fixed sub-steps, which keeps
//! the stiff presets below free of numerical ringing at normal frame rates.

/// Largest frame delta a single `tick` will honour, in seconds.
pub const MAX_FRAME_DT: f64 = 1.0 / 30.0;
/// Largest integration sub-step, in seconds.
pub const MAX_SUBSTEP: f64 = 1.0 / 240.0;
/// Distance from the target under which the spring may settle.
pub const REST_DELTA: f64 = 0.01;
/// Speed under which the spring may settle.
pub const REST_SPEED: f64 = 0.01;

/// Tunables of a spring. Damping ratio is `damping / (2 * sqrt(stiffness * mass))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Pointer-following buttons.
    pub const POINTER_FOLLOW: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 30.0,
        mass: 0.5,
    };

    /// Divider of the before/after slider.
    pub const SLIDER: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 30.0,
        mass: 0.8,
    };

    #[cfg(test)]
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self { stiffness, damping, mass }
    }

    #[cfg(test)]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn is_usable(&self) -> bool {
        self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.mass.is_finite()
            && self.stiffness >= 0.0
            && self.damping >= 0.0
            && self.mass > 0.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::POINTER_FOLLOW
    }
}

/// Anything that moves with the passage of time.
///
/// Implemented by the springs themselves and by the widgets that own them, so
/// the same code can be driven by `requestAnimationFrame` in the browser or by
/// a hand-stepped clock in tests.
pub trait Animate {
    /// Moves the state forward by `dt` seconds. Returns true while still in motion.
    fn advance(&mut self, dt: f64) -> bool;
}

/// A scalar converging on a target through a damped spring.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringValue {
    current: f64,
    target: f64,
    velocity: f64,
    config: SpringConfig,
}

impl SpringValue {
    /// Creates a spring resting at `initial`. An unusable config falls back to the default preset.
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        let config = if config.is_usable() {
            config
        } else {
            log::warn!("Ignoring unusable spring config {:?}", config);
            SpringConfig::default()
        };
        let mut spring = Self {
            current: 0.0,
            target: 0.0,
            velocity: 0.0,
            config,
        };
        spring.jump(initial);
        spring
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[cfg(test)]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Points the spring at a new target. The current value is left alone.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Places the spring at `value` with no motion. Non-finite values are ignored.
    pub fn jump(&mut self, value: f64) {
        if value.is_finite() {
            self.current = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// Advances the simulation by `dt` seconds and reports whether it is still moving.
    ///
    /// `dt` is clamped to [`MAX_FRAME_DT`]; zero, negative and non-finite deltas change nothing.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return !self.is_at_rest();
        }
        if self.is_at_rest() {
            return false;
        }

        let dt = dt.min(MAX_FRAME_DT);
        let steps = (dt / MAX_SUBSTEP).ceil().max(1.0) as usize;
        let h = dt / steps as f64;
        let SpringConfig { stiffness, damping, mass } = self.config;

        for _ in 0..steps {
            let acceleration = (stiffness * (self.target - self.current) - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.current += self.velocity * h;
        }

        if !self.current.is_finite() || !self.velocity.is_finite() {
            log::warn!("Spring diverged, snapping to target {}", self.target);
            self.current = self.target;
            self.velocity = 0.0;
            return false;
        }

        if (self.target - self.current).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.current = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

impl Animate for SpringValue {
    fn advance(&mut self, dt: f64) -> bool {
        self.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_until_rest(spring: &mut SpringValue, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if !spring.tick(FRAME) {
                return frame + 1;
            }
        }
        max_frames
    }

    #[test]
    fn set_target_does_not_move_current() {
        let mut spring = SpringValue::new(0.0, SpringConfig::POINTER_FOLLOW);
        spring.set_target(40.0);
        assert_eq!(spring.current(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 40.0);
    }

    #[test]
    fn repeated_set_target_is_a_pure_write() {
        let mut once = SpringValue::new(0.0, SpringConfig::SLIDER);
        let mut many = SpringValue::new(0.0, SpringConfig::SLIDER);
        once.set_target(25.0);
        for _ in 0..10 {
            many.set_target(25.0);
        }
        assert_eq!(once, many);

        once.tick(FRAME);
        many.set_target(25.0);
        many.tick(FRAME);
        many.set_target(25.0);
        assert_eq!(once, many);
    }

    #[test]
    fn zero_and_negative_dt_change_nothing() {
        let mut spring = SpringValue::new(0.0, SpringConfig::POINTER_FOLLOW);
        spring.set_target(10.0);
        let before = spring.clone();
        assert!(spring.tick(0.0));
        assert!(spring.tick(-1.0));
        assert!(spring.tick(f64::NAN));
        assert!(spring.tick(f64::INFINITY));
        assert_eq!(spring, before);
    }

    #[test]
    fn huge_dt_is_clamped_to_one_frame_budget() {
        let mut clamped = SpringValue::new(0.0, SpringConfig::POINTER_FOLLOW);
        let mut reference = SpringValue::new(0.0, SpringConfig::POINTER_FOLLOW);
        clamped.set_target(100.0);
        reference.set_target(100.0);

        clamped.tick(10.0);
        reference.tick(MAX_FRAME_DT);
        assert_eq!(clamped, reference);
        assert!(clamped.current() > 0.0 && clamped.current() < 100.0);
    }

    #[test]
    fn overdamped_spring_converges_monotonically() {
        let mut spring = SpringValue::new(0.0, SpringConfig::POINTER_FOLLOW);
        spring.set_target(50.0);

        let mut last_error = (spring.target() - spring.current()).abs();
        for _ in 0..600 {
            let moving = spring.tick(FRAME);
            assert!(spring.current() <= spring.target());
            let error = (spring.target() - spring.current()).abs();
            assert!(error < last_error || error == 0.0);
            last_error = error;
            if !moving {
                break;
            }
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.current(), 50.0);
    }

    #[test]
    fn slider_spring_never_visibly_overshoots() {
        let mut spring = SpringValue::new(50.0, SpringConfig::SLIDER);
        spring.set_target(100.0);
        for _ in 0..600 {
            let moving = spring.tick(FRAME);
            assert!(spring.current() < 100.0 + REST_DELTA);
            if !moving {
                break;
            }
        }
        assert_eq!(spring.current(), 100.0);
    }

    #[test]
    fn settles_within_two_seconds() {
        let mut spring = SpringValue::new(0.0, SpringConfig::POINTER_FOLLOW);
        spring.set_target(12.5);
        let frames = run_until_rest(&mut spring, 600);
        assert!(frames < 120, "took {} frames", frames);
    }

    #[test]
    fn retargeting_mid_flight_heads_for_the_new_target() {
        let mut spring = SpringValue::new(0.0, SpringConfig::SLIDER);
        spring.set_target(100.0);
        for _ in 0..5 {
            spring.tick(FRAME);
        }
        spring.set_target(0.0);
        run_until_rest(&mut spring, 600);
        assert_eq!(spring.current(), 0.0);
    }

    #[test]
    fn non_finite_target_is_ignored() {
        let mut spring = SpringValue::new(3.0, SpringConfig::POINTER_FOLLOW);
        spring.set_target(f64::NAN);
        spring.set_target(f64::NEG_INFINITY);
        assert_eq!(spring.target(), 3.0);
        assert!(!spring.tick(FRAME));
    }

    #[test]
    fn unusable_config_falls_back_to_default() {
        let spring = SpringValue::new(0.0, SpringConfig::new(300.0, 30.0, 0.0));
        assert_eq!(spring.config(), SpringConfig::default());
    }

    #[test]
    fn non_finite_initial_value_starts_at_zero() {
        let spring = SpringValue::new(f64::NAN, SpringConfig::SLIDER);
        assert_eq!(spring.current(), 0.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn jump_places_spring_at_rest() {
        let mut spring = SpringValue::new(0.0, SpringConfig::SLIDER);
        spring.set_target(80.0);
        spring.tick(FRAME);
        spring.jump(20.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.current(), 20.0);
        assert!(!spring.tick(FRAME));
    }

    #[test]
    fn presets_are_not_underdamped_oscillators() {
        assert!(SpringConfig::POINTER_FOLLOW.damping_ratio() > 1.0);
        assert!(SpringConfig::SLIDER.damping_ratio() > 0.95);
    }
}
