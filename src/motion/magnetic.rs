use crate::config;
use crate::motion::geometry::{Bounds, Offset};
use crate::motion::spring::{Animate, SpringConfig, SpringValue};

/// Pulls an element toward the pointer while it hovers, and lets it drift back on leave.
#[derive(Debug, Clone)]
pub struct PointerSpringFollower {
    x: SpringValue,
    y: SpringValue,
    sensitivity: f64,
}

impl PointerSpringFollower {
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            x: SpringValue::new(0.0, spring),
            y: SpringValue::new(0.0, spring),
            sensitivity: config::MAGNETIC_SENSITIVITY,
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        if sensitivity.is_finite() {
            self.sensitivity = sensitivity;
        }
        self
    }

    /// Retargets both axes from a pointer position over an element.
    ///
    /// Without usable bounds (element gone or collapsed) the target falls back to rest.
    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64, bounds: Option<Bounds>) {
        let target = match bounds {
            Some(bounds) if bounds.is_measurable() && pointer_x.is_finite() && pointer_y.is_finite() => {
                let (center_x, center_y) = bounds.center();
                Offset::new(
                    (pointer_x - center_x) * self.sensitivity,
                    (pointer_y - center_y) * self.sensitivity,
                )
            }
            _ => Offset::ZERO,
        };
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    #[cfg(test)]
    pub fn target(&self) -> Offset {
        Offset::new(self.x.target(), self.y.target())
    }

    /// The displacement to paint this frame.
    pub fn offset(&self) -> Offset {
        Offset::new(self.x.current(), self.y.current())
    }
}

impl Animate for PointerSpringFollower {
    fn advance(&mut self, dt: f64) -> bool {
        // Both axes must step, so no short-circuit.
        let moving_x = self.x.tick(dt);
        let moving_y = self.y.tick(dt);
        moving_x || moving_y
    }
}
