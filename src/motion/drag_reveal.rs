//! Before/after comparison: a draggable divider over two stacked images.
//!
//! The committed percentage follows the pointer exactly. Only the painted
//! divider goes through a spring, so fast drags trail slightly on screen
//! without the logical value ever lagging the input.

use crate::config;
use crate::motion::geometry::Bounds;
use crate::motion::spring::{Animate, SpringConfig, SpringValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Divider position, in percent of the container width, for a pointer at `client_x`.
///
/// `None` when the container cannot be measured or the coordinate is garbage.
pub fn percentage_at(client_x: f64, bounds: Option<Bounds>) -> Option<f64> {
    let bounds = bounds.filter(Bounds::is_measurable)?;
    if !client_x.is_finite() {
        return None;
    }
    Some(((client_x - bounds.left) / bounds.width * 100.0).clamp(0.0, 100.0))
}

#[derive(Debug, Clone)]
pub struct DragRevealSlider {
    percentage: f64,
    state: DragState,
    divider: SpringValue,
}

impl DragRevealSlider {
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            percentage: config::SLIDER_START_PERCENTAGE,
            state: DragState::Idle,
            divider: SpringValue::new(config::SLIDER_START_PERCENTAGE, spring),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// The committed divider position, always within [0, 100].
    #[cfg(test)]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// The spring-smoothed position to paint.
    pub fn rendered_percentage(&self) -> f64 {
        self.divider.current()
    }

    /// Pointer or touch went down inside the container.
    pub fn press(&mut self, client_x: f64, bounds: Option<Bounds>) {
        if self.state == DragState::Idle {
            log::debug!("Comparison slider captured at x={}", client_x);
        }
        self.state = DragState::Dragging;
        self.commit(client_x, bounds);
    }

    /// Pointer or touch moved. Ignored unless captured. Returns whether the percentage changed.
    pub fn drag_to(&mut self, client_x: f64, bounds: Option<Bounds>) -> bool {
        if self.state != DragState::Dragging {
            return false;
        }
        self.commit(client_x, bounds)
    }

    /// Ends the capture. Safe to call from any release path, repeatedly.
    pub fn release(&mut self) {
        if self.state == DragState::Dragging {
            log::debug!("Comparison slider released at {:.1}%", self.percentage);
        }
        self.state = DragState::Idle;
    }

    fn commit(&mut self, client_x: f64, bounds: Option<Bounds>) -> bool {
        let Some(percentage) = percentage_at(client_x, bounds) else {
            return false;
        };
        let changed = percentage != self.percentage;
        self.percentage = percentage;
        self.divider.set_target(percentage);
        changed
    }
}

impl Default for DragRevealSlider {
    fn default() -> Self {
        Self::new(config::SLIDER_SPRING)
    }
}

impl Animate for DragRevealSlider {
    fn advance(&mut self, dt: f64) -> bool {
        self.divider.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn container() -> Option<Bounds> {
        Some(Bounds::new(20.0, 300.0, 400.0, 500.0))
    }

    #[test]
    fn starts_idle_at_half() {
        let slider = DragRevealSlider::default();
        assert_eq!(slider.state(), DragState::Idle);
        assert_eq!(slider.percentage(), 50.0);
        assert_eq!(slider.rendered_percentage(), 50.0);
    }

    #[test]
    fn press_drag_past_edge_and_release() {
        let mut slider = DragRevealSlider::default();

        slider.press(20.0 + 100.0, container());
        assert_eq!(slider.state(), DragState::Dragging);
        assert_eq!(slider.percentage(), 25.0);

        assert!(slider.drag_to(20.0 + 500.0, container()));
        assert_eq!(slider.percentage(), 100.0);

        slider.release();
        assert_eq!(slider.state(), DragState::Idle);
        assert_eq!(slider.percentage(), 100.0);
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut slider = DragRevealSlider::default();
        slider.press(120.0, container());
        slider.drag_to(220.0, container());
        slider.release();

        assert!(!slider.drag_to(40.0, container()));
        assert_eq!(slider.percentage(), 50.0);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut slider = DragRevealSlider::default();
        assert!(!slider.drag_to(40.0, container()));
        assert_eq!(slider.percentage(), 50.0);
    }

    #[test]
    fn out_of_bounds_pointer_is_clamped() {
        for x in [-1000.0, 0.0, 19.9, 420.1, 5000.0] {
            let pct = percentage_at(x, container()).unwrap();
            assert!((0.0..=100.0).contains(&pct), "{} -> {}", x, pct);
        }
        assert_eq!(percentage_at(-1000.0, container()), Some(0.0));
        assert_eq!(percentage_at(5000.0, container()), Some(100.0));
    }

    #[test]
    fn unmeasured_container_is_a_no_op() {
        let mut slider = DragRevealSlider::default();
        slider.press(120.0, None);
        assert!(slider.is_dragging());
        assert_eq!(slider.percentage(), 50.0);

        assert!(!slider.drag_to(300.0, Some(Bounds::new(0.0, 0.0, 0.0, 0.0))));
        assert!(!slider.drag_to(f64::NAN, container()));
        assert_eq!(slider.percentage(), 50.0);
    }

    #[test]
    fn release_is_idempotent() {
        let mut slider = DragRevealSlider::default();
        slider.release();
        slider.press(120.0, container());
        slider.release();
        slider.release();
        assert_eq!(slider.state(), DragState::Idle);
    }

    #[test]
    fn painted_divider_trails_then_catches_up() {
        let mut slider = DragRevealSlider::default();
        slider.press(20.0 + 400.0, container());
        assert_eq!(slider.percentage(), 100.0);
        assert_eq!(slider.rendered_percentage(), 50.0);

        assert!(slider.advance(FRAME));
        let first = slider.rendered_percentage();
        assert!(first > 50.0 && first < 100.0);

        for _ in 0..600 {
            if !slider.advance(FRAME) {
                break;
            }
        }
        assert_eq!(slider.rendered_percentage(), 100.0);
    }
}
