use web_sys::Element;

/// Viewport-relative box of an element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn measure(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// False for detached or collapsed elements, which report an empty box.
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A 2D displacement in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn distance_to(&self, other: Offset) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_transform(&self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_broken_boxes_are_not_measurable() {
        assert!(Bounds::new(10.0, 10.0, 200.0, 50.0).is_measurable());
        assert!(!Bounds::new(0.0, 0.0, 0.0, 0.0).is_measurable());
        assert!(!Bounds::new(0.0, 0.0, 200.0, 0.0).is_measurable());
        assert!(!Bounds::new(f64::NAN, 0.0, 200.0, 50.0).is_measurable());
        assert!(!Bounds::new(0.0, 0.0, f64::INFINITY, 50.0).is_measurable());
    }

    #[test]
    fn center_is_midpoint() {
        assert_eq!(Bounds::new(50.0, 80.0, 100.0, 40.0).center(), (100.0, 100.0));
    }

    #[test]
    fn transform_is_css_translate() {
        assert_eq!(Offset::new(12.5, -5.0).to_transform(), "translate3d(12.50px, -5.00px, 0)");
    }
}
