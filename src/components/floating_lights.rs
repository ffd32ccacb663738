use yew::prelude::*;

use crate::config;

/// One blurred orb drifting behind the hero.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLight {
    pub size: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    /// Two waypoints of the drift loop, in pixels from the resting spot.
    pub drift: [(f64, f64); 2],
    pub duration_s: f64,
}

impl FloatingLight {
    fn style(&self) -> String {
        format!(
            "width: {size:.0}px; height: {size:.0}px; left: {left:.2}%; top: {top:.2}%; \
             --dx1: {dx1:.1}px; --dy1: {dy1:.1}px; --dx2: {dx2:.1}px; --dy2: {dy2:.1}px; \
             animation-duration: {dur:.1}s;",
            size = self.size,
            left = self.left_pct,
            top = self.top_pct,
            dx1 = self.drift[0].0,
            dy1 = self.drift[0].1,
            dx2 = self.drift[1].0,
            dy2 = self.drift[1].1,
            dur = self.duration_s,
        )
    }
}

/// Draws `count` orbs from `random`, which must yield values in [0, 1).
pub fn generate_lights<R>(count: usize, mut random: R) -> Vec<FloatingLight>
where
    R: FnMut() -> f64,
{
    (0..count)
        .map(|_| {
            let size = random() * 400.0 + 200.0;
            let left_pct = random() * 100.0;
            let top_pct = random() * 100.0;
            let first = (random() * 150.0 - 75.0, random() * 150.0 - 75.0);
            let second = (random() * 100.0 - 50.0, random() * 100.0 - 50.0);
            let duration_s = random() * 15.0 + 15.0;
            FloatingLight {
                size,
                left_pct,
                top_pct,
                drift: [first, second],
                duration_s,
            }
        })
        .collect()
}

#[function_component(FloatingLights)]
pub fn floating_lights() -> Html {
    let lights = use_memo(
        |_| generate_lights(config::FLOATING_LIGHT_COUNT, web_sys::js_sys::Math::random),
        (),
    );

    html! {
        <div class="floating-lights" aria-hidden="true">
            <style>
                {r#"
                .floating-lights {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .floating-light {
                    position: absolute;
                    border-radius: 50%;
                    background: linear-gradient(135deg, rgba(212, 175, 55, 0.2), rgba(255, 105, 180, 0.2));
                    filter: blur(64px);
                    animation-name: floatingDrift;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }
                @keyframes floatingDrift {
                    0%, 100% { transform: translate(0, 0) scale(1); opacity: 0.2; }
                    33% { transform: translate(var(--dx1), var(--dy1)) scale(1.2); opacity: 0.5; }
                    66% { transform: translate(var(--dx2), var(--dy2)) scale(0.9); opacity: 0.3; }
                }
                "#}
            </style>
            { for lights.iter().map(|light| html! {
                <div class="floating-light" style={light.style()}></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lights_stay_within_their_ranges() {
        let mut seed = 0.0_f64;
        let lights = generate_lights(6, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(lights.len(), 6);
        for light in &lights {
            assert!((200.0..600.0).contains(&light.size));
            assert!((0.0..100.0).contains(&light.left_pct));
            assert!((0.0..100.0).contains(&light.top_pct));
            assert!((15.0..30.0).contains(&light.duration_s));
            assert!(light.drift[0].0.abs() <= 75.0 && light.drift[0].1.abs() <= 75.0);
            assert!(light.drift[1].0.abs() <= 50.0 && light.drift[1].1.abs() <= 50.0);
        }
    }

    #[test]
    fn extremes_of_the_random_source() {
        let low = generate_lights(1, || 0.0);
        assert_eq!(low[0].size, 200.0);
        assert_eq!(low[0].drift, [(-75.0, -75.0), (-50.0, -50.0)]);
    }
}
