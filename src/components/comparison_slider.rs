use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::drag_reveal::DragRevealSlider;
use crate::motion::frame::FrameLoop;
use crate::motion::geometry::Bounds;
use crate::motion::spring::{Animate, SpringConfig};

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    #[prop_or(AttrValue::Static("/assets/img.png"))]
    pub before: AttrValue,
    #[prop_or(AttrValue::Static("/assets/img_1.png"))]
    pub after: AttrValue,
    #[prop_or(config::SLIDER_SPRING)]
    pub spring: SpringConfig,
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| touch.client_x() as f64)
}

fn measure(container: &NodeRef) -> Option<Bounds> {
    container.cast::<Element>().map(|el| Bounds::measure(&el))
}

/// Clip for the "after" layer so that only the left `pct` percent shows.
fn reveal_clip(pct: f64) -> String {
    format!("clip-path: inset(0 {:.3}% 0 0);", 100.0 - pct.clamp(0.0, 100.0))
}

fn divider_left(pct: f64) -> String {
    format!("left: {:.3}%;", pct.clamp(0.0, 100.0))
}

#[function_component(ComparisonSlider)]
pub fn comparison_slider(props: &ComparisonSliderProps) -> Html {
    let container_ref = use_node_ref();
    let spring = props.spring;
    let slider = use_mut_ref(move || DragRevealSlider::new(spring));
    let rendered = use_state_eq(|| config::SLIDER_START_PERCENTAGE);
    let dragging = use_state_eq(|| false);

    let frames = {
        let slider = slider.clone();
        let rendered = rendered.clone();
        use_memo(
            move |_| {
                FrameLoop::new(move |dt| {
                    let mut slider = slider.borrow_mut();
                    let moving = slider.advance(dt);
                    rendered.set(slider.rendered_percentage());
                    moving
                })
            },
            (),
        )
    };

    // Touch moves are registered by hand: they must be non-passive to stop the page
    // from scrolling mid-drag. A lost window focus counts as a release.
    {
        let container_ref = container_ref.clone();
        let slider = slider.clone();
        let frames = frames.clone();
        let dragging = dragging.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();

                if let Some(container) = container_ref.cast::<HtmlElement>() {
                    let slider = slider.clone();
                    let frames = frames.clone();
                    let container_ref = container_ref.clone();
                    listeners.push(EventListener::new_with_options(
                        &container,
                        "touchmove",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            if !slider.borrow().is_dragging() {
                                return;
                            }
                            event.prevent_default();
                            let Some(x) = first_touch_x(event) else {
                                return;
                            };
                            if slider.borrow_mut().drag_to(x, measure(&container_ref)) {
                                frames.kick();
                            }
                        },
                    ));
                } else {
                    log::warn!("Comparison slider mounted without a container");
                }

                if let Some(window) = web_sys::window() {
                    let slider = slider.clone();
                    let dragging = dragging.clone();
                    listeners.push(EventListener::new(&window, "blur", move |_| {
                        slider.borrow_mut().release();
                        dragging.set(false);
                    }));
                }

                move || {
                    drop(listeners);
                    frames.stop();
                }
            },
            (),
        );
    }

    let press = {
        let container_ref = container_ref.clone();
        let slider = slider.clone();
        let frames = frames.clone();
        let dragging = dragging.clone();
        move |x: f64| {
            slider.borrow_mut().press(x, measure(&container_ref));
            dragging.set(true);
            frames.kick();
        }
    };

    let release = {
        let slider = slider.clone();
        let dragging = dragging.clone();
        move || {
            slider.borrow_mut().release();
            dragging.set(false);
        }
    };

    let onmousedown = {
        let press = press.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            press(e.client_x() as f64);
        })
    };

    let ontouchstart = {
        let press = press.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                press(x);
            }
        })
    };

    let onmousemove = {
        let container_ref = container_ref.clone();
        let slider = slider.clone();
        let frames = frames.clone();
        Callback::from(move |e: MouseEvent| {
            if slider.borrow_mut().drag_to(e.client_x() as f64, measure(&container_ref)) {
                frames.kick();
            }
        })
    };

    let on_release_mouse = {
        let release = release.clone();
        Callback::from(move |_: MouseEvent| release())
    };

    let on_release_touch = {
        let release = release.clone();
        Callback::from(move |_: TouchEvent| release())
    };

    html! {
        <div
            ref={container_ref}
            class={classes!("comparison-slider", (*dragging).then(|| "dragging"))}
            {onmousedown}
            {onmousemove}
            onmouseup={on_release_mouse.clone()}
            onmouseleave={on_release_mouse}
            {ontouchstart}
            ontouchend={on_release_touch.clone()}
            ontouchcancel={on_release_touch}
        >
            <style>
                {r#"
                .comparison-slider {
                    position: relative;
                    width: 100%;
                    height: 400px;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    cursor: ew-resize;
                    user-select: none;
                    touch-action: pan-y;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    background: rgba(17, 17, 17, 0.05);
                }
                .comparison-slider.dragging {
                    touch-action: none;
                }
                .comparison-layer {
                    position: absolute;
                    inset: 0;
                }
                .comparison-layer img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: center center;
                    pointer-events: none;
                }
                .comparison-before { z-index: 0; background: #f5f5f5; }
                .comparison-after { z-index: 10; }
                .comparison-divider {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 4px;
                    transform: translateX(-50%);
                    background: rgba(255, 255, 255, 0.6);
                    z-index: 20;
                }
                .comparison-handle {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 3.5rem;
                    height: 3.5rem;
                    transform: translate(-50%, -50%);
                    border-radius: 50%;
                    background: linear-gradient(135deg, #d4af37, #ff69b4);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 6px;
                    cursor: grab;
                    transition: scale 0.2s ease;
                }
                .comparison-handle:hover { scale: 1.12; }
                .comparison-slider.dragging .comparison-handle { cursor: grabbing; scale: 0.95; }
                .comparison-handle span {
                    width: 2px;
                    height: 1.25rem;
                    background: #fff;
                    border-radius: 2px;
                    animation: handlePulse 1.5s ease-in-out infinite;
                }
                .comparison-handle span:nth-child(2) { animation-delay: 0.2s; }
                @keyframes handlePulse {
                    0%, 100% { transform: scaleY(1); }
                    50% { transform: scaleY(1.2); }
                }
                @media (min-width: 768px) {
                    .comparison-slider { height: 500px; }
                }
                "#}
            </style>
            <div class="comparison-layer comparison-before">
                <img src={props.before.clone()} alt="Voor" draggable="false" />
            </div>
            <div class="comparison-layer comparison-after" style={reveal_clip(*rendered)}>
                <img src={props.after.clone()} alt="Na" draggable="false" />
            </div>
            <div class="comparison-divider" style={divider_left(*rendered)}>
                <div class="comparison-handle">
                    <span></span>
                    <span></span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_clip_hides_the_right_side() {
        assert_eq!(reveal_clip(25.0), "clip-path: inset(0 75.000% 0 0);");
        assert_eq!(reveal_clip(100.0), "clip-path: inset(0 0.000% 0 0);");
    }

    #[test]
    fn styles_never_leave_the_container() {
        assert_eq!(divider_left(130.0), "left: 100.000%;");
        assert_eq!(reveal_clip(-5.0), "clip-path: inset(0 100.000% 0 0);");
    }
}
