use yew::prelude::*;
use web_sys::Element;

use crate::config;
use crate::motion::frame::FrameLoop;
use crate::motion::geometry::{Bounds, Offset};
use crate::motion::magnetic::PointerSpringFollower;
use crate::motion::spring::{Animate, SpringConfig};

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::MAGNETIC_SPRING)]
    pub spring: SpringConfig,
    #[prop_or(config::MAGNETIC_SENSITIVITY)]
    pub sensitivity: f64,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let button_ref = use_node_ref();
    let offset = use_state_eq(|| Offset::ZERO);
    let (spring, sensitivity) = (props.spring, props.sensitivity);
    let follower =
        use_mut_ref(move || PointerSpringFollower::new(spring).with_sensitivity(sensitivity));

    let frames = {
        let follower = follower.clone();
        let offset = offset.clone();
        use_memo(
            move |_| {
                FrameLoop::new(move |dt| {
                    let mut follower = follower.borrow_mut();
                    let moving = follower.advance(dt);
                    offset.set(follower.offset());
                    moving
                })
            },
            (),
        )
    };

    // Cancel any pending frame on unmount
    {
        let frames = frames.clone();
        use_effect_with_deps(move |_| move || frames.stop(), ());
    }

    let onmousemove = {
        let button_ref = button_ref.clone();
        let follower = follower.clone();
        let frames = frames.clone();
        Callback::from(move |e: MouseEvent| {
            let bounds = button_ref.cast::<Element>().map(|el| Bounds::measure(&el));
            follower
                .borrow_mut()
                .pointer_move(e.client_x() as f64, e.client_y() as f64, bounds);
            frames.kick();
        })
    };

    let onmouseleave = {
        let follower = follower.clone();
        let frames = frames.clone();
        Callback::from(move |_: MouseEvent| {
            follower.borrow_mut().pointer_leave();
            frames.kick();
        })
    };

    html! {
        <button
            ref={button_ref}
            class={classes!("magnetic-button", props.class.clone())}
            style={format!("transform: {};", offset.to_transform())}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </button>
    }
}
