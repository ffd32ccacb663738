use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// Border-radius outlines the hero image morphs between.
pub const SHAPES: [&str; 6] = [
    "50% 50% 50% 50% / 50% 50% 50% 50%",
    "30% 70% 70% 30% / 40% 60% 40% 60%",
    "70% 30% 30% 70% / 60% 40% 60% 40%",
    "40% 60% 60% 40% / 50% 50% 50% 50%",
    "60% 40% 50% 50% / 50% 60% 40% 50%",
    "50% 50% 40% 60% / 60% 40% 50% 50%",
];

pub fn next_shape(current: usize) -> usize {
    (current + 1) % SHAPES.len()
}

#[derive(Properties, PartialEq)]
pub struct MorphingImageProps {
    #[prop_or(AttrValue::Static("/assets/logo.png"))]
    pub src: AttrValue,
    #[prop_or(AttrValue::Static("Luxe wimperextensions"))]
    pub alt: AttrValue,
}

#[function_component(MorphingImage)]
pub fn morphing_image(props: &MorphingImageProps) -> Html {
    let shape = use_state(|| 0usize);

    {
        let shape = shape.clone();
        use_interval(move || shape.set(next_shape(*shape)), config::SHAPE_INTERVAL_MS);
    }

    html! {
        <div class="morphing-image" style={format!("border-radius: {};", SHAPES[*shape])}>
            <style>
                {r#"
                .morphing-image {
                    position: relative;
                    width: 100%;
                    height: 500px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: border-radius 3s cubic-bezier(0.43, 0.13, 0.23, 0.96);
                }
                .morphing-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: morphBreathe 8s ease-in-out infinite;
                }
                .morphing-image .morphing-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top right, rgba(212, 175, 55, 0.1), rgba(255, 105, 180, 0.1));
                    animation: morphGlow 5s ease-in-out infinite;
                }
                @keyframes morphBreathe {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.05); }
                }
                @keyframes morphGlow {
                    0%, 100% { opacity: 0.3; }
                    50% { opacity: 0.5; }
                }
                @media (min-width: 768px) {
                    .morphing-image { height: 600px; }
                }
                "#}
            </style>
            <img src={props.src.clone()} alt={props.alt.clone()} />
            <div class="morphing-glow"></div>
        </div>
    }
}
