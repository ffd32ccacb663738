use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CtaVariant {
    #[default]
    Primary,
    Ghost,
    SolidDark,
    Icon,
}

impl CtaVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            CtaVariant::Primary => "cta-primary",
            CtaVariant::Ghost => "cta-ghost",
            CtaVariant::SolidDark => "cta-solid-dark",
            CtaVariant::Icon => "cta-icon",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub variant: CtaVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("cta-button", props.variant.class_name(), props.class.clone())}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_its_own_class() {
        let classes = [
            CtaVariant::Primary.class_name(),
            CtaVariant::Ghost.class_name(),
            CtaVariant::SolidDark.class_name(),
            CtaVariant::Icon.class_name(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(CtaVariant::default(), CtaVariant::Primary);
    }
}
