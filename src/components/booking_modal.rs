use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

use crate::booking::models::{BookingForm, SERVICES};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub default_service: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<BookingForm>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Reservation form. Mounted only while open; closing unmounts it.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let service_ref = use_node_ref();
    let date_ref = use_node_ref();

    // Escape closes; the listener lives exactly as long as the modal does
    {
        let name_ref = name_ref.clone();
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
                let listener = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| {
                        EventListener::new(&document, "keydown", move |event| {
                            let is_escape = event
                                .dyn_ref::<KeyboardEvent>()
                                .map_or(false, |e| e.key() == "Escape");
                            if is_escape {
                                on_close.emit(());
                            }
                        })
                    });
                move || drop(listener)
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let service_ref = service_ref.clone();
        let date_ref = date_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let service = service_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            on_submit.emit(BookingForm {
                name: input_value(&name_ref),
                phone: input_value(&phone_ref),
                service,
                date: input_value(&date_ref),
            });
        })
    };

    html! {
        <div class="booking-modal">
            <style>
                {r#"
                .booking-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: modalFade 0.25s ease-out;
                }
                .booking-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .booking-dialog {
                    position: relative;
                    z-index: 10;
                    width: 91.666%;
                    max-width: 32rem;
                    padding: 1.5rem;
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    animation: dialogRise 0.45s cubic-bezier(0.22, 1, 0.36, 1);
                }
                .booking-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .booking-header h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    margin: 0;
                }
                .booking-close {
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    color: rgba(17, 17, 17, 0.6);
                    cursor: pointer;
                }
                .booking-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .booking-form input,
                .booking-form select {
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 0.375rem;
                    border: 1px solid #ddd;
                    font: inherit;
                    box-sizing: border-box;
                }
                .booking-error {
                    color: #c2185b;
                    font-size: 0.9rem;
                }
                .booking-actions {
                    display: flex;
                    gap: 0.75rem;
                    justify-content: flex-end;
                }
                .booking-actions button {
                    padding: 0.5rem 1rem;
                    border-radius: 0.375rem;
                    border: 1px solid #ddd;
                    background: #fff;
                    cursor: pointer;
                    font: inherit;
                }
                .booking-actions button[type="submit"] {
                    border: none;
                    color: #fff;
                    background: linear-gradient(to right, #d4af37, #ff69b4);
                }
                @keyframes modalFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes dialogRise {
                    from { transform: translateY(40px) scale(0.98); }
                    to { transform: translateY(0) scale(1); }
                }
                "#}
            </style>
            <div class="booking-backdrop" onclick={close.clone()}></div>
            <div class="booking-dialog" role="dialog" aria-modal="true">
                <div class="booking-header">
                    <h3>{"Reservering"}</h3>
                    <button class="booking-close" aria-label="Sluit venster" onclick={close.clone()}>{"✕"}</button>
                </div>
                <form class="booking-form" {onsubmit}>
                    <input ref={name_ref} name="name" required={true} placeholder="Uw naam" />
                    <input ref={phone_ref} name="phone" type="tel" required={true} placeholder="Telefoon" />
                    <select ref={service_ref} name="service">
                        { for SERVICES.iter().map(|service| html! {
                            <option value={*service} selected={&*props.default_service == *service}>{*service}</option>
                        }) }
                    </select>
                    <input ref={date_ref} name="date" type="date" />
                    if let Some(error) = &props.error {
                        <div class="booking-error" role="alert">{error.clone()}</div>
                    }
                    <div class="booking-actions">
                        <button type="button" onclick={close}>{"Annuleren"}</button>
                        <button type="submit">{"Verzenden"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
