use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::booking::dialog::{BookingDialog, HandlerRef};
use crate::booking::models::BookingForm;
use crate::components::booking_modal::BookingModal;
use crate::components::comparison_slider::ComparisonSlider;
use crate::components::cta_button::{CtaButton, CtaVariant};
use crate::components::floating_lights::FloatingLights;
use crate::components::magnetic_button::MagneticButton;
use crate::components::morphing_image::MorphingImage;
use crate::config;

pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub price_eur: u32,
    pub image: &'static str,
    pub image_alt: &'static str,
    /// Service preselected in the booking form.
    pub books: &'static str,
    pub featured: bool,
}

pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Brows & Lashes",
        description: "Delicate extensions die uw blik op natuurlijke wijze verfijnen zonder kunstmatigheid.",
        price_eur: 120,
        image: "/assets/lashbrows.png",
        image_alt: "Natuurlijke look",
        books: "Natuurlijke Look",
        featured: false,
    },
    ServiceCard {
        title: "Lash extensions",
        description: "De premium techniek voor een intense en glamoureuze blik. Onze signature.",
        price_eur: 180,
        image: "/assets/lashext.png",
        image_alt: "Lash extensions",
        books: "Lash extensions",
        featured: true,
    },
    ServiceCard {
        title: "Lash Lift",
        description: "De ultieme ervaring voor een spectaculaire en onvergetelijke blik.",
        price_eur: 220,
        image: "/assets/lashlift.png",
        image_alt: "Lash lift",
        books: "Lash Lift",
        featured: false,
    },
];

pub const GALLERY: [&str; 4] = [
    "/assets/logo.png",
    "/assets/lashext.png",
    "/assets/lashlift.png",
    "/assets/lashbrows.png",
];

pub const OPENING_HOURS: [&str; 3] = ["Ma - Vr: 9u - 19u", "Za: 10u - 18u", "Zo: Gesloten"];

/// Smoothly brings the section with `id` to the top of the viewport.
fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll offset past which the navigation turns opaque.
const NAV_SOLID_AFTER_PX: f64 = 40.0;

fn is_past_hero_edge(scroll_y: Option<f64>) -> bool {
    scroll_y.map_or(false, |y| y > NAV_SOLID_AFTER_PX)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<Option<&'static str>>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let target = window.clone();
                    EventListener::new(&target, "scroll", move |_| {
                        is_scrolled.set(is_past_hero_edge(window.scroll_y().ok()));
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let link = |id: &'static str, label: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to(id);
        });
        html! {
            <a href={format!("#{}", id)} class="nav-link" {onclick}>{label}</a>
        }
    };

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(None))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <span class="nav-logo gradient-text">{config::SALON_NAME}</span>
                <div class="nav-links">
                    { link("services", "Diensten") }
                    { link("transformation", "Transformaties") }
                    { link("galerie", "Galerij") }
                    { link("contact", "Contact") }
                </div>
                <MagneticButton class="nav-book" aria_label="Reserveren" onclick={book}>
                    {"Reserveren"}
                </MagneticButton>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let to_services = Callback::from(|_: MouseEvent| scroll_to("services"));
    let to_gallery = Callback::from(|_: MouseEvent| scroll_to("galerie"));

    html! {
        <section class="hero">
            <FloatingLights />
            <div class="hero-grid">
                <div class="hero-text reveal">
                    <h1>
                        {"De "}
                        <span class="gradient-text animate-gradient">{"Absolute"}</span>
                        <br />
                        {"Kunst van Schoonheid"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Verfraai uw blik met onze op maat gemaakte wimperextensions. Elke blik verdient een vleugje "}
                        <span class="accent">{"absolute luxe"}</span>
                        {"."}
                    </p>
                    <div class="hero-cta-group">
                        <CtaButton variant={CtaVariant::Primary} class="cta-large cta-shine" aria_label="Ontdek onze Diensten" onclick={to_services}>
                            {"★ Ontdek onze Diensten"}
                        </CtaButton>
                        <CtaButton variant={CtaVariant::Ghost} class="cta-large" aria_label="Bekijk de Galerij" onclick={to_gallery}>
                            {"Bekijk de Galerij"}
                        </CtaButton>
                    </div>
                    <div class="hero-stats">
                        <div class="stat" style="animation-delay: 0.7s;">
                            <div class="stat-value gold">{"50+"}</div>
                            <div class="stat-label">{"Tevreden Klanten"}</div>
                        </div>
                        <div class="stat" style="animation-delay: 0.8s;">
                            <div class="stat-value pink">{"2+"}</div>
                            <div class="stat-label">{"Jaar Ervaring"}</div>
                        </div>
                        <div class="stat" style="animation-delay: 0.9s;">
                            <div class="stat-value gold">{"100%"}</div>
                            <div class="stat-label">{"Natuurlijk & Veilig"}</div>
                        </div>
                    </div>
                </div>
                <div class="hero-image reveal" style="animation-delay: 0.4s;">
                    <MorphingImage />
                </div>
            </div>
            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}

#[function_component(Transformation)]
fn transformation() -> Html {
    html! {
        <section id="transformation" class="section section-tinted">
            <div class="section-inner narrow">
                <div class="section-heading reveal">
                    <h2>{"Spectaculaire "}<span class="gradient-text">{"Transformaties"}</span></h2>
                    <p>{"Ontdek de transformerende kracht van onze wimperextensions. Swipe om de magie te onthullen."}</p>
                </div>
                <div class="reveal" style="animation-delay: 0.2s;">
                    <ComparisonSlider />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServicesProps {
    on_book: Callback<Option<&'static str>>,
}

#[function_component(Services)]
fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="section">
            <div class="section-inner">
                <div class="section-heading reveal">
                    <h2>{"Onze "}<span class="gradient-text">{"Exclusieve"}</span>{" Collecties"}</h2>
                    <p>{"Elke techniek is een kunstwerk, aangepast aan uw unieke stijl."}</p>
                </div>
                <div class="service-grid">
                    { for SERVICE_CARDS.iter().enumerate().map(|(i, card)| {
                        let onclick = {
                            let on_book = props.on_book.clone();
                            let books = card.books;
                            Callback::from(move |_: MouseEvent| on_book.emit(Some(books)))
                        };
                        let variant = if card.featured { CtaVariant::Primary } else { CtaVariant::SolidDark };
                        html! {
                            <div
                                class={classes!("service-card", "reveal", card.featured.then(|| "featured"))}
                                style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}
                            >
                                if card.featured {
                                    <div class="best-seller">{"⭐ Best Seller"}</div>
                                }
                                <div class="service-image">
                                    <img src={card.image} alt={card.image_alt} loading="lazy" />
                                </div>
                                <div class="service-body">
                                    <h3 class={classes!(card.featured.then(|| "gradient-text"))}>{card.title}</h3>
                                    <p>{card.description}</p>
                                    <div class="service-footer">
                                        <span class="service-price">{format!("{}€", card.price_eur)}</span>
                                        <CtaButton {variant} class="cta-small" {onclick}>{"Kiezen"}</CtaButton>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    html! {
        <section id="galerie" class="section section-tinted">
            <div class="section-inner">
                <div class="section-heading reveal">
                    <h2>{"Onze "}<span class="gradient-text">{"Galerij"}</span></h2>
                    <p>{"Elke creatie vertelt een uniek verhaal"}</p>
                </div>
                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(i, src)| html! {
                        <div class="gallery-item reveal" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}>
                            <img src={*src} alt={format!("Galerij {}", i + 1)} loading="lazy" />
                            <div class="gallery-shade"></div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer id="contact" class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-logo">{config::SALON_NAME}</div>
                        <p class="muted">
                            {"Uw luxe bestemming voor uitzonderlijke wimperextensions. Verfraai uw natuurlijke schoonheid met onze unieke expertise."}
                        </p>
                    </div>
                    <div>
                        <h3>{"Contact"}</h3>
                        <p>{"📞 "}{config::SALON_PHONE}</p>
                        <p>{"📍 "}{config::SALON_CITY}</p>
                    </div>
                    <div>
                        <h3>{"Volg ons"}</h3>
                        <a href={config::SALON_INSTAGRAM} target="_blank" rel="noopener noreferrer">
                            <CtaButton variant={CtaVariant::Icon} aria_label="Instagram">{"Instagram"}</CtaButton>
                        </a>
                        <h4>{"Openingstijden"}</h4>
                        <div class="muted small">
                            { for OPENING_HOURS.iter().map(|line| html! { <p>{*line}</p> }) }
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© 2025 {}. Alle rechten voorbehouden. Gemaakt met passie om uw schoonheid te verfijnen.", config::SALON_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}

const BOOKING_THANKS: &str =
    "Bedankt, uw reserveringsaanvraag is ontvangen. Wij nemen contact met u op.";

/// Confirmation to show after a submit attempt. Failures stay inside the modal.
fn confirmation<T, E>(outcome: &Result<T, E>) -> Option<String> {
    outcome.as_ref().ok().map(|_| BOOKING_THANKS.to_string())
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Where accepted reservations go.
    #[prop_or_default]
    pub handler: HandlerRef,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let dialog = use_state(BookingDialog::default);
    let notice = use_state(|| None::<String>);

    // Hide the confirmation after a while; a newer one restarts the timer
    {
        let shown = (*notice).clone();
        let notice = notice.clone();
        use_effect_with_deps(
            move |current: &Option<String>| {
                let timeout = current.as_ref().map(|_| {
                    Timeout::new(config::BOOKING_NOTICE_MS, move || notice.set(None))
                });
                move || drop(timeout)
            },
            shown,
        );
    }

    let on_book = {
        let dialog = dialog.clone();
        Callback::from(move |service: Option<&'static str>| {
            let mut next = (*dialog).clone();
            next.open(service);
            dialog.set(next);
        })
    };

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_| {
            let mut next = (*dialog).clone();
            next.close();
            dialog.set(next);
        })
    };

    let on_submit = {
        let dialog = dialog.clone();
        let notice = notice.clone();
        let handler = props.handler.clone();
        Callback::from(move |form: BookingForm| {
            let mut next = (*dialog).clone();
            let outcome = next.submit(&form, &*handler.0);
            if let Some(message) = confirmation(&outcome) {
                notice.set(Some(message));
            }
            dialog.set(next);
        })
    };

    html! {
        <div class="salon-page">
            <style>{PAGE_STYLE}</style>
            <Nav on_book={on_book.clone()} />
            <Hero />
            <Transformation />
            <Services on_book={on_book} />
            <Gallery />
            <Footer />
            if dialog.is_open() {
                <BookingModal
                    default_service={dialog.default_service()}
                    error={dialog.last_error().map(|e| AttrValue::from(e.user_message()))}
                    {on_close}
                    {on_submit}
                />
            }
            if let Some(message) = &*notice {
                <div class="booking-notice" role="status">{message.clone()}</div>
            }
        </div>
    }
}

const PAGE_STYLE: &str = r#"
.salon-page {
    min-height: 100vh;
    background: #fce4ec;
    color: #111;
    font-family: 'Lora', serif;
    overflow-x: hidden;
}
.salon-page h1, .salon-page h2, .salon-page h3 {
    font-family: 'Playfair Display', serif;
}
.gradient-text {
    background: linear-gradient(to right, #d4af37, #ff69b4);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.animate-gradient {
    background-size: 200% auto;
    animation: gradientShift 3s ease infinite;
}
@keyframes gradientShift {
    0%, 100% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
}
.accent { font-weight: 600; color: #ff69b4; }
.reveal {
    opacity: 0;
    animation: revealUp 0.8s cubic-bezier(0.22, 1, 0.36, 1) forwards;
}
@keyframes revealUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.3);
    backdrop-filter: blur(24px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
    animation: navDrop 0.8s cubic-bezier(0.22, 1, 0.36, 1);
    transition: background 0.3s ease;
}
.top-nav.scrolled { background: rgba(255, 255, 255, 0.7); }
@keyframes navDrop {
    from { transform: translateY(-100px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    font-family: 'Playfair Display', serif;
    font-size: 1.5rem;
    font-weight: 700;
    transition: scale 0.3s ease;
}
.nav-logo:hover { scale: 1.05; }
.nav-links { display: none; gap: 2rem; font-size: 0.875rem; }
.nav-link { color: inherit; text-decoration: none; transition: color 0.2s ease, scale 0.2s ease; }
.nav-link:hover { color: #ff69b4; scale: 1.1; }
.magnetic-button {
    border: none;
    cursor: pointer;
    font: inherit;
    will-change: transform;
    transition: scale 0.2s ease, box-shadow 0.2s ease;
}
.magnetic-button:hover { scale: 1.05; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
.magnetic-button:active { scale: 0.95; }
.nav-book {
    padding: 0.5rem 1.5rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    color: #fff;
    background: linear-gradient(to right, #d4af37, #ff69b4);
}

.cta-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: none;
    cursor: pointer;
    font: inherit;
    transition: scale 0.2s ease, box-shadow 0.2s ease;
}
.cta-button:hover { scale: 1.06; box-shadow: 0 18px 40px rgba(0, 0, 0, 0.12); }
.cta-button:active { scale: 0.96; }
.cta-button:focus-visible { outline: none; box-shadow: 0 0 0 4px rgba(212, 175, 55, 0.2); }
.cta-primary { color: #fff; background: linear-gradient(to right, #d4af37, #ff69b4); }
.cta-ghost { color: #111; background: rgba(255, 255, 255, 0.5); backdrop-filter: blur(4px); border: 2px solid #d4af37; }
.cta-solid-dark { color: #fff; background: #111827; }
.cta-icon { color: #111; background: rgba(255, 255, 255, 0.1); padding: 0.75rem; border-radius: 9999px; }
.cta-large { padding: 1rem 2rem; border-radius: 9999px; font-size: 1.125rem; }
.cta-small { padding: 0.5rem 1.5rem; border-radius: 9999px; font-size: 0.875rem; }
.cta-shine { position: relative; overflow: hidden; }
.cta-shine::after {
    content: '';
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.3), transparent);
    transform: translateX(-100%);
    transition: transform 0.6s ease;
}
.cta-shine:hover::after { transform: translateX(100%); }

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 5rem 1rem 0;
    overflow: hidden;
}
.hero-grid {
    position: relative;
    z-index: 10;
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    gap: 3rem;
    align-items: center;
}
.hero h1 { font-size: 3rem; line-height: 1.15; margin-bottom: 1.5rem; }
.hero-subtitle { font-size: 1.125rem; color: rgba(17, 17, 17, 0.8); line-height: 1.7; margin-bottom: 2rem; }
.hero-cta-group { display: flex; flex-direction: column; gap: 1rem; }
.hero-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-top: 3rem; }
.stat { opacity: 0; animation: statPop 0.5s ease forwards; }
@keyframes statPop {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}
.stat-value { font-family: 'Playfair Display', serif; font-size: 1.875rem; font-weight: 700; }
.stat-value.gold { color: #d4af37; }
.stat-value.pink { color: #ff69b4; }
.stat-label { font-size: 0.875rem; color: rgba(17, 17, 17, 0.7); }
.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    width: 1.5rem;
    height: 2.5rem;
    margin-left: -0.75rem;
    border: 2px solid #d4af37;
    border-radius: 9999px;
    display: flex;
    justify-content: center;
    padding-top: 0.5rem;
    box-sizing: border-box;
    animation: bob 2s ease-in-out infinite;
}
.scroll-indicator-dot {
    width: 0.375rem;
    height: 0.375rem;
    border-radius: 50%;
    background: #d4af37;
    animation: dotFall 2s ease-in-out infinite;
}
@keyframes bob { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(10px); } }
@keyframes dotFall { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(16px); } }

.section { padding: 5rem 1rem; }
.section-tinted { background: rgba(255, 255, 255, 0.5); }
.section-inner { max-width: 80rem; margin: 0 auto; }
.section-inner.narrow { max-width: 72rem; }
.section-heading { text-align: center; margin-bottom: 3rem; }
.section-heading h2 { font-size: 2.25rem; margin-bottom: 1rem; }
.section-heading p { font-size: 1.125rem; color: rgba(17, 17, 17, 0.7); max-width: 42rem; margin: 0 auto; }

.service-grid { display: grid; gap: 2rem; }
.service-card {
    position: relative;
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(4px);
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    transition: translate 0.3s cubic-bezier(0.34, 1.56, 0.64, 1), box-shadow 0.3s ease;
}
.service-card:hover { translate: 0 -10px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
.service-card.featured {
    background: linear-gradient(135deg, rgba(212, 175, 55, 0.1), rgba(255, 105, 180, 0.1));
    border: 2px solid #d4af37;
}
.service-card.featured:hover { translate: 0 -15px; }
.best-seller {
    position: absolute;
    top: 1rem;
    right: 1rem;
    z-index: 10;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 700;
    color: #fff;
    background: linear-gradient(to right, #d4af37, #ff69b4);
    animation: badgePulse 2s ease-in-out infinite;
}
@keyframes badgePulse {
    0%, 100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(212, 175, 55, 0); }
    50% { transform: scale(1.05); box-shadow: 0 0 0 8px rgba(212, 175, 55, 0.2); }
}
.service-image { height: 16rem; overflow: hidden; }
.service-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: scale 0.6s cubic-bezier(0.22, 1, 0.36, 1);
}
.service-image img:hover { scale: 1.15; }
.service-body { padding: 1.5rem; }
.service-body h3 { font-size: 1.5rem; margin-bottom: 0.5rem; transition: translate 0.2s ease; }
.service-body h3:hover { translate: 5px 0; }
.service-body p { color: rgba(17, 17, 17, 0.7); margin-bottom: 1rem; }
.service-footer { display: flex; align-items: center; justify-content: space-between; }
.service-price { font-family: 'Playfair Display', serif; font-size: 1.5rem; font-weight: 700; color: #d4af37; }

.gallery-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
.gallery-item {
    position: relative;
    border-radius: 1.5rem;
    overflow: hidden;
    cursor: pointer;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    transition: scale 0.3s ease, translate 0.3s ease, box-shadow 0.3s ease;
}
.gallery-item:hover { scale: 1.05; translate: 0 -5px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
.gallery-item img { width: 100%; height: 16rem; object-fit: cover; display: block; }
.gallery-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(17, 17, 17, 0.6), transparent);
    opacity: 0;
    transition: opacity 0.3s ease;
}
.gallery-item:hover .gallery-shade { opacity: 1; }

.site-footer { background: #111; color: #fff; padding: 4rem 1rem; }
.site-footer h3, .footer-logo { color: #d4af37; }
.footer-logo { font-family: 'Playfair Display', serif; font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
.footer-grid { display: grid; gap: 3rem; margin-bottom: 3rem; }
.site-footer .muted { color: rgba(255, 255, 255, 0.7); line-height: 1.7; }
.site-footer .small { font-size: 0.875rem; }
.footer-bottom {
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding-top: 2rem;
    text-align: center;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.5);
}

.booking-notice {
    position: fixed;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 60;
    padding: 1rem 1.5rem;
    border-radius: 9999px;
    color: #fff;
    background: #111;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
    animation: revealUp 0.4s ease-out;
}

@media (min-width: 640px) {
    .hero-cta-group { flex-direction: row; }
}
@media (min-width: 768px) {
    .nav-links { display: flex; }
    .hero h1 { font-size: 4.5rem; }
    .hero-grid { grid-template-columns: 1fr 1fr; }
    .section-heading h2 { font-size: 3.75rem; }
    .service-grid { grid-template-columns: repeat(3, 1fr); }
    .gallery-grid { gap: 1.5rem; }
    .gallery-item img { height: 20rem; }
    .footer-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;
