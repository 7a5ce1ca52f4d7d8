use yew::prelude::*;

use crate::components::about_scroll::AboutScrollSection;
use crate::components::button_link::ButtonLink;
use crate::components::countdown::CountdownDisplay;
use crate::components::footer::Footer;
use crate::motion::countdown::{Countdown, CountdownStyle};
use crate::pages::events::EventsSection;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub description: AttrValue,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{"GDG NITH"}</h1>
                <p class="hero-subtitle">{props.description.clone()}</p>
                <div class="hero-cta-group">
                    <ButtonLink to={Route::Events}>{"Explore Events"}</ButtonLink>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct PromoBannerProps {
    pub countdown: Option<Countdown>,
}

/// Strip advertising the next flagship event.
#[function_component(PromoBanner)]
pub fn promo_banner(props: &PromoBannerProps) -> Html {
    html! {
        <section class="promo-banner">
            <div class="promo-text">
                <span class="promo-kicker">{"Next up"}</span>
                <h2>{"ABYSS: The death stares back"}</h2>
            </div>
            {
                if let Some(countdown) = props.countdown {
                    html! { <CountdownDisplay {countdown} style={CountdownStyle::Labeled} class="promo-countdown" /> }
                } else {
                    html! {}
                }
            }
            <ButtonLink to={Route::Abyss} class="promo-cta">{"Enter the Abyss"}</ButtonLink>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let countdown = use_memo(
        |_| match Countdown::parse_in_zone(crate::config::ABYSS_STARTS_AT, &crate::config::CHAPTER_TIME_ZONE) {
            Ok(countdown) => Some(countdown),
            Err(err) => {
                log::warn!("bad ABYSS start time: {}", err);
                None
            }
        },
        (),
    );

    html! {
        <div class="home-page">
            <HeroSection description="Empowering Developers, Elevating Innovation at GDG NITH Chapter." />
            <PromoBanner countdown={*countdown} />
            <AboutScrollSection />
            <EventsSection />
            <Footer />
            <style>
                {r#"
                    .home-page {
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                        overflow-x: hidden;
                        background: #0a0a0a;
                        color: #fff;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: radial-gradient(circle at 50% 30%, rgba(59, 130, 246, 0.25), transparent 60%);
                    }
                    .hero-title {
                        font-size: clamp(4rem, 12vw, 10rem);
                        font-weight: 900;
                        letter-spacing: -0.04em;
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        color: #d4d4d4;
                        max-width: 40rem;
                        margin: 1rem auto 2rem;
                    }
                    .promo-banner {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                        padding: 2rem 3rem;
                        background: linear-gradient(90deg, #450a0a, #0a0a0a);
                        border-top: 1px solid #7f1d1d;
                        border-bottom: 1px solid #7f1d1d;
                    }
                    .promo-kicker {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #ef4444;
                    }
                    .promo-banner h2 { font-size: 1.75rem; font-weight: 900; }
                    .promo-countdown {
                        font-family: monospace;
                        font-size: 1.5rem;
                        color: #ef4444;
                    }
                "#}
            </style>
        </div>
    }
}
