use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::entrance::AnimatedCardWrapper;
use crate::components::footer::Footer;
use crate::content::events::{find_event, ChapterEvent, EVENTS};
use crate::pages::not_found::NotFound;
use crate::Route;

fn event_route(event: &ChapterEvent) -> Route {
    if event.id == "abyss" {
        Route::Abyss
    } else {
        Route::EventDetail {
            id: event.id.to_string(),
        }
    }
}

#[function_component(EventsSection)]
pub fn events_section() -> Html {
    html! {
        <section class="events-section">
            <h2 class="events-heading">{"Events"}</h2>
            <p class="events-subheading">{"Workshops, hackathons and nights you won't forget."}</p>
            <div class="events-grid">
                { for EVENTS.iter().enumerate().map(|(index, event)| html! {
                    <AnimatedCardWrapper {index}>
                        <Link<Route> to={event_route(event)} classes="event-card">
                            <img class="event-card-img" src={event.image} alt={event.title} loading="lazy" />
                            <div class="event-card-body">
                                <span class="event-card-year">{event.year.to_string()}</span>
                                <h3>{event.title}</h3>
                                <p>{event.description}</p>
                                <span class="event-card-date">{event.date}</span>
                            </div>
                        </Link<Route>>
                    </AnimatedCardWrapper>
                }) }
            </div>
            <style>
                {r#"
                    .events-section {
                        padding: 6rem 2rem;
                        background: #0a0a0a;
                        color: #fff;
                    }
                    .events-heading {
                        font-size: 3rem;
                        font-weight: 900;
                        text-align: center;
                    }
                    .events-subheading {
                        text-align: center;
                        color: #a3a3a3;
                        margin-bottom: 3rem;
                    }
                    .events-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .event-card {
                        display: block;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        color: inherit;
                        text-decoration: none;
                        transition: border-color 0.3s;
                    }
                    .event-card:hover { border-color: #3b82f6; }
                    .event-card-img { width: 100%; height: 12rem; object-fit: cover; }
                    .event-card-body { padding: 1.5rem; }
                    .event-card-body p { color: #a3a3a3; }
                    .event-card-year {
                        font-size: 0.75rem;
                        font-weight: bold;
                        color: #3b82f6;
                    }
                    .event-card-date { font-size: 0.85rem; color: #737373; }
                "#}
            </style>
        </section>
    }
}

#[function_component(EventsPage)]
pub fn events_page() -> Html {
    html! {
        <div class="events-page">
            <EventsSection />
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventDetailProps {
    pub id: String,
}

#[function_component(EventDetailPage)]
pub fn event_detail_page(props: &EventDetailProps) -> Html {
    let event = match find_event(&props.id) {
        Ok(event) => event,
        Err(err) => {
            log::info!("{}", err);
            return html! { <NotFound /> };
        }
    };

    html! {
        <main class="event-detail">
            <nav class="event-detail-nav">
                <Link<Route> to={Route::Events} classes="back-link">
                    {"← Back to Events"}
                </Link<Route>>
            </nav>

            <div class="event-detail-content">
                // Hero
                <div class="event-hero">
                    <img src={event.image} alt={event.title} />
                    <div class="event-hero-shade"></div>
                    <div class="event-hero-text">
                        <span class="event-badge">{format!("{} Event", event.year)}</span>
                        <h1>{event.title}</h1>
                        <p>{event.description}</p>
                    </div>
                </div>

                <div class="event-grid">
                    <div class="event-main">
                        <section>
                            <h2 class="event-section-title">{"About the Event"}</h2>
                            <p class="event-details">{event.details}</p>
                        </section>

                        <section class="event-highlights">
                            <h3>{"Key Highlights"}</h3>
                            <ul>
                                { for event.highlights.iter().map(|item| html! {
                                    <li><span class="dot"></span>{*item}</li>
                                }) }
                            </ul>
                        </section>
                    </div>

                    <aside class="event-sidebar">
                        <h3>{"Event Info"}</h3>
                        <div class="event-info-row">
                            <p class="event-info-label">{"Date & Time"}</p>
                            <p>{event.date}</p>
                        </div>
                        <div class="event-info-row">
                            <p class="event-info-label">{"Location"}</p>
                            <p>{"NIT Hamirpur / Virtual"}</p>
                        </div>
                        <div class="event-info-row">
                            <p class="event-info-label">{"Category"}</p>
                            <p>{"Technology & Innovation"}</p>
                        </div>
                        <button class="register-button">{"Register Interest"}</button>
                    </aside>
                </div>
            </div>

            <div class="event-gallery">
                <h2>{"Event Highlights"}</h2>
                <Carousel key={event.id} images={event.photos} />
            </div>
            <style>
                {r#"
                    .event-detail {
                        min-height: 100vh;
                        background: #0a0a0a;
                        color: #fff;
                        padding-top: 4rem;
                    }
                    .event-detail-nav { max-width: 80rem; margin: 0 auto; padding: 1.5rem; }
                    .back-link { color: #a3a3a3; text-decoration: none; font-size: 0.875rem; }
                    .back-link:hover { color: #ef4444; }
                    .event-detail-content { max-width: 64rem; margin: 0 auto; padding: 0 1rem 6rem; }
                    .event-hero {
                        position: relative;
                        height: 400px;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        margin-bottom: 3rem;
                    }
                    .event-hero img { width: 100%; height: 100%; object-fit: cover; }
                    .event-hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #0a0a0a, rgba(10, 10, 10, 0.4), transparent);
                    }
                    .event-hero-text { position: absolute; bottom: 0; left: 0; padding: 2rem 3rem; }
                    .event-hero-text h1 { font-size: 3.5rem; font-weight: 900; }
                    .event-hero-text p { font-size: 1.25rem; color: #d4d4d4; max-width: 42rem; }
                    .event-badge {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #dc2626;
                        font-size: 0.75rem;
                        font-weight: bold;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .event-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 3rem; }
                    .event-section-title { font-size: 1.5rem; font-weight: bold; margin-bottom: 1rem; }
                    .event-details { color: #a3a3a3; line-height: 1.7; font-size: 1.125rem; }
                    .event-highlights {
                        margin-top: 2rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .event-highlights h3 { color: #ef4444; margin-bottom: 1rem; }
                    .event-highlights ul {
                        list-style: none;
                        padding: 0;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .event-highlights .dot {
                        display: inline-block;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #dc2626;
                        margin-right: 0.75rem;
                    }
                    .event-sidebar {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: linear-gradient(to bottom right, #111827, #000);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        height: fit-content;
                    }
                    .event-sidebar h3 {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #737373;
                        margin-bottom: 1.5rem;
                    }
                    .event-info-row { margin-bottom: 1.5rem; }
                    .event-info-label { font-size: 0.875rem; color: #737373; }
                    .register-button {
                        width: 100%;
                        padding: 1rem;
                        background: #dc2626;
                        color: #fff;
                        font-weight: bold;
                        border: none;
                        border-radius: 0.75rem;
                        cursor: pointer;
                    }
                    .register-button:hover { background: #b91c1c; }
                    .event-gallery {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 0 2.5rem;
                    }
                    .event-gallery h2 { font-size: 2.25rem; font-weight: bold; margin-bottom: 2.5rem; }
                    @media (max-width: 1024px) {
                        .event-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </main>
    }
}
