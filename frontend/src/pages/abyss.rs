use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::countdown::CountdownDisplay;
use crate::components::entrance::AnimatedCardWrapper;
use crate::components::game_modal::{GameModal, SuitIcon};
use crate::components::tilted_card::TiltedCard;
use crate::config;
use crate::content::games::{EventRecord, GAMES};
use crate::motion::countdown::{Countdown, CountdownStyle};
use crate::motion::selection::{Selection, SelectionAction};

fn card_overlay(game: &EventRecord) -> Html {
    html! {
        <div class="game-overlay">
            <div class="game-overlay-title">
                <SuitIcon suit={game.suit} />
                <h3>{game.title}</h3>
            </div>
            <div class="game-overlay-meta">
                <span class="game-overlay-difficulty">{game.difficulty}</span>
                <span class="game-overlay-rank">{game.rank}</span>
            </div>
        </div>
    }
}

#[function_component(AbyssEventPage)]
pub fn abyss_event_page() -> Html {
    let selection = use_reducer(Selection::default);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > config::STICKY_BAR_SCROLL_THRESHOLD;
    let grid_ref = use_node_ref();

    let countdown = use_memo(
        |_| match Countdown::parse_in_zone(config::ABYSS_STARTS_AT, &config::CHAPTER_TIME_ZONE) {
            Ok(countdown) => Some(countdown),
            Err(err) => {
                log::warn!("bad ABYSS start time: {}", err);
                None
            }
        },
        (),
    );

    let scroll_to_games = {
        let grid_ref = grid_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(grid) = grid_ref.cast::<web_sys::Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                grid.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.dispatch(SelectionAction::Dismiss))
    };

    let visa = || match *countdown {
        Some(countdown) => html! {
            <CountdownDisplay {countdown} style={CountdownStyle::Clock} label="VISA" class="abyss-visa" />
        },
        None => html! {},
    };

    html! {
        <div class={classes!("abyss-page", selection.is_open().then(|| "modal-open"))}>
            // Sticky top bar, appears on scroll
            <div class={classes!("abyss-sticky", scrolled.then(|| "visible"))}>
                { visa() }
            </div>

            <header class="abyss-hero">
                <div class="abyss-hero-bg">
                    <img src="/abyss.png" alt="Post-apocalyptic city" />
                    <div class="abyss-hero-shade"></div>
                </div>

                <div class="abyss-hero-content">
                    <div class={classes!("abyss-hero-visa", scrolled.then(|| "hidden"))}>
                        { visa() }
                    </div>

                    <h1 class="abyss-title">
                        <span class="abyss-title-metal">{"AB"}</span>
                        <span class="abyss-title-red">{"Y"}</span>
                        <span class="abyss-title-metal">{"SS"}</span>
                    </h1>

                    <p class="abyss-tagline">{"THE DEATH STARES BACK"}</p>

                    <button class="abyss-register" onclick={scroll_to_games}>
                        {"Register Now"}
                    </button>

                    <div class="abyss-scroll-hint">
                        <span>{"Join the Game"}</span>
                        <span class="abyss-arrow">{"↓"}</span>
                    </div>
                </div>
            </header>

            <main id="games-grid" ref={grid_ref} class="abyss-games">
                <AnimatedCardWrapper index={0} class="abyss-games-heading">
                    <h2><span class="abyss-slashes">{"///"}</span>{" Active Games"}</h2>
                </AnimatedCardWrapper>

                <div class="abyss-grid">
                    { for GAMES.iter().enumerate().map(|(index, game)| {
                        let selection = selection.clone();
                        let id = game.id;
                        let selected = selection.selected_id() == Some(id);
                        html! {
                            <AnimatedCardWrapper key={id.to_string()} {index} class={classes!(selected.then(|| "selected"))}>
                                <TiltedCard
                                    image_src={game.image}
                                    alt_text={game.title}
                                    height="400px"
                                    rotate_amplitude={config::TILT_AMPLITUDE_DEG}
                                    scale_on_hover={config::TILT_SCALE_ON_HOVER}
                                    overlay_content={card_overlay(game)}
                                    onclick={Callback::from(move |_: ()| selection.dispatch(SelectionAction::Select(id)))}
                                />
                            </AnimatedCardWrapper>
                        }
                    }) }
                </div>
            </main>

            <footer class="abyss-footer">
                <p class="abyss-game-over">{"GAME OVER"}</p>
                <p>{"© 2026 ABYSS PROTOCOL"}</p>
            </footer>

            {
                if let Some(game) = selection.record() {
                    html! { <GameModal {game} {on_close} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .abyss-page {
                        min-height: 100vh;
                        background: #0a0a0a;
                        color: #e5e5e5;
                        overflow-x: hidden;
                        font-family: "Times New Roman", Times, serif;
                    }
                    .abyss-page ::selection { background: #7f1d1d; color: #fff; }
                    .abyss-sticky {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 40;
                        display: flex;
                        justify-content: center;
                        padding: 1rem 0;
                        pointer-events: none;
                        opacity: 0;
                        transform: translateY(-100%);
                        transition: all 0.5s;
                    }
                    .abyss-sticky.visible { opacity: 1; transform: translateY(0); }
                    .abyss-page.modal-open .abyss-sticky { opacity: 0; }
                    .abyss-grid .selected .tilted-card { outline: 1px solid rgba(220, 38, 38, 0.8); border-radius: 15px; }
                    .abyss-visa {
                        display: inline-block;
                        padding: 0.5rem 1.5rem;
                        font-family: monospace;
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                        color: #ef4444;
                        background: rgba(0, 0, 0, 0.8);
                        border: 1px solid rgba(127, 29, 29, 0.5);
                        border-radius: 4px;
                        box-shadow: 0 0 15px rgba(255, 0, 0, 0.3);
                        animation: abyssPulse 2s ease-in-out infinite;
                    }
                    .abyss-hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        border-bottom: 1px solid #171717;
                    }
                    .abyss-hero-bg { position: absolute; inset: 0; z-index: 0; }
                    .abyss-hero-bg img { width: 100%; height: 100%; object-fit: cover; }
                    .abyss-hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.6));
                    }
                    .abyss-hero-content {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .abyss-hero-visa { margin-bottom: 3rem; transition: opacity 0.5s; }
                    .abyss-hero-visa.hidden { opacity: 0; }
                    .abyss-title {
                        display: flex;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        line-height: 1;
                        font-size: clamp(6rem, 16vw, 14rem);
                        user-select: none;
                    }
                    .abyss-title-metal {
                        background: linear-gradient(to bottom, #e5e5e5, #737373);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .abyss-title-red {
                        color: #dc2626;
                        text-shadow: 0 0 30px rgba(220, 38, 38, 0.6);
                    }
                    .abyss-tagline {
                        margin-top: 2rem;
                        font-size: 1.5rem;
                        letter-spacing: 0.5em;
                        font-weight: bold;
                        color: #f5f5f5;
                    }
                    .abyss-register {
                        margin-top: 3rem;
                        padding: 1rem 2.5rem;
                        border: 1px solid rgba(220, 38, 38, 0.8);
                        color: #ef4444;
                        background: rgba(0, 0, 0, 0.5);
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-weight: bold;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .abyss-register:hover {
                        background: #dc2626;
                        color: #000;
                        box-shadow: 0 0 40px rgba(220, 38, 38, 0.6);
                    }
                    .abyss-scroll-hint {
                        position: absolute;
                        bottom: -20vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        opacity: 0.7;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        animation: abyssBounce 1.5s infinite;
                    }
                    .abyss-arrow { font-size: 2rem; color: #fff; }
                    .abyss-games { position: relative; z-index: 10; padding: 5rem 2rem; }
                    .abyss-games-heading { margin-bottom: 4rem; text-align: center; }
                    .abyss-games-heading h2 {
                        font-size: 1.875rem;
                        font-weight: bold;
                        color: #a3a3a3;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }
                    .abyss-slashes { color: #dc2626; }
                    .abyss-grid {
                        display: grid;
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .game-overlay {
                        width: 100%;
                        padding: 1rem;
                        border-radius: 0 0 15px 15px;
                        background: linear-gradient(to top, rgba(0, 0, 0, 1) 0%, rgba(0, 0, 0, 0.7) 50%, transparent 100%);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .game-overlay-title { display: flex; align-items: center; gap: 0.5rem; }
                    .game-overlay-title .suit-icon { font-size: 1.5rem; }
                    .game-overlay-title h3 {
                        color: #fff;
                        font-weight: bold;
                        font-size: 1.25rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        font-family: "Times New Roman", Times, serif;
                    }
                    .game-overlay-meta {
                        margin-top: 0.5rem;
                        padding-top: 0.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .game-overlay-difficulty {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.75rem;
                        font-family: monospace;
                        text-transform: uppercase;
                    }
                    .game-overlay-rank { color: #ef4444; font-weight: bold; font-size: 1.125rem; font-family: monospace; }
                    .abyss-footer {
                        padding: 5rem 0;
                        text-align: center;
                        font-size: 0.75rem;
                        color: #525252;
                        background: #000;
                        border-top: 1px solid #171717;
                    }
                    .abyss-game-over { margin-bottom: 1rem; color: rgba(127, 29, 29, 0.5); letter-spacing: 1em; }
                    @keyframes abyssPulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.6; } }
                    @keyframes abyssBounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-25%); } }
                    @media (max-width: 1024px) {
                        .abyss-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                    }
                    @media (max-width: 640px) {
                        .abyss-grid { grid-template-columns: 1fr; }
                        .abyss-tagline { font-size: 1.1rem; letter-spacing: 0.3em; }
                    }
                "#}
            </style>
        </div>
    }
}
