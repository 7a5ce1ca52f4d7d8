use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::games::{EventRecord, Suit};
use crate::motion::selection::{backdrop_click, BackdropOutcome, ContentBox};

#[derive(Properties, PartialEq)]
pub struct SuitIconProps {
    pub suit: Suit,
}

#[function_component(SuitIcon)]
pub fn suit_icon(props: &SuitIconProps) -> Html {
    html! {
        <span class="suit-icon" style={format!("color: {};", props.suit.color())}>
            {props.suit.glyph()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct GameModalProps {
    pub game: &'static EventRecord,
    pub on_close: Callback<()>,
}

#[function_component(GameModal)]
pub fn game_modal(props: &GameModalProps) -> Html {
    let game = props.game;
    let content_ref = use_node_ref();

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let outcome = match content_ref.cast::<Element>() {
                Some(content) => {
                    let rect = content.get_bounding_client_rect();
                    let content_box = ContentBox {
                        left: rect.left(),
                        top: rect.top(),
                        width: rect.width(),
                        height: rect.height(),
                    };
                    backdrop_click(f64::from(e.client_x()), f64::from(e.client_y()), &content_box)
                }
                None => BackdropOutcome::Dismiss,
            };
            if outcome == BackdropOutcome::Dismiss {
                on_close.emit(());
            }
        })
    };

    // clicks inside the panel never reach the backdrop
    let on_content = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let header_class = if game.suit.is_red() { "modal-bar red" } else { "modal-bar cyan" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                ref={content_ref}
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                aria-label={game.title}
                onclick={on_content}
            >
                <div class={header_class}></div>

                <div class="modal-body">
                    <button class="modal-close" onclick={on_close_button} aria-label="Close">{"✕"}</button>

                    <div class="modal-heading">
                        <div class="modal-card">
                            <SuitIcon suit={game.suit} />
                            <span class="modal-rank">{game.rank}</span>
                        </div>
                        <div>
                            <h2 class="modal-title">{game.title}</h2>
                            <span class="modal-difficulty">{game.difficulty}</span>
                        </div>
                    </div>

                    <div class="modal-sections">
                        <div>
                            <h3 class="modal-section-title">{"Mission Brief"}</h3>
                            <p class="modal-description">{game.description}</p>
                        </div>

                        {
                            if let Some(gameplay) = game.gameplay {
                                html! {
                                    <div>
                                        <h3 class="modal-section-title">{"Gameplay"}</h3>
                                        <p class="modal-gameplay">{gameplay}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <div class="modal-twist">
                            <h3>{"Crucial Detail"}</h3>
                            <p>{game.twist}</p>
                        </div>

                        <div>
                            <h3 class="modal-section-title">{"Rules of Engagement"}</h3>
                            <ul class="modal-rules">
                                { for game.rules.iter().map(|rule| html! {
                                    <li>
                                        <span class="modal-rule-marker">{"▶"}</span>
                                        {*rule}
                                    </li>
                                }) }
                            </ul>
                        </div>

                        <div class="modal-footer">
                            <span class="modal-fatal">{format!("FATAL CONDITION: {}", game.game_over)}</span>
                            <button class="modal-accept">{"Accept Challenge"}</button>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(4px);
                        animation: modalFade 0.2s ease-out;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .modal-panel {
                        position: relative;
                        width: 100%;
                        max-width: 42rem;
                        background: #171717;
                        border: 1px solid #404040;
                        border-radius: 8px;
                        box-shadow: 0 0 50px rgba(0, 0, 0, 0.8);
                        overflow: hidden;
                        animation: modalZoom 0.3s ease-out;
                    }
                    .modal-bar { height: 0.5rem; width: 100%; }
                    .modal-bar.red { background: #dc2626; }
                    .modal-bar.cyan { background: #06b6d4; }
                    .modal-body {
                        padding: 2rem;
                        max-height: 80vh;
                        overflow-y: auto;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #737373;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .modal-close:hover { color: #fff; }
                    .modal-heading {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .modal-card {
                        padding: 1.5rem;
                        background: #000;
                        border: 1px solid #262626;
                        border-radius: 4px;
                        text-align: center;
                    }
                    .modal-card .suit-icon { font-size: 1.5rem; }
                    .modal-rank {
                        display: block;
                        margin-top: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: bold;
                        font-family: monospace;
                        color: #fff;
                    }
                    .modal-title {
                        font-size: 2.25rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        color: #fff;
                        font-family: "Times New Roman", Times, serif;
                    }
                    .modal-difficulty {
                        display: inline-block;
                        margin-top: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        background: #262626;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #a3a3a3;
                        font-family: monospace;
                    }
                    .modal-sections { display: flex; flex-direction: column; gap: 2rem; color: #d4d4d4; }
                    .modal-section-title {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #737373;
                        border-bottom: 1px solid #262626;
                        padding-bottom: 0.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .modal-description { font-size: 1.125rem; line-height: 1.6; }
                    .modal-twist {
                        padding: 1.25rem;
                        background: #0a0a0a;
                        border-left: 4px solid #dc2626;
                    }
                    .modal-twist h3 {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        color: #ef4444;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.5rem;
                    }
                    .modal-twist p { font-style: italic; color: #a3a3a3; }
                    .modal-rules { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                    .modal-rules li { display: flex; gap: 0.75rem; font-size: 0.875rem; color: #a3a3a3; font-family: monospace; }
                    .modal-rule-marker { color: #525252; }
                    .modal-footer {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid #262626;
                    }
                    .modal-fatal { font-size: 0.75rem; color: #dc2626; letter-spacing: 0.05em; font-family: monospace; }
                    .modal-accept {
                        padding: 0.75rem 2rem;
                        background: #fff;
                        color: #000;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        border: none;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .modal-accept:hover { background: #e5e5e5; box-shadow: 0 0 20px rgba(255, 255, 255, 0.3); }
                    @keyframes modalFade { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes modalZoom { from { transform: scale(0.95); } to { transform: scale(1); } }
                "#}
            </style>
        </div>
    }
}
