use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::capabilities;
use crate::motion::tilt::{Tilt, TiltConfig};

#[derive(Properties, PartialEq)]
pub struct TiltedCardProps {
    pub image_src: AttrValue,
    pub alt_text: AttrValue,
    #[prop_or_default]
    pub caption_text: AttrValue,
    #[prop_or(AttrValue::from("400px"))]
    pub height: AttrValue,
    #[prop_or(config::TILT_AMPLITUDE_DEG)]
    pub rotate_amplitude: f64,
    #[prop_or(config::TILT_SCALE_ON_HOVER)]
    pub scale_on_hover: f64,
    #[prop_or_default]
    pub overlay_content: Option<Html>,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

#[function_component(TiltedCard)]
pub fn tilted_card(props: &TiltedCardProps) -> Html {
    let tilt = use_state(|| Tilt::REST);
    let tilt_enabled = capabilities::register().pointer.tilt_enabled();
    let cfg = TiltConfig {
        amplitude_deg: props.rotate_amplitude,
        scale_on_hover: props.scale_on_hover,
    };

    let onmousemove = {
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if !tilt_enabled {
                return;
            }
            let Some(card) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            tilt.set(Tilt::from_pointer(
                f64::from(e.client_x()) - rect.left(),
                f64::from(e.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
                cfg,
            ));
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::REST))
    };

    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };

    let onkeydown = {
        let onclick = props.onclick.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                onclick.emit(());
            }
        })
    };

    let inner_style = if tilt.is_rest() {
        format!("{} transition: transform 0.4s ease-out;", tilt.to_css())
    } else {
        format!("{} transition: transform 0.1s linear;", tilt.to_css())
    };

    html! {
        <figure
            class={classes!("tilted-card", (!tilt_enabled).then(|| "static"))}
            style={format!("height: {};", props.height)}
            role="button"
            tabindex="0"
            aria-label={props.alt_text.clone()}
            {onmousemove}
            {onmouseleave}
            {onclick}
            {onkeydown}
        >
            <div class="tilted-card-inner" style={inner_style}>
                <img class="tilted-card-img" src={props.image_src.clone()} alt={props.alt_text.clone()} loading="lazy" />
                {
                    if let Some(overlay) = &props.overlay_content {
                        html! { <div class="tilted-card-overlay">{overlay.clone()}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if props.caption_text.is_empty() {
                    html! {}
                } else {
                    html! { <figcaption class="tilted-card-caption">{props.caption_text.clone()}</figcaption> }
                }
            }
            <style>
                {r#"
                    .tilted-card {
                        position: relative;
                        width: 100%;
                        margin: 0;
                        perspective: 800px;
                        cursor: pointer;
                        outline: none;
                    }
                    .tilted-card:focus-visible .tilted-card-inner {
                        box-shadow: 0 0 0 3px rgba(220, 38, 38, 0.8);
                    }
                    .tilted-card-inner {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        transform-style: preserve-3d;
                        will-change: transform;
                        border-radius: 15px;
                    }
                    .tilted-card-img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 15px;
                        transform: translateZ(0);
                    }
                    .tilted-card-overlay {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 2;
                        transform: translateZ(30px);
                        will-change: transform;
                    }
                    .tilted-card-caption {
                        position: absolute;
                        left: 0;
                        top: 0;
                        opacity: 0;
                        pointer-events: none;
                    }
                    .tilted-card.static .tilted-card-inner {
                        transform: none !important;
                    }
                "#}
            </style>
        </figure>
    }
}
