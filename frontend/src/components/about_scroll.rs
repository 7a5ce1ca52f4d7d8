use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, SvgPathElement, Window};
use yew::prelude::*;

use crate::config;
use crate::motion::capabilities;
use crate::motion::scrub::{PathReveal, ScrollWindow};

const CURVE: &str = "M 600 -100 \
    C 600 200, 100 300, 100 500 \
    C 100 700, 900 800, 900 1100 \
    C 900 1400, 200 1500, 200 1800";

type FrameCallback = Closure<dyn FnMut(f64)>;
type FrameCell = Rc<RefCell<Option<FrameCallback>>>;

/// Listeners owned by a mounted section. Dropping them without `stop` would
/// leave the frame loop running against a removed element.
struct RevealLoop {
    window: Window,
    raf_id: Rc<Cell<Option<i32>>>,
    frame: FrameCell,
    refresh: Closure<dyn FnMut()>,
}

impl RevealLoop {
    fn stop(self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        for event in ["scroll", "resize"] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.refresh.as_ref().unchecked_ref());
        }
        // the frame closure holds a handle to its own cell
        self.frame.borrow_mut().take();
        log::debug!("about section reveal loop stopped");
    }
}

fn scroll_progress(window: &Window, container: &HtmlElement) -> f64 {
    let rect = container.get_bounding_client_rect();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    ScrollWindow {
        top: rect.top() + scroll_y,
        height: rect.height(),
    }
    .progress(scroll_y, viewport_height)
}

fn apply_dash(path: &SvgPathElement, reveal: &PathReveal) {
    if let Err(err) = path.set_attribute("style", &reveal.dash().to_css()) {
        log::warn!("could not style about curve: {:?}", err);
    }
}

/// Schedules the next frame unless one is already pending.
fn request_frame(window: &Window, frame: &FrameCell, raf_id: &Cell<Option<i32>>) {
    if raf_id.get().is_some() {
        return;
    }
    if let Some(callback) = frame.borrow().as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(err) => log::warn!("could not schedule about curve frame: {:?}", err),
        }
    }
}

fn start_reveal(container_ref: &NodeRef, path_ref: &NodeRef) -> Option<RevealLoop> {
    let window = web_sys::window()?;
    let container = container_ref.cast::<HtmlElement>()?;
    let path = path_ref.cast::<SvgPathElement>()?;

    let lag = if capabilities::register().reduced_motion {
        0.0
    } else {
        config::SCRUB_LAG_SECS
    };
    let reveal = Rc::new(RefCell::new(PathReveal::new(f64::from(path.get_total_length()), lag)));
    reveal
        .borrow_mut()
        .set_progress(scroll_progress(&window, &container));
    apply_dash(&path, &reveal.borrow());

    // Frames run only while the curve is catching up; a settled curve
    // waits for the next scroll or resize to wake the loop.
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let frame: FrameCell = Rc::new(RefCell::new(None));
    {
        let reveal = reveal.clone();
        let raf_id = raf_id.clone();
        let frame_cell = frame.clone();
        let window_loop = window.clone();
        let last_timestamp = Cell::new(None::<f64>);
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            raf_id.set(None);
            let dt = last_timestamp
                .replace(Some(timestamp))
                .map(|last| (timestamp - last) / 1000.0)
                .unwrap_or(0.0);
            let settled = {
                let mut reveal = reveal.borrow_mut();
                reveal.advance(dt);
                apply_dash(&path, &reveal);
                reveal.is_settled()
            };
            if settled {
                last_timestamp.set(None);
            } else {
                request_frame(&window_loop, &frame_cell, &raf_id);
            }
        }) as Box<dyn FnMut(f64)>));
    }

    let refresh = {
        let window_listener = window.clone();
        let frame = frame.clone();
        let raf_id = raf_id.clone();
        Closure::wrap(Box::new(move || {
            let moved = {
                let mut reveal = reveal.borrow_mut();
                let before = reveal.target_visible();
                reveal.set_progress(scroll_progress(&window_listener, &container));
                reveal.target_visible() != before
            };
            if moved {
                request_frame(&window_listener, &frame, &raf_id);
            }
        }) as Box<dyn FnMut()>)
    };
    for event in ["scroll", "resize"] {
        if let Err(err) = window.add_event_listener_with_callback(event, refresh.as_ref().unchecked_ref()) {
            log::warn!("could not listen for {}: {:?}", event, err);
        }
    }

    request_frame(&window, &frame, &raf_id);

    Some(RevealLoop {
        window,
        raf_id,
        frame,
        refresh,
    })
}

#[function_component(AboutScrollSection)]
pub fn about_scroll_section() -> Html {
    let container_ref = use_node_ref();
    let path_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let path_ref = path_ref.clone();
        use_effect_with_deps(
            move |_| {
                let reveal_loop = start_reveal(&container_ref, &path_ref);
                if reveal_loop.is_none() {
                    log::warn!("about section mounted without its curve, skipping reveal");
                }
                move || {
                    if let Some(reveal_loop) = reveal_loop {
                        reveal_loop.stop();
                    }
                }
            },
            (),
        );
    }

    html! {
        // Height sets the pace: the taller the section, the slower the draw
        <div ref={container_ref} class="about-scroll" style="height: 200vh;">
            <div class="about-curve-layer">
                <svg
                    class="about-curve"
                    viewBox="0 0 1000 2000"
                    preserveAspectRatio="xMidYMin slice"
                    fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        ref={path_ref}
                        d={CURVE}
                        stroke="#3b82f6"
                        stroke-width="15"
                        stroke-linecap="round"
                    />
                </svg>
            </div>

            <div class="about-title">
                <h1>{"About Us"}</h1>
            </div>
            <div class="about-copy">
                <h2>{"GDG NITH"}</h2>
                <p class="about-lead">
                    {"Google Developer Groups (GDG) are community groups for college and university students interested in Google developer technologies."}
                </p>
                <p class="about-body">
                    {"We host workshops, hackathons, and study jams to help students learn and grow together."}
                </p>
            </div>
            <style>
                {r#"
                    .about-scroll {
                        position: relative;
                        width: 100%;
                        background: #0a0a0a;
                    }
                    .about-curve-layer {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .about-curve {
                        width: 100%;
                        height: 100%;
                    }
                    .about-title {
                        position: absolute;
                        top: 10%;
                        left: 10%;
                        max-width: 32rem;
                        pointer-events: none;
                    }
                    .about-title h1 {
                        font-size: 6rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        color: #fff;
                    }
                    .about-copy {
                        position: absolute;
                        top: 35%;
                        right: 5%;
                        max-width: 48rem;
                        text-align: right;
                        pointer-events: none;
                    }
                    .about-copy h2 {
                        font-size: 10rem;
                        line-height: 1;
                        font-weight: 900;
                        white-space: nowrap;
                        color: #fff;
                    }
                    .about-lead {
                        margin-top: 2rem;
                        font-size: 1.875rem;
                        color: #999;
                    }
                    .about-body {
                        margin-top: 1.5rem;
                        font-size: 1.5rem;
                        color: #999;
                    }
                    @media (max-width: 768px) {
                        .about-title h1 { font-size: 3rem; }
                        .about-copy h2 { font-size: 4rem; white-space: normal; }
                        .about-lead { font-size: 1.2rem; }
                        .about-body { font-size: 1rem; }
                    }
                "#}
            </style>
        </div>
    }
}
