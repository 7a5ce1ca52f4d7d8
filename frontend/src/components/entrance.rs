use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::motion::capabilities;
use crate::motion::entrance::{entrance_style, start_mode, Entrance, EntranceState, StartMode};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct EntranceWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl EntranceWatch {
    fn stop(self) {
        self.observer.disconnect();
    }
}

fn watch(element: &Element, on_enter: impl Fn(EntranceState) + 'static) -> Result<EntranceWatch, JsValue> {
    let entrance = Rc::new(RefCell::new(Entrance::new()));
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        // a batch can still arrive after disconnect
        if entrance.borrow().is_triggered() {
            return;
        }
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let mut entrance = entrance.borrow_mut();
            if entrance.observe(entry.is_intersecting()) {
                on_enter(entrance.state());
                // terminal, nothing left to watch
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config::ENTRANCE_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok(EntranceWatch {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCardProps {
    /// Position in the rendered list, drives the stagger.
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedCardWrapper)]
pub fn animated_card_wrapper(props: &AnimatedCardProps) -> Html {
    let node = use_node_ref();
    let state = use_state(EntranceState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let caps = capabilities::register();
                let element = node.cast::<Element>();
                if element.is_none() {
                    log::warn!("entrance wrapper has no element to observe, showing card");
                }
                let mut active = None;
                match (
                    start_mode(caps.intersection_observer, caps.reduced_motion, element.is_some()),
                    element,
                ) {
                    (StartMode::Observe, Some(element)) => {
                        let setter = state.setter();
                        match watch(&element, move |entered| setter.set(entered)) {
                            Ok(watch) => active = Some(watch),
                            Err(err) => {
                                log::warn!("intersection observer unavailable, showing card: {:?}", err);
                                state.set(EntranceState::Triggered);
                            }
                        }
                    }
                    _ => state.set(EntranceState::Triggered),
                }

                move || {
                    if let Some(watch) = active {
                        watch.stop();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("entrance", props.class.clone())}
            style={entrance_style(*state, props.index)}
        >
            { for props.children.iter() }
        </div>
    }
}
