//! Host capability detection, done once per page load.
//!
//! Components ask [`register`] what the browser supports instead of probing
//! it themselves. Outside a browser (native test builds) detection reports
//! [`Capabilities::HEADLESS`] without touching any browser API.

use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;

use super::tilt::PointerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub intersection_observer: bool,
    pub pointer: PointerKind,
    pub reduced_motion: bool,
}

impl Capabilities {
    pub const HEADLESS: Capabilities = Capabilities {
        intersection_observer: false,
        pointer: PointerKind::Coarse,
        reduced_motion: true,
    };
}

static REGISTERED: OnceCell<Capabilities> = OnceCell::new();

/// Detects capabilities on the first call; later calls return that result.
pub fn register() -> Capabilities {
    register_in(&REGISTERED, detect)
}

fn register_in(cell: &OnceCell<Capabilities>, detect: impl FnOnce() -> Capabilities) -> Capabilities {
    *cell.get_or_init(detect)
}

fn host_available() -> bool {
    cfg!(target_arch = "wasm32") && web_sys::window().is_some()
}

fn detect() -> Capabilities {
    if !host_available() {
        return Capabilities::HEADLESS;
    }
    let Some(window) = web_sys::window() else {
        return Capabilities::HEADLESS;
    };
    let media_matches = |query: &str| {
        window
            .match_media(query)
            .ok()
            .flatten()
            .map(|list| list.matches())
            .unwrap_or(false)
    };

    let capabilities = Capabilities {
        intersection_observer: web_sys::js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false),
        pointer: if media_matches("(pointer: fine)") {
            PointerKind::Fine
        } else {
            PointerKind::Coarse
        },
        reduced_motion: media_matches("(prefers-reduced-motion: reduce)"),
    };
    log::debug!("registered host capabilities: {:?}", capabilities);
    capabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn detection_runs_once() {
        let cell = OnceCell::new();
        let calls = Cell::new(0);
        let detect = || {
            calls.set(calls.get() + 1);
            Capabilities {
                intersection_observer: true,
                pointer: PointerKind::Fine,
                reduced_motion: false,
            }
        };

        let first = register_in(&cell, detect);
        let second = register_in(&cell, || Capabilities::HEADLESS);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn native_builds_register_as_headless() {
        assert_eq!(register(), Capabilities::HEADLESS);
        assert_eq!(register(), Capabilities::HEADLESS);
    }
}
