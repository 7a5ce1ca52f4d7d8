use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content {
    pub mod error;
    pub mod events;
    pub mod games;
}
mod motion {
    pub mod capabilities;
    pub mod carousel;
    pub mod countdown;
    pub mod entrance;
    pub mod scrub;
    pub mod selection;
    pub mod tilt;
}
mod components {
    pub mod about_scroll;
    pub mod button_link;
    pub mod carousel;
    pub mod countdown;
    pub mod entrance;
    pub mod footer;
    pub mod game_modal;
    pub mod tilted_card;
}
mod pages {
    pub mod abyss;
    pub mod events;
    pub mod home;
    pub mod not_found;
}

use pages::{
    abyss::AbyssEventPage,
    events::{EventDetailPage, EventsPage},
    home::Home,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/events")]
    Events,
    #[at("/events/abyss")]
    Abyss,
    #[at("/events/:id")]
    EventDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Events => {
            info!("Rendering Events page");
            html! { <EventsPage /> }
        },
        Route::Abyss => {
            info!("Rendering Abyss page");
            html! { <AbyssEventPage /> }
        },
        Route::EventDetail { id } => {
            info!("Rendering Event page for {}", id);
            html! { <EventDetailPage {id} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_top = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("nav could not listen for scroll: {:?}", err);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // the ABYSS page brings its own sticky bar
    if route == Some(Route::Abyss) {
        return html! {};
    }

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"GDG NITH"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Events} classes="nav-link">
                            {"Events"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Abyss} classes="nav-link nav-abyss">
                            {"ABYSS"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 30;
                        padding: 1rem 2rem;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 10, 10, 0.85);
                        backdrop-filter: blur(8px);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 900;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                    }
                    .nav-right { display: flex; gap: 1.5rem; }
                    .nav-link { color: #d4d4d4; text-decoration: none; }
                    .nav-link:hover { color: #3b82f6; }
                    .nav-abyss:hover { color: #dc2626; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem 2rem;
                            background: rgba(10, 10, 10, 0.95);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let capabilities = motion::capabilities::register();
    info!("Starting application with {:?}", capabilities);
    yew::Renderer::<App>::new().render();
}
