use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h2>{"GDG NITH"}</h2>
                    <p>{"Google Developer Groups on Campus, NIT Hamirpur."}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Events}>{"Events"}</Link<Route>>
                    <Link<Route> to={Route::Abyss}>{"ABYSS"}</Link<Route>>
                </div>
                <div class="footer-social">
                    <a href="https://gdg.community.dev/" target="_blank" rel="noopener noreferrer">{"Community"}</a>
                    <a href="https://github.com/" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href="https://www.instagram.com/" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 2rem;
                        background: #000;
                        border-top: 1px solid #171717;
                        color: #a3a3a3;
                    }
                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 2rem;
                    }
                    .footer-brand h2 { color: #fff; font-weight: 900; }
                    .footer-links, .footer-social { display: flex; flex-direction: column; gap: 0.5rem; }
                    .site-footer a { color: #a3a3a3; text-decoration: none; }
                    .site-footer a:hover { color: #3b82f6; }
                "#}
            </style>
        </footer>
    }
}
