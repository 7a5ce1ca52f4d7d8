use yew::prelude::*;

use crate::components::button_link::ButtonLink;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"We couldn't find that page. The event may have moved or never existed."}</p>
            <ButtonLink to={Route::Events}>{"Browse Events"}</ButtonLink>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0a0a0a;
                        color: #fff;
                        text-align: center;
                        padding: 2rem;
                    }
                    .not-found h1 { font-size: 8rem; font-weight: 900; }
                    .not-found p { color: #a3a3a3; }
                "#}
            </style>
        </main>
    }
}
