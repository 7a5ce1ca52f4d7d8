use yew::prelude::*;

use crate::motion::carousel::Carousel as Ring;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: &'static [&'static str],
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let ring = use_state(|| Ring::new(props.images.len()));

    if ring.is_empty() {
        return html! {};
    }

    let on_prev = {
        let ring = ring.clone();
        Callback::from(move |_: MouseEvent| ring.set(ring.prev()))
    };
    let on_next = {
        let ring = ring.clone();
        Callback::from(move |_: MouseEvent| ring.set(ring.next()))
    };

    html! {
        <div class="carousel">
            <div class="carousel-track" style={format!("transform: translateX(-{}%);", ring.index() * 100)}>
                { for props.images.iter().enumerate().map(|(i, src)| html! {
                    <img class="carousel-slide" src={*src} alt={format!("Event photo {}", i + 1)} loading="lazy" />
                }) }
            </div>
            <button class="carousel-nav prev" onclick={on_prev} aria-label="Previous photo">{"‹"}</button>
            <button class="carousel-nav next" onclick={on_next} aria-label="Next photo">{"›"}</button>
            <div class="carousel-dots">
                { for (0..ring.len()).map(|i| {
                    let ring = ring.clone();
                    let active = ring.index() == i;
                    html! {
                        <button
                            class={classes!("carousel-dot", active.then(|| "active"))}
                            onclick={Callback::from(move |_: MouseEvent| ring.set(ring.go_to(i)))}
                            aria-label={format!("Show photo {}", i + 1)}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        width: 100%;
                        max-width: 64rem;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .carousel-track {
                        display: flex;
                        transition: transform 0.5s ease;
                    }
                    .carousel-slide {
                        flex: 0 0 100%;
                        width: 100%;
                        height: 28rem;
                        object-fit: cover;
                    }
                    .carousel-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        border: none;
                        font-size: 2rem;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        cursor: pointer;
                    }
                    .carousel-nav.prev { left: 1rem; }
                    .carousel-nav.next { right: 1rem; }
                    .carousel-dots {
                        position: absolute;
                        bottom: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.5rem;
                    }
                    .carousel-dot {
                        width: 0.6rem;
                        height: 0.6rem;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.4);
                        cursor: pointer;
                    }
                    .carousel-dot.active { background: #dc2626; }
                "#}
            </style>
        </div>
    }
}
