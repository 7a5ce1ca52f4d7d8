use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::motion::countdown::{Countdown, CountdownStyle, CountdownTicker, Remaining, Tick};

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub countdown: Countdown,
    #[prop_or(CountdownStyle::Clock)]
    pub style: CountdownStyle,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownProps) -> Html {
    let countdown = props.countdown;
    let ticker = use_mut_ref(|| CountdownTicker::start(countdown, Utc::now()));
    let shown = use_state(|| ticker.borrow().shown());
    let finished = use_state(|| ticker.borrow().is_finished());
    let is_finished = *finished;

    {
        let ticker = ticker.clone();
        let shown = shown.clone();
        let finished = finished.clone();
        use_effect_with_deps(
            move |is_finished| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if !*is_finished {
                    let interval = Interval::new(config::COUNTDOWN_TICK_MS, move || {
                        let tick = ticker.borrow_mut().tick(Utc::now());
                        match tick {
                            Tick::Running(remaining) => shown.set(remaining),
                            Tick::Finished => {
                                log::debug!("countdown reached zero");
                                shown.set(Remaining::ZERO);
                                // re-runs this effect, which drops the interval
                                finished.set(true);
                            }
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            is_finished,
        );
    }

    let text = shown.format(props.style);
    html! {
        <div class={classes!("countdown", props.class.clone())} role="timer">
            {
                if let Some(label) = &props.label {
                    html! { <span class="countdown-label">{format!("{}: ", label)}</span> }
                } else {
                    html! {}
                }
            }
            <span class="countdown-value">{text}</span>
        </div>
    }
}
