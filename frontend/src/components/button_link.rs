use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ButtonLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A router link that looks like a button.
#[function_component(ButtonLink)]
pub fn button_link(props: &ButtonLinkProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes={classes!("button-link", props.class.clone())}>
            { for props.children.iter() }
        </Link<Route>>
    }
}
