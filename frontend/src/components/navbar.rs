use yew::prelude::*;

use crate::components::app::Page;
use crate::state::cart::{CartAction, CartHandle};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
}

const LINKS: [(Page, &str); 5] = [
    (Page::Home, "Accueil"),
    (Page::Shop, "Boutique"),
    (Page::Programs, "Programmes"),
    (Page::Blog, "Blog"),
    (Page::Contact, "Contact"),
];

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let cart = use_context::<CartHandle>().expect("cart context missing");

    let open_drawer = {
        let cart = cart.clone();
        Callback::from(move |_| cart.dispatch(CartAction::OpenDrawer))
    };

    html! {
        <header class="navbar">
            <div class="navbar-inner">
                <button
                    class="brand"
                    onclick={props.on_navigate.reform(|_| Page::Home)}
                >
                    {"HealthyBite"}
                </button>

                <nav class="nav-links">
                    {for LINKS.iter().map(|(page, label)| {
                        let class = if props.active == *page { "nav-link active" } else { "nav-link" };
                        let target = *page;
                        html! {
                            <button class={class} onclick={props.on_navigate.reform(move |_| target)}>
                                {*label}
                            </button>
                        }
                    })}
                </nav>

                <div class="nav-actions">
                    <button class="cart-button" onclick={open_drawer}>
                        {"Panier"}
                        {if cart.count() > 0 {
                            html! { <span class="cart-badge">{cart.count()}</span> }
                        } else {
                            html! {}
                        }}
                    </button>
                    <button
                        class="admin-link"
                        onclick={props.on_navigate.reform(|_| Page::Admin)}
                    >
                        {"Admin"}
                    </button>
                </div>
            </div>
        </header>
    }
}
