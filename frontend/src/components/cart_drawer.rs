use yew::prelude::*;

use crate::components::app::Page;
use crate::services::checkout;
use crate::state::cart::{CartAction, CartHandle};

#[derive(Properties, PartialEq)]
pub struct CartDrawerProps {
    pub on_navigate: Callback<Page>,
}

/// Slide-over cart view. Visibility is the store's transient drawer flag.
#[function_component(CartDrawer)]
pub fn cart_drawer(props: &CartDrawerProps) -> Html {
    let cart = use_context::<CartHandle>().expect("cart context missing");

    let close = {
        let cart = cart.clone();
        Callback::from(move |_| cart.dispatch(CartAction::CloseDrawer))
    };

    let view_cart = {
        let cart = cart.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            cart.dispatch(CartAction::CloseDrawer);
            on_navigate.emit(Page::Cart);
        })
    };

    let order = {
        let cart = cart.clone();
        Callback::from(move |_| {
            checkout::open_order(&cart.lines, cart.total());
        })
    };

    let drawer_class = if cart.drawer_open { "cart-drawer open" } else { "cart-drawer" };
    let overlay_class = if cart.drawer_open { "cart-overlay visible" } else { "cart-overlay" };

    html! {
        <>
            <div class={overlay_class} onclick={close.clone()}></div>
            <aside class={drawer_class}>
                <div class="drawer-header">
                    <h2>{format!("Mon Panier ({})", cart.lines.len())}</h2>
                    <button class="drawer-close" onclick={close.clone()}>{"×"}</button>
                </div>

                <div class="drawer-items">
                    {if cart.is_empty() {
                        html! {
                            <div class="drawer-empty">
                                <p>{"Votre panier est vide"}</p>
                                <button class="link-button" onclick={close}>
                                    {"Continuer mes achats"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                {for cart.lines.iter().map(|line| {
                                    let remove = {
                                        let cart = cart.clone();
                                        let id = line.product.id.clone();
                                        Callback::from(move |_| {
                                            cart.dispatch(CartAction::Remove(id.clone()))
                                        })
                                    };
                                    html! {
                                        <div class="drawer-item" key={line.product.id.clone()}>
                                            <img src={line.product.image.clone()} alt={line.product.name.clone()} />
                                            <div class="drawer-item-body">
                                                <div class="drawer-item-head">
                                                    <h3>{&line.product.name}</h3>
                                                    <button class="remove-button" onclick={remove}>{"Supprimer"}</button>
                                                </div>
                                                <p class="muted">{&line.product.sub_category}</p>
                                                <div class="drawer-item-foot">
                                                    <span class="qty-chip">{format!("Qty: {}", line.quantity)}</span>
                                                    <span class="price">{format!("{} DH", line.product.price * line.quantity)}</span>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })}
                            </>
                        }
                    }}
                </div>

                {if !cart.is_empty() {
                    html! {
                        <div class="drawer-footer">
                            <div class="drawer-total">
                                <span>{"Total"}</span>
                                <span class="price">{format!("{} DH", cart.total())}</span>
                            </div>
                            <div class="drawer-actions">
                                <button class="btn btn-secondary" onclick={view_cart}>{"Voir Panier"}</button>
                                <button class="btn btn-primary" onclick={order}>{"Commander"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </aside>
        </>
    }
}
