use yew::prelude::*;

use crate::components::app::Page;
use crate::services::checkout;
use crate::state::cart::{CartAction, CartHandle};

#[derive(Properties, PartialEq)]
pub struct CartPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(CartPage)]
pub fn cart_page(props: &CartPageProps) -> Html {
    let cart = use_context::<CartHandle>().expect("cart context missing");
    let show_success = use_state(|| false);

    // Hand the snapshot to WhatsApp, then clear; the cleared cart is
    // also what gets persisted.
    let order = {
        let cart = cart.clone();
        let show_success = show_success.clone();
        Callback::from(move |_| {
            checkout::open_order(&cart.lines, cart.total());
            cart.dispatch(CartAction::Clear);
            show_success.set(true);
        })
    };

    if *show_success {
        return html! {
            <section class="cart-page success">
                <h1>{"Commande Reçue !"}</h1>
                <p class="muted">
                    {"Merci pour votre commande. Nous avons bien reçu votre demande sur \
                      WhatsApp et nous la traiterons dans les plus brefs délais."}
                </p>
                <button class="btn btn-primary" onclick={props.on_navigate.reform(|_| Page::Shop)}>
                    {"Retour à la boutique"}
                </button>
            </section>
        };
    }

    if cart.is_empty() {
        return html! {
            <section class="cart-page empty">
                <h1>{"Votre panier est vide"}</h1>
                <p class="muted">{"Découvrez nos produits sains et gourmands."}</p>
                <button class="btn btn-primary" onclick={props.on_navigate.reform(|_| Page::Shop)}>
                    {"Voir le catalogue"}
                </button>
            </section>
        };
    }

    html! {
        <section class="cart-page">
            <h1>{"Mon Panier"}</h1>

            <div class="cart-layout">
                <div class="cart-lines">
                    {for cart.lines.iter().map(|line| {
                        let id = line.product.id.clone();
                        let quantity = line.quantity;

                        let decrement = {
                            let cart = cart.clone();
                            let id = id.clone();
                            // Stepping down from 1 removes the line
                            Callback::from(move |_| {
                                cart.dispatch(CartAction::SetQuantity(id.clone(), quantity - 1))
                            })
                        };
                        let increment = {
                            let cart = cart.clone();
                            let id = id.clone();
                            Callback::from(move |_| {
                                cart.dispatch(CartAction::SetQuantity(id.clone(), quantity + 1))
                            })
                        };
                        let remove = {
                            let cart = cart.clone();
                            let id = id.clone();
                            Callback::from(move |_| cart.dispatch(CartAction::Remove(id.clone())))
                        };

                        html! {
                            <div class="cart-line" key={line.product.id.clone()}>
                                <img src={line.product.image.clone()} alt={line.product.name.clone()} />
                                <div class="cart-line-body">
                                    <h3>{&line.product.name}</h3>
                                    <p class="muted">{&line.product.sub_category}</p>
                                    <div class="qty-stepper">
                                        <button onclick={decrement}>{"−"}</button>
                                        <span>{line.quantity}</span>
                                        <button onclick={increment}>{"+"}</button>
                                    </div>
                                </div>
                                <div class="cart-line-side">
                                    <span class="price">{format!("{} DH", line.product.price * line.quantity)}</span>
                                    <button class="remove-button" onclick={remove}>{"Supprimer"}</button>
                                </div>
                            </div>
                        }
                    })}
                </div>

                <aside class="cart-summary">
                    <h2>{"Résumé"}</h2>
                    <div class="summary-row">
                        <span>{format!("Articles ({})", cart.count())}</span>
                        <span>{format!("{} DH", cart.total())}</span>
                    </div>
                    <div class="summary-row total">
                        <span>{"Total"}</span>
                        <span class="price">{format!("{} DH", cart.total())}</span>
                    </div>
                    <button class="btn btn-primary wide" onclick={order}>
                        {"Commander sur WhatsApp"}
                    </button>
                </aside>
            </div>
        </section>
    }
}
