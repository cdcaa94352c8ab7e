use shared::{Category, Product};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::product_card::ProductCard;
use crate::hooks::use_products;
use crate::services::api::ApiClient;
use crate::state::cart::{CartAction, CartHandle};

#[function_component(ShopPage)]
pub fn shop_page() -> Html {
    let cart = use_context::<CartHandle>().expect("cart context missing");
    let api_client = use_state(ApiClient::new);
    let products = use_products(&api_client);
    let filter = use_state(|| None::<Category>);

    // Adding from the shop also opens the drawer, as a call-site policy
    let on_add = {
        let cart = cart.clone();
        Callback::from(move |product: Rc<Product>| {
            cart.dispatch(CartAction::Add(product));
            cart.dispatch(CartAction::OpenDrawer);
        })
    };

    let visible: Vec<Rc<Product>> = products
        .state
        .products
        .iter()
        .filter(|p| match *filter {
            Some(category) => p.category == category.label(),
            None => true,
        })
        .cloned()
        .collect();

    html! {
        <section class="shop-page">
            <h1>{"Notre Boutique"}</h1>

            <div class="filter-chips">
                <button
                    class={if filter.is_none() { "chip active" } else { "chip" }}
                    onclick={
                        let filter = filter.clone();
                        Callback::from(move |_| filter.set(None))
                    }
                >
                    {"Tous"}
                </button>
                {for Category::ALL.iter().map(|category| {
                    let selected = *filter == Some(*category);
                    let filter = filter.clone();
                    let category = *category;
                    html! {
                        <button
                            class={if selected { "chip active" } else { "chip" }}
                            onclick={Callback::from(move |_| filter.set(Some(category)))}
                        >
                            {category.label()}
                        </button>
                    }
                })}
            </div>

            {if products.state.loading {
                html! { <div class="loading">{"Chargement des produits..."}</div> }
            } else if let Some(error) = &products.state.error {
                html! {
                    <div class="error-box">
                        <p>{error}</p>
                        <button class="btn btn-secondary" onclick={products.refresh.reform(|_| ())}>
                            {"Réessayer"}
                        </button>
                    </div>
                }
            } else if visible.is_empty() {
                html! { <p class="muted">{"Aucun produit dans cette catégorie."}</p> }
            } else {
                html! {
                    <div class="product-grid">
                        {for visible.iter().map(|product| html! {
                            <ProductCard
                                key={product.id.clone()}
                                product={Rc::clone(product)}
                                on_add={on_add.clone()}
                            />
                        })}
                    </div>
                }
            }}
        </section>
    }
}
