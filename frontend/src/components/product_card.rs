use shared::Product;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Rc<Product>,
    pub on_add: Callback<Rc<Product>>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let add = {
        let product = Rc::clone(product);
        props.on_add.reform(move |_| Rc::clone(&product))
    };

    html! {
        <div class="product-card">
            <img class="product-image" src={product.image.clone()} alt={product.name.clone()} />
            <div class="product-body">
                <div class="product-tags">
                    <span class="tag">{&product.category}</span>
                    <span class="tag muted">{&product.sub_category}</span>
                </div>
                <h3>{&product.name}</h3>
                <p class="muted">{&product.description}</p>
                {if product.nutrition.calories > 0 {
                    html! { <p class="calories">{format!("{} kcal", product.nutrition.calories)}</p> }
                } else {
                    html! {}
                }}
                <div class="product-foot">
                    <span class="price">{format!("{} DH", product.price)}</span>
                    <button class="btn btn-primary" onclick={add}>{"Ajouter"}</button>
                </div>
            </div>
        </div>
    }
}
