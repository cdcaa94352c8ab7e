use shared::Product;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ProductsState {
    /// Catalog snapshot, shared by reference with the cart.
    pub products: Vec<Rc<Product>>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseProductsResult {
    pub state: ProductsState,
    pub refresh: Callback<()>,
}

/// Fetch the product catalog once on mount and expose a refresh action.
#[hook]
pub fn use_products(api_client: &ApiClient) -> UseProductsResult {
    let products = use_state(Vec::<Rc<Product>>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let refresh = {
        let api_client = api_client.clone();
        let products = products.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let products = products.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_products().await {
                    Ok(fetched) => {
                        products.set(fetched.into_iter().map(Rc::new).collect());
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch products:", e.clone());
                        error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Load initial catalog
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ProductsState {
        products: (*products).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseProductsResult { state, refresh }
}
