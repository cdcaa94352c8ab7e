use yew::prelude::*;

use crate::components::admin::admin_page::AdminPage;
use crate::components::blog_page::BlogPage;
use crate::components::cart_drawer::CartDrawer;
use crate::components::cart_page::CartPage;
use crate::components::contact_page::ContactPage;
use crate::components::home_page::HomePage;
use crate::components::navbar::Navbar;
use crate::components::programs_page::ProgramsPage;
use crate::components::shop_page::ShopPage;
use crate::state::cart::{CartHandle, CartState};

/// Storefront pages, driven by app state rather than a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Shop,
    Programs,
    Blog,
    Contact,
    Cart,
    Admin,
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| Page::Home);
    // The cart lives for the whole session and is restored from the
    // persisted snapshot on startup.
    let cart = use_reducer(CartState::restore);

    // Write the snapshot back whenever the lines change. Keyed on the
    // lines only, so drawer toggles never touch storage.
    {
        let lines = cart.lines.clone();
        use_effect_with(lines, |lines| {
            CartState::persist(lines);
            || ()
        });
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    html! {
        <ContextProvider<CartHandle> context={cart.clone()}>
            <Navbar active={*page} on_navigate={on_navigate.clone()} />
            <CartDrawer on_navigate={on_navigate.clone()} />
            <main class="main">
                {match *page {
                    Page::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
                    Page::Shop => html! { <ShopPage /> },
                    Page::Programs => html! { <ProgramsPage /> },
                    Page::Blog => html! { <BlogPage /> },
                    Page::Contact => html! { <ContactPage /> },
                    Page::Cart => html! { <CartPage on_navigate={on_navigate.clone()} /> },
                    Page::Admin => html! { <AdminPage /> },
                }}
            </main>
        </ContextProvider<CartHandle>>
    }
}
