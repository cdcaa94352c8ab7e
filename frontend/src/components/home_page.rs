use shared::Category;
use yew::prelude::*;

use crate::components::app::Page;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <section class="home-page">
            <div class="hero">
                <h1>{"Mangez sain, vivez mieux"}</h1>
                <p class="muted">
                    {"Snacks, jus pressés à froid et programmes repas préparés chaque matin \
                      à Casablanca, sans sucre raffiné ni produit congelé."}
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary" onclick={props.on_navigate.reform(|_| Page::Shop)}>
                        {"Découvrir la boutique"}
                    </button>
                    <button class="btn btn-secondary" onclick={props.on_navigate.reform(|_| Page::Programs)}>
                        {"Voir les programmes"}
                    </button>
                </div>
            </div>

            <div class="category-grid">
                {for Category::ALL.iter().map(|category| {
                    let target = if *category == Category::Program { Page::Programs } else { Page::Shop };
                    html! {
                        <button
                            class="category-tile"
                            onclick={props.on_navigate.reform(move |_| target)}
                        >
                            {category.label()}
                        </button>
                    }
                })}
            </div>

            <div class="why-us">
                <div class="why-item">
                    <h3>{"Ingrédients nobles"}</h3>
                    <p class="muted">{"Miel de l'Atlas, dattes Medjool, avoine bio : rien d'autre."}</p>
                </div>
                <div class="why-item">
                    <h3>{"Livraison quotidienne"}</h3>
                    <p class="muted">{"Préparé le matin, livré avant midi, jamais congelé."}</p>
                </div>
                <div class="why-item">
                    <h3>{"Commande simple"}</h3>
                    <p class="muted">{"Remplissez votre panier, validez sur WhatsApp, c'est tout."}</p>
                </div>
            </div>
        </section>
    }
}
