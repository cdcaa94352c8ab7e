use shared::{Product, Program};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::admin::product_editor::ProductEditor;
use crate::components::admin::program_editor::ProgramEditor;
use crate::components::admin::SubmitStatus;
use crate::hooks::{use_products, use_programs};
use crate::services::api::ApiClient;
use crate::state::product_form::{ProductForm, ProductFormAction};
use crate::state::program_form::{ProgramForm, ProgramFormAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    AddProduct,
    ProductList,
    Programs,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let api_client = use_state(ApiClient::new);
    let tab = use_state(|| AdminTab::AddProduct);

    let products = use_products(&api_client);
    let programs = use_programs(&api_client);

    let product_form = use_reducer(ProductForm::default);
    let editing_id = use_state(|| None::<String>);
    let submit_status = use_state(|| SubmitStatus::Idle);

    let program_form = use_reducer(ProgramForm::default);
    let editing_program_id = use_state(|| None::<String>);
    let program_submit_status = use_state(|| SubmitStatus::Idle);

    // ── Product actions ──────────────────────────────────────────────

    let submit_product = {
        let api_client = api_client.clone();
        let product_form = product_form.clone();
        let editing_id = editing_id.clone();
        let submit_status = submit_status.clone();
        let refresh_products = products.refresh.clone();
        let tab = tab.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let product_form = product_form.clone();
            let editing_id = editing_id.clone();
            let submit_status = submit_status.clone();
            let refresh_products = refresh_products.clone();
            let tab = tab.clone();

            spawn_local(async move {
                let payload = product_form.to_payload();
                // A custom category left blank never reaches the backend
                if payload.category.is_empty() || payload.sub_category.is_empty() {
                    submit_status.set(SubmitStatus::Error);
                    let submit_status = submit_status.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        submit_status.set(SubmitStatus::Idle);
                    });
                    return;
                }

                submit_status.set(SubmitStatus::Loading);
                let result = match (*editing_id).clone() {
                    Some(id) => api_client.update_product(&id, &payload).await,
                    None => api_client.create_product(&payload).await,
                };

                match result {
                    Ok(_product) => {
                        submit_status.set(SubmitStatus::Success);
                        product_form.dispatch(ProductFormAction::Reset);
                        editing_id.set(None);
                        refresh_products.emit(());

                        let submit_status = submit_status.clone();
                        let tab = tab.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(1500).await;
                            submit_status.set(SubmitStatus::Idle);
                            tab.set(AdminTab::ProductList);
                        });
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to save product:", e);
                        submit_status.set(SubmitStatus::Error);
                        let submit_status = submit_status.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            submit_status.set(SubmitStatus::Idle);
                        });
                    }
                }
            });
        })
    };

    let edit_product = {
        let product_form = product_form.clone();
        let editing_id = editing_id.clone();
        let tab = tab.clone();
        Callback::from(move |product: Rc<Product>| {
            editing_id.set(Some(product.id.clone()));
            product_form.dispatch(ProductFormAction::Load((*product).clone()));
            tab.set(AdminTab::AddProduct);
        })
    };

    let cancel_edit_product = {
        let product_form = product_form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |_| {
            editing_id.set(None);
            product_form.dispatch(ProductFormAction::Reset);
        })
    };

    let delete_product = {
        let api_client = api_client.clone();
        let refresh_products = products.refresh.clone();
        Callback::from(move |id: String| {
            if !confirm("Supprimer ce produit ?") {
                return;
            }
            let api_client = api_client.clone();
            let refresh_products = refresh_products.clone();
            spawn_local(async move {
                if let Err(e) = api_client.delete_product(&id).await {
                    gloo::console::error!("Failed to delete product:", e);
                }
                refresh_products.emit(());
            });
        })
    };

    // ── Program actions ──────────────────────────────────────────────

    let submit_program = {
        let api_client = api_client.clone();
        let program_form = program_form.clone();
        let editing_program_id = editing_program_id.clone();
        let program_submit_status = program_submit_status.clone();
        let refresh_programs = programs.refresh.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let program_form = program_form.clone();
            let editing_program_id = editing_program_id.clone();
            let program_submit_status = program_submit_status.clone();
            let refresh_programs = refresh_programs.clone();

            spawn_local(async move {
                program_submit_status.set(SubmitStatus::Loading);

                let payload = program_form.to_payload();
                let result = match (*editing_program_id).clone() {
                    Some(id) => api_client.update_program(&id, &payload).await,
                    None => api_client.create_program(&payload).await,
                };

                match result {
                    Ok(_program) => {
                        program_submit_status.set(SubmitStatus::Success);
                        program_form.dispatch(ProgramFormAction::Reset);
                        editing_program_id.set(None);
                        refresh_programs.emit(());

                        let program_submit_status = program_submit_status.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(2000).await;
                            program_submit_status.set(SubmitStatus::Idle);
                        });
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to save program:", e);
                        program_submit_status.set(SubmitStatus::Error);
                        let program_submit_status = program_submit_status.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            program_submit_status.set(SubmitStatus::Idle);
                        });
                    }
                }
            });
        })
    };

    let edit_program = {
        let program_form = program_form.clone();
        let editing_program_id = editing_program_id.clone();
        Callback::from(move |program: Program| {
            editing_program_id.set(Some(program.id.clone()));
            program_form.dispatch(ProgramFormAction::Load(program));
        })
    };

    let cancel_edit_program = {
        let program_form = program_form.clone();
        let editing_program_id = editing_program_id.clone();
        Callback::from(move |_| {
            editing_program_id.set(None);
            program_form.dispatch(ProgramFormAction::Reset);
        })
    };

    let delete_program = {
        let api_client = api_client.clone();
        let refresh_programs = programs.refresh.clone();
        Callback::from(move |id: String| {
            if !confirm("Supprimer ce programme ?") {
                return;
            }
            let api_client = api_client.clone();
            let refresh_programs = refresh_programs.clone();
            spawn_local(async move {
                if let Err(e) = api_client.delete_program(&id).await {
                    gloo::console::error!("Failed to delete program:", e);
                }
                refresh_programs.emit(());
            });
        })
    };

    // ── Rendering ────────────────────────────────────────────────────

    let tab_button = |target: AdminTab, label: String| {
        let tab = tab.clone();
        let class = if *tab == target { "tab-button active" } else { "tab-button" };
        html! {
            <button class={class} onclick={Callback::from(move |_| tab.set(target))}>
                {label}
            </button>
        }
    };

    html! {
        <section class="admin-page">
            <div class="admin-header">
                <h1>{"HealthyBite — Admin"}</h1>
                <span class="tag">
                    {format!("{} produits en base", products.state.products.len())}
                </span>
            </div>

            <div class="admin-tabs">
                {tab_button(AdminTab::AddProduct, "+ Produit".to_string())}
                {tab_button(AdminTab::ProductList, format!("Produits ({})", products.state.products.len()))}
                {tab_button(AdminTab::Programs, format!("Programmes ({})", programs.state.programs.len()))}
            </div>

            {match *tab {
                AdminTab::AddProduct => html! {
                    <ProductEditor
                        form={product_form.clone()}
                        editing={editing_id.is_some()}
                        status={*submit_status}
                        on_submit={submit_product}
                        on_cancel={cancel_edit_product}
                    />
                },
                AdminTab::ProductList => html! {
                    <div class="admin-list">
                        {if products.state.loading {
                            html! { <div class="loading">{"Chargement..."}</div> }
                        } else if products.state.products.is_empty() {
                            html! { <p class="muted">{"Aucun produit en base de données."}</p> }
                        } else {
                            html! {
                                <>
                                    {for products.state.products.iter().map(|product| {
                                        let edit = {
                                            let edit_product = edit_product.clone();
                                            let product = Rc::clone(product);
                                            Callback::from(move |_| edit_product.emit(Rc::clone(&product)))
                                        };
                                        let delete = {
                                            let delete_product = delete_product.clone();
                                            let id = product.id.clone();
                                            Callback::from(move |_| delete_product.emit(id.clone()))
                                        };
                                        html! {
                                            <div class="admin-row" key={product.id.clone()}>
                                                <img src={product.image.clone()} alt={product.name.clone()} />
                                                <div class="admin-row-body">
                                                    <div class="product-tags">
                                                        <span class="tag">{&product.category}</span>
                                                        <span class="tag muted">{&product.sub_category}</span>
                                                    </div>
                                                    <h3>{&product.name}</h3>
                                                    <p class="muted">{&product.description}</p>
                                                </div>
                                                <div class="admin-row-actions">
                                                    <span class="price">{format!("{} DH", product.price)}</span>
                                                    <button class="btn btn-secondary" onclick={edit}>{"Modifier"}</button>
                                                    <button class="remove-button" onclick={delete}>{"Supprimer"}</button>
                                                </div>
                                            </div>
                                        }
                                    })}
                                </>
                            }
                        }}
                    </div>
                },
                AdminTab::Programs => html! {
                    <div class="admin-programs">
                        <ProgramEditor
                            form={program_form.clone()}
                            products={products.state.products.clone()}
                            editing={editing_program_id.is_some()}
                            status={*program_submit_status}
                            on_submit={submit_program}
                            on_cancel={cancel_edit_program}
                        />

                        <div class="admin-list">
                            <h2>{"Programmes en ligne"}</h2>
                            {if programs.state.programs.is_empty() {
                                html! { <p class="muted">{"Aucun programme pour le moment."}</p> }
                            } else {
                                html! {
                                    <>
                                        {for programs.state.programs.iter().map(|program| {
                                            let edit = {
                                                let edit_program = edit_program.clone();
                                                let program = program.clone();
                                                Callback::from(move |_| edit_program.emit(program.clone()))
                                            };
                                            let delete = {
                                                let delete_program = delete_program.clone();
                                                let id = program.id.clone();
                                                Callback::from(move |_| delete_program.emit(id.clone()))
                                            };
                                            html! {
                                                <div class="admin-row" key={program.id.clone()}>
                                                    <img src={program.image.clone()} alt={program.name.clone()} />
                                                    <div class="admin-row-body">
                                                        <span class="tag">{&program.sub_category}</span>
                                                        <h3>{&program.name}</h3>
                                                        <p class="muted">
                                                            {format!("{} jours · {} DH/jour", program.duration, program.price)}
                                                        </p>
                                                    </div>
                                                    <div class="admin-row-actions">
                                                        <button class="btn btn-secondary" onclick={edit}>{"Modifier"}</button>
                                                        <button class="remove-button" onclick={delete}>{"Supprimer"}</button>
                                                    </div>
                                                </div>
                                            }
                                        })}
                                    </>
                                }
                            }}
                        </div>
                    </div>
                },
            }}
        </section>
    }
}
