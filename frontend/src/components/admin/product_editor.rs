use shared::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::admin::SubmitStatus;
use crate::state::product_form::{ProductForm, ProductFormAction, ProductField, CUSTOM_VALUE};
use crate::state::IngredientField;

#[derive(Properties, PartialEq)]
pub struct ProductEditorProps {
    pub form: UseReducerHandle<ProductForm>,
    pub editing: bool,
    pub status: SubmitStatus,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn field_input(form: &UseReducerHandle<ProductForm>, field: ProductField) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.dispatch(ProductFormAction::SetField(field, input.value()));
    })
}

#[function_component(ProductEditor)]
pub fn product_editor(props: &ProductEditorProps) -> Html {
    let form = &props.form;

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ProductFormAction::SetCategory(select.value()));
        })
    };

    let on_sub_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ProductFormAction::SetSubCategory(select.value()));
        })
    };

    let on_full_description_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ProductFormAction::SetField(ProductField::FullDescription, area.value()));
        })
    };

    // Sub-category options follow the selected category; a custom
    // category opens the full list, as in the legacy back-office.
    let sub_options: Vec<&'static str> = match Category::ALL
        .iter()
        .find(|c| c.label() == form.category)
    {
        Some(category) => category.subcategories().iter().map(|s| s.label()).collect(),
        None => Category::ALL
            .iter()
            .flat_map(|c| c.subcategories())
            .map(|s| s.label())
            .collect(),
    };

    html! {
        <form class="admin-form" onsubmit={on_submit}>
            <div class="admin-card">
                <h2>{if props.editing { "Modifier le produit" } else { "Nouveau produit" }}</h2>

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Nom du produit *"}</label>
                        <input
                            value={form.name.clone()}
                            onchange={field_input(form, ProductField::Name)}
                            placeholder="Ex: Almond Energy Balls"
                            required={true}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Prix (DH) *"}</label>
                        <input
                            type="number"
                            min="1"
                            value={form.price.clone()}
                            onchange={field_input(form, ProductField::Price)}
                            placeholder="45"
                            required={true}
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Catégorie *"}</label>
                        <select onchange={on_category_change}>
                            {for Category::ALL.iter().map(|c| html! {
                                <option value={c.label()} selected={form.category == c.label()}>
                                    {c.label()}
                                </option>
                            })}
                            <option value={CUSTOM_VALUE} selected={form.category == CUSTOM_VALUE}>
                                {"+ Nouvelle catégorie..."}
                            </option>
                        </select>
                        {if form.category == CUSTOM_VALUE {
                            html! {
                                <input
                                    value={form.custom_category.clone()}
                                    onchange={field_input(form, ProductField::CustomCategory)}
                                    placeholder="Ex: Superfoods Bio"
                                />
                            }
                        } else { html! {} }}
                    </div>
                    <div class="form-group">
                        <label>{"Sous-catégorie *"}</label>
                        <select onchange={on_sub_category_change}>
                            {for sub_options.iter().map(|label| html! {
                                <option value={*label} selected={form.sub_category == *label}>
                                    {*label}
                                </option>
                            })}
                            <option value={CUSTOM_VALUE} selected={form.sub_category == CUSTOM_VALUE}>
                                {"+ Nouvelle sous-catégorie..."}
                            </option>
                        </select>
                        {if form.sub_category == CUSTOM_VALUE {
                            html! {
                                <input
                                    value={form.custom_sub_category.clone()}
                                    onchange={field_input(form, ProductField::CustomSubCategory)}
                                    placeholder="Ex: Barres protéinées"
                                />
                            }
                        } else { html! {} }}
                    </div>
                </div>

                <div class="form-group">
                    <label>{"Description courte *"}</label>
                    <input
                        value={form.description.clone()}
                        onchange={field_input(form, ProductField::Description)}
                        placeholder="Ex: Snack énergétique aux amandes et dattes"
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label>{"Description complète"}</label>
                    <textarea
                        rows="4"
                        value={form.full_description.clone()}
                        onchange={on_full_description_change}
                    />
                </div>

                <div class="form-group">
                    <label>{"Image du produit (URL) *"}</label>
                    <input
                        value={form.image.clone()}
                        onchange={field_input(form, ProductField::Image)}
                        placeholder="https://..."
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label>{"Slug (optionnel)"}</label>
                    <input
                        value={form.slug.clone()}
                        onchange={field_input(form, ProductField::Slug)}
                        placeholder="généré depuis le nom si vide"
                    />
                </div>
            </div>

            <div class="admin-card">
                <h2>{format!("Ingrédients ({})", form.ingredients.len())}</h2>
                {for form.ingredients.iter().enumerate().map(|(idx, ing)| {
                    let on_ing = |field: IngredientField| {
                        let form = form.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(ProductFormAction::SetIngredient(idx, field, input.value()));
                        })
                    };
                    let remove = {
                        let form = form.clone();
                        Callback::from(move |_| form.dispatch(ProductFormAction::RemoveIngredient(idx)))
                    };
                    html! {
                        <div class="ingredient-row" key={idx}>
                            <input
                                value={ing.name.clone()}
                                onchange={on_ing(IngredientField::Name)}
                                placeholder="Ex: Amandes"
                            />
                            <input
                                value={ing.amount.clone()}
                                onchange={on_ing(IngredientField::Amount)}
                                placeholder="Ex: 15g"
                            />
                            <input
                                value={ing.benefit.clone()}
                                onchange={on_ing(IngredientField::Benefit)}
                                placeholder="Ex: Riche en Magnésium"
                            />
                            {if form.ingredients.len() > 1 {
                                html! { <button type="button" class="remove-button" onclick={remove}>{"×"}</button> }
                            } else { html! {} }}
                        </div>
                    }
                })}
                <button
                    type="button"
                    class="btn btn-secondary wide"
                    onclick={
                        let form = form.clone();
                        Callback::from(move |_| form.dispatch(ProductFormAction::AddIngredient))
                    }
                >
                    {"+ Ajouter un ingrédient"}
                </button>
            </div>

            <div class="admin-card">
                <h2>{"Valeurs nutritionnelles"}</h2>
                {for [
                    (ProductField::Cal, "Calories (kcal)", "180"),
                    (ProductField::Protein, "Protéines", "5g"),
                    (ProductField::Fiber, "Fibres", "4g"),
                    (ProductField::Carbs, "Glucides", "22g"),
                    (ProductField::Fats, "Lipides", "8g"),
                ].iter().map(|(field, label, placeholder)| {
                    let value = match field {
                        ProductField::Cal => form.cal.clone(),
                        ProductField::Protein => form.protein.clone(),
                        ProductField::Fiber => form.fiber.clone(),
                        ProductField::Carbs => form.carbs.clone(),
                        _ => form.fats.clone(),
                    };
                    html! {
                        <div class="form-group">
                            <label>{*label}</label>
                            <input
                                {value}
                                onchange={field_input(form, *field)}
                                placeholder={*placeholder}
                            />
                        </div>
                    }
                })}

                <button type="submit" class="btn btn-primary wide" disabled={props.status == SubmitStatus::Loading}>
                    {match props.status {
                        SubmitStatus::Loading => "Enregistrement...",
                        SubmitStatus::Success if props.editing => "Modifié !",
                        SubmitStatus::Success => "Produit ajouté !",
                        _ if props.editing => "Enregistrer les modifications",
                        _ => "+ Publier le produit",
                    }}
                </button>
                {if props.editing {
                    html! {
                        <button
                            type="button"
                            class="btn btn-secondary wide"
                            onclick={props.on_cancel.reform(|_| ())}
                        >
                            {"Annuler les modifications"}
                        </button>
                    }
                } else { html! {} }}
                {if props.status == SubmitStatus::Error {
                    html! { <p class="form-message error">{"Erreur lors de l'enregistrement."}</p> }
                } else { html! {} }}
            </div>
        </form>
    }
}
