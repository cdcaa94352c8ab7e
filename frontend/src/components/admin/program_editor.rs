use shared::{Category, MealType, Product};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::admin::SubmitStatus;
use crate::state::program_form::{ProgramForm, ProgramFormAction, ProgramField};
use crate::state::IngredientField;

#[derive(Properties, PartialEq)]
pub struct ProgramEditorProps {
    pub form: UseReducerHandle<ProgramForm>,
    /// Catalog snapshot for linking meal items to products.
    pub products: Vec<Rc<Product>>,
    pub editing: bool,
    pub status: SubmitStatus,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn field_input(form: &UseReducerHandle<ProgramForm>, field: ProgramField) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.dispatch(ProgramFormAction::SetField(field, input.value()));
    })
}

#[function_component(ProgramEditor)]
pub fn program_editor(props: &ProgramEditorProps) -> Html {
    let form = &props.form;
    let active_day = use_state(|| 1u32);
    // Shrinking the duration can strand the selection past the last day
    let shown_day = (*active_day).min(form.duration).max(1);

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_duration_change = {
        let form = form.clone();
        let active_day = active_day.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let days = input.value().trim().parse::<u32>().unwrap_or(1).clamp(1, 30);
            form.dispatch(ProgramFormAction::SetDuration(days));
            active_day.set(1);
        })
    };

    let on_sub_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ProgramFormAction::SetField(ProgramField::SubCategory, select.value()));
        })
    };

    let on_full_description_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ProgramFormAction::SetField(ProgramField::FullDescription, area.value()));
        })
    };

    let current_day = form.schedule.iter().find(|d| d.day == shown_day);

    html! {
        <form class="admin-form" onsubmit={on_submit}>
            <div class="admin-card">
                <h2>{if props.editing { "Modifier le programme" } else { "+ Nouveau programme" }}</h2>

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Nom du programme *"}</label>
                        <input
                            value={form.name.clone()}
                            onchange={field_input(form, ProgramField::Name)}
                            placeholder="Ex: Programme Perte de Poids 7j"
                            required={true}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Prix (DH/jour) *"}</label>
                        <input
                            type="number"
                            min="1"
                            value={form.price.clone()}
                            onchange={field_input(form, ProgramField::Price)}
                            placeholder="150"
                            required={true}
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Type de programme *"}</label>
                        <select onchange={on_sub_category_change}>
                            {for Category::Program.subcategories().iter().map(|s| html! {
                                <option value={s.label()} selected={form.sub_category == s.label()}>
                                    {s.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{"Durée (jours) *"}</label>
                        <input
                            type="number"
                            min="1"
                            max="30"
                            value={form.duration.to_string()}
                            onchange={on_duration_change}
                            required={true}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label>{"Description courte *"}</label>
                    <input
                        value={form.description.clone()}
                        onchange={field_input(form, ProgramField::Description)}
                        placeholder="Programme équilibré pour perdre du poids sainement..."
                        required={true}
                    />
                </div>

                <div class="form-group">
                    <label>{"Description complète"}</label>
                    <textarea
                        rows="3"
                        value={form.full_description.clone()}
                        onchange={on_full_description_change}
                    />
                </div>

                <div class="form-group">
                    <label>{"Image du programme (URL) *"}</label>
                    <input
                        value={form.image.clone()}
                        onchange={field_input(form, ProgramField::Image)}
                        placeholder="https://..."
                        required={true}
                    />
                </div>
            </div>

            <div class="admin-card">
                <h2>{"Planning des repas"}</h2>

                <div class="day-tabs">
                    {for form.schedule.iter().map(|day| {
                        let number = day.day;
                        let active_day = active_day.clone();
                        let class = if number == shown_day { "day-tab active" } else { "day-tab" };
                        html! {
                            <button
                                type="button"
                                class={class}
                                onclick={Callback::from(move |_| active_day.set(number))}
                            >
                                {format!("J{}", number)}
                            </button>
                        }
                    })}
                </div>

                {match current_day {
                    Some(day) => html! {
                        <div class="day-editor">
                            {for day.meals.iter().enumerate().map(|(meal_idx, meal)| {
                                let on_type_change = {
                                    let form = form.clone();
                                    Callback::from(move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        if let Some(meal_type) = MealType::ALL
                                            .iter()
                                            .find(|t| t.label() == select.value())
                                        {
                                            form.dispatch(ProgramFormAction::SetMealType(
                                                shown_day, meal_idx, *meal_type,
                                            ));
                                        }
                                    })
                                };
                                let remove_meal = {
                                    let form = form.clone();
                                    Callback::from(move |_| {
                                        form.dispatch(ProgramFormAction::RemoveMeal(shown_day, meal_idx))
                                    })
                                };
                                let add_item = {
                                    let form = form.clone();
                                    Callback::from(move |_| {
                                        form.dispatch(ProgramFormAction::AddItem(shown_day, meal_idx))
                                    })
                                };

                                html! {
                                    <div class="meal-editor" key={meal_idx}>
                                        <div class="meal-editor-head">
                                            <select onchange={on_type_change}>
                                                {for MealType::ALL.iter().map(|t| html! {
                                                    <option value={t.label()} selected={meal.meal_type == *t}>
                                                        {t.label()}
                                                    </option>
                                                })}
                                            </select>
                                            <button type="button" class="remove-button" onclick={remove_meal}>
                                                {"Supprimer le repas"}
                                            </button>
                                        </div>

                                        {for meal.items.iter().enumerate().map(|(item_idx, item)| {
                                            let on_select_product = {
                                                let form = form.clone();
                                                let products = props.products.clone();
                                                Callback::from(move |e: Event| {
                                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                                    let value = select.value();
                                                    match products.iter().find(|p| p.id == value) {
                                                        // Snapshot the product's name and id
                                                        Some(product) => form.dispatch(ProgramFormAction::SetItemLabel {
                                                            day: shown_day,
                                                            meal: meal_idx,
                                                            item: item_idx,
                                                            label: product.name.clone(),
                                                            product_id: Some(product.id.clone()),
                                                        }),
                                                        // Back to a free-text item
                                                        None => form.dispatch(ProgramFormAction::SetItemLabel {
                                                            day: shown_day,
                                                            meal: meal_idx,
                                                            item: item_idx,
                                                            label: String::new(),
                                                            product_id: None,
                                                        }),
                                                    }
                                                })
                                            };
                                            let on_label_change = {
                                                let form = form.clone();
                                                // Typing free text clears the product link
                                                Callback::from(move |e: Event| {
                                                    let input: HtmlInputElement = e.target_unchecked_into();
                                                    form.dispatch(ProgramFormAction::SetItemLabel {
                                                        day: shown_day,
                                                        meal: meal_idx,
                                                        item: item_idx,
                                                        label: input.value(),
                                                        product_id: None,
                                                    });
                                                })
                                            };
                                            let remove_item = {
                                                let form = form.clone();
                                                Callback::from(move |_| {
                                                    form.dispatch(ProgramFormAction::RemoveItem(
                                                        shown_day, meal_idx, item_idx,
                                                    ))
                                                })
                                            };
                                            let selected_id = item.product_id.clone().unwrap_or_default();

                                            html! {
                                                <div class="item-row" key={item_idx}>
                                                    <select onchange={on_select_product}>
                                                        <option value="" selected={selected_id.is_empty()}>
                                                            {"— Texte libre —"}
                                                        </option>
                                                        {for props.products.iter().map(|p| html! {
                                                            <option value={p.id.clone()} selected={selected_id == p.id}>
                                                                {&p.name}
                                                            </option>
                                                        })}
                                                    </select>
                                                    <input
                                                        value={item.label.clone()}
                                                        onchange={on_label_change}
                                                        placeholder="Ex: Salade quinoa avocat"
                                                    />
                                                    <button type="button" class="remove-button" onclick={remove_item}>
                                                        {"×"}
                                                    </button>
                                                </div>
                                            }
                                        })}

                                        <button type="button" class="link-button" onclick={add_item}>
                                            {"+ Ajouter un élément"}
                                        </button>
                                    </div>
                                }
                            })}

                            <button
                                type="button"
                                class="btn btn-secondary wide"
                                onclick={
                                    let form = form.clone();
                                    Callback::from(move |_| {
                                        form.dispatch(ProgramFormAction::AddMeal(shown_day))
                                    })
                                }
                            >
                                {format!("+ Ajouter un repas au jour {}", shown_day)}
                            </button>
                        </div>
                    },
                    None => html! {},
                }}
            </div>

            <div class="admin-card">
                <h2>{format!("Ingrédients ({})", form.ingredients.len())}</h2>
                {for form.ingredients.iter().enumerate().map(|(idx, ing)| {
                    let on_ing = |field: IngredientField| {
                        let form = form.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(ProgramFormAction::SetIngredient(idx, field, input.value()));
                        })
                    };
                    let remove = {
                        let form = form.clone();
                        Callback::from(move |_| form.dispatch(ProgramFormAction::RemoveIngredient(idx)))
                    };
                    html! {
                        <div class="ingredient-row" key={idx}>
                            <input value={ing.name.clone()} onchange={on_ing(IngredientField::Name)} placeholder="Ex: Amandes" />
                            <input value={ing.amount.clone()} onchange={on_ing(IngredientField::Amount)} placeholder="Ex: 15g" />
                            <input value={ing.benefit.clone()} onchange={on_ing(IngredientField::Benefit)} placeholder="Ex: Riche en Magnésium" />
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
                        Callback::from(move |_| form.dispatch(ProgramFormAction::AddIngredient))
                    }
                >
                    {"+ Ajouter un ingrédient"}
                </button>
            </div>

            <div class="admin-card">
                <h2>{"Points forts"}</h2>
                {for form.features.iter().enumerate().map(|(idx, feature)| {
                    let on_change = {
                        let form = form.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            form.dispatch(ProgramFormAction::SetFeature(idx, input.value()));
                        })
                    };
                    let remove = {
                        let form = form.clone();
                        Callback::from(move |_| form.dispatch(ProgramFormAction::RemoveFeature(idx)))
                    };
                    html! {
                        <div class="feature-row" key={idx}>
                            <input value={feature.clone()} onchange={on_change} />
                            <button type="button" class="remove-button" onclick={remove}>{"×"}</button>
                        </div>
                    }
                })}
                <button
                    type="button"
                    class="btn btn-secondary wide"
                    onclick={
                        let form = form.clone();
                        Callback::from(move |_| form.dispatch(ProgramFormAction::AddFeature))
                    }
                >
                    {"+ Ajouter un point fort"}
                </button>
            </div>

            <div class="admin-card">
                <h2>{"Valeurs nutritionnelles (par jour)"}</h2>
                {for [
                    (ProgramField::Cal, "Calories (kcal)", "1400"),
                    (ProgramField::Protein, "Protéines", "90g"),
                    (ProgramField::Fiber, "Fibres", "30g"),
                    (ProgramField::Carbs, "Glucides", "120g"),
                    (ProgramField::Fats, "Lipides", "40g"),
                ].iter().map(|(field, label, placeholder)| {
                    let value = match field {
                        ProgramField::Cal => form.cal.clone(),
                        ProgramField::Protein => form.protein.clone(),
                        ProgramField::Fiber => form.fiber.clone(),
                        ProgramField::Carbs => form.carbs.clone(),
                        _ => form.fats.clone(),
                    };
                    html! {
                        <div class="form-group">
                            <label>{*label}</label>
                            <input {value} onchange={field_input(form, *field)} placeholder={*placeholder} />
                        </div>
                    }
                })}

                <button type="submit" class="btn btn-primary wide" disabled={props.status == SubmitStatus::Loading}>
                    {match props.status {
                        SubmitStatus::Loading => "Enregistrement...",
                        SubmitStatus::Success if props.editing => "Modifié !",
                        SubmitStatus::Success => "Programme ajouté !",
                        _ if props.editing => "Enregistrer les modifications",
                        _ => "+ Publier le programme",
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
