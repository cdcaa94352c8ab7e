use shared::Program;
use yew::prelude::*;

use crate::hooks::use_programs;
use crate::services::api::ApiClient;

#[function_component(ProgramsPage)]
pub fn programs_page() -> Html {
    let api_client = use_state(ApiClient::new);
    let programs = use_programs(&api_client);
    let selected = use_state(|| None::<Program>);

    if let Some(program) = (*selected).clone() {
        let back = {
            let selected = selected.clone();
            Callback::from(move |_| selected.set(None))
        };
        return html! { <ProgramDetail {program} on_back={back} /> };
    }

    html! {
        <section class="programs-page">
            <h1>{"Programmes Nutritionnels"}</h1>
            <p class="muted">{"Des plans repas sur plusieurs jours, livrés chaque matin."}</p>

            {if programs.state.loading {
                html! { <div class="loading">{"Chargement des programmes..."}</div> }
            } else if let Some(error) = &programs.state.error {
                html! {
                    <div class="error-box">
                        <p>{error}</p>
                        <button class="btn btn-secondary" onclick={programs.refresh.reform(|_| ())}>
                            {"Réessayer"}
                        </button>
                    </div>
                }
            } else if programs.state.programs.is_empty() {
                html! { <p class="muted">{"Aucun programme disponible pour le moment."}</p> }
            } else {
                html! {
                    <div class="program-grid">
                        {for programs.state.programs.iter().map(|program| {
                            let open = {
                                let selected = selected.clone();
                                let program = program.clone();
                                Callback::from(move |_| selected.set(Some(program.clone())))
                            };
                            html! {
                                <div class="program-card" key={program.id.clone()}>
                                    <img src={program.image.clone()} alt={program.name.clone()} />
                                    <div class="program-body">
                                        <span class="tag">{&program.sub_category}</span>
                                        <h3>{&program.name}</h3>
                                        <p class="muted">{&program.description}</p>
                                        <div class="program-foot">
                                            <span class="price">{format!("{} DH/jour", program.price)}</span>
                                            <span class="muted">{format!("{} jours", program.duration)}</span>
                                        </div>
                                        <button class="btn btn-primary wide" onclick={open}>
                                            {"Voir le programme"}
                                        </button>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProgramDetailProps {
    program: Program,
    on_back: Callback<()>,
}

#[function_component(ProgramDetail)]
fn program_detail(props: &ProgramDetailProps) -> Html {
    let program = &props.program;
    let active_day = use_state(|| 1u32);

    let current_day = program
        .schedule
        .iter()
        .find(|d| d.day == *active_day);

    html! {
        <section class="program-detail">
            <button class="link-button" onclick={props.on_back.reform(|_| ())}>
                {"← Tous les programmes"}
            </button>

            <div class="program-header">
                <img src={program.image.clone()} alt={program.name.clone()} />
                <div>
                    <span class="tag">{&program.sub_category}</span>
                    <h1>{&program.name}</h1>
                    <p class="muted">{&program.full_description}</p>
                    <p class="price">{format!("{} DH/jour · {} jours", program.price, program.duration)}</p>
                    <ul class="feature-list">
                        {for program.features.iter().map(|feature| html! { <li>{feature}</li> })}
                    </ul>
                </div>
            </div>

            <h2>{"Planning des repas"}</h2>
            <div class="day-tabs">
                {for program.schedule.iter().map(|day| {
                    let number = day.day;
                    let active_day = active_day.clone();
                    let class = if number == *active_day { "day-tab active" } else { "day-tab" };
                    html! {
                        <button class={class} onclick={Callback::from(move |_| active_day.set(number))}>
                            {format!("Jour {}", number)}
                        </button>
                    }
                })}
            </div>

            {match current_day {
                Some(day) if !day.meals.is_empty() => html! {
                    <div class="day-meals">
                        {for day.meals.iter().map(|meal| html! {
                            <div class="meal-block">
                                <h3>{meal.meal_type.label()}</h3>
                                <ul>
                                    {for meal.items.iter().map(|item| html! {
                                        <li>{&item.label}</li>
                                    })}
                                </ul>
                            </div>
                        })}
                    </div>
                },
                _ => html! { <p class="muted">{"Menu communiqué la veille."}</p> },
            }}
        </section>
    }
}
