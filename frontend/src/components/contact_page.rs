use shared::ContactRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::CONTACT_REASONS;
use crate::services::api::ApiClient;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let api_client = use_state(ApiClient::new);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let reason = use_state(|| CONTACT_REASONS[0].to_string());
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);

    let submit = {
        let api_client = api_client.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let reason = reason.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api_client = api_client.clone();
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let reason = reason.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                form_error.set(None);
                form_success.set(false);
                submitting.set(true);

                let request = ContactRequest {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    phone: if phone.is_empty() { None } else { Some((*phone).clone()) },
                    reason: (*reason).clone(),
                    message: (*message).clone(),
                };

                match api_client.submit_contact(&request).await {
                    Ok(_response) => {
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        message.set(String::new());
                        form_success.set(true);

                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            form_success_clear.set(false);
                        });
                    }
                    Err(error_message) => {
                        form_error.set(Some(error_message));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let on_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_reason_change = {
        let reason = reason.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            reason.set(select.value());
        })
    };

    let on_message_change = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    html! {
        <section class="contact-page">
            <h1>{"Contactez-nous"}</h1>
            <p class="muted">{"Une question sur une commande ou un programme ? Écrivez-nous."}</p>

            {if let Some(error) = (*form_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if *form_success {
                html! {
                    <div class="form-message success">
                        {"Message envoyé. Nous vous répondrons rapidement."}
                    </div>
                }
            } else { html! {} }}

            <form class="contact-form" onsubmit={submit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="contact-name">{"Nom *"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            value={(*name).clone()}
                            onchange={on_input(name.clone())}
                            disabled={*submitting}
                            required={true}
                        />
                    </div>
                    <div class="form-group">
                        <label for="contact-email">{"Email *"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            value={(*email).clone()}
                            onchange={on_input(email.clone())}
                            disabled={*submitting}
                            required={true}
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="contact-phone">{"Téléphone"}</label>
                        <input
                            id="contact-phone"
                            type="tel"
                            value={(*phone).clone()}
                            onchange={on_input(phone.clone())}
                            disabled={*submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="contact-reason">{"Motif *"}</label>
                        <select id="contact-reason" onchange={on_reason_change} disabled={*submitting}>
                            {for CONTACT_REASONS.iter().map(|r| html! {
                                <option value={*r} selected={*reason == *r}>{*r}</option>
                            })}
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="contact-message">{"Message *"}</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        value={(*message).clone()}
                        onchange={on_message_change}
                        disabled={*submitting}
                        required={true}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Envoi en cours..." } else { "Envoyer" }}
                </button>
            </form>
        </section>
    }
}
