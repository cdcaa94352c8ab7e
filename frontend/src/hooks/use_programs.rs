use shared::Program;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ProgramsState {
    pub programs: Vec<Program>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseProgramsResult {
    pub state: ProgramsState,
    pub refresh: Callback<()>,
}

/// Fetch the program list once on mount and expose a refresh action.
#[hook]
pub fn use_programs(api_client: &ApiClient) -> UseProgramsResult {
    let programs = use_state(Vec::<Program>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let refresh = {
        let api_client = api_client.clone();
        let programs = programs.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let programs = programs.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_programs().await {
                    Ok(fetched) => {
                        programs.set(fetched);
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch programs:", e.clone());
                        error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Load initial programs
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ProgramsState {
        programs: (*programs).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseProgramsResult { state, refresh }
}
