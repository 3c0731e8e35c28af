//! Generation mode selector for the studio toolbar.

use chat::model::GenerationMode;
use leptos::prelude::*;

use crate::state::studio::StudioState;

/// Dropdown over the available generation pipelines. Switching modes keeps
/// the transcript and any drawn sketch intact.
#[component]
pub fn ModePicker() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();

    let on_change = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        if let Some(mode) = GenerationMode::from_code(&code) {
            studio.update(|state| state.orchestrator.set_mode(mode));
        }
    };

    view! {
        <select
            class="mode-picker"
            prop:value=move || studio.get().orchestrator.mode.code()
            on:change=on_change
        >
            {GenerationMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <option value=mode.code()>{mode.label()}</option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
