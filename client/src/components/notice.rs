//! Transient notice banners (success and error feedback).

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// Stack of dismissible notices, rendered above the routed page.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notice-stack">
            {move || {
                ui.get()
                    .notices
                    .iter()
                    .map(|notice| {
                        let id = notice.id.clone();
                        let class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        let message = notice.message.clone();
                        view! {
                            <div class=class>
                                <span class="notice__message">{message}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| {
                                        ui.update(|state| state.dismiss(&id));
                                    }
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
