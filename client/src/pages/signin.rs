//! Sign-in page: exchanges email and password for a bearer session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use chat::gateway::Gateway;
use chat::session::CredentialStore;

use crate::net::api::Api;
use crate::state::session::{BrowserCredentials, SessionState};
use crate::state::ui::UiState;

/// Sign-in form. On success the session is persisted and the user lands in
/// the studio; on failure the server's reason is shown and the form stays.
#[component]
pub fn SigninPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if session.get().is_signed_in() {
                navigate("/studio", NavigateOptions::default());
            }
        });
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_navigate = navigate;
    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let email = email.get().trim().to_owned();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            ui.update(|state| state.error("Please enter your email and password."));
            return;
        }

        busy.set(true);
        let navigate = submit_navigate.clone();
        leptos::task::spawn_local(async move {
            let api = Api::new(BrowserCredentials);
            match api.sign_in(&email, &password).await {
                Ok(fresh) => {
                    BrowserCredentials.set(&fresh);
                    session.set(SessionState { session: fresh });
                    navigate("/studio", NavigateOptions::default());
                }
                Err(err) => {
                    ui.update(|state| state.error(err.to_string()));
                }
            }
            busy.set(false);
        });
    });

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>

            <form class="auth-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "No account yet? " <a href="/auth/signup">"Sign up"</a>
            </p>
        </div>
    }
}
