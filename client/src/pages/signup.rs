//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use chat::gateway::{Gateway, NewAccount};

use crate::net::api::Api;
use crate::state::session::{BrowserCredentials, SessionState};
use crate::state::ui::UiState;

/// Sign-up form. Success hands off to the sign-in page; failure surfaces the
/// server's error detail and keeps the form as entered.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Already signed in: the form is pointless, go straight to the studio.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if session.get().is_signed_in() {
                navigate("/studio", NavigateOptions::default());
            }
        });
    }

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_navigate = navigate;
    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let account = NewAccount::new(
            first_name.get().trim(),
            last_name.get().trim(),
            email.get().trim(),
            password.get(),
        );
        if account.first_name.is_empty() || account.email.is_empty() || account.password.is_empty()
        {
            ui.update(|state| state.error("Please fill in name, email and password."));
            return;
        }

        busy.set(true);
        let navigate = submit_navigate.clone();
        leptos::task::spawn_local(async move {
            let api = Api::new(BrowserCredentials);
            match api.create_account(&account).await {
                Ok(profile) => {
                    ui.update(|state| {
                        state.success(format!(
                            "Welcome {}! Your account is ready, sign in to continue.",
                            profile.first_name
                        ));
                    });
                    navigate("/auth/signin", NavigateOptions::default());
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
            <h1>"Create your account"</h1>

            <form class="auth-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="auth-page__label">
                    "First Name"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Last Name"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
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
                    {move || if busy.get() { "Creating..." } else { "Sign Up" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Already have an account? " <a href="/auth/signin">"Sign in"</a>
            </p>
        </div>
    }
}
