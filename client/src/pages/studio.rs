//! The design studio: sketch pad, prompt composer, transcript, and preview.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use chat::model::ConversationEntry;
use chat::orchestrator::{Orchestrator, SendAbort, SendOutcome};
use chat::session::CredentialStore;

use crate::components::chat_bubble::ChatBubble;
use crate::components::mode_picker::ModePicker;
use crate::components::sketch_pad::SketchPad;
use crate::state::session::{BrowserCredentials, SessionState};
use crate::state::studio::StudioState;
use crate::state::ui::UiState;
use crate::util::sketch::PadExporter;

/// Last generated image in a batch of entries, if any.
fn latest_image(entries: &[ConversationEntry]) -> Option<String> {
    entries.iter().rev().find_map(|entry| entry.generated_image.clone())
}

/// The studio page. Requires a signed-in session; visitors without one are
/// sent to sign-in.
#[component]
pub fn StudioPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let studio = expect_context::<RwSignal<StudioState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if !session.get().is_signed_in() {
                navigate("/auth/signin", NavigateOptions::default());
            }
        });
    }

    // The pad's canvas must survive mode switches, so it is mounted once and
    // hidden with CSS rather than unmounted.
    let canvas = NodeRef::<leptos::html::Canvas>::new();
    let strokes = RwSignal::new(0_u32);
    let exporter = PadExporter::new(canvas, strokes);

    // Resuming an existing conversation: `/studio?chatId=...` loads its
    // history once on mount.
    let query = use_query_map();
    let resumed = RwSignal::new(false);
    Effect::new(move || {
        let Some(chat_id) = query.get().get("chatId") else {
            return;
        };
        if resumed.get() {
            return;
        }
        resumed.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use chat::gateway::Gateway;

            let api = crate::net::api::Api::new(BrowserCredentials);
            match api.fetch_chat(&chat_id).await {
                Ok(reply) => {
                    studio.update(|state| {
                        state.preview_image = latest_image(&reply.messages);
                        state.orchestrator.load_history(reply);
                    });
                }
                Err(err) => {
                    leptos::logging::warn!("failed to load chat history: {err}");
                    ui.update(|state| state.error(err.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = chat_id;
    });

    let send_navigate = navigate;
    let do_send = move || {
        let Some(begun) =
            studio.try_update(|state| state.orchestrator.begin_send(&BrowserCredentials, &exporter))
        else {
            return;
        };

        match begun {
            Ok(pending) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let api = crate::net::api::Api::new(BrowserCredentials);
                    let result = Orchestrator::dispatch(&api, &pending).await;
                    let outcome =
                        studio.try_update(|state| state.orchestrator.complete_send(result));
                    match outcome {
                        Some(SendOutcome::Delivered) => {
                            studio.update(|state| {
                                if let Some(image) =
                                    latest_image(&state.orchestrator.conversation.entries)
                                {
                                    state.preview_image = Some(image);
                                }
                            });
                        }
                        Some(SendOutcome::Unauthorized) => {
                            ui.update(|state| {
                                state.error("Invalid credentials. Please sign in again.");
                            });
                            BrowserCredentials.clear();
                            session.set(SessionState::default());
                        }
                        Some(SendOutcome::Failed(message)) => {
                            leptos::logging::warn!("generation request failed: {message}");
                            ui.update(|state| state.error(message));
                        }
                        None => {}
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = pending;
            }
            Err(SendAbort::EmptySketch) => {
                ui.update(|state| {
                    state.error("Draw your idea on the canvas first, or switch to Text to Design.");
                });
            }
            Err(SendAbort::Unauthorized) => {
                ui.update(|state| state.error("Please sign in to generate designs."));
                send_navigate("/auth/signin", NavigateOptions::default());
            }
            // Dropped silently: nothing to send, or a send already in flight.
            Err(SendAbort::InFlight | SendAbort::EmptyPrompt) => {}
        }
    };

    let on_keydown = {
        let do_send = do_send.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                do_send();
            }
        }
    };

    let sign_out = move |_| {
        BrowserCredentials.clear();
        session.set(SessionState::default());
    };

    let pad_display = move || {
        if studio.get().orchestrator.mode.requires_sketch() { "block" } else { "none" }
    };

    view! {
        <div class="studio-page">
            <header class="studio-page__toolbar">
                <a class="studio-page__brand" href="/">
                    "The Architect"
                </a>
                <ModePicker/>
                <button class="btn studio-page__signout" on:click=sign_out>
                    "Sign Out"
                </button>
            </header>

            <div class="studio-page__workspace">
                <div class="studio-page__left" style:display=pad_display>
                    <SketchPad canvas=canvas strokes=strokes/>
                </div>

                <div class="studio-page__preview">
                    <img
                        class="studio-page__preview-image"
                        src=move || studio.get().preview()
                        alt="Design preview"
                    />
                </div>

                <div class="studio-page__chat">
                    <div class="studio-page__transcript">
                        {move || {
                            studio
                                .get()
                                .orchestrator
                                .conversation
                                .entries
                                .iter()
                                .map(|entry| {
                                    let on_image = Callback::new(move |image: String| {
                                        studio.update(|state| state.preview_image = Some(image));
                                    });
                                    view! { <ChatBubble entry=entry.clone() on_image=on_image/> }
                                })
                                .collect::<Vec<_>>()
                        }}

                        <Show when=move || studio.get().orchestrator.in_flight()>
                            <div class="studio-page__thinking">"Generating your design..."</div>
                        </Show>
                    </div>

                    <div class="studio-page__composer">
                        <textarea
                            class="studio-page__prompt"
                            placeholder="Describe the space you have in mind..."
                            prop:value=move || studio.get().orchestrator.prompt.clone()
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                studio.update(|state| {
                                    state.orchestrator.edit_prompt(text, &exporter);
                                });
                            }
                            on:keydown=on_keydown
                        ></textarea>
                        <button
                            class="btn btn--primary studio-page__generate"
                            on:click={
                                let do_send = do_send.clone();
                                move |_| do_send()
                            }
                            disabled=move || studio.get().orchestrator.in_flight()
                        >
                            "Generate"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
