//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice::NoticeStack;
use crate::pages::{
    home::HomePage, signin::SigninPage, signup::SignupPage, studio::StudioPage,
};
use crate::state::{session::SessionState, studio::StudioState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::load());
    let studio = RwSignal::new(StudioState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(studio);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/architect-ui.css"/>
        <Title text="The Architect"/>

        <Router>
            <NoticeStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SigninPage/>
                <Route path=StaticSegment("studio") view=StudioPage/>
            </Routes>
        </Router>
    }
}
