//! Landing page: hero, pricing table, and sign-in/sign-up navigation.

use leptos::prelude::*;

use crate::components::pricing_card::{Currency, PricingCard};
use crate::consts::PRICING;
use crate::state::session::SessionState;

/// Marketing landing page. Signed-in visitors get a direct link into the
/// studio instead of the auth buttons.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let currency = RwSignal::new(Currency::default());

    let signed_in = move || session.get().is_signed_in();

    view! {
        <div class="home-page">
            <header class="home-page__nav">
                <span class="home-page__brand">"The Architect"</span>
                <nav class="home-page__links">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="btn" href="/auth/signin">
                                    "Sign In"
                                </a>
                                <a class="btn btn--primary" href="/auth/signup">
                                    "Get Started"
                                </a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/studio">
                            "Open Studio"
                        </a>
                    </Show>
                </nav>
            </header>

            <section class="home-page__hero">
                <h1>"Design Made Easy with AI Assistant"</h1>
                <p>
                    "Sketch a rough floor plan or describe the space you imagine, \
                     and get a photorealistic architectural design back in seconds."
                </p>
                <a class="btn btn--primary home-page__cta" href="/auth/signup">
                    "Start Designing"
                </a>
            </section>

            <section class="home-page__pricing">
                <div class="home-page__pricing-header">
                    <h2>"Pricing"</h2>
                    <button
                        class="btn home-page__currency"
                        on:click=move |_| currency.update(|c| *c = c.toggled())
                    >
                        {move || match currency.get() {
                            Currency::Usd => "Show ETB",
                            Currency::Etb => "Show USD",
                        }}
                    </button>
                </div>

                <div class="home-page__tiers">
                    {PRICING
                        .into_iter()
                        .map(|tier| {
                            view! { <PricingCard tier=tier currency=currency.into()/> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
